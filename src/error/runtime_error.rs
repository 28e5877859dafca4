/// Represents all errors that can occur during evaluation.
///
/// Every runtime error is fatal to the run. Control signals (`break`,
/// `continue`, `return`) are not errors unless they escape the construct
/// that should consume them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read or update a name that is bound nowhere in the chain.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to a combination of types it does not
    /// support.
    #[error("Error on line {line}: Unsupported operand types for '{op}': {left} and {right}.")]
    UnsupportedOperands {
        /// The operator as written.
        op:    String,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An argument was invalid or out of range.
    #[error("Error on line {line}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: '{name}' expects {expected} argument(s), got {found}.")]
    ArgumentCountMismatch {
        /// Name of the called function.
        name:     String,
        /// Human readable description of the accepted counts.
        expected: String,
        /// Number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Called something that is not a function.
    #[error("Error on line {line}: Object of type {type_name} is not callable.")]
    NotCallable {
        /// Type name of the callee.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Iterated over something that is not a range, string or list.
    #[error("Error on line {line}: Object of type {type_name} is not iterable.")]
    NotIterable {
        /// Type name of the value.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Indexed something that is not a list or string.
    #[error("Error on line {line}: Object of type {type_name} is not subscriptable.")]
    NotSubscriptable {
        /// Type name of the value.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An index was not a number.
    #[error("Error on line {line}: Index must be a number, found {type_name}.")]
    IndexNotNumber {
        /// Type name of the index value.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An index was out of range even after negative wrapping.
    #[error("Error on line {line}: Index {index} out of range for length {length}.")]
    IndexOutOfRange {
        /// The index as requested (before wrapping).
        index:  i64,
        /// Length of the indexed collection.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Accessed a member that does not exist on the value.
    #[error("Error on line {line}: Member '{member}' not found on {type_name}.")]
    MemberNotFound {
        /// The requested member.
        member:    String,
        /// Type name of the value.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// `range` was called with a step of zero.
    #[error("Error on line {line}: range() step argument must not be zero.")]
    ZeroStep {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `break` executed outside of any loop.
    #[error("Error on line {line}: 'break' outside loop.")]
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `continue` executed outside of any loop.
    #[error("Error on line {line}: 'continue' outside loop.")]
    ContinueOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `return` executed outside of any function.
    #[error("Error on line {line}: 'return' outside function.")]
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The call stack grew past the configured limit.
    #[error("Error on line {line}: Maximum call depth of {limit} exceeded.")]
    RecursionLimit {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing `print` output failed.
    #[error("Error on line {line}: Failed to write output: {details}.")]
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
