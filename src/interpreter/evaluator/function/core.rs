use std::{fmt, io::Write};

use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            function::{len, print, range},
        },
        value::{
            core::Object,
            function::{Function, UserFunction},
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments, the `print` destination and
/// the line number of the call.
pub type BuiltinFn = fn(&[Object], &mut dyn Write, usize) -> EvalResult<Object>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `Any` accepts every count, including zero.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// One of the listed counts.
    OneOf(&'static [usize]),
    /// Any number of arguments.
    Any,
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (metadata referenced by builtin function objects),
/// - `BUILTIN_TABLE` (static table seeded into the global scope).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A native function registered in the global scope.
        pub struct BuiltinDef {
            /// Name the function is bound to.
            pub name:  &'static str,
            /// Accepted argument counts.
            pub arity: Arity,
            /// The implementation.
            pub func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "print" => { arity: Arity::Any,              func: print::print },
    "range" => { arity: Arity::OneOf(&[1, 2, 3]), func: range::range },
    "len"   => { arity: Arity::Exact(1),         func: len::len },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::Any => true,
        }
    }

    /// Describes the accepted counts for error messages, e.g. `"1, 2 or 3"`.
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::evaluator::function::core::Arity;
    ///
    /// assert_eq!(Arity::Exact(2).describe(), "2");
    /// assert_eq!(Arity::OneOf(&[1, 2, 3]).describe(), "1, 2 or 3");
    /// assert_eq!(Arity::Any.describe(), "any number of");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Exact(n) => n.to_string(),
            Self::OneOf(counts) => match counts.split_last() {
                Some((last, [])) => last.to_string(),
                Some((last, rest)) => {
                    let rest = rest.iter().map(ToString::to_string).collect::<Vec<_>>();
                    format!("{} or {last}", rest.join(", "))
                },
                None => "no".into(),
            },
            Self::Any => "any number of".into(),
        }
    }
}

/// Binds every builtin in `env`.
///
/// Builtins are ordinary bindings: a program may shadow or overwrite them.
pub fn install_builtins(env: &mut Environment) {
    for def in BUILTIN_TABLE {
        env.declare(def.name, Object::from(Function::Builtin(def)));
    }
}

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments left to right.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if the call fails.
    pub fn eval_call(&mut self,
                     callee: &Expr,
                     arguments: &[Expr],
                     line: usize)
                     -> EvalResult<Object> {
        let callee = self.eval_expr(callee)?;
        let args = arguments.iter()
                            .map(|arg| self.eval_expr(arg))
                            .collect::<EvalResult<Vec<_>>>()?;

        self.call_function(&callee, args, line)
    }

    /// Calls a function object with already evaluated arguments.
    ///
    /// # Errors
    /// - `NotCallable` if `callee` is not a function.
    /// - `ArgumentCountMismatch` if the argument count is not accepted.
    /// - Any error raised by the function itself.
    pub fn call_function(&mut self,
                         callee: &Object,
                         args: Vec<Object>,
                         line: usize)
                         -> EvalResult<Object> {
        let Object::Function(function) = callee else {
            return Err(RuntimeError::NotCallable { type_name: callee.type_name(),
                                                   line });
        };

        match function.as_ref() {
            Function::Builtin(def) => {
                if !def.arity.check(args.len()) {
                    return Err(RuntimeError::ArgumentCountMismatch { name: def.name.into(),
                                                                     expected:
                                                                         def.arity.describe(),
                                                                     found: args.len(),
                                                                     line });
                }
                (def.func)(&args, &mut *self.output.borrow_mut(), line)
            },
            Function::UserDefined(func) => self.call_user_defined_function(func, args, line),
        }
    }

    /// Executes a user-defined function.
    ///
    /// The parameters are bound in a new scope whose parent is the closure
    /// captured at definition time, not the caller's scope. The caller's
    /// scope and the call depth are restored whether or not the body fails.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - Call depth above the configured limit.
    /// - `break` or `continue` escaping the body.
    ///
    /// # Returns
    /// The value of the `return` that ended the body, or `0` if the body
    /// ran to completion.
    fn call_user_defined_function(&mut self,
                                  func: &UserFunction,
                                  args: Vec<Object>,
                                  line: usize)
                                  -> EvalResult<Object> {
        if args.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     func.name.clone(),
                                                             expected: func.params
                                                                           .len()
                                                                           .to_string(),
                                                             found:    args.len(),
                                                             line, });
        }
        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.config.max_call_depth,
                                                      line });
        }

        let scope = Environment::new_child(&func.closure);
        {
            let mut scope = scope.borrow_mut();
            for (param, arg) in func.params.iter().zip(args) {
                scope.declare(param.as_str(), arg);
            }
        }

        self.depth += 1;
        trace!(name = %func.name, depth = self.depth, "call");

        let caller = std::mem::replace(&mut self.env, scope);
        let result = self.exec_block(&func.body);
        self.env = caller;
        self.depth -= 1;

        match result? {
            Flow::Normal => Ok(Object::Number(0.0)),
            Flow::Return { value, .. } => Ok(value),
            Flow::Break { line } => Err(RuntimeError::BreakOutsideLoop { line }),
            Flow::Continue { line } => Err(RuntimeError::ContinueOutsideLoop { line }),
        }
    }
}

impl fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}
