use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Object,
    },
};

impl Interpreter {
    /// Evaluates a prefix operation on an object.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation; only numbers are accepted.
    /// - `Not`: the complement of the operand's truthiness, as `1` or `0`.
    ///   Only numbers and strings are accepted.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input object.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use pylite::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Object},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Object::from(5.0), 1).unwrap();
    /// assert_eq!(v, Object::from(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Object::from(""), 1).unwrap();
    /// assert_eq!(v, Object::from(1.0));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Negate, &Object::from("x"), 1).is_err());
    /// assert!(Interpreter::eval_unary(UnaryOperator::Not, &Object::from(vec![]), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Object, line: usize) -> EvalResult<Object> {
        match (op, value) {
            (UnaryOperator::Negate, Object::Number(n)) => Ok(Object::Number(-n)),
            (UnaryOperator::Not, Object::Number(_) | Object::String(_)) => {
                Ok(Object::from(!value.is_truthy()))
            },
            (op, other) => Err(RuntimeError::TypeError { details: format!("bad operand type for \
                                                                           unary {op}: {}",
                                                                          other.type_name()),
                                                         line }),
        }
    }
}
