use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Interpreter, value::core::Object},
};

impl Interpreter {
    /// Evaluates `and` / `or` on two already evaluated numbers.
    ///
    /// A number is true when it is non-zero. The result is `1` or `0`, never
    /// one of the operands.
    ///
    /// # Example
    /// ```
    /// use pylite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Object},
    /// };
    ///
    /// let r = Interpreter::eval_logic(BinaryOperator::Or, 0.0, 3.0);
    /// assert_eq!(r, Object::from(1.0));
    ///
    /// let r = Interpreter::eval_logic(BinaryOperator::And, 2.0, 0.0);
    /// assert_eq!(r, Object::from(0.0));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: f64, right: f64) -> Object {
        let (left, right) = (left != 0.0, right != 0.0);

        Object::from(match op {
                         BinaryOperator::And => left && right,
                         BinaryOperator::Or => left || right,
                         _ => false,
                     })
    }
}
