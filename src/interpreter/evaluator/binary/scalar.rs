use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Interpreter, value::core::Object},
};

impl Interpreter {
    /// Evaluates an arithmetic operation on two numbers.
    ///
    /// Division and remainder follow IEEE-754: dividing by zero gives an
    /// infinity or NaN rather than an error. `%` takes the sign of the
    /// dividend, and `**` is a floating-point power.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`, `Mod` or `Pow`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use pylite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Object},
    /// };
    ///
    /// let r = Interpreter::eval_scalar_op(BinaryOperator::Pow, 2.0, 10.0);
    /// assert_eq!(r, Object::from(1024.0));
    ///
    /// let r = Interpreter::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0);
    /// assert_eq!(r, Object::from(f64::INFINITY));
    /// ```
    #[must_use]
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> Object {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        Object::Number(match op {
                           Add => left + right,
                           Sub => left - right,
                           Mul => left * right,
                           Div => left / right,
                           Mod => left % right,
                           Pow => left.powf(right),
                           _ => f64::NAN,
                       })
    }
}
