use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Interpreter, value::core::Object},
};

impl Interpreter {
    /// Compares two numbers, producing `1` for true and `0` for false.
    ///
    /// Comparisons involving NaN are false, except `!=`.
    ///
    /// # Parameters
    /// - `op`: One of the equality or ordering operators.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn eval_comparison(op: BinaryOperator, left: f64, right: f64) -> Object {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Object::from(match op {
                         Equal => left == right,
                         NotEqual => left != right,
                         Less => left < right,
                         Greater => left > right,
                         LessEqual => left <= right,
                         GreaterEqual => left >= right,
                         _ => false,
                     })
    }
}
