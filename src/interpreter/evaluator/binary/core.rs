use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Object,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two objects.
    ///
    /// The operation is chosen from the operator and the runtime types of
    /// both operands:
    /// - number and number: arithmetic, comparisons and logic;
    /// - string `+` string: concatenation;
    /// - string `*` number (either order): repetition.
    ///
    /// Both sides of `and` / `or` have already been evaluated by the caller.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `UnsupportedOperands` for every other combination.
    ///
    /// # Example
    /// ```
    /// use pylite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Object},
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Object::from(3.0),
    ///                                    &Object::from(4.0),
    ///                                    1).unwrap();
    /// assert_eq!(sum, Object::from(7.0));
    ///
    /// let text = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                     &Object::from("ab"),
    ///                                     &Object::from("cd"),
    ///                                     1).unwrap();
    /// assert_eq!(text, Object::from("abcd"));
    ///
    /// assert!(Interpreter::eval_binary(BinaryOperator::Add,
    ///                                  &Object::from("ab"),
    ///                                  &Object::from(1.0),
    ///                                  1).is_err());
    /// assert!(Interpreter::eval_binary(BinaryOperator::Or,
    ///                                  &Object::from(""),
    ///                                  &Object::from("x"),
    ///                                  1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Object,
                       right: &Object,
                       line: usize)
                       -> EvalResult<Object> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        use Object::{Number, String};

        match (op, left, right) {
            (And | Or, Number(a), Number(b)) => Ok(Self::eval_logic(op, *a, *b)),

            (Add | Sub | Mul | Div | Mod | Pow, Number(a), Number(b)) => {
                Ok(Self::eval_scalar_op(op, *a, *b))
            },
            (Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual, Number(a), Number(b)) => {
                Ok(Self::eval_comparison(op, *a, *b))
            },

            (Add, String(a), String(b)) => Ok(Self::concat(a, b)),
            (Mul, String(text), Number(count)) | (Mul, Number(count), String(text)) => {
                Self::repeat(text, *count, line)
            },

            _ => Err(RuntimeError::UnsupportedOperands { op: op.to_string(),
                                                         left: left.type_name(),
                                                         right: right.type_name(),
                                                         line }),
        }
    }
}
