use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Object,
    },
    util::num::f64_to_i64_truncated,
};

/// Largest string, in bytes, that repetition may build.
pub const MAX_REPEAT_BYTES: usize = 1 << 30;

impl Interpreter {
    /// Joins two strings into a new one.
    #[must_use]
    pub fn concat(left: &str, right: &str) -> Object {
        let mut joined = String::with_capacity(left.len() + right.len());
        joined.push_str(left);
        joined.push_str(right);
        Object::from(joined)
    }

    /// Repeats a string `count` times.
    ///
    /// The count is truncated toward zero, so `"ab" * 2.9` is `"abab"`.
    ///
    /// # Errors
    /// `InvalidArgument` when the count is negative or not finite, or when the
    /// result would exceed [`MAX_REPEAT_BYTES`].
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::{evaluator::core::Interpreter, value::core::Object};
    ///
    /// assert_eq!(Interpreter::repeat("ab", 2.9, 1).unwrap(), Object::from("abab"));
    /// assert_eq!(Interpreter::repeat("ab", 0.0, 1).unwrap(), Object::from(""));
    /// assert!(Interpreter::repeat("ab", -1.0, 1).is_err());
    /// assert!(Interpreter::repeat("ab", 1e18, 1).is_err());
    /// ```
    pub fn repeat(text: &str, count: f64, line: usize) -> EvalResult<Object> {
        let invalid = || RuntimeError::InvalidArgument { details: format!("cannot repeat a string \
                                                                           {count} times"),
                                                         line };

        let count = f64_to_i64_truncated(count, invalid())?;
        let count = usize::try_from(count).map_err(|_| invalid())?;

        match text.len().checked_mul(count) {
            Some(bytes) if bytes <= MAX_REPEAT_BYTES => {},
            _ => return Err(invalid()),
        }

        Ok(Object::from(text.repeat(count)))
    }
}
