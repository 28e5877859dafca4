use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
};

/// Returns the length of a string or a list.
///
/// Strings are measured in characters.
///
/// # Errors
/// `TypeError` for any other kind of argument.
///
/// # Example
/// ```
/// use pylite::interpreter::{evaluator::function::len::len, value::core::Object};
///
/// let n = len(&[Object::from("héllo")], &mut Vec::new(), 1).unwrap();
/// assert_eq!(n, Object::from(5.0));
///
/// assert!(len(&[Object::from(3.0)], &mut Vec::new(), 1).is_err());
/// ```
pub fn len(args: &[Object], _out: &mut dyn Write, line: usize) -> EvalResult<Object> {
    match args {
        [value] => value.length_object(line),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "len".into(),
                                                       expected: "1".into(),
                                                       found: args.len(),
                                                       line }),
    }
}
