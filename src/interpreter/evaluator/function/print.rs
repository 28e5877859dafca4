use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
};

/// Writes the arguments to `out`, separated by single spaces and followed by
/// a newline.
///
/// Each argument is rendered with its `Display` implementation, so numbers
/// print their value, strings print raw and every other object prints a
/// placeholder. Calling it without arguments prints an empty line.
///
/// # Parameters
/// - `args`: Values to print.
/// - `out`: Destination of the text.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// Always `0`.
///
/// # Example
/// ```
/// use pylite::interpreter::{evaluator::function::print::print, value::core::Object};
///
/// let mut out = Vec::new();
/// let result = print(&[Object::from("x ="), Object::from(2.5)], &mut out, 1).unwrap();
///
/// assert_eq!(result, Object::from(0.0));
/// assert_eq!(out, b"x = 2.5\n");
/// ```
pub fn print(args: &[Object], out: &mut dyn Write, line: usize) -> EvalResult<Object> {
    let text = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    writeln!(out, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                               line })?;
    Ok(Object::Number(0.0))
}
