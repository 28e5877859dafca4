use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Object, Range},
    },
};

/// Builds a range object.
///
/// - `range(stop)` counts from `0` up to `stop`.
/// - `range(start, stop)` counts from `start` up to `stop`.
/// - `range(start, stop, step)` counts by `step`, downward when it is
///   negative.
///
/// `stop` is never produced. The arity has already been checked by the
/// caller.
///
/// # Errors
/// - `TypeError` if an argument is not a number.
/// - `ZeroStep` if `step` is zero.
///
/// # Example
/// ```
/// use pylite::interpreter::{
///     evaluator::function::range::range,
///     value::core::{Object, Range},
/// };
///
/// let r = range(&[Object::from(5.0), Object::from(0.0), Object::from(-1.0)],
///               &mut Vec::new(),
///               1).unwrap();
/// assert_eq!(r,
///            Object::from(Range { start: 5.0,
///                                 stop:  0.0,
///                                 step:  -1.0, }));
///
/// let zero = [Object::from(1.0), Object::from(10.0), Object::from(0.0)];
/// assert!(range(&zero, &mut Vec::new(), 1).is_err());
/// ```
pub fn range(args: &[Object], _out: &mut dyn Write, line: usize) -> EvalResult<Object> {
    let numbers = args.iter()
                      .map(|arg| arg.as_number("range() argument", line))
                      .collect::<EvalResult<Vec<_>>>()?;

    let (start, stop, step) = match numbers.as_slice() {
        [stop] => (0.0, *stop, 1.0),
        [start, stop] => (*start, *stop, 1.0),
        [start, stop, step] => (*start, *stop, *step),
        _ => {
            return Err(RuntimeError::ArgumentCountMismatch { name: "range".into(),
                                                             expected: "1, 2 or 3".into(),
                                                             found: args.len(),
                                                             line })
        },
    };

    if step == 0.0 {
        return Err(RuntimeError::ZeroStep { line });
    }

    Ok(Object::from(Range { start, stop, step }))
}
