/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Fails for NaN, infinities and values outside the `i64` range, since
/// none of them names a meaningful position or count.
///
/// ## Parameters
/// - `value`: The number to truncate.
/// - `error`: The error to return if the conversion is impossible.
///
/// ## Example
/// ```
/// use pylite::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9, "bad"), Ok(2));
/// assert_eq!(f64_to_i64_truncated(-2.9, "bad"), Ok(-2));
/// assert!(f64_to_i64_truncated(f64::NAN, "bad").is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated<E>(value: f64, error: E) -> Result<i64, E> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(error);
    }
    Ok(truncated as i64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_INT`].
///
/// ## Example
/// ```
/// use pylite::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(3, "too big"), Ok(3.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    if value as u64 > MAX_SAFE_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Resolves a possibly negative index against a collection length.
///
/// Negative indices count from the end (`-1` is the last element). Returns
/// `None` when the index is still out of range after wrapping.
///
/// ## Example
/// ```
/// use pylite::util::num::wrap_index;
///
/// assert_eq!(wrap_index(-1, 3), Some(2));
/// assert_eq!(wrap_index(-3, 3), Some(0));
/// assert_eq!(wrap_index(-4, 3), None);
/// assert_eq!(wrap_index(3, 3), None);
/// ```
#[must_use]
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let wrapped = if index < 0 { index + len } else { index };
    if (0..len).contains(&wrapped) {
        usize::try_from(wrapped).ok()
    } else {
        None
    }
}
