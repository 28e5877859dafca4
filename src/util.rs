/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the
/// interpreter's `f64` numbers and the integer types used for indexing,
/// lengths and repetition counts. Every conversion that could lose
/// information returns a `Result` or `Option` instead of silently
/// truncating or wrapping.
pub mod num;
