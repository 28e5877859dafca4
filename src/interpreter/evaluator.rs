/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and logical operators on numbers, and
/// concatenation and repetition of strings.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and logical `not`.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Interpreter` itself, the `Flow` control signals and the
/// dispatch over statements and expressions.
pub mod core;

/// Execution of `while` and `for` loops.
pub mod loops;

/// Utility functions for evaluation.
///
/// Variable lookup and update, list literals, indexing and member access.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
