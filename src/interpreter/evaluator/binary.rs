/// Dispatch of binary operations on the runtime types of both operands.
pub mod core;
/// Arithmetic on two numbers.
pub mod scalar;
/// Comparison of two numbers.
pub mod comparison;
/// Eager logical `and` / `or`.
pub mod logic;
/// String concatenation and repetition.
pub mod string;
