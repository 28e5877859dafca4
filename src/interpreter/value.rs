/// Core runtime object type.
///
/// Defines the `Object` enum, truthiness, type names, lengths and the
/// rendering used by `print`.
pub mod core;
/// Function values.
///
/// Builtin functions point into the static builtin table; user-defined
/// functions carry their parameters, a shared reference to their body and
/// the environment they close over.
pub mod function;
/// Iterator objects.
///
/// Single-pass cursors over lists, strings and ranges, used by `for`.
pub mod iterator;
