/// Call dispatch and the builtin table.
///
/// Resolves the callee, checks arity and runs either a native builtin or a
/// user-defined function in a fresh scope.
pub mod core;
/// The `print` builtin.
///
/// Writes its arguments, separated by spaces, followed by a newline.
pub mod print;
/// The `range` builtin.
///
/// Builds an arithmetic progression from one to three numbers.
pub mod range;
/// The `len` builtin.
pub mod len;
