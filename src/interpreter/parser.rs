/// Core expression parsing.
///
/// Holds the grammar table mapping token kinds to prefix and infix handlers
/// with their binding powers, the precedence-climbing loop, and the program
/// entry point.
pub mod core;

/// Prefix handlers.
///
/// Literals, variables, grouping, list literals, and the prefix operators
/// `-` and `not`.
pub mod unary;

/// Infix handlers.
///
/// Binary operators and the postfix forms: calls, subscripts and member
/// access.
pub mod binary;

/// Indented block parsing.
///
/// Parses the `: NEWLINE* INDENT ... DEDENT` bodies of compound statements.
pub mod block;

/// Utility functions for the parser.
pub mod utils;

/// Statement parsing.
///
/// Implements the statement grammar: control flow, function definitions,
/// the assignment forms and expression statements.
pub mod statement;
