/// The evaluator module executes statements and computes results.
///
/// The evaluator walks the syntax tree, evaluates expressions, manages the
/// chain of scopes and routes control signals (`break`, `continue`,
/// `return`) to the construct that handles them.
///
/// # Responsibilities
/// - Evaluates every expression and statement kind.
/// - Calls builtins and user-defined functions with their closures.
/// - Reports runtime errors such as undefined names or bad operand types.
pub mod evaluator;
/// Lexical scopes.
///
/// An environment maps names to objects and links to the scope it was
/// created in. Closures keep their defining environment alive.
pub mod environment;
/// The lexer module defines the token vocabulary.
///
/// The lexer recognizes numbers, strings, identifiers, keywords, operators
/// and delimiters on a single line. Line structure and indentation are added
/// on top of it by the tokenizer.
pub mod lexer;
/// The tokenizer turns source text into the token stream the parser reads.
///
/// # Responsibilities
/// - Drives the lexer line by line, tracking line numbers.
/// - Converts leading whitespace into `INDENT` / `DEDENT` tokens.
/// - Skips blank and comment-only lines.
/// - Ends the stream with the pending dedents and one end-of-input token.
pub mod tokenizer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the tokenizer and
/// constructs the statements of a program. Expressions are parsed with a
/// table of prefix and infix rules ordered by binding power.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and indentation, reporting errors with line info.
pub mod parser;
/// The value module defines the runtime objects.
///
/// Numbers, strings, lists, ranges, functions and iterators. Lists,
/// functions and iterators are shared by reference, so every alias sees the
/// same value.
pub mod value;
