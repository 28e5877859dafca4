//! # pylite
//!
//! pylite is an interpreter for a small, indentation-sensitive scripting
//! language with Python-like syntax, written in Rust.
//! It supports numbers, strings, lists, ranges, loops, closures and
//! recursive functions.
//!
//! Source text goes through three stages: the tokenizer produces tokens
//! (including `INDENT` / `DEDENT`), the parser builds statements, and the
//! interpreter walks them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{panic, thread};

use tracing::debug;

use crate::interpreter::{
    evaluator::core::Interpreter, parser::core::parse_program, tokenizer::tokenize,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to every node for error reporting.
pub mod ast;
/// Interpreter settings such as the call depth limit.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during tokenizing,
/// parsing, or evaluating code. Every error carries the line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser,
///   evaluator).
/// - Wraps both into the single `Error` returned by [`run`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokenizing, parsing, evaluation, scopes and the
/// runtime object model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, tokenizer, parser, evaluator.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
/// - Resolve negative indices.
pub mod util;

pub use config::Config;
pub use error::Error;

/// Stack of the worker thread that runs a program. Each nested call of the
/// interpreted program uses several native frames.
pub const STACK_SIZE: usize = 256 * 1024 * 1024;

/// Runs a program with the default configuration, printing to standard
/// output.
///
/// # Errors
/// Returns the first tokenizer, parser or runtime error.
///
/// # Examples
/// ```
/// use pylite::run;
///
/// let source = "x = 2\nprint(x + 2)";
/// assert!(run(source).is_ok());
///
/// // 'y' is not defined
/// assert!(run("print(y)").is_err());
/// ```
pub fn run(source: &str) -> Result<(), Error> {
    run_with_config(source, Config::default())
}

/// Runs a program with the given configuration, printing to standard output.
///
/// # Errors
/// Returns the first tokenizer, parser or runtime error.
///
/// # Examples
/// ```
/// use indoc::indoc;
/// use pylite::{run_with_config, Config, Error};
///
/// let source = indoc! {"
///     def down(n):
///         return down(n + 1)
///     down(0)
/// "};
///
/// let result = run_with_config(source, Config::default().with_max_call_depth(8));
/// assert!(matches!(result, Err(Error::Runtime(_))));
/// ```
pub fn run_with_config(source: &str, config: Config) -> Result<(), Error> {
    on_program_stack(|| {
        let tokens = tokenize(source)?;
        debug!(tokens = tokens.len(), "tokenized");

        let program = parse_program(&tokens)?;

        Interpreter::new().with_config(config).run(&program)?;
        Ok(())
    })
}

/// Runs `task` on a worker thread with a [`STACK_SIZE`] stack and waits for
/// it.
///
/// The default call depth limit assumes this stack. A panic inside `task`
/// is resumed on the calling thread.
///
/// # Errors
/// Returns what `task` returns, or `Error::Thread` when the worker cannot be
/// started.
///
/// # Examples
/// ```
/// use pylite::on_program_stack;
///
/// let answer = on_program_stack(|| Ok(6 * 7));
/// assert_eq!(answer, Ok(42));
/// ```
pub fn on_program_stack<T, F>(task: F) -> Result<T, Error>
    where F: FnOnce() -> Result<T, Error> + Send,
          T: Send
{
    thread::scope(|scope| {
        let worker = thread::Builder::new().name("pylite".into())
                                           .stack_size(STACK_SIZE)
                                           .spawn_scoped(scope, task)
                                           .map_err(|e| Error::Thread { details: e.to_string() })?;

        worker.join().unwrap_or_else(|payload| panic::resume_unwind(payload))
    })
}
