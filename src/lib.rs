//! # minipy
//!
//! minipy is an interpreter for a small indentation-sensitive,
//! dynamically-typed object-oriented scripting language. Programs define
//! classes with methods (including dunder-style operator hooks), assign
//! variables, perform arithmetic, logical, and comparison operations, and
//! emit output through a `print` statement.

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
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::interpreter::{
    evaluator::core::{execute_program, Context},
    lexer::Lexer,
    parser::Parser,
    value::core::Closure,
};

/// Defines the structure of parsed code.
///
/// This module declares the AST node enum and the binary-operator set that
/// represent the syntactic structure of source code as a tree. The tree is
/// built by the parser and walked by the evaluator; embedders can also build
/// it directly.
///
/// # Responsibilities
/// - Defines one node type for every language construct.
/// - Carries literal values, dotted paths, and resolved classes inside the
///   nodes that need them.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// source code. It standardizes error reporting and carries the detail that
/// makes a failure actionable: source lines for lexer and parser errors,
/// names and arities for runtime errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Implements `Display` and `std::error::Error` for each of them.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and the value
/// model to provide a complete runtime for source code. It exposes the
/// public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Executes a complete program against an output stream.
///
/// The source is tokenized and parsed, then the resulting program runs with
/// a fresh global scope. Everything the program prints goes to `output`.
///
/// # Errors
/// Returns the lexer, parse, or runtime error that stopped interpretation.
///
/// # Examples
/// ```
/// let mut output = Vec::new();
/// minipy::run("x = 4\nprint x", &mut output).unwrap();
/// assert_eq!(output, b"4\n");
/// ```
pub fn run(source: &str, output: &mut dyn io::Write) -> Result<(), Box<dyn std::error::Error>> {
    let lexer = Lexer::new(source)?;
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program()?;

    let mut globals = Closure::new();
    let mut context = Context::new(output);
    execute_program(&program, &mut globals, &mut context)?;
    Ok(())
}
