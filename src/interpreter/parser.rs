/// Expression parsing.
///
/// Contains the parser state and the precedence-descent chain from logical
/// connectives down to primary expressions, calls, and dotted paths.
pub mod core;

/// Statement parsing.
///
/// Implements statements and their block structure: class definitions with
/// their methods, conditionals, `print`, `return`, assignments, and both the
/// inline and the indented form of a suite.
pub mod statement;

/// Token-consumption helpers.
///
/// Provides the expect/accept primitives the grammar rules are built from.
pub mod utils;

pub use core::Parser;
