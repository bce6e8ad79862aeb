/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, threading a closure of name bindings and an
/// execution context through every node. It performs arithmetic, logical,
/// and comparison operations, dispatches method calls, and carries the
/// `return` unwind to its method-body frame.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages variable bindings, instance fields, and call frames.
/// - Reports runtime errors such as unknown variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text one logical line at a time and produces a
/// stream of tokens. Indentation is significant: the lexer synthesizes
/// `Indent`/`Dedent` tokens from the leading spaces of each non-empty line
/// and a `Newline` token at the end of each one.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles number and string literals, identifiers, keywords, and
///   operators.
/// - Computes indentation deltas across blank and comment-only lines.
/// - Reports lexical errors for malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs the AST that the evaluator walks. It tracks declared classes
/// so that instantiation sites resolve their class at parse time.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and block structure, reporting errors with location
///   info.
/// - Supports class definitions, conditionals, assignments, calls, and
///   `print`.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the closed set of runtime value kinds, the shared
/// holder that closures store, the class and instance types, and the
/// truthiness and rendering rules used by built-in operations.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Holder` sharing semantics.
/// - Implements classes, method tables with inheritance, and instances.
/// - Provides truthiness coercion and the `print` rendering of values.
pub mod value;
