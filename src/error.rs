/// Lexing errors.
///
/// Defines all error types that can occur while tokenizing source text.
/// Lexer errors include malformed indentation, unterminated string literals,
/// unknown escape sequences, and stray characters that form no token.
pub mod lexer_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// an abstract syntax tree. Parse errors include unexpected tokens, malformed
/// statements, and references to classes that were never declared.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown variables, missing methods, type mismatches in
/// arithmetic or comparisons, and division by zero.
pub mod runtime_error;

pub use lexer_error::LexerError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
