#[derive(Debug)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexerError {
    /// A line was indented with an odd number of leading spaces.
    BadIndent {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was not closed before the end of its line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal contained an escape sequence the language does not
    /// define.
    UnknownEscape {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a `!` that is not part of the `!=` operator.
    StrayBang {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A number literal does not fit into a signed 64-bit integer.
    NumberTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A character that cannot begin any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadIndent { line } => write!(f, "Error on line {line}: Bad indent size."),
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: String literal is not terminated.")
            },
            Self::UnknownEscape { line } => {
                write!(f, "Error on line {line}: Unknown escape sequence in string literal.")
            },
            Self::StrayBang { line } => {
                write!(f, "Error on line {line}: Stray '!' is not a token; did you mean '!='?")
            },
            Self::NumberTooLarge { line } => {
                write!(f, "Error on line {line}: Number literal is too large.")
            },
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character '{character}'.")
            },
        }
    }
}

impl std::error::Error for LexerError {}
