#[derive(Debug)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what was found and what was expected instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A bare call names something that is not a declared class.
    UnknownClass {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::UnknownClass { name, line } => {
                write!(f, "Error on line {line}: '{name}' does not name a declared class.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
