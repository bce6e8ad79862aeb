use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Consumes the current token when it equals `expected`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming both tokens otherwise.
    pub(crate) fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        if self.lexer.current() == expected {
            self.lexer.advance();
            return Ok(());
        }
        Err(ParseError::UnexpectedToken { token: format!("Expected {expected}, found {}",
                                                         self.lexer.current()),
                                          line:  self.lexer.line(), })
    }

    /// Consumes the current token when it is the punctuation character `c`.
    pub(crate) fn expect_char(&mut self, c: char) -> ParseResult<()> {
        self.expect(&Token::Char(c))
    }

    /// Consumes and returns the current identifier token.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] when the current token is not
    /// an identifier.
    pub(crate) fn expect_id(&mut self) -> ParseResult<String> {
        match self.lexer.current() {
            Token::Id(name) => {
                let name = name.clone();
                self.lexer.advance();
                Ok(name)
            },
            other => Err(ParseError::UnexpectedToken { token: format!("Expected an identifier, found {other}"),
                                                       line:  self.lexer.line(), }),
        }
    }

    /// Consumes the current token and reports `true` when it equals `token`.
    pub(crate) fn accept(&mut self, token: &Token) -> bool {
        if self.lexer.current() == token {
            self.lexer.advance();
            return true;
        }
        false
    }
}
