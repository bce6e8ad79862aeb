use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BinaryOperator, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        value::{class::Class, core::{Holder, Value}},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over the lexer's token stream.
///
/// The parser owns the lexer and a table of the classes declared so far; the
/// table is what lets a bare call like `Point(3, 4)` resolve to a
/// new-instance expression at parse time.
pub struct Parser {
    pub(crate) lexer:   Lexer,
    pub(crate) classes: HashMap<String, Rc<Class>>,
}

impl Parser {
    /// Creates a parser consuming `lexer`.
    #[must_use]
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer,
               classes: HashMap::new() }
    }

    /// Parses a complete program: statements up to `Eof`, as one compound.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for malformed input.
    pub fn parse_program(&mut self) -> ParseResult<Statement> {
        let mut statements = Vec::new();
        while self.lexer.current() != &Token::Eof {
            statements.push(self.parse_statement()?);
        }
        Ok(Statement::Compound { statements })
    }

    /// Parses a full expression.
    ///
    /// Grammar: `expression := or_term`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Statement> {
        self.parse_or()
    }

    /// Grammar: `or_term := and_term ("or" and_term)*`
    fn parse_or(&mut self) -> ParseResult<Statement> {
        let mut left = self.parse_and()?;
        while self.accept(&Token::Or) {
            let right = self.parse_and()?;
            left = Statement::BinaryOp { op:    BinaryOperator::Or,
                                         left:  Box::new(left),
                                         right: Box::new(right), };
        }
        Ok(left)
    }

    /// Grammar: `and_term := not_term ("and" not_term)*`
    fn parse_and(&mut self) -> ParseResult<Statement> {
        let mut left = self.parse_not()?;
        while self.accept(&Token::And) {
            let right = self.parse_not()?;
            left = Statement::BinaryOp { op:    BinaryOperator::And,
                                         left:  Box::new(left),
                                         right: Box::new(right), };
        }
        Ok(left)
    }

    /// Grammar: `not_term := "not" not_term | comparison`
    fn parse_not(&mut self) -> ParseResult<Statement> {
        if self.accept(&Token::Not) {
            let value = self.parse_not()?;
            return Ok(Statement::Not { value: Box::new(value) });
        }
        self.parse_comparison()
    }

    /// Grammar: `comparison := additive [comparison_op additive]`
    ///
    /// Comparisons do not chain.
    fn parse_comparison(&mut self) -> ParseResult<Statement> {
        let left = self.parse_additive()?;
        let op = match self.lexer.current() {
            Token::Eq => Some(BinaryOperator::Equal),
            Token::NotEq => Some(BinaryOperator::NotEqual),
            Token::LessOrEq => Some(BinaryOperator::LessEqual),
            Token::GreaterOrEq => Some(BinaryOperator::GreaterEqual),
            Token::Char('<') => Some(BinaryOperator::Less),
            Token::Char('>') => Some(BinaryOperator::Greater),
            _ => None,
        };
        match op {
            Some(op) => {
                self.lexer.advance();
                let right = self.parse_additive()?;
                Ok(Statement::BinaryOp { op,
                                         left: Box::new(left),
                                         right: Box::new(right) })
            },
            None => Ok(left),
        }
    }

    /// Grammar: `additive := term (("+" | "-") term)*`
    fn parse_additive(&mut self) -> ParseResult<Statement> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.lexer.current() {
                Token::Char('+') => BinaryOperator::Add,
                Token::Char('-') => BinaryOperator::Sub,
                _ => break,
            };
            self.lexer.advance();
            let right = self.parse_term()?;
            left = Statement::BinaryOp { op,
                                         left: Box::new(left),
                                         right: Box::new(right) };
        }
        Ok(left)
    }

    /// Grammar: `term := primary (("*" | "/") primary)*`
    fn parse_term(&mut self) -> ParseResult<Statement> {
        let mut left = self.parse_primary()?;
        loop {
            let op = match self.lexer.current() {
                Token::Char('*') => BinaryOperator::Mul,
                Token::Char('/') => BinaryOperator::Div,
                _ => break,
            };
            self.lexer.advance();
            let right = self.parse_primary()?;
            left = Statement::BinaryOp { op,
                                         left: Box::new(left),
                                         right: Box::new(right) };
        }
        Ok(left)
    }

    /// Parses a literal, a parenthesized expression, or a name form.
    fn parse_primary(&mut self) -> ParseResult<Statement> {
        match self.lexer.current() {
            Token::Number(value) => {
                let value = *value;
                self.lexer.advance();
                Ok(Statement::Constant { value: Holder::own(Value::Number(value)) })
            },
            Token::String(value) => {
                let value = value.clone();
                self.lexer.advance();
                Ok(Statement::Constant { value: Holder::own(Value::String(value.into())) })
            },
            Token::True => {
                self.lexer.advance();
                Ok(Statement::Constant { value: Holder::own(Value::Bool(true)) })
            },
            Token::False => {
                self.lexer.advance();
                Ok(Statement::Constant { value: Holder::own(Value::Bool(false)) })
            },
            Token::None => {
                self.lexer.advance();
                Ok(Statement::Constant { value: Holder::none() })
            },
            Token::Char('(') => {
                self.lexer.advance();
                let inner = self.parse_expression()?;
                self.expect_char(')')?;
                Ok(inner)
            },
            Token::Id(_) => self.parse_name_expression(),
            other => Err(ParseError::UnexpectedToken { token: format!("Expected an expression, found {other}"),
                                                       line:  self.lexer.line(), }),
        }
    }

    /// Parses the forms that start with an identifier: a variable or field
    /// chain, a stringify call, a new-instance expression, or a method call.
    fn parse_name_expression(&mut self) -> ParseResult<Statement> {
        let line = self.lexer.line();
        let mut ids = vec![self.expect_id()?];
        while self.accept(&Token::Char('.')) {
            ids.push(self.expect_id()?);
        }

        if !self.accept(&Token::Char('(')) {
            return Ok(Statement::Variable { dotted_ids: ids });
        }
        let mut args = self.parse_arguments()?;

        if ids.len() >= 2 {
            let Some(method) = ids.pop() else {
                return Err(ParseError::UnexpectedToken { token: "Empty call path".to_string(),
                                                         line });
            };
            return Ok(Statement::MethodCall { receiver: Box::new(Statement::Variable { dotted_ids: ids }),
                                              method,
                                              args });
        }

        let name = &ids[0];
        if name == "str" {
            if args.len() != 1 {
                return Err(ParseError::UnexpectedToken { token: format!("str() takes exactly one argument, found {}",
                                                                        args.len()),
                                                         line });
            }
            return Ok(Statement::Stringify { value: Box::new(args.remove(0)) });
        }
        match self.classes.get(name) {
            Some(class) => Ok(Statement::NewInstance { class: Rc::clone(class),
                                                       args }),
            None => Err(ParseError::UnknownClass { name: name.clone(),
                                                   line }),
        }
    }

    /// Parses a parenthesized, comma-separated argument list; the opening
    /// parenthesis is already consumed.
    pub(crate) fn parse_arguments(&mut self) -> ParseResult<Vec<Statement>> {
        let mut args = Vec::new();
        if self.accept(&Token::Char(')')) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if self.accept(&Token::Char(',')) {
                continue;
            }
            self.expect_char(')')?;
            break;
        }
        Ok(args)
    }
}
