use std::rc::Rc;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::class::{Class, Method},
    },
};

impl Parser {
    /// Parses a single statement, consuming its terminating structure.
    ///
    /// A statement is one of:
    /// - a class definition,
    /// - an `if` statement with an optional `else`,
    /// - a `print` statement,
    /// - a `return` statement,
    /// - an assignment, a field assignment, or a bare expression.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for malformed input.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.lexer.current() {
            Token::Class => self.parse_class_definition(),
            Token::If => self.parse_if(),
            Token::Print => self.parse_print(),
            Token::Return => self.parse_return(),
            _ => {
                let statement = self.parse_assignment_or_expression()?;
                self.expect(&Token::Newline)?;
                Ok(statement)
            },
        }
    }

    /// Parses a class definition and records the class in the declaration
    /// table, so later code can instantiate or inherit from it.
    ///
    /// Grammar: `"class" Id ["(" Id ")"] ":" Newline Indent method+ Dedent`
    fn parse_class_definition(&mut self) -> ParseResult<Statement> {
        let line = self.lexer.line();
        self.lexer.advance();
        let name = self.expect_id()?;

        let parent = if self.accept(&Token::Char('(')) {
            let parent_name = self.expect_id()?;
            self.expect_char(')')?;
            match self.classes.get(&parent_name) {
                Some(class) => Some(Rc::clone(class)),
                None => {
                    return Err(ParseError::UnknownClass { name: parent_name,
                                                          line });
                },
            }
        } else {
            None
        };

        self.expect_char(':')?;
        self.expect(&Token::Newline)?;
        self.expect(&Token::Indent)?;
        let mut methods = Vec::new();
        while !self.accept(&Token::Dedent) {
            methods.push(self.parse_method()?);
        }

        let class = Rc::new(Class::new(name, methods, parent));
        self.classes
            .insert(class.name().to_string(), Rc::clone(&class));
        Ok(Statement::ClassDefinition { class })
    }

    /// Parses one method definition inside a class body.
    ///
    /// Grammar: `"def" Id "(" [Id ("," Id)*] ")" ":" suite`
    fn parse_method(&mut self) -> ParseResult<Method> {
        self.expect(&Token::Def)?;
        let name = self.expect_id()?;
        self.expect_char('(')?;

        let mut formal_params = Vec::new();
        if !self.accept(&Token::Char(')')) {
            loop {
                formal_params.push(self.expect_id()?);
                if self.accept(&Token::Char(',')) {
                    continue;
                }
                self.expect_char(')')?;
                break;
            }
        }
        self.expect_char(':')?;
        let body = self.parse_suite()?;

        Ok(Method { name,
                    formal_params,
                    body: Statement::MethodBody { body: Box::new(body) } })
    }

    /// Parses the body of an `if`, `else`, or `def`: either a block of
    /// statements on the following, deeper-indented lines, or a single
    /// statement on the same line.
    fn parse_suite(&mut self) -> ParseResult<Statement> {
        if self.accept(&Token::Newline) {
            self.expect(&Token::Indent)?;
            let mut statements = Vec::new();
            while !self.accept(&Token::Dedent) {
                statements.push(self.parse_statement()?);
            }
            Ok(Statement::Compound { statements })
        } else {
            self.parse_statement()
        }
    }

    /// Grammar: `"if" expression ":" suite ["else" ":" suite]`
    fn parse_if(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();
        let condition = self.parse_expression()?;
        self.expect_char(':')?;
        let then_body = self.parse_suite()?;

        let else_body = if self.accept(&Token::Else) {
            self.expect_char(':')?;
            Some(Box::new(self.parse_suite()?))
        } else {
            None
        };

        Ok(Statement::IfElse { condition: Box::new(condition),
                               then_body: Box::new(then_body),
                               else_body })
    }

    /// Grammar: `"print" [expression ("," expression)*] Newline`
    fn parse_print(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();
        let mut args = Vec::new();
        if !self.accept(&Token::Newline) {
            loop {
                args.push(self.parse_expression()?);
                if self.accept(&Token::Char(',')) {
                    continue;
                }
                self.expect(&Token::Newline)?;
                break;
            }
        }
        Ok(Statement::Print { args })
    }

    /// Grammar: `"return" expression Newline`
    fn parse_return(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();
        let value = self.parse_expression()?;
        self.expect(&Token::Newline)?;
        Ok(Statement::Return { value: Box::new(value) })
    }

    /// Parses an assignment, a field assignment, or a bare expression.
    ///
    /// The target forms `Id "="` and `Id ("." Id)+ "="` are recognized by
    /// looking ahead over the token stream; everything else parses as an
    /// expression statement.
    fn parse_assignment_or_expression(&mut self) -> ParseResult<Statement> {
        if !matches!(self.lexer.current(), Token::Id(_)) {
            return self.parse_expression();
        }

        let mut offset = 1;
        while self.lexer.peek(offset) == &Token::Char('.')
              && matches!(self.lexer.peek(offset + 1), Token::Id(_))
        {
            offset += 2;
        }
        if self.lexer.peek(offset) != &Token::Char('=') {
            return self.parse_expression();
        }

        let line = self.lexer.line();
        let mut ids = vec![self.expect_id()?];
        while self.accept(&Token::Char('.')) {
            ids.push(self.expect_id()?);
        }
        self.expect_char('=')?;
        let value = Box::new(self.parse_expression()?);

        if ids.len() == 1 {
            return Ok(Statement::Assignment { name: ids.remove(0),
                                              value });
        }
        let Some(field) = ids.pop() else {
            return Err(ParseError::UnexpectedToken { token: "Empty assignment target".to_string(),
                                                     line });
        };
        Ok(Statement::FieldAssignment { object: ids,
                                        field,
                                        value })
    }
}
