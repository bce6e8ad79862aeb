use std::fmt;

use logos::Logos;

use crate::error::LexerError;

/// Represents a lexical token of the source language.
///
/// Besides the tokens spelled out in the source text, the stream contains
/// three synthetic kinds computed from line structure: `Newline` closes every
/// non-empty logical line, and `Indent`/`Dedent` mark where the indentation
/// level of a line differs from the line before it. The stream always ends
/// with a single `Eof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal, such as `42`.
    Number(i64),
    /// An identifier that is not a keyword, such as `x` or `Point`.
    Id(String),
    /// A string literal with its escape sequences already resolved.
    String(String),
    /// A single punctuation character with no dedicated token, such as `+`.
    Char(char),
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// End of a logical line.
    Newline,
    /// `print`
    Print,
    /// Opening of an indented block.
    Indent,
    /// Closing of an indented block.
    Dedent,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// End of input.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "Number{{{value}}}"),
            Self::Id(value) => write!(f, "Id{{{value}}}"),
            Self::String(value) => write!(f, "String{{{value}}}"),
            Self::Char(value) => write!(f, "Char{{{value}}}"),
            Self::Class => write!(f, "Class"),
            Self::Return => write!(f, "Return"),
            Self::If => write!(f, "If"),
            Self::Else => write!(f, "Else"),
            Self::Def => write!(f, "Def"),
            Self::Newline => write!(f, "Newline"),
            Self::Print => write!(f, "Print"),
            Self::Indent => write!(f, "Indent"),
            Self::Dedent => write!(f, "Dedent"),
            Self::And => write!(f, "And"),
            Self::Or => write!(f, "Or"),
            Self::Not => write!(f, "Not"),
            Self::Eq => write!(f, "Eq"),
            Self::NotEq => write!(f, "NotEq"),
            Self::LessOrEq => write!(f, "LessOrEq"),
            Self::GreaterOrEq => write!(f, "GreaterOrEq"),
            Self::None => write!(f, "None"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Eof => write!(f, "Eof"),
        }
    }
}

/// Tokens recognized inside a single line, before indentation handling.
///
/// Keywords are not distinguished here; they come out as `Word` and are
/// resolved by [`Token::from`]. The synthetic stream tokens (`Newline`,
/// `Indent`, `Dedent`, `Eof`) never appear at this level, since they are
/// derived from line structure rather than from characters.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t]+")]
#[logos(skip r"#[^\n]*")]
enum LineToken {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// Identifier or keyword tokens.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// String literal tokens, delimited by `'` or `"`.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    #[regex(r"'([^'\\]|\\.)*'", parse_string)]
    Str(String),
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<=`
    #[token("<=")]
    LessOrEq,
    /// `>=`
    #[token(">=")]
    GreaterOrEq,
    /// Any other single character that can stand on its own.
    #[regex(r#"[^!'"0-9A-Za-z_ \t#]"#, |lex| lex.slice().chars().next())]
    Punct(char),
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit into an `i64`, which surfaces as
/// a lexer error on the literal.
fn parse_number(lex: &logos::Lexer<LineToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Resolves the escape sequences of a string literal slice, quotes included.
///
/// Returns `None` when the literal contains an escape the language does not
/// define, which surfaces as a lexer error on the literal.
fn parse_string(lex: &logos::Lexer<LineToken>) -> Option<String> {
    let slice = lex.slice();
    let raw = &slice[1..slice.len() - 1];

    let mut resolved = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next()? {
                'n' => resolved.push('\n'),
                't' => resolved.push('\t'),
                'r' => resolved.push('\r'),
                '"' => resolved.push('"'),
                '\'' => resolved.push('\''),
                '\\' => resolved.push('\\'),
                _ => return None,
            }
        } else {
            resolved.push(c);
        }
    }
    Some(resolved)
}

impl From<LineToken> for Token {
    fn from(piece: LineToken) -> Self {
        match piece {
            LineToken::Number(value) => Self::Number(value),
            LineToken::Str(value) => Self::String(value),
            LineToken::Eq => Self::Eq,
            LineToken::NotEq => Self::NotEq,
            LineToken::LessOrEq => Self::LessOrEq,
            LineToken::GreaterOrEq => Self::GreaterOrEq,
            LineToken::Punct(value) => Self::Char(value),
            LineToken::Word(word) => match word.as_str() {
                "class" => Self::Class,
                "return" => Self::Return,
                "if" => Self::If,
                "else" => Self::Else,
                "def" => Self::Def,
                "print" => Self::Print,
                "and" => Self::And,
                "or" => Self::Or,
                "not" => Self::Not,
                "None" => Self::None,
                "True" => Self::True,
                "False" => Self::False,
                _ => Self::Id(word),
            },
        }
    }
}

/// Streaming view over the token sequence of a complete source text.
///
/// The lexer works one logical line at a time: it first commits to a full
/// line, then decides what the line contributes to the stream. Lines holding
/// only whitespace and comments contribute nothing, so indentation deltas are
/// always computed between two lines that actually carry tokens. A line
/// indented deeper than the previous one is preceded by one `Indent` per two
/// extra spaces; a shallower line by the matching number of `Dedent` tokens.
/// At end of input the remaining indentation is drained with `Dedent`s and a
/// single `Eof` closes the stream.
///
/// # Example
/// ```
/// use minipy::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 4").unwrap();
///
/// assert_eq!(lexer.current(), &Token::Id("x".to_string()));
/// assert_eq!(lexer.advance(), &Token::Char('='));
/// assert_eq!(lexer.advance(), &Token::Number(4));
/// assert_eq!(lexer.advance(), &Token::Newline);
/// assert_eq!(lexer.advance(), &Token::Eof);
/// ```
#[derive(Debug)]
pub struct Lexer {
    tokens:   Vec<(Token, usize)>,
    position: usize,
}

impl Lexer {
    /// Tokenizes `source` completely.
    ///
    /// After construction [`current`](Self::current) is the first token of
    /// the stream.
    ///
    /// # Errors
    /// Returns a [`LexerError`] for odd indentation, unterminated string
    /// literals, unknown escape sequences, a stray `!`, or an oversized
    /// number literal.
    pub fn new(source: &str) -> Result<Self, LexerError> {
        let mut tokens = Vec::new();
        let mut indent = 0;
        let mut last_line = 1;

        for (index, line) in source.lines().enumerate() {
            let number = index + 1;
            last_line = number;

            let rest = line.trim_start_matches(' ');
            let spaces = line.len() - rest.len();

            let line_tokens = tokenize_line(rest, number)?;
            if line_tokens.is_empty() {
                continue;
            }
            if spaces % 2 != 0 {
                return Err(LexerError::BadIndent { line: number });
            }

            while indent < spaces {
                tokens.push((Token::Indent, number));
                indent += 2;
            }
            while indent > spaces {
                tokens.push((Token::Dedent, number));
                indent -= 2;
            }
            for token in line_tokens {
                tokens.push((token, number));
            }
            tokens.push((Token::Newline, number));
        }

        while indent > 0 {
            tokens.push((Token::Dedent, last_line));
            indent -= 2;
        }
        tokens.push((Token::Eof, last_line));

        Ok(Self { tokens, position: 0 })
    }

    /// The token at the current position.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.position].0
    }

    /// The source line the current token came from.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens[self.position].1
    }

    /// Moves past the current token and returns the new current one.
    ///
    /// Once `Eof` is reached the position no longer moves.
    pub fn advance(&mut self) -> &Token {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// The token `offset` positions ahead of the current one, saturating at
    /// `Eof`. Used by the parser to look past an assignment target.
    #[must_use]
    pub fn peek(&self, offset: usize) -> &Token {
        let index = (self.position + offset).min(self.tokens.len() - 1);
        &self.tokens[index].0
    }
}

/// Tokenizes the interior of one line, leading indentation already removed.
fn tokenize_line(rest: &str, line: usize) -> Result<Vec<Token>, LexerError> {
    let mut tokens = Vec::new();
    let mut pieces = LineToken::lexer(rest);

    while let Some(piece) = pieces.next() {
        match piece {
            Ok(token) => tokens.push(Token::from(token)),
            Err(()) => {
                let start = pieces.span().start;
                return Err(classify_failure(&rest[start..], line));
            },
        }
    }
    Ok(tokens)
}

/// Names the lexer error at the start of `tail`, the unmatched remainder of a
/// line.
fn classify_failure(tail: &str, line: usize) -> LexerError {
    let mut chars = tail.chars();
    match chars.next() {
        Some(quote @ ('\'' | '"')) => {
            while let Some(c) = chars.next() {
                if c == quote {
                    // The literal is closed, so the failure was inside it.
                    return LexerError::UnknownEscape { line };
                }
                if c == '\\' && chars.next().is_none() {
                    break;
                }
            }
            LexerError::UnterminatedString { line }
        },
        Some('!') => LexerError::StrayBang { line },
        Some(c) if c.is_ascii_digit() => LexerError::NumberTooLarge { line },
        Some(c) => LexerError::UnexpectedCharacter { character: c, line },
        None => LexerError::UnexpectedCharacter { character: '\0', line },
    }
}
