use minipy::{
    error::LexerError,
    interpreter::lexer::{Lexer, Token},
};

fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source).expect("lexing failed");
    let mut tokens = vec![lexer.current().clone()];
    while lexer.current() != &Token::Eof {
        tokens.push(lexer.advance().clone());
    }
    tokens
}

fn lexer_error(source: &str) -> LexerError {
    match Lexer::new(source) {
        Ok(_) => panic!("Lexing succeeded but was expected to fail: {source}"),
        Err(e) => e,
    }
}

fn id(name: &str) -> Token {
    Token::Id(name.to_string())
}

#[test]
fn assignment_line() {
    assert_eq!(tokenize("x = 4"),
               [id("x"),
                Token::Char('='),
                Token::Number(4),
                Token::Newline,
                Token::Eof]);
}

#[test]
fn keywords_are_recognized() {
    assert_eq!(tokenize("class return if else def print and or not None True False"),
               [Token::Class,
                Token::Return,
                Token::If,
                Token::Else,
                Token::Def,
                Token::Print,
                Token::And,
                Token::Or,
                Token::Not,
                Token::None,
                Token::True,
                Token::False,
                Token::Newline,
                Token::Eof]);
}

#[test]
fn comparison_operators() {
    assert_eq!(tokenize("a == b != c <= d >= e < f > g"),
               [id("a"),
                Token::Eq,
                id("b"),
                Token::NotEq,
                id("c"),
                Token::LessOrEq,
                id("d"),
                Token::GreaterOrEq,
                id("e"),
                Token::Char('<'),
                id("f"),
                Token::Char('>'),
                id("g"),
                Token::Newline,
                Token::Eof]);
}

#[test]
fn string_literals_and_escapes() {
    assert_eq!(tokenize(r#"s = 'a\nb\t\'c'"#),
               [id("s"),
                Token::Char('='),
                Token::String("a\nb\t'c".to_string()),
                Token::Newline,
                Token::Eof]);
    assert_eq!(tokenize(r#"t = "hi there""#),
               [id("t"),
                Token::Char('='),
                Token::String("hi there".to_string()),
                Token::Newline,
                Token::Eof]);
}

#[test]
fn blank_and_comment_lines_emit_nothing() {
    let source = "# leading comment\n\nx = 1  # trailing comment\n   \n# done";
    assert_eq!(tokenize(source),
               [id("x"),
                Token::Char('='),
                Token::Number(1),
                Token::Newline,
                Token::Eof]);
}

#[test]
fn indent_and_dedent_are_synthesized() {
    let source = "if 1:\n  print 1\nprint 2";
    assert_eq!(tokenize(source),
               [Token::If,
                Token::Number(1),
                Token::Char(':'),
                Token::Newline,
                Token::Indent,
                Token::Print,
                Token::Number(1),
                Token::Newline,
                Token::Dedent,
                Token::Print,
                Token::Number(2),
                Token::Newline,
                Token::Eof]);
}

#[test]
fn indentation_survives_blank_and_comment_lines() {
    let source = "if 1:\n  x = 1\n\n# note\n  y = 2";
    assert_eq!(tokenize(source),
               [Token::If,
                Token::Number(1),
                Token::Char(':'),
                Token::Newline,
                Token::Indent,
                id("x"),
                Token::Char('='),
                Token::Number(1),
                Token::Newline,
                id("y"),
                Token::Char('='),
                Token::Number(2),
                Token::Newline,
                Token::Dedent,
                Token::Eof]);
}

#[test]
fn indentation_drains_at_end_of_input() {
    let source = "if 1:\n  if 1:\n    x = 1";
    let tokens = tokenize(source);
    let dedents = tokens.iter().filter(|t| *t == &Token::Dedent).count();
    assert_eq!(dedents, 2);
    assert_eq!(tokens[tokens.len() - 3..],
               [Token::Dedent, Token::Dedent, Token::Eof]);
}

#[test]
fn indents_and_dedents_balance() {
    let source = "class A:\n  def m():\n    if 1:\n      return 1\n    return 2\na = A()";
    let tokens = tokenize(source);
    let indents = tokens.iter().filter(|t| *t == &Token::Indent).count();
    let dedents = tokens.iter().filter(|t| *t == &Token::Dedent).count();
    assert_eq!(indents, 3);
    assert_eq!(indents, dedents);
}

#[test]
fn dump_format() {
    assert_eq!(format!("{}", Token::Number(42)), "Number{42}");
    assert_eq!(format!("{}", id("total")), "Id{total}");
    assert_eq!(format!("{}", Token::String("hi".to_string())), "String{hi}");
    assert_eq!(format!("{}", Token::Char('+')), "Char{+}");
    assert_eq!(format!("{}", Token::Indent), "Indent");
    assert_eq!(format!("{}", Token::LessOrEq), "LessOrEq");
    assert_eq!(format!("{}", Token::Eof), "Eof");
}

#[test]
fn dumped_numbers_round_trip() {
    for value in [i64::MIN, -7, 0, 1, 42, i64::MAX] {
        let dumped = format!("{}", Token::Number(value));
        let inner = &dumped["Number{".len()..dumped.len() - 1];
        assert_eq!(inner.parse::<i64>().expect("not a number"), value);
    }
}

#[test]
fn odd_indentation_is_an_error() {
    assert!(matches!(lexer_error("if 1:\n   x = 1"),
                     LexerError::BadIndent { line: 2 }));
}

#[test]
fn odd_indentation_on_blank_lines_is_ignored() {
    assert_eq!(tokenize("x = 1\n   \n#   comment\ny = 2").len(), 9);
}

#[test]
fn unterminated_string_is_an_error() {
    assert!(matches!(lexer_error("x = 'abc"),
                     LexerError::UnterminatedString { line: 1 }));
    assert!(matches!(lexer_error("x = \"abc\ny = 1"),
                     LexerError::UnterminatedString { line: 1 }));
}

#[test]
fn unknown_escape_is_an_error() {
    assert!(matches!(lexer_error(r"x = 'a\qb'"),
                     LexerError::UnknownEscape { line: 1 }));
}

#[test]
fn stray_bang_is_an_error() {
    assert!(matches!(lexer_error("y = 5\nz = !true"),
                     LexerError::StrayBang { line: 2 }));
}

#[test]
fn oversized_number_is_an_error() {
    assert!(matches!(lexer_error("x = 99999999999999999999"),
                     LexerError::NumberTooLarge { line: 1 }));
}
