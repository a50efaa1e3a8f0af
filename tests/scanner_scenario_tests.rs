//! End-to-end token streams for representative lambda programs

use lambda_lexer::{Scanner, TokenKind, TokenValue};
use lambda_lexer::TokenKind::*;

fn scan_kinds(source: &str) -> Result<Vec<TokenKind>, Box<dyn std::error::Error>> {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens()?;
    Ok(tokens.into_iter().map(|t| t.kind).collect())
}

// ====================
// Keywords and Literals
// ====================

#[test]
fn test_keywords_identifiers_and_literals() {
    let kinds = scan_kinds("if then else X y 123 45.67 'c'").unwrap();
    assert_eq!(
        kinds,
        vec![
            If,
            Then,
            Else,
            LambdaIdentifier,
            Identifier,
            Integer,
            Float,
            Character,
            EndOfInput
        ]
    );
}

#[test]
fn test_literal_payloads() {
    let mut scanner = Scanner::new("if then else X y 123 45.67 'c'");
    let tokens = scanner.scan_tokens().unwrap();

    assert_eq!(tokens[3].value, TokenValue::Text("X".to_string()));
    assert_eq!(tokens[4].value, TokenValue::Text("y".to_string()));
    assert_eq!(tokens[5].value, TokenValue::Integer(123));
    assert_eq!(tokens[6].value, TokenValue::Float(45.67));
    assert_eq!(tokens[7].value, TokenValue::Char('c'));
}

// ====================
// Punctuation
// ====================

#[test]
fn test_brackets_and_colon() {
    let kinds = scan_kinds("( ) [ ] :").unwrap();
    assert_eq!(
        kinds,
        vec![LeftParen, RightParen, LeftBracket, RightBracket, Colon, EndOfInput]
    );
}

#[test]
fn test_list_literal() {
    let kinds = scan_kinds("if X [123, 45.67, 'a']").unwrap();
    assert_eq!(
        kinds,
        vec![
            If,
            LambdaIdentifier,
            LeftBracket,
            Integer,
            Comma,
            Float,
            Comma,
            Character,
            RightBracket,
            EndOfInput
        ]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(scan_kinds("").unwrap(), vec![EndOfInput]);
    assert_eq!(scan_kinds(" \t\n ").unwrap(), vec![EndOfInput]);
}

// ====================
// Lambda Definitions
// ====================

#[test]
fn test_lambda_definition() {
    let kinds = scan_kinds(r"LVar1 = \x y.(LVar2 x (LVar3 y) \z.z);").unwrap();
    assert_eq!(
        kinds,
        vec![
            LambdaIdentifier,
            Equals,
            Backslash,
            Identifier,
            Identifier,
            Dot,
            LeftParen,
            LambdaIdentifier,
            Identifier,
            LeftParen,
            LambdaIdentifier,
            Identifier,
            RightParen,
            Backslash,
            Identifier,
            Dot,
            Identifier,
            RightParen,
            Semicolon,
            EndOfInput
        ]
    );
}

#[test]
fn test_let_in_expression() {
    let source = r"F = \f l. let T = Tail l in if IsEmpty l then l else f (Head l) : T;";
    let kinds = scan_kinds(source).unwrap();
    assert_eq!(
        kinds,
        vec![
            LambdaIdentifier,
            Equals,
            Backslash,
            Identifier,
            Identifier,
            Dot,
            Let,
            LambdaIdentifier,
            Equals,
            LambdaIdentifier,
            Identifier,
            In,
            If,
            LambdaIdentifier,
            Identifier,
            Then,
            Identifier,
            Else,
            Identifier,
            LeftParen,
            LambdaIdentifier,
            Identifier,
            RightParen,
            Colon,
            LambdaIdentifier,
            Semicolon,
            EndOfInput
        ]
    );
}

#[test]
fn test_multiline_program() {
    let source = "Id = \\x.x;\nK = \\x y.x;\n";
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().unwrap();

    let k = tokens
        .iter()
        .find(|t| t.lexeme == "K")
        .expect("K should be scanned");
    assert_eq!(k.kind, LambdaIdentifier);
    assert_eq!((k.line, k.column), (2, 1));
}

// ====================
// Exhaustion
// ====================

#[test]
fn test_repeated_calls_after_exhaustion() {
    let mut scanner = Scanner::new("X");
    assert_eq!(scanner.next_token().unwrap().kind, LambdaIdentifier);

    let end = scanner.position();
    for _ in 0..5 {
        assert_eq!(scanner.next_token().unwrap().kind, EndOfInput);
        assert_eq!(scanner.position(), end);
    }
}
