use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static::lazy_static! {
    /// Reserved words, matched against the whole identifier lexeme
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut table = HashMap::new();
        table.insert("if", TokenKind::If);
        table.insert("then", TokenKind::Then);
        table.insert("else", TokenKind::Else);
        table.insert("let", TokenKind::Let);
        table.insert("in", TokenKind::In);
        table
    };
}

/// A single token from the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Exact text consumed for this token
    pub lexeme: String,
    /// Typed payload derived from the lexeme
    pub value: TokenValue,
    /// Zero-based character offset of the token start
    pub offset: usize,
    /// Line number where token starts (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(
        kind: TokenKind,
        lexeme: String,
        value: TokenValue,
        offset: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Token {
            kind,
            lexeme,
            value,
            offset,
            line,
            column,
        }
    }

    /// Creates the end-of-input marker at the given position
    pub fn end_of_input(offset: usize, line: usize, column: usize) -> Self {
        Token::new(
            TokenKind::EndOfInput,
            String::new(),
            TokenValue::Text(String::new()),
            offset,
            line,
            column,
        )
    }

    /// Whether this token marks the end of input
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} at {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

/// Payload carried by a token.
///
/// Punctuation, keywords, identifiers and end of input carry their lexeme as
/// text; literals carry the parsed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenValue {
    /// Text payload
    Text(String),
    /// Single character from a character literal
    Char(char),
    /// Integer literal value
    Integer(i64),
    /// Floating-point literal value
    Float(f64),
}

impl TokenValue {
    /// Text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Character payload, if this is a character value
    pub fn as_char(&self) -> Option<char> {
        match self {
            TokenValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Integer payload, if this is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TokenValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Float payload, if this is a float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TokenValue::Float(fl) => Some(*fl),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenValue::Text(s) => write!(f, "{}", s),
            TokenValue::Char(c) => write!(f, "'{}'", c),
            TokenValue::Integer(n) => write!(f, "{}", n),
            TokenValue::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// All possible token types in the lambda language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Keywords
    /// IF keyword
    If,
    /// THEN keyword
    Then,
    /// ELSE keyword
    Else,
    /// LET keyword
    Let,
    /// IN keyword
    In,

    // Punctuation
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Colon (list cons)
    Colon,
    /// Comma delimiter
    Comma,
    /// Dot separating lambda parameters from the body
    Dot,
    /// Semicolon terminating a definition
    Semicolon,
    /// Backslash introducing a lambda
    Backslash,
    /// Equals sign of a definition
    Equals,

    // Identifiers
    /// Identifier starting with a lowercase letter
    Identifier,
    /// Identifier starting with an uppercase letter
    LambdaIdentifier,

    // Literals
    /// Character literal ('c')
    Character,
    /// Integer literal
    Integer,
    /// Floating-point literal
    Float,

    // Special
    /// End of input marker
    EndOfInput,
}

impl TokenKind {
    /// Look up a keyword by its exact spelling
    pub fn keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS.get(s).copied()
    }

    /// Single-character punctuation token for `c`, if any
    pub fn punctuation(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            '.' => Some(TokenKind::Dot),
            ';' => Some(TokenKind::Semicolon),
            '\\' => Some(TokenKind::Backslash),
            '=' => Some(TokenKind::Equals),
            _ => None,
        }
    }

    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If | TokenKind::Then | TokenKind::Else | TokenKind::Let | TokenKind::In
        )
    }

    /// Check if token is single-character punctuation
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::Colon
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::Semicolon
                | TokenKind::Backslash
                | TokenKind::Equals
        )
    }

    /// Check if token is a character or numeric literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Character | TokenKind::Integer | TokenKind::Float
        )
    }

    /// Canonical upper-case name, as used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::Let => "LET",
            TokenKind::In => "IN",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::LeftBracket => "LBRACKET",
            TokenKind::RightBracket => "RBRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Backslash => "BACKSLASH",
            TokenKind::Equals => "EQUALS",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LambdaIdentifier => "LAMBDA_IDENTIFIER",
            TokenKind::Character => "CHARACTER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::EndOfInput => "END_OF_INPUT",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}
