use super::token::{Token, TokenKind, TokenValue};
use crate::error::{LexError, Result};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Knobs for the scanner's handling of malformed literals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Consume the character after a character literal's payload as its
    /// closing delimiter without checking that it is a quote.
    ///
    /// Off by default: `'ab` fails with [`LexError::UnterminatedCharacter`].
    /// When on, `'ab` yields the character `a` and swallows `b`, and `'a` at
    /// end of input is accepted.
    pub lenient_char_literals: bool,
}

impl ScanOptions {
    /// Options with lenient character literals enabled
    pub fn lenient() -> Self {
        ScanOptions {
            lenient_char_literals: true,
        }
    }
}

/// Pull-based scanner for lambda-language source text.
///
/// Each call to [`next_token`](LambdaScanner::next_token) skips whitespace
/// and produces exactly one token. Once the input is exhausted every further
/// call yields an end-of-input token without moving the cursor.
#[derive(Debug, Clone)]
pub struct LambdaScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Line where the current token starts
    start_line: usize,
    /// Column where the current token starts
    start_column: usize,
    options: ScanOptions,
    /// Most recently produced token
    last: Option<Token>,
}

impl LambdaScanner {
    /// Creates a new scanner over `source` with default options
    pub fn new(source: &str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    /// Creates a new scanner over `source` with the given options
    pub fn with_options(source: &str, options: ScanOptions) -> Self {
        LambdaScanner {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            options,
            last: None,
        }
    }

    /// Produces the next token and advances past its lexeme.
    ///
    /// On error the cursor stays at the start of the offending token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        if self.is_at_end() {
            let token = Token::end_of_input(self.current, self.line, self.column);
            self.last = Some(token.clone());
            return Ok(token);
        }

        match self.scan_token() {
            Ok(token) => {
                tracing::trace!(
                    "scanned {} {:?} at offset {}",
                    token.kind,
                    token.lexeme,
                    token.offset
                );
                self.last = Some(token.clone());
                Ok(token)
            }
            Err(e) => {
                tracing::debug!("scan failed: {}", e);
                self.current = self.start;
                self.line = self.start_line;
                self.column = self.start_column;
                Err(e)
            }
        }
    }

    /// Scans all remaining tokens, ending with exactly one end-of-input token
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        self.tokens().collect()
    }

    /// Iterator over the remaining tokens.
    ///
    /// Yields up to and including the end-of-input token, or up to and
    /// including the first error, then stops.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    /// Moves the cursor back to the start of the source
    pub fn reset(&mut self) {
        self.start = 0;
        self.current = 0;
        self.line = 1;
        self.column = 1;
        self.start_line = 1;
        self.start_column = 1;
        self.last = None;
    }

    /// Zero-based character offset of the cursor
    pub fn position(&self) -> usize {
        self.current
    }

    /// `(line, column)` of the cursor, both 1-indexed
    pub fn location(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Most recently produced token, if any
    pub fn last_token(&self) -> Option<&Token> {
        self.last.as_ref()
    }

    /// The options this scanner was built with
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// The full source text
    pub fn source(&self) -> String {
        self.source.iter().collect()
    }

    /// Whether the cursor has reached the end of the source
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn scan_token(&mut self) -> Result<Token> {
        let c = self.peek();

        // Punctuation wins over every other rule
        if let Some(kind) = TokenKind::punctuation(c) {
            self.advance();
            return Ok(self.text_token(kind));
        }

        match c {
            c if c.is_ascii_alphabetic() => Ok(self.scan_identifier_or_keyword()),
            c if c.is_ascii_digit() || c == '-' => self.scan_number(),
            '\'' => self.scan_character(),
            _ => Err(LexError::UnknownToken {
                ch: c,
                offset: self.start,
                line: self.start_line,
                column: self.start_column,
            }),
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_whitespace(self.peek()) {
            self.advance();
        }
    }

    fn scan_identifier_or_keyword(&mut self) -> Token {
        self.advance();
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text = self.lexeme();
        let kind = match TokenKind::keyword(&text) {
            Some(keyword) => keyword,
            None if text.starts_with(|c: char| c.is_ascii_uppercase()) => {
                TokenKind::LambdaIdentifier
            }
            None => TokenKind::Identifier,
        };

        self.text_token(kind)
    }

    fn scan_number(&mut self) -> Result<Token> {
        self.advance(); // digit or leading '-'
        while self.peek().is_ascii_digit() || self.peek() == '.' {
            self.advance();
        }

        let text = self.lexeme();

        let (kind, value) = match text.matches('.').count() {
            0 => {
                let n: i64 = text.parse().map_err(|_| self.malformed(&text))?;
                (TokenKind::Integer, TokenValue::Integer(n))
            }
            1 => {
                let fl: f64 = text.parse().map_err(|_| self.malformed(&text))?;
                (TokenKind::Float, TokenValue::Float(fl))
            }
            _ => return Err(self.malformed(&text)),
        };

        Ok(self.make_token(kind, text, value))
    }

    fn scan_character(&mut self) -> Result<Token> {
        self.advance(); // opening '

        if self.is_at_end() {
            return Err(self.unterminated());
        }
        let ch = self.advance();

        if self.options.lenient_char_literals {
            if !self.is_at_end() {
                self.advance(); // closing delimiter, unchecked
            }
        } else if !self.is_at_end() && self.peek() == '\'' {
            self.advance();
        } else {
            return Err(self.unterminated());
        }

        let text = self.lexeme();
        Ok(self.make_token(TokenKind::Character, text, TokenValue::Char(ch)))
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn text_token(&self, kind: TokenKind) -> Token {
        let text = self.lexeme();
        let value = TokenValue::Text(text.clone());
        self.make_token(kind, text, value)
    }

    fn make_token(&self, kind: TokenKind, lexeme: String, value: TokenValue) -> Token {
        Token::new(
            kind,
            lexeme,
            value,
            self.start,
            self.start_line,
            self.start_column,
        )
    }

    fn malformed(&self, text: &str) -> LexError {
        LexError::MalformedNumber {
            lexeme: text.to_string(),
            offset: self.start,
            line: self.start_line,
            column: self.start_column,
        }
    }

    fn unterminated(&self) -> LexError {
        LexError::UnterminatedCharacter {
            offset: self.start,
            line: self.start_line,
            column: self.start_column,
        }
    }
}

/// ASCII whitespace as C's `isspace` sees it (includes vertical tab)
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Borrowing token iterator returned by [`LambdaScanner::tokens`]
pub struct Tokens<'a> {
    scanner: &'a mut LambdaScanner,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.scanner.next_token();
        match &item {
            Ok(token) if !token.is_end() => {}
            _ => self.done = true,
        }
        Some(item)
    }
}

impl FusedIterator for Tokens<'_> {}
