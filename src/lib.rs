//! # lambda_lexer - Scanner for a Small Lambda Language
//!
//! Converts raw source text of a small lambda-calculus language into typed
//! tokens for a downstream parser. The parser pulls one token at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use lambda_lexer::{Scanner, TokenKind, TokenValue};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scanner = Scanner::new(r"Twice = \f x. f (f x);");
//!
//! let first = scanner.next_token()?;
//! assert_eq!(first.kind, TokenKind::LambdaIdentifier);
//! assert_eq!(first.value, TokenValue::Text("Twice".to_string()));
//!
//! // Drain the rest, ending with END_OF_INPUT
//! let rest = scanner.scan_tokens()?;
//! assert_eq!(rest.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - **Keywords**: `if`, `then`, `else`, `let`, `in`
//! - **Punctuation**: `( ) [ ] : , . ; \ =`
//! - **Identifiers**: lowercase-led names are ordinary variables, uppercase-led
//!   names are lambda identifiers
//! - **Literals**: integers (`123`, `-4`), floats (`45.67`), characters (`'c'`)
//!
//! ## Error Handling
//!
//! A scan step that cannot produce a token returns a [`LexError`] carrying
//! the position of the offending input:
//!
//! ```rust
//! use lambda_lexer::{LexError, Scanner};
//!
//! let mut scanner = Scanner::new("x + y");
//! scanner.next_token().unwrap();
//!
//! match scanner.next_token() {
//!     Err(LexError::UnknownToken { ch, offset, .. }) => {
//!         assert_eq!(ch, '+');
//!         assert_eq!(offset, 2);
//!     }
//!     other => panic!("expected an unknown token error, got {:?}", other),
//! }
//! ```

/// Version of the lexer crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{LexError, Result};
pub use lexer::{LambdaScanner, ScanOptions, Token, TokenKind, TokenValue, Tokens};

/// Type alias for the lambda scanner (lexer).
/// Converts raw source text into tokens for the parser.
pub type Scanner = LambdaScanner;
