//! Lexical analysis for the lambda language
//!
//! Converts source text into typed tokens, one token per scan step.

mod lambda_scanner;
mod token;

pub use lambda_scanner::{LambdaScanner, ScanOptions, Tokens};
pub use token::{Token, TokenKind, TokenValue};
