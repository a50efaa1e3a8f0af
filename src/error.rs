//! Error types for the lambda lexer

use thiserror::Error;

/// Failure of a single scan step.
///
/// Every variant is fatal to the scan call that raised it. The scanner's
/// cursor is left where the failed token started, so the caller can report
/// the position and decide whether to abort.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// The current character starts no recognized token shape
    ///
    /// **Triggered by:** any character outside the language's alphabet
    /// **Example:** `x + y` (there is no `+` token)
    #[error("Unknown token '{ch}' at line {line}, column {column} (offset {offset})")]
    UnknownToken {
        /// The offending character
        ch: char,
        /// Zero-based character offset of `ch`
        offset: usize,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
    },

    /// A numeric lexeme could not be turned into its numeric value
    ///
    /// **Triggered by:** more than one `.`, a lone `-`, or an integer outside `i64`
    /// **Example:** `1.2.3`, `- 4`, `99999999999999999999`
    #[error("Malformed number '{lexeme}' at line {line}, column {column} (offset {offset})")]
    MalformedNumber {
        /// The consumed numeric lexeme
        lexeme: String,
        /// Zero-based character offset of the lexeme start
        offset: usize,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
    },

    /// A character literal is missing its payload or closing quote
    ///
    /// **Triggered by:** `'ab`, `'a` at end of input, a lone `'`
    /// **Prevention:** enable lenient character literals in `ScanOptions`
    /// to accept the historical unchecked delimiter
    #[error("Unterminated character literal at line {line}, column {column} (offset {offset})")]
    UnterminatedCharacter {
        /// Zero-based character offset of the opening quote
        offset: usize,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
    },
}

impl LexError {
    /// Zero-based character offset the failing token started at
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnknownToken { offset, .. }
            | LexError::MalformedNumber { offset, .. }
            | LexError::UnterminatedCharacter { offset, .. } => *offset,
        }
    }

    /// `(line, column)` of the failing token, both 1-indexed
    pub fn location(&self) -> (usize, usize) {
        match self {
            LexError::UnknownToken { line, column, .. }
            | LexError::MalformedNumber { line, column, .. }
            | LexError::UnterminatedCharacter { line, column, .. } => (*line, *column),
        }
    }
}

/// Result type for lexer operations
pub type Result<T> = std::result::Result<T, LexError>;
