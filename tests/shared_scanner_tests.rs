//! Integration tests for a scanner shared between threads
//!
//! The cursor mutates on every scan step, so a shared scanner is wrapped in a
//! single lock held for the whole step.

use lambda_lexer::{Scanner, Token, TokenKind};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;

const PROGRAM: &str = r"
    Compose = \f g x. f (g x);
    Pairs = [1, 2.5, 'p'];
    Pick = \b. if b then Compose else let K = \x y.x in K;
";

fn sequential_tokens() -> Vec<Token> {
    Scanner::new(PROGRAM).scan_tokens().unwrap()
}

// =============================================================================
// Lock Tests
// =============================================================================

#[test]
fn test_shared_scanner_hands_out_each_token_once() {
    let scanner = Arc::new(Mutex::new(Scanner::new(PROGRAM)));
    let mut handles = Vec::new();

    for _ in 0..4 {
        let scanner = Arc::clone(&scanner);
        handles.push(thread::spawn(move || {
            let mut seen = Vec::new();
            loop {
                let token = scanner.lock().next_token().unwrap();
                if token.kind == TokenKind::EndOfInput {
                    break;
                }
                seen.push(token);
            }
            seen
        }));
    }

    let mut collected: Vec<Token> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    collected.sort_by_key(|t| t.offset);

    let mut expected = sequential_tokens();
    expected.pop(); // END_OF_INPUT
    assert_eq!(collected, expected);
}

#[test]
fn test_exhausted_shared_scanner_stays_at_end() {
    let scanner = Arc::new(Mutex::new(Scanner::new("A b")));
    scanner.lock().scan_tokens().unwrap();

    let end = scanner.lock().position();
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let scanner = Arc::clone(&scanner);
            thread::spawn(move || scanner.lock().next_token().unwrap().kind)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), TokenKind::EndOfInput);
    }
    assert_eq!(scanner.lock().position(), end);
}
