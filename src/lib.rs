//! Lexical analysis for Lox source text.
//!
//! ```
//! let (tokens, diagnostics) = loxlex::scan("print 1 + 2;");
//! assert!(diagnostics.is_empty());
//! assert_eq!(tokens.len(), 6);
//! ```

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

pub use error::{Diagnostic, Reporter, ScanError};
pub use lexer::Scanner;
pub use token::{Literal, Token, TokenType};

/// Scans `source` with a fresh reporter and returns the tokens together with
/// every diagnostic raised along the way, in report order.
pub fn scan(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut reporter = Reporter::new();
    let tokens = Scanner::new(source).scan_all(&mut reporter);
    (tokens, reporter.take_diagnostics())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_returns_diagnostics() {
        let (tokens, diagnostics) = scan("1 @ \"x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.last().map(|token| token.t), Some(TokenType::Eof));
        assert_eq!(
            diagnostics.iter().map(|d| d.error.clone()).collect::<Vec<_>>(),
            vec![ScanError::UnexpectedCharacter('@'), ScanError::UnterminatedString]
        );
    }

    #[test]
    fn test_always_ends_with_single_eof() {
        for source in ["", "\"", "@@@", "1.", "//", "a\n\n", "\"a\nb"] {
            let (tokens, _) = scan(source);
            let last = tokens.last().cloned();
            assert_eq!(
                last.as_ref().map(|token| token.t),
                Some(TokenType::Eof),
                "source: {:?}",
                source
            );
            assert_eq!(last.map(|token| token.lexeme), Some(String::new()));
            assert_eq!(tokens.iter().filter(|token| token.t == TokenType::Eof).count(), 1);
        }
    }
}
