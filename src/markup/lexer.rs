//! Tokenization of markup source using the logos lexer
//!
//! Produces tokens paired with their byte ranges. Comments are kept in the
//! stream so that text on either side of them is not glued together by
//! accident; the parser drops them.

use super::tokens::Token;
use super::MarkupError;
use logos::Logos;
use std::ops::Range;

/// Type alias for token with location
pub type TokenLocation = (Token, Range<usize>);

pub fn tokenize(source: &str) -> Result<Vec<TokenLocation>, MarkupError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) if lexer.slice().starts_with("<!--") => {
                return Err(MarkupError::UnterminatedComment { offset: span.start });
            }
            Err(()) => {
                return Err(MarkupError::UnexpectedCharacter {
                    offset: span.start,
                    found: lexer.slice().to_string(),
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_with_locations() {
        let tokens = tokenize("<p>Hi</p>").unwrap();
        assert_eq!(
            tokens,
            vec![
                (Token::Lt, 0..1),
                (Token::Ident, 1..2),
                (Token::Gt, 2..3),
                (Token::Ident, 3..5),
                (Token::CloseTagOpen, 5..7),
                (Token::Ident, 7..8),
                (Token::Gt, 8..9),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_unterminated_comment_reports_offset() {
        let err = tokenize("<p>x</p><!-- oops").unwrap_err();
        assert_eq!(err, MarkupError::UnterminatedComment { offset: 8 });
    }
}
