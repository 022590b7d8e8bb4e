//! Token definitions for component markup
//!
//! The tokens are context free: the same `Ident` token is a tag name inside
//! `<...>` and a word of text outside it. The parser decides which by position
//! and rebuilds text from the source slices of the tokens it covers.
use logos::{Lexer, Logos};

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Token {
    #[token("<!--", comment_body)]
    Comment,

    #[token("</")]
    CloseTagOpen,

    #[token("/>")]
    SelfClose,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("=")]
    Equals,

    #[token("/")]
    Slash,

    // Quoted attribute values never span a tag boundary
    #[regex(r#""[^"<]*""#)]
    DoubleQuoted,

    #[regex(r"'[^'<]*'")]
    SingleQuoted,

    #[token("\"")]
    Quote,

    #[token("'")]
    Apostrophe,

    #[regex(r"[ \t\r\n\x0c]+")]
    Whitespace,

    // Tag and attribute names, also plain words in text
    #[regex(r"[A-Za-z_:@][A-Za-z0-9_:.@-]*", priority = 3)]
    Ident,

    // Everything else that can appear in text: numbers, punctuation, entities
    #[regex(r#"[^<>="'/ \t\r\n\x0c]+"#, priority = 1)]
    Text,
}

/// Consume up to and including the closing `-->`. An unterminated comment is a
/// lexing error.
fn comment_body(lex: &mut Lexer<Token>) -> bool {
    match lex.remainder().find("-->") {
        Some(end) => {
            lex.bump(end + 3);
            true
        }
        None => false,
    }
}

impl Token {
    /// Tokens that end a run of text
    pub fn ends_text(&self) -> bool {
        matches!(self, Token::Lt | Token::CloseTagOpen | Token::Comment)
    }
}
