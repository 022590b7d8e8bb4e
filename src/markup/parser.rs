//! Markup parser built with chumsky
//!
//! Parses the token stream into raw nodes. Close tags are captured but not
//! checked here; [`super::lower`] compares them against the open tags so that
//! a mismatch produces one precise error instead of a backtracking cascade.
//!
//! Grammar:
//! ```text
//! nodes     = (void | element | comment | text)*
//! text      = (non-tag token | "<" not followed by ident)+
//! element   = "<" ident attribute* ws* ("/>" | ">" nodes close)
//! void      = "<" void-ident attribute* ws* (">" | "/>")
//! close     = "</" ws* ident ws* ">"
//! attribute = ws* ident (ws* "=" ws* value)?
//! ```

use chumsky::prelude::*;
use std::sync::Arc;

use super::lexer::TokenLocation;
use super::tokens::Token;
use crate::tree::Attribute;

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenLocation>;

/// Elements that never have children and need no close tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawElement {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<RawNode>,
    /// Name and byte offset of the close tag; `None` for void and self-closing elements
    pub close: Option<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawNode {
    Element(RawElement),
    Text(String),
    Comment,
}

/// Helper: match a specific token type, ignoring the location
fn token(t: Token) -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    token_location(t).ignored()
}

/// Match a specific token type, keeping its location
fn token_location(t: Token) -> impl Parser<TokenLocation, TokenLocation, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenLocation| *tok == t)
}

fn whitespace() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    token(Token::Whitespace).repeated().ignored()
}

/// An identifier with its source text and starting byte offset
fn ident(source: Arc<String>) -> impl Parser<TokenLocation, (String, usize), Error = ParserError> + Clone {
    filter(|(t, _): &TokenLocation| *t == Token::Ident)
        .map(move |(_, span): TokenLocation| (source[span.clone()].to_string(), span.start))
}

fn attribute(source: Arc<String>) -> impl Parser<TokenLocation, Attribute, Error = ParserError> + Clone {
    let value = {
        let source = source.clone();
        filter(|(t, _): &TokenLocation| {
            matches!(
                t,
                Token::DoubleQuoted | Token::SingleQuoted | Token::Ident | Token::Text
            )
        })
        .map(move |(t, span): TokenLocation| {
            let raw = &source[span];
            match t {
                Token::DoubleQuoted | Token::SingleQuoted => raw[1..raw.len() - 1].to_string(),
                _ => raw.to_string(),
            }
        })
    };

    whitespace()
        .ignore_then(ident(source))
        .then(
            whitespace()
                .ignore_then(token(Token::Equals))
                .ignore_then(whitespace())
                .ignore_then(value)
                .or_not(),
        )
        .map(|((name, _), value)| Attribute::new(name, value.unwrap_or_default()))
}

/// Build the parser for a sequence of sibling nodes
pub(crate) fn nodes_parser(
    source: Arc<String>,
) -> impl Parser<TokenLocation, Vec<RawNode>, Error = ParserError> + Clone {
    let attributes = attribute(source.clone()).repeated();

    let open_tag = token(Token::Lt)
        .ignore_then(ident(source.clone()))
        .then(attributes.clone())
        .then_ignore(whitespace());

    let void_name = {
        let source = source.clone();
        filter(move |(t, span): &TokenLocation| {
            *t == Token::Ident && is_void_element(&source[span.clone()])
        })
    };
    let void_element = {
        let source = source.clone();
        token(Token::Lt)
            .ignore_then(void_name)
            .then(attributes)
            .then_ignore(whitespace())
            .then_ignore(token(Token::Gt).or(token(Token::SelfClose)))
            .map(move |((_, span), attributes)| RawElement {
                tag: source[span.clone()].to_string(),
                attributes,
                children: Vec::new(),
                close: None,
            })
    };

    let close_tag = token(Token::CloseTagOpen)
        .ignore_then(whitespace())
        .ignore_then(ident(source.clone()))
        .then_ignore(whitespace())
        .then_ignore(token(Token::Gt));

    // A `<` that cannot open a tag is ordinary text, as in `a < b` or `<3`
    let loose_lt = token_location(Token::Lt).then_ignore(
        filter(|(t, _): &TokenLocation| *t != Token::Ident)
            .rewind()
            .ignored()
            .or(end()),
    );

    let text = {
        let source = source.clone();
        filter(|(t, _): &TokenLocation| !t.ends_text())
            .or(loose_lt)
            .repeated()
            .at_least(1)
            .map(move |tokens: Vec<TokenLocation>| {
                tokens
                    .iter()
                    .map(|(_, span)| &source[span.clone()])
                    .collect::<String>()
            })
    };

    recursive(move |nodes| {
        let element = open_tag
            .then(choice((
                token(Token::SelfClose).to(None),
                token(Token::Gt)
                    .ignore_then(nodes)
                    .then(close_tag)
                    .map(Some),
            )))
            .map(|(((tag, _), attributes), body)| {
                let (children, close) = match body {
                    Some((children, close)) => (children, Some(close)),
                    None => (Vec::new(), None),
                };
                RawElement {
                    tag,
                    attributes,
                    children,
                    close,
                }
            });

        choice((
            void_element.map(RawNode::Element),
            element.map(RawNode::Element),
            token(Token::Comment).to(RawNode::Comment),
            text.map(RawNode::Text),
        ))
        .repeated()
    })
}

/// Parse a whole document: sibling nodes followed by end of input
pub(crate) fn document_parser(
    source: Arc<String>,
) -> impl Parser<TokenLocation, Vec<RawNode>, Error = ParserError> {
    nodes_parser(source).then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::lexer::tokenize;

    fn parse(source: &str) -> Result<Vec<RawNode>, Vec<ParserError>> {
        let tokens = tokenize(source).unwrap();
        document_parser(Arc::new(source.to_string())).parse(tokens)
    }

    fn element(node: &RawNode) -> &RawElement {
        match node {
            RawNode::Element(el) => el,
            other => panic!("Expected element, found {other:?}"),
        }
    }

    #[test]
    fn test_sibling_elements() {
        let nodes = parse("<h1>Welcome</h1><h2>Essential Links</h2>").unwrap();
        assert_eq!(nodes.len(), 2);
        let h2 = element(&nodes[1]);
        assert_eq!(h2.tag, "h2");
        assert_eq!(h2.children, vec![RawNode::Text("Essential Links".to_string())]);
        assert_eq!(h2.close, Some(("h2".to_string(), 37)));
    }

    #[test]
    fn test_attributes() {
        let nodes = parse(r#"<a href="https://vuejs.org" target='_blank' download>x</a>"#).unwrap();
        let a = element(&nodes[0]);
        assert_eq!(
            a.attributes,
            vec![
                Attribute::new("href", "https://vuejs.org"),
                Attribute::new("target", "_blank"),
                Attribute::new("download", ""),
            ]
        );
    }

    #[test]
    fn test_void_and_self_closing() {
        let nodes = parse(r#"<p>a<br>b<img src="x.png"/><span/></p>"#).unwrap();
        let p = element(&nodes[0]);
        assert_eq!(p.children.len(), 5);
        assert_eq!(element(&p.children[1]).tag, "br");
        assert_eq!(element(&p.children[3]).tag, "img");
        assert_eq!(element(&p.children[4]).close, None);
    }

    #[test]
    fn test_every_void_element_needs_no_close_tag() {
        for tag in VOID_ELEMENTS {
            let source = format!("<{}><p>after</p>", tag.to_uppercase());
            let nodes = parse(&source).unwrap_or_else(|e| panic!("{source}: {e:?}"));
            assert_eq!(nodes.len(), 2, "{source}");
            assert!(element(&nodes[0]).children.is_empty());
            assert_eq!(element(&nodes[0]).close, None);
        }
    }

    #[test]
    fn test_comment_splits_text() {
        let nodes = parse("a<!-- note -->b").unwrap();
        assert_eq!(
            nodes,
            vec![
                RawNode::Text("a".to_string()),
                RawNode::Comment,
                RawNode::Text("b".to_string())
            ]
        );
    }

    #[test]
    fn test_text_keeps_punctuation() {
        let nodes = parse("<p>Vue.js = 3/4 > 2 'ok'</p>").unwrap();
        let p = element(&nodes[0]);
        assert_eq!(
            p.children,
            vec![RawNode::Text("Vue.js = 3/4 > 2 'ok'".to_string())]
        );
    }

    #[test]
    fn test_unclosed_element_fails() {
        assert!(parse("<div><p>text</div>").is_err());
        assert!(parse("<div>").is_err());
    }
}
