//! Component markup
//!
//! A small HTML-like template language used to describe what a component
//! renders:
//!
//! ```text
//! <div class="hello">
//!   <h1>Welcome to Your Vue.js App</h1>
//!   <h2>Essential Links</h2>
//! </div>
//! ```
//!
//! The pipeline is `tokenize` (logos) -> `document_parser` (chumsky) -> `lower`,
//! where lowering checks close tags, merges text split by comments, condenses
//! whitespace and decodes entities.
//!
//! Whitespace follows the usual template-compiler "condense" rules: a
//! whitespace-only text node is dropped when it is the first or last child or
//! contains a newline, and any other run of whitespace becomes a single space.

pub mod lexer;
pub(crate) mod parser;
pub mod tokens;

use chumsky::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use thiserror::Error;

use crate::tree::{Attribute, Element, Node};
use parser::{document_parser, ParserError, RawElement, RawNode};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\r\n\x0c]+").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedCharacter { offset: usize, found: String },

    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment { offset: usize },

    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("close tag </{found}> at byte {offset} does not match <{expected}>")]
    MismatchedCloseTag {
        expected: String,
        found: String,
        offset: usize,
    },
}

/// Parse markup into rendered nodes
pub fn parse_markup(source: &str) -> Result<Vec<Node>, MarkupError> {
    let tokens = lexer::tokenize(source)?;
    let token_offsets: Vec<usize> = tokens.iter().map(|(_, span)| span.start).collect();

    let raw = document_parser(Arc::new(source.to_string()))
        .parse(tokens)
        .map_err(|errors| syntax_error(errors, &token_offsets, source.len()))?;

    lower(raw)
}

/// Convert chumsky's errors (spans are token indices) into one byte-offset error
fn syntax_error(errors: Vec<ParserError>, token_offsets: &[usize], eof: usize) -> MarkupError {
    let Some(error) = errors.into_iter().next() else {
        return MarkupError::Syntax {
            offset: eof,
            message: "invalid markup".to_string(),
        };
    };

    let offset = token_offsets
        .get(error.span().start)
        .copied()
        .unwrap_or(eof);
    let message = match error.found() {
        Some((token, _)) => format!("unexpected {token:?}"),
        None => "unexpected end of input, is a close tag missing?".to_string(),
    };
    MarkupError::Syntax { offset, message }
}

pub(crate) fn lower(raw: Vec<RawNode>) -> Result<Vec<Node>, MarkupError> {
    let mut nodes = Vec::with_capacity(raw.len());
    for item in raw {
        match item {
            RawNode::Element(el) => nodes.push(Node::Element(lower_element(el)?)),
            RawNode::Text(text) => match nodes.last_mut() {
                Some(Node::Text(prev)) => prev.push_str(&text),
                _ => nodes.push(Node::Text(text)),
            },
            RawNode::Comment => {}
        }
    }
    Ok(condense(nodes))
}

fn lower_element(raw: RawElement) -> Result<Element, MarkupError> {
    if let Some((found, offset)) = &raw.close {
        if !found.eq_ignore_ascii_case(&raw.tag) {
            return Err(MarkupError::MismatchedCloseTag {
                expected: raw.tag,
                found: found.clone(),
                offset: *offset,
            });
        }
    }

    let attributes = raw
        .attributes
        .into_iter()
        .map(|attr| Attribute::new(attr.name, decode(&attr.value)))
        .collect();

    Ok(Element {
        tag: raw.tag,
        attributes,
        children: lower(raw.children)?,
    })
}

fn condense(nodes: Vec<Node>) -> Vec<Node> {
    let last = nodes.len().saturating_sub(1);
    nodes
        .into_iter()
        .enumerate()
        .filter_map(|(i, node)| match node {
            Node::Text(text) if text.trim_matches(is_markup_whitespace).is_empty() => {
                if i == 0 || i == last || text.contains('\n') {
                    None
                } else {
                    Some(Node::Text(" ".to_string()))
                }
            }
            Node::Text(text) => Some(Node::Text(decode(&WHITESPACE_RUN.replace_all(&text, " ")))),
            element => Some(element),
        })
        .collect()
}

fn is_markup_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0c')
}

fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_element(nodes: &[Node]) -> &Element {
        nodes
            .iter()
            .find_map(Node::as_element)
            .expect("markup should contain an element")
    }

    #[test]
    fn test_scaffold_template() {
        let source = r#"
            <div class="hello">
              <h1>Welcome to Your Vue.js App</h1>
              <h2>Essential Links</h2>
            </div>
        "#;
        let nodes = parse_markup(source).unwrap();
        assert_eq!(nodes.len(), 1);

        let div = first_element(&nodes);
        assert_eq!(div.attribute("class"), Some("hello"));
        let tags: Vec<&str> = div.child_elements().map(|el| el.tag.as_str()).collect();
        assert_eq!(tags, vec!["h1", "h2"]);
        assert_eq!(div.children.len(), 2);
    }

    #[test]
    fn test_inline_whitespace_is_condensed_not_trimmed() {
        let nodes = parse_markup("<p>  Hello   <b>big</b> world </p>").unwrap();
        let p = first_element(&nodes);
        assert_eq!(p.text_content(), " Hello big world ");
    }

    #[test]
    fn test_whitespace_between_inline_elements_on_one_line_survives() {
        let nodes = parse_markup("<p><b>a</b> <i>b</i></p>").unwrap();
        assert_eq!(first_element(&nodes).text_content(), "a b");
    }

    #[test]
    fn test_entities_are_decoded() {
        let nodes = parse_markup(r#"<p title="a &amp; b">Tom &amp; Jerry &lt;3</p>"#).unwrap();
        let p = first_element(&nodes);
        assert_eq!(p.text_content(), "Tom & Jerry <3");
        assert_eq!(p.attribute("title"), Some("a & b"));
    }

    #[test]
    fn test_comments_do_not_split_text() {
        let nodes = parse_markup("<p>Hello<!-- greeting -->World</p>").unwrap();
        let p = first_element(&nodes);
        assert_eq!(p.children, vec![Node::text("HelloWorld")]);
    }

    #[test]
    fn test_mismatched_close_tag() {
        let err = parse_markup("<h1>Title</h2>").unwrap_err();
        assert_eq!(
            err,
            MarkupError::MismatchedCloseTag {
                expected: "h1".to_string(),
                found: "h2".to_string(),
                offset: 11,
            }
        );
        assert_eq!(
            err.to_string(),
            "close tag </h2> at byte 11 does not match <h1>"
        );
    }

    #[test]
    fn test_bare_less_than_is_text() {
        for (source, expected) in [
            ("<p>a < b</p>", "a < b"),
            ("<p>2<3</p>", "2<3"),
            ("<p>a <</p>", "a <"),
            ("<p><<b>bold</b></p>", "<bold"),
        ] {
            let nodes = parse_markup(source).unwrap_or_else(|e| panic!("{source}: {e}"));
            assert_eq!(first_element(&nodes).text_content(), expected, "{source}");
        }
        assert_eq!(parse_markup("x <").unwrap(), vec![Node::text("x <")]);
    }

    #[test]
    fn test_close_tag_case_is_ignored() {
        assert!(parse_markup("<H1>Title</h1>").is_ok());
    }

    #[test]
    fn test_missing_close_tag_is_a_syntax_error() {
        let err = parse_markup("<div><p>text</p>").unwrap_err();
        assert!(matches!(err, MarkupError::Syntax { .. }), "{err:?}");
    }

    #[test]
    fn test_empty_markup() {
        assert_eq!(parse_markup("").unwrap(), vec![]);
        assert_eq!(parse_markup("   \n  ").unwrap(), vec![]);
    }
}
