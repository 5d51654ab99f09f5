//! Mapping between text tokens and markup nodes.
//!
//! The encoder always reports space runs as a count; whether a count of 1
//! is written as an attribute is decided here, not in the encoder.

use crate::{Error, MarkupAttribute, MarkupElement, MarkupNode, Result, Vocabulary};
use odf_text::{TextToken, TokenKind, parse_space_count};

/// Convert a token sequence into paragraph child nodes.
pub fn tokens_to_nodes(tokens: &[TextToken], vocabulary: Vocabulary) -> Vec<MarkupNode> {
    tokens
        .iter()
        .map(|token| token_to_node(token, vocabulary))
        .collect()
}

/// Convert one token into a node.
pub fn token_to_node(token: &TextToken, vocabulary: Vocabulary) -> MarkupNode {
    let prefix = vocabulary.prefix.map(str::to_string);
    match token {
        TextToken::Literal(text) => MarkupNode::Text(text.clone()),
        TextToken::Tab => MarkupNode::Element(MarkupElement::new(vocabulary.tab, prefix)),
        TextToken::LineBreak => {
            MarkupNode::Element(MarkupElement::new(vocabulary.line_break, prefix))
        }
        TextToken::SpaceRun(count) => {
            let element = MarkupElement::new(vocabulary.space, prefix.clone());
            // A single space is the attribute default.
            let element = if *count > 1 {
                element.with_attribute(MarkupAttribute::new(
                    vocabulary.count,
                    prefix,
                    count.to_string(),
                ))
            } else {
                element
            };
            MarkupNode::Element(element)
        }
    }
}

/// Recover the token sequence from paragraph child nodes.
///
/// Adjacent text nodes are merged and the merged text is run through
/// [`odf_text::encode`], so raw tabs, line breaks and space runs in stored
/// text come back as their own tokens. A sequence produced by
/// [`tokens_to_nodes`] from encoder output comes back unchanged.
///
/// # Errors
///
/// - [`odf_text::Error::InvalidTokenKind`] for an element outside the vocabulary
/// - [`odf_text::Error::MalformedCountAttribute`] for a bad space count
pub fn nodes_to_tokens(nodes: &[MarkupNode], vocabulary: Vocabulary) -> Result<Vec<TextToken>> {
    let mut tokens = Vec::with_capacity(nodes.len());
    let mut pending = String::new();

    for node in nodes {
        match node {
            MarkupNode::Text(text) => pending.push_str(text),
            MarkupNode::Element(element) => {
                tokens.extend(odf_text::encode(&std::mem::take(&mut pending)));
                tokens.push(element_to_token(element, vocabulary)?);
            }
        }
    }
    tokens.extend(odf_text::encode(&pending));

    tracing::trace!(
        nodes = nodes.len(),
        tokens = tokens.len(),
        "recovered tokens from markup"
    );
    Ok(tokens)
}

fn element_to_token(element: &MarkupElement, vocabulary: Vocabulary) -> Result<TextToken> {
    match vocabulary.element_kind(element) {
        Some(TokenKind::Tab) => Ok(TextToken::Tab),
        Some(TokenKind::LineBreak) => Ok(TextToken::LineBreak),
        Some(TokenKind::SpaceRun) => Ok(TextToken::SpaceRun(space_count(element, vocabulary)?)),
        Some(TokenKind::Literal) | None => {
            tracing::debug!(tag = %element.qualified_name(), "rejecting non-token element");
            Err(invalid_token_kind(element))
        }
    }
}

pub(crate) fn invalid_token_kind(element: &MarkupElement) -> Error {
    Error::Token(odf_text::Error::InvalidTokenKind {
        tag: element.qualified_name(),
    })
}

/// Read the space count of a space element; an absent attribute is 1.
///
/// # Errors
///
/// Returns [`odf_text::Error::MalformedCountAttribute`] when the attribute is
/// present but not a positive integer.
pub fn space_count(element: &MarkupElement, vocabulary: Vocabulary) -> Result<usize> {
    let value = element
        .attributes
        .iter()
        .find(|a| a.name == vocabulary.count && vocabulary.prefix_matches(a.prefix.as_deref()))
        .map(|a| a.value.as_str());
    Ok(parse_space_count(value)?)
}
