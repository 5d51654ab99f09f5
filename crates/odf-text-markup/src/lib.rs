//! Markup element mapping for [`odf_text`] tokens.
//!
//! This crate is the boundary between the token model and stored markup. It
//! maps [`TextToken`]s to element nodes (`<tab/>`, `<line-break/>`,
//! `<space count="n"/>`) and raw text, and reads and writes a single
//! paragraph element with [`quick-xml`].
//!
//! # Overview
//!
//! The main pieces are:
//! - [`Vocabulary`]: the element and attribute names to use
//! - [`MarkupNode`] / [`MarkupElement`]: the node shapes a document tree stores
//! - [`tokens_to_nodes`] / [`nodes_to_tokens`]: the token <-> node mapping
//! - [`write_paragraph`] / [`parse_paragraph`]: node serialization
//!
//! # Example
//!
//! ```rust
//! use odf_text_markup::{Vocabulary, decode_paragraph, encode_paragraph};
//!
//! let markup = encode_paragraph("a   b", Vocabulary::ODF).unwrap();
//! assert_eq!(markup, r#"<text:p>a <text:s text:c="2"/>b</text:p>"#);
//! assert_eq!(decode_paragraph(&markup, Vocabulary::ODF).unwrap(), "a   b");
//! ```
//!
//! [`TextToken`]: odf_text::TextToken

pub mod adapter;
pub mod error;
pub mod parser;
pub mod types;
pub mod vocabulary;
pub mod writer;

pub use adapter::{nodes_to_tokens, space_count, token_to_node, tokens_to_nodes};
pub use error::{Error, Result};
pub use parser::parse_paragraph;
pub use types::{MarkupAttribute, MarkupElement, MarkupNode};
pub use vocabulary::Vocabulary;
pub use writer::write_paragraph;

/// Encode plain text and serialize it as one paragraph element.
pub fn encode_paragraph(text: &str, vocabulary: Vocabulary) -> Result<String> {
    write_paragraph(&odf_text::encode(text), vocabulary)
}

/// Parse one paragraph element and decode its content to plain text.
pub fn decode_paragraph(markup: &str, vocabulary: Vocabulary) -> Result<String> {
    let nodes = parse_paragraph(markup, vocabulary)?;
    let tokens = nodes_to_tokens(&nodes, vocabulary)?;
    Ok(odf_text::decode(&tokens))
}
