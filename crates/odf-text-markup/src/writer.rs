//! Paragraph serialization with quick-xml.

use crate::adapter::tokens_to_nodes;
use crate::{Error, MarkupNode, Result, Vocabulary};
use odf_text::TextToken;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Serialize a token sequence as one paragraph element.
///
/// Literal text is escaped; tabs, line breaks and space runs become empty
/// elements named by `vocabulary`.
///
/// # Errors
///
/// Returns [`Error::XmlSyntax`] if quick-xml fails to write an event.
pub fn write_paragraph(tokens: &[TextToken], vocabulary: Vocabulary) -> Result<String> {
    let nodes = tokens_to_nodes(tokens, vocabulary);
    let paragraph = vocabulary.qualified(vocabulary.paragraph);
    let mut writer = Writer::new(Vec::new());

    if nodes.is_empty() {
        write_event(&mut writer, Event::Empty(BytesStart::new(paragraph.as_str())))?;
    } else {
        write_event(&mut writer, Event::Start(BytesStart::new(paragraph.as_str())))?;
        for node in &nodes {
            write_node(&mut writer, node)?;
        }
        write_event(&mut writer, Event::End(BytesEnd::new(paragraph.as_str())))?;
    }

    let markup = String::from_utf8(writer.into_inner()).map_err(|err| Error::XmlSyntax {
        message: err.to_string(),
        position: None,
    })?;
    tracing::trace!(tokens = tokens.len(), bytes = markup.len(), "wrote paragraph markup");
    Ok(markup)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &MarkupNode) -> Result<()> {
    match node {
        MarkupNode::Text(text) => write_event(writer, Event::Text(BytesText::new(text))),
        MarkupNode::Element(element) => {
            let name = element.qualified_name();
            let attributes: Vec<(String, &str)> = element
                .attributes
                .iter()
                .map(|a| (a.qualified_name(), a.value.as_str()))
                .collect();
            let start = BytesStart::new(name.as_str()).with_attributes(
                attributes
                    .iter()
                    .map(|(key, value)| (key.as_str(), *value)),
            );
            write_event(writer, Event::Empty(start))
        }
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|err| Error::XmlSyntax {
        message: err.to_string(),
        position: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty_paragraph() {
        assert_eq!(
            write_paragraph(&[], Vocabulary::GENERIC).unwrap(),
            "<paragraph/>"
        );
    }

    #[test]
    fn test_write_generic() {
        let tokens = odf_text::encode("a  b\tc");
        assert_eq!(
            write_paragraph(&tokens, Vocabulary::GENERIC).unwrap(),
            "<paragraph>a <space/>b<tab/>c</paragraph>"
        );
    }

    #[test]
    fn test_write_escapes_text() {
        let tokens = odf_text::encode("1 < 2 & 3");
        assert_eq!(
            write_paragraph(&tokens, Vocabulary::GENERIC).unwrap(),
            "<paragraph>1 &lt; 2 &amp; 3</paragraph>"
        );
    }
}
