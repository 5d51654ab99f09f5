//! Paragraph reader that builds [`MarkupNode`] lists.

use crate::adapter::invalid_token_kind;
use crate::types::split_name;
use crate::{Error, MarkupAttribute, MarkupElement, MarkupNode, Result, Vocabulary};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};

/// Parse one paragraph element into its child nodes.
///
/// Whitespace-only text is kept verbatim: a lone space between two token
/// elements is content, not formatting.
///
/// # Example
///
/// ```rust
/// use odf_text_markup::{MarkupNode, Vocabulary, parse_paragraph};
///
/// let nodes = parse_paragraph("<paragraph>a <tab/></paragraph>", Vocabulary::GENERIC).unwrap();
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[0], MarkupNode::Text("a ".to_string()));
/// ```
///
/// # Errors
///
/// Returns an error if the markup is malformed, the root is not the
/// vocabulary's paragraph element, a token element has content, or an
/// element outside the vocabulary has content. Empty unknown elements are
/// returned as nodes and rejected by [`nodes_to_tokens`].
///
/// [`nodes_to_tokens`]: crate::nodes_to_tokens
pub fn parse_paragraph(content: &str, vocabulary: Vocabulary) -> Result<Vec<MarkupNode>> {
    let mut parser = ParagraphParser::new(content, vocabulary);
    let nodes = parser.parse()?;
    tracing::trace!(nodes = nodes.len(), "parsed paragraph markup");
    Ok(nodes)
}

/// Where the reader is relative to the paragraph element.
enum State {
    BeforeRoot,
    InRoot,
    /// Inside a non-empty token element such as `<tab></tab>`.
    InToken(String),
    AfterRoot,
}

/// Internal parser state.
struct ParagraphParser<'a> {
    /// The quick-xml reader.
    reader: Reader<&'a [u8]>,

    vocabulary: Vocabulary,

    state: State,

    /// Child nodes accumulated so far.
    nodes: Vec<MarkupNode>,
}

impl<'a> ParagraphParser<'a> {
    fn new(source: &'a str, vocabulary: Vocabulary) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            reader,
            vocabulary,
            state: State::BeforeRoot,
            nodes: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<Vec<MarkupNode>> {
        loop {
            // Capture position before reading the event
            let event_start = self.reader.buffer_position();

            match self.reader.read_event() {
                Ok(Event::Start(e)) => self.handle_start(&e, event_start)?,
                Ok(Event::Empty(e)) => self.handle_empty(&e, event_start)?,
                Ok(Event::End(_)) => self.handle_end(),
                Ok(Event::Text(e)) => self.handle_text(&e, event_start)?,
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    self.push_text(text, event_start)?;
                }
                Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {
                    // Skip comments, processing instructions, and declarations
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlSyntax {
                        message: e.to_string(),
                        position: Some(self.reader.error_position()),
                    });
                }
            }
        }

        match &self.state {
            State::AfterRoot => Ok(std::mem::take(&mut self.nodes)),
            State::BeforeRoot => Err(Error::EmptyDocument),
            State::InRoot => Err(Error::UnexpectedEof {
                expected: format!(
                    "closing tag </{}>",
                    self.vocabulary.qualified(self.vocabulary.paragraph)
                ),
            }),
            State::InToken(tag) => Err(Error::UnexpectedEof {
                expected: format!("closing tag </{}>", tag),
            }),
        }
    }

    fn handle_start(&mut self, e: &BytesStart<'_>, event_start: u64) -> Result<()> {
        match &self.state {
            State::BeforeRoot => {
                self.expect_paragraph(e)?;
                self.state = State::InRoot;
            }
            State::InRoot => {
                let element = self.parse_element(e)?;
                // Only token elements may be opened; anything else is
                // rejected by name before its content is read.
                if self.vocabulary.element_kind(&element).is_none() {
                    tracing::debug!(
                        tag = %element.qualified_name(),
                        "rejecting non-token element"
                    );
                    return Err(invalid_token_kind(&element));
                }
                self.state = State::InToken(element.qualified_name());
                self.nodes.push(MarkupNode::Element(element));
            }
            State::InToken(tag) => {
                return Err(Error::NestedContent { tag: tag.clone() });
            }
            State::AfterRoot => return Err(trailing_content(event_start)),
        }
        Ok(())
    }

    fn handle_empty(&mut self, e: &BytesStart<'_>, event_start: u64) -> Result<()> {
        match &self.state {
            State::BeforeRoot => {
                self.expect_paragraph(e)?;
                self.state = State::AfterRoot;
            }
            State::InRoot => {
                let element = self.parse_element(e)?;
                self.nodes.push(MarkupNode::Element(element));
            }
            State::InToken(tag) => {
                return Err(Error::NestedContent { tag: tag.clone() });
            }
            State::AfterRoot => return Err(trailing_content(event_start)),
        }
        Ok(())
    }

    // quick-xml checks that end names match their start tags.
    fn handle_end(&mut self) {
        self.state = match self.state {
            State::InToken(_) => State::InRoot,
            _ => State::AfterRoot,
        };
    }

    fn handle_text(&mut self, e: &BytesText<'_>, event_start: u64) -> Result<()> {
        let text = e.unescape().map_err(|err| Error::XmlSyntax {
            message: format!("Invalid text content: {}", err),
            position: Some(event_start),
        })?;
        self.push_text(text.into_owned(), event_start)
    }

    fn push_text(&mut self, text: String, event_start: u64) -> Result<()> {
        match &self.state {
            State::InRoot => {
                self.nodes.push(MarkupNode::Text(text));
                Ok(())
            }
            State::InToken(tag) => Err(Error::NestedContent { tag: tag.clone() }),
            // Indentation around the paragraph element is not content.
            State::BeforeRoot | State::AfterRoot if text.trim().is_empty() => Ok(()),
            State::BeforeRoot | State::AfterRoot => Err(trailing_content(event_start)),
        }
    }

    fn expect_paragraph(&self, e: &BytesStart<'_>) -> Result<()> {
        let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let expected = self.vocabulary.qualified(self.vocabulary.paragraph);
        if found == expected {
            Ok(())
        } else {
            tracing::debug!(%found, %expected, "unexpected paragraph element");
            Err(Error::UnexpectedRoot { expected, found })
        }
    }

    fn parse_element(&self, e: &BytesStart<'_>) -> Result<MarkupElement> {
        let (name, prefix) = split_name(&String::from_utf8_lossy(e.name().as_ref()));
        let mut element = MarkupElement::new(name, prefix);

        for attr_result in e.attributes() {
            let attr = attr_result?;
            let (name, prefix) = split_name(&String::from_utf8_lossy(attr.key.as_ref()));

            let value = attr.unescape_value().map_err(|err| Error::XmlSyntax {
                message: format!("Invalid attribute value: {}", err),
                position: None,
            })?;

            element
                .attributes
                .push(MarkupAttribute::new(name, prefix, value.into_owned()));
        }

        Ok(element)
    }
}

fn trailing_content(position: u64) -> Error {
    Error::XmlSyntax {
        message: "content outside the paragraph element".to_string(),
        position: Some(position),
    }
}
