//! Error types for reading and writing token markup.

use thiserror::Error;

/// Result type alias for odf-text-markup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mapping or (de)serializing token markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An element or attribute could not be turned into a token.
    #[error(transparent)]
    Token(#[from] odf_text::Error),

    /// XML syntax error from quick-xml.
    #[error("XML syntax error: {message}{}", at_byte(.position))]
    XmlSyntax {
        message: String,
        /// Byte offset where the error occurred.
        position: Option<u64>,
    },

    /// The outermost element is not the vocabulary's paragraph element.
    #[error("Unexpected root element: expected <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    /// Unexpected end of input.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What was expected when EOF was encountered.
        expected: String,
    },

    /// A token element with content of its own.
    #[error("Token element <{tag}> must be empty")]
    NestedContent { tag: String },

    /// Empty document (no paragraph element).
    #[error("Empty markup: no paragraph element found")]
    EmptyDocument,
}

fn at_byte(position: &Option<u64>) -> String {
    match position {
        Some(pos) => format!(" at byte {}", pos),
        None => String::new(),
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlSyntax {
            message: err.to_string(),
            position: None,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlSyntax {
            message: format!("Attribute error: {}", err),
            position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::XmlSyntax {
            message: "bad".to_string(),
            position: Some(4),
        };
        assert_eq!(err.to_string(), "XML syntax error: bad at byte 4");

        let err = Error::XmlSyntax {
            message: "bad".to_string(),
            position: None,
        };
        assert_eq!(err.to_string(), "XML syntax error: bad");

        let err: Error = odf_text::Error::MalformedCountAttribute {
            value: "x".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Malformed count attribute: \"x\" is not a positive integer"
        );
    }
}
