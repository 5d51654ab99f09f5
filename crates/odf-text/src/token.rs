/*
 * token.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The text token model and its static element-name table.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One piece of whitespace-aware text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum TextToken {
    /// Ordinary characters, including isolated single spaces. Never empty
    /// when produced by the encoder.
    Literal(String),

    /// A single horizontal tab.
    Tab,

    /// A single line break.
    LineBreak,

    /// `count` spaces in addition to the literal space that precedes the
    /// token. The encoder only emits counts of at least 1.
    SpaceRun(usize),
}

/// The variant of a [`TextToken`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Literal,
    Tab,
    LineBreak,
    SpaceRun,
}

/// Generic element name for [`TokenKind::Tab`].
pub const TAB_TAG: &str = "tab";

/// Generic element name for [`TokenKind::LineBreak`].
pub const LINE_BREAK_TAG: &str = "line-break";

/// Generic element name for [`TokenKind::SpaceRun`].
pub const SPACE_TAG: &str = "space";

/// Attribute holding the extra-space count on a `space` element.
pub const COUNT_ATTRIBUTE: &str = "count";

impl TextToken {
    /// Create a literal token.
    pub fn literal(text: impl Into<String>) -> Self {
        TextToken::Literal(text.into())
    }

    /// Create a space-run token for `count` additional spaces.
    pub fn spaces(count: usize) -> Self {
        TextToken::SpaceRun(count)
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            TextToken::Literal(_) => TokenKind::Literal,
            TextToken::Tab => TokenKind::Tab,
            TextToken::LineBreak => TokenKind::LineBreak,
            TextToken::SpaceRun(_) => TokenKind::SpaceRun,
        }
    }

    /// Number of characters this token renders to.
    pub fn text_len(&self) -> usize {
        match self {
            TextToken::Literal(text) => text.chars().count(),
            TextToken::Tab | TextToken::LineBreak => 1,
            TextToken::SpaceRun(count) => *count,
        }
    }

    /// Append the plain text rendering of this token to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            TextToken::Literal(text) => out.push_str(text),
            TextToken::Tab => out.push('\t'),
            TextToken::LineBreak => out.push('\n'),
            TextToken::SpaceRun(count) => out.extend(std::iter::repeat_n(' ', *count)),
        }
    }
}

impl fmt::Display for TextToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextToken::Literal(text) => f.write_str(text),
            TextToken::Tab => f.write_str("\t"),
            TextToken::LineBreak => f.write_str("\n"),
            TextToken::SpaceRun(count) => write!(f, "{:width$}", "", width = *count),
        }
    }
}

impl TokenKind {
    /// Kinds stored as elements rather than character data.
    pub const ELEMENTS: [TokenKind; 3] =
        [TokenKind::Tab, TokenKind::LineBreak, TokenKind::SpaceRun];

    /// The generic element name used for this kind, or `None` for literal
    /// text, which is stored as raw character data.
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            TokenKind::Tab => Some(TAB_TAG),
            TokenKind::LineBreak => Some(LINE_BREAK_TAG),
            TokenKind::SpaceRun => Some(SPACE_TAG),
            TokenKind::Literal => None,
        }
    }
}

/// Read the value of a space `count` attribute.
///
/// An absent attribute means a single space. A present value must be a
/// positive integer; anything else is an error rather than a silent 1.
pub fn parse_space_count(value: Option<&str>) -> Result<usize> {
    let Some(value) = value else {
        return Ok(1);
    };
    match value.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(Error::MalformedCountAttribute {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_len() {
        assert_eq!(TextToken::literal("héllo").text_len(), 5);
        assert_eq!(TextToken::Tab.text_len(), 1);
        assert_eq!(TextToken::LineBreak.text_len(), 1);
        assert_eq!(TextToken::spaces(4).text_len(), 4);
    }

    #[test]
    fn test_display_matches_render_into() {
        let tokens = [
            TextToken::literal("a "),
            TextToken::spaces(3),
            TextToken::Tab,
            TextToken::LineBreak,
        ];
        for token in &tokens {
            let mut rendered = String::new();
            token.render_into(&mut rendered);
            assert_eq!(token.to_string(), rendered);
        }
        assert_eq!(TextToken::spaces(3).to_string(), "   ");
    }

    #[test]
    fn test_tag_table() {
        assert_eq!(TokenKind::Tab.tag(), Some("tab"));
        assert_eq!(TokenKind::LineBreak.tag(), Some("line-break"));
        assert_eq!(TokenKind::SpaceRun.tag(), Some("space"));
        assert_eq!(TokenKind::Literal.tag(), None);
        assert!(TokenKind::ELEMENTS.iter().all(|kind| kind.tag().is_some()));
    }

    #[test]
    fn test_parse_space_count() {
        assert_eq!(parse_space_count(None), Ok(1));
        assert_eq!(parse_space_count(Some("1")), Ok(1));
        assert_eq!(parse_space_count(Some("12")), Ok(12));

        for bad in ["0", "-1", "abc", "", "2.5"] {
            assert_eq!(
                parse_space_count(Some(bad)),
                Err(Error::MalformedCountAttribute {
                    value: bad.to_string()
                }),
                "count {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_json_shape() {
        let tokens = vec![
            TextToken::literal("a "),
            TextToken::spaces(2),
            TextToken::Tab,
        ];
        let json = serde_json::to_string(&tokens).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"literal","data":"a "},{"type":"space-run","data":2},{"type":"tab"}]"#
        );
        let back: Vec<TextToken> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
    }
}
