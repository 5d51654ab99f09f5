//! Element and attribute names used in stored markup.

use crate::MarkupElement;
use crate::types::qualify;
use odf_text::{COUNT_ATTRIBUTE, LINE_BREAK_TAG, SPACE_TAG, TAB_TAG, TokenKind};

/// The names the adapter reads and writes.
///
/// All names are local names; `prefix` is applied to every element and
/// attribute when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    /// Namespace prefix, e.g. `text` in `<text:tab/>`.
    pub prefix: Option<&'static str>,

    /// Element wrapping one paragraph of tokens.
    pub paragraph: &'static str,

    pub tab: &'static str,
    pub line_break: &'static str,
    pub space: &'static str,

    /// Attribute on the space element holding the extra-space count.
    pub count: &'static str,
}

impl Vocabulary {
    /// Unprefixed names matching [`TokenKind::tag`].
    pub const GENERIC: Vocabulary = Vocabulary {
        prefix: None,
        paragraph: "paragraph",
        tab: TAB_TAG,
        line_break: LINE_BREAK_TAG,
        space: SPACE_TAG,
        count: COUNT_ATTRIBUTE,
    };

    /// OpenDocument text namespace names (`text:s`, `text:c`, ...).
    pub const ODF: Vocabulary = Vocabulary {
        prefix: Some("text"),
        paragraph: "p",
        tab: "tab",
        line_break: "line-break",
        space: "s",
        count: "c",
    };

    /// Local element name for an element-backed token kind.
    pub fn tag(&self, kind: TokenKind) -> Option<&'static str> {
        match kind {
            TokenKind::Tab => Some(self.tab),
            TokenKind::LineBreak => Some(self.line_break),
            TokenKind::SpaceRun => Some(self.space),
            TokenKind::Literal => None,
        }
    }

    /// Token kind for a local element name.
    pub fn kind_of(&self, local_name: &str) -> Option<TokenKind> {
        TokenKind::ELEMENTS
            .into_iter()
            .find(|kind| self.tag(*kind) == Some(local_name))
    }

    /// Token kind of an element, checking both prefix and local name.
    pub fn element_kind(&self, element: &MarkupElement) -> Option<TokenKind> {
        if self.prefix_matches(element.prefix.as_deref()) {
            self.kind_of(&element.name)
        } else {
            None
        }
    }

    /// Whether `prefix` is the one this vocabulary expects.
    pub fn prefix_matches(&self, prefix: Option<&str>) -> bool {
        self.prefix == prefix
    }

    /// `local` with the prefix applied, as written in markup.
    pub fn qualified(&self, local: &str) -> String {
        qualify(self.prefix, local)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::GENERIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_matches_token_table() {
        let vocabulary = Vocabulary::GENERIC;
        for kind in TokenKind::ELEMENTS {
            assert_eq!(vocabulary.tag(kind), kind.tag());
        }
        assert_eq!(vocabulary.count, "count");
    }

    #[test]
    fn test_odf_names() {
        let vocabulary = Vocabulary::ODF;
        assert_eq!(vocabulary.qualified(vocabulary.space), "text:s");
        assert_eq!(vocabulary.qualified(vocabulary.count), "text:c");
        assert_eq!(vocabulary.kind_of("s"), Some(TokenKind::SpaceRun));
        assert_eq!(vocabulary.kind_of("space"), None);
    }

    #[test]
    fn test_element_kind() {
        let tab = MarkupElement::new("tab", Some("text".to_string()));
        assert_eq!(Vocabulary::ODF.element_kind(&tab), Some(TokenKind::Tab));
        assert_eq!(Vocabulary::GENERIC.element_kind(&tab), None);

        let span = MarkupElement::new("span", Some("text".to_string()));
        assert_eq!(Vocabulary::ODF.element_kind(&span), None);
    }

    #[test]
    fn test_prefix_matching() {
        assert!(Vocabulary::GENERIC.prefix_matches(None));
        assert!(!Vocabulary::GENERIC.prefix_matches(Some("text")));
        assert!(Vocabulary::ODF.prefix_matches(Some("text")));
        assert!(!Vocabulary::ODF.prefix_matches(None));
    }
}
