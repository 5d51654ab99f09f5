//! Node types handed to and pulled from a document tree.

/// A child of a paragraph: raw text or an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Character data, stored verbatim (after unescaping entities).
    Text(String),

    /// An element such as `<tab/>` or `<space count="3"/>`.
    Element(MarkupElement),
}

/// An element with a name and attributes. Token elements never have children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupElement {
    /// The local name of the element (without namespace prefix).
    pub name: String,

    /// Namespace prefix, if any (e.g., "text" in `<text:s>`).
    pub prefix: Option<String>,

    /// Attributes of this element.
    pub attributes: Vec<MarkupAttribute>,
}

/// An element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupAttribute {
    /// The local name of the attribute (without namespace prefix).
    pub name: String,

    /// Namespace prefix, if any.
    pub prefix: Option<String>,

    /// The attribute value (after unescaping XML entities).
    pub value: String,
}

impl MarkupElement {
    /// Create an element with no attributes.
    pub fn new(name: impl Into<String>, prefix: Option<String>) -> Self {
        Self {
            name: name.into(),
            prefix,
            attributes: Vec::new(),
        }
    }

    /// Add an attribute, builder style.
    pub fn with_attribute(mut self, attribute: MarkupAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Get an attribute value by local name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// The name as written in markup, `prefix:name` when prefixed.
    pub fn qualified_name(&self) -> String {
        qualify(self.prefix.as_deref(), &self.name)
    }
}

impl MarkupAttribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<String>, prefix: Option<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix,
            value: value.into(),
        }
    }

    pub fn qualified_name(&self) -> String {
        qualify(self.prefix.as_deref(), &self.name)
    }
}

/// Split `prefix:local` into its local name and prefix.
pub(crate) fn split_name(full_name: &str) -> (String, Option<String>) {
    match full_name.split_once(':') {
        Some((prefix, local)) => (local.to_string(), Some(prefix.to_string())),
        None => (full_name.to_string(), None),
    }
}

pub(crate) fn qualify(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, name),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_get_attribute() {
        let element = MarkupElement::new("s", Some("text".to_string()))
            .with_attribute(MarkupAttribute::new("c", Some("text".to_string()), "3"));

        assert_eq!(element.get_attribute("c"), Some("3"));
        assert_eq!(element.get_attribute("missing"), None);
        assert_eq!(element.qualified_name(), "text:s");
        assert_eq!(element.attributes[0].qualified_name(), "text:c");
    }

    #[test]
    fn test_split_name() {
        assert_eq!(
            split_name("text:line-break"),
            ("line-break".to_string(), Some("text".to_string()))
        );
        assert_eq!(split_name("tab"), ("tab".to_string(), None));
    }
}
