//! Parsed template nodes.

use crate::span::Span;

/// One node of a parsed template: literal text or a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateNode {
    /// Literal text, passed through untouched.
    Text(String, Span),
    /// A `{{name attr="value"}}` tag.
    Tag(TagNode),
}

impl TemplateNode {
    /// Returns the span this node covers.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Text(_, span) => *span,
            Self::Tag(tag) => tag.span,
        }
    }

    /// Returns the tag node, if this is a tag.
    #[must_use]
    pub const fn as_tag(&self) -> Option<&TagNode> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Text(..) => None,
        }
    }
}

/// A parsed tag: head name plus attributes in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagNode {
    /// The tag head, e.g. `table`.
    pub name: String,
    /// Attributes in the order they appear.
    pub attrs: TagAttrs,
    /// The span from `{{` through `}}`.
    pub span: Span,
}

/// A single `name="value"` attribute with its unescaped value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagAttr {
    /// Attribute name.
    pub name: String,
    /// Unescaped attribute value.
    pub value: String,
}

/// An ordered collection of tag attributes.
///
/// Order is preserved so canonical templates re-emit byte-for-byte; names
/// are unique (the parser rejects duplicates).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagAttrs {
    entries: Vec<TagAttr>,
}

impl TagAttrs {
    /// Creates an empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder method adding one attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends one attribute.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(TagAttr {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Looks up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Returns true if an attribute with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|attr| attr.name == name)
    }

    /// Iterates attributes in source order.
    pub fn iter(&self) -> impl Iterator<Item = &TagAttr> {
        self.entries.iter()
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagAttrs {
    type Item = &'a TagAttr;
    type IntoIter = std::slice::Iter<'a, TagAttr>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
