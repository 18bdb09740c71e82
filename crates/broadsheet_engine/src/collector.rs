//! The collector: deferred tag calls captured during expansion.
//!
//! Expansion walks the template once, synchronously, and may not block on
//! tag computation. Every tag call is instead appended here and stands in
//! the expanded output as a typed token; resolution later fills a results
//! vector indexed exactly like the collector, so a token's index is the
//! one stable identity connecting a call site to its rendered text.

use broadsheet_foundation::TagKind;
use broadsheet_tags::TagPayload;

/// Opaque handle of one collected tag call.
///
/// Tokens are assigned densely in registration order and never reused
/// within a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TagToken(usize);

impl TagToken {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The collector index this token stands for.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The literal text an unresolved token leaves in the output.
    #[must_use]
    pub fn placeholder_text(self) -> String {
        format!("__TAG_TOKEN_{}__", self.0)
    }
}

/// One deferred tag call: the kind and its prepared payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectedTag {
    /// The tag kind that produced the payload.
    pub kind: TagKind,
    /// The payload resolution will render.
    pub payload: TagPayload,
}

/// Append-only list of deferred tag calls from one expansion pass.
#[derive(Debug, Default)]
pub struct Collector {
    entries: Vec<CollectedTag>,
}

impl Collector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one call and returns its token.
    pub fn register(&mut self, kind: TagKind, payload: TagPayload) -> TagToken {
        let token = TagToken::new(self.entries.len());
        self.entries.push(CollectedTag { kind, payload });
        token
    }

    /// Number of collected calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The collected calls, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[CollectedTag] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<CollectedTag> {
        self.entries
    }
}

/// One piece of expanded template output.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Literal text copied from the template.
    Text(String),
    /// The position of a deferred tag call.
    Tag(TagToken),
}
