//! Two-phase template execution.
//!
//! A render walks the template once, synchronously, swapping every tag
//! for a collector token. The collected calls are then resolved with
//! bounded concurrency and the results substituted back by token index,
//! so completion order never changes the output.

use rayon::ThreadPool;
use serde::{Deserialize, Serialize};
use tracing::debug;

use broadsheet_foundation::TagKind;
use broadsheet_grammar::{TemplateNode, parse_template};
use broadsheet_tags::{RenderContext, build_payload};

use crate::collector::{Collector, Segment};
use crate::error::{RenderError, RenderResult};
use crate::resolve::resolve_entries;

// =============================================================================
// Render Options
// =============================================================================

/// Default cap on tag resolutions in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Tuning for an [`Engine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Maximum number of tag resolutions running concurrently.
    pub concurrency: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl RenderOptions {
    /// Creates options with the default concurrency cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the concurrency cap. Zero is treated as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}

// =============================================================================
// Render Output
// =============================================================================

/// One collected tag call, reported in collector order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedTagMeta {
    /// Which tag kind produced the entry.
    pub tag: TagKind,
    /// The payload the handler rendered.
    pub payload: broadsheet_tags::TagPayload,
    /// Handler-supplied extras. Neither built-in kind emits any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// The result of executing a template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Final text with every tag call substituted.
    pub rendered: String,
    /// Per-call metadata, in collector order.
    pub tags: Vec<RenderedTagMeta>,
}

// =============================================================================
// Engine
// =============================================================================

/// Executes compiled templates against runtime data.
///
/// The engine owns a thread pool sized to the concurrency cap, so one
/// engine can serve many renders without rebuilding the pool.
#[derive(Debug)]
pub struct Engine {
    pool: ThreadPool,
}

impl Engine {
    /// Creates an engine with default options.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Internal`] if the thread pool cannot start.
    pub fn new() -> RenderResult<Self> {
        Self::with_options(&RenderOptions::default())
    }

    /// Creates an engine with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Internal`] if the thread pool cannot start.
    pub fn with_options(options: &RenderOptions) -> RenderResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.concurrency.max(1))
            .build()
            .map_err(|err| RenderError::Internal(err.to_string()))?;
        Ok(Self { pool })
    }

    /// Executes a template against the given context.
    ///
    /// # Errors
    ///
    /// Fails on invalid tag syntax, an unsupported tag name, or a handler
    /// that rejects its attributes. One failing tag aborts the whole
    /// render; nothing partial is returned.
    pub fn execute(&self, template: &str, ctx: &RenderContext) -> RenderResult<RenderOutput> {
        let (segments, collector) = expand(template, ctx)?;
        let results = resolve_entries(&self.pool, collector.entries(), |entry| {
            Ok(entry.payload.render())
        })?;
        let rendered = substitute(&segments, &results);
        let tags: Vec<RenderedTagMeta> = collector
            .into_entries()
            .into_iter()
            .map(|entry| RenderedTagMeta {
                tag: entry.kind,
                payload: entry.payload,
                meta: None,
            })
            .collect();
        debug!(
            tag_count = tags.len(),
            rendered_len = rendered.len(),
            "template executed"
        );
        Ok(RenderOutput { rendered, tags })
    }
}

// =============================================================================
// Expansion and Substitution
// =============================================================================

/// Single synchronous pass: text nodes stay, tag nodes become tokens.
fn expand(template: &str, ctx: &RenderContext) -> RenderResult<(Vec<Segment>, Collector)> {
    let nodes = parse_template(template)?;
    let mut collector = Collector::new();
    let mut segments = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            TemplateNode::Text(text, _) => segments.push(Segment::Text(text)),
            TemplateNode::Tag(tag) => {
                let kind = TagKind::from_name(&tag.name)
                    .ok_or_else(|| RenderError::UnsupportedTag { name: tag.name })?;
                let payload = build_payload(kind, &tag.attrs, ctx)?;
                segments.push(Segment::Tag(collector.register(kind, payload)));
            }
        }
    }
    Ok((segments, collector))
}

/// Splices results back by token index.
///
/// A token without a result keeps its marker text in the output instead
/// of vanishing.
fn substitute(segments: &[Segment], results: &[String]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Tag(token) => match results.get(token.index()) {
                Some(rendered) => out.push_str(rendered),
                None => out.push_str(&token.placeholder_text()),
            },
        }
    }
    out
}
