//! The graph-piece protocol the host framework drives.
//!
//! Each builder is a piece exposing `is_needed` and `generate`; the host (or
//! the [`GraphAssembler`]) calls them per request and merges the non-absent
//! results into the final graph. Pieces hold no state of their own — all
//! inputs arrive through the [`GraphScope`].
//!
//! [`GraphAssembler`]: crate::assembler::GraphAssembler

use localschema_core::{LocationRepository, Options};
use serde_json::Value;

use crate::context::RenderContext;

/// A structured-data node: an insertion-ordered map of JSON-LD properties.
pub type SchemaNode = serde_json::Map<String, Value>;

/// Everything a builder may consult during one render, bundled once and
/// passed by reference. All fields are request-immutable.
pub struct GraphScope<'a> {
    pub options: &'a Options,
    pub locations: &'a dyn LocationRepository,
    pub images: &'a dyn ImageNodeFactory,
    pub ctx: &'a RenderContext,
}

impl<'a> GraphScope<'a> {
    #[must_use]
    pub fn new(
        options: &'a Options,
        locations: &'a dyn LocationRepository,
        images: &'a dyn ImageNodeFactory,
        ctx: &'a RenderContext,
    ) -> Self {
        GraphScope {
            options,
            locations,
            images,
            ctx,
        }
    }
}

/// Main vs. branch rendition of a two-variant builder.
///
/// The two variants share their field-filling logic and differ only in id
/// fragments, the location they resolve, and their `is_needed` predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Main,
    Branch,
}

impl Variant {
    #[must_use]
    pub fn is_branch(self) -> bool {
        self == Variant::Branch
    }
}

/// A self-contained unit contributing zero or one node to the page graph.
pub trait GraphPiece {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this piece applies to the current render at all.
    fn is_needed(&self, scope: &GraphScope<'_>) -> bool;

    /// Produce the node, or `None` when nothing can be produced. Absence is
    /// not an error (missing location, incomplete address, empty archive).
    fn generate(&self, scope: &GraphScope<'_>) -> Option<SchemaNode>;
}

/// A callback transforming a node another component owns.
///
/// Registered by the organization builder in filter mode; the host framework
/// invokes registered transforms in order on its own Organization node.
pub trait NodeTransform {
    fn transform(&self, node: SchemaNode, scope: &GraphScope<'_>) -> SchemaNode;
}

/// Host-framework helper turning an image attachment into a schema node.
///
/// The real implementation lives in the host; [`DefaultImageNodeFactory`]
/// covers tests and the CLI.
pub trait ImageNodeFactory {
    fn image_node(&self, id: &str, url: &str, caption: &str) -> SchemaNode;
}

/// Minimal `ImageObject` factory.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultImageNodeFactory;

impl ImageNodeFactory for DefaultImageNodeFactory {
    fn image_node(&self, id: &str, url: &str, caption: &str) -> SchemaNode {
        let mut node = SchemaNode::new();
        node.insert("@type".to_string(), Value::from("ImageObject"));
        node.insert("@id".to_string(), Value::from(id));
        node.insert("url".to_string(), Value::from(url));
        node.insert("contentUrl".to_string(), Value::from(url));
        if !caption.trim().is_empty() {
            node.insert("caption".to_string(), Value::from(caption));
        }
        node
    }
}
