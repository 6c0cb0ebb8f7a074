//! The immutable template tree: static elements, text, and dynamic binding
//! points.

use std::fmt;

use weft_markup::{Attr, Tag};

/// Temporal discipline of a dynamic binding point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderKind {
    /// Resolved immediately from a directly-supplied model.
    Sync,
    /// Resolved against a push stream plus an explicit completion signal.
    Async,
    /// Resolved by cooperatively awaiting stream elements one at a time.
    Suspend,
}

impl fmt::Display for BinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinderKind::Sync => "sync",
            BinderKind::Async => "async",
            BinderKind::Suspend => "suspending",
        })
    }
}

/// One node of a template tree.
#[derive(Debug)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
    Dynamic(DynamicPoint),
}

/// A static element with its attributes and children, fixed at build time.
#[derive(Debug)]
pub(crate) struct Element {
    pub(crate) tag: Tag,
    pub(crate) attributes: Vec<(Attr, String)>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A tree position whose children are produced only at render time.
///
/// Carries no function itself; `slot` indexes the binder table of the
/// owning view.
#[derive(Debug)]
pub(crate) struct DynamicPoint {
    pub(crate) slot: usize,
    pub(crate) kind: BinderKind,
}

/// An immutable document structure, built once and shared by every render.
#[derive(Debug)]
pub struct Template {
    pub(crate) roots: Vec<Node>,
}

impl Template {
    /// Total node count, including nested children.
    pub(crate) fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    Node::Element(element) => 1 + count(&element.children),
                    Node::Text(_) | Node::Dynamic(_) => 1,
                })
                .sum()
        }
        count(&self.roots)
    }
}
