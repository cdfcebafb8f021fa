// SPDX-License-Identifier: MPL-2.0
//! Render target abstraction.
//!
//! Notifications never talk to a concrete rendering technology. They go
//! through [`RenderTarget`], a small capability set modelled on the DOM
//! operations they need. [`Document`] is the in-memory implementation used
//! headless and in tests; a browser binding implements the same trait over
//! real elements.
//!
//! # Components
//!
//! - [`RenderTarget`] - Node creation and mutation capabilities
//! - [`Document`] - Inspectable in-memory tree with HTML serialization
//! - [`ElementSpec`] - Declarative descriptor for building one node

mod builder;
mod document;

pub use builder::ElementSpec;
pub use document::Document;

use std::fmt;

/// Handle to a node owned by a [`RenderTarget`].
///
/// Handles are only meaningful for the target that created them. A handle
/// carries the generation of its slot, so a handle to a released node never
/// resolves to the node that later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// A first-generation handle for `index`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self::with_generation(index, 0)
    }

    #[must_use]
    pub fn with_generation(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)?;
        if self.generation > 0 {
            write!(f, "v{}", self.generation)?;
        }
        Ok(())
    }
}

/// Node creation and mutation capabilities required to render notifications.
///
/// Implementations must be total: operations on unknown or detached nodes
/// are silently ignored, and detaching an already detached node is a no-op.
pub trait RenderTarget {
    /// Creates a new, unattached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Replaces the node's content with literal text.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Replaces the node's content with raw markup.
    fn set_markup(&mut self, node: NodeId, markup: &str);

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Sets one inline style property (e.g. `animation-duration`).
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Appends `child` as the last child of `parent`, moving it if needed.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Inserts `child` into `parent` right before `reference`.
    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId);

    fn first_child(&self, node: NodeId) -> Option<NodeId>;

    /// Detaches the node (and its subtree) from its parent.
    fn detach(&mut self, node: NodeId);

    /// Detaches the node and frees it with its whole subtree. Handles to
    /// released nodes resolve to nothing afterwards.
    ///
    /// Targets whose nodes are reclaimed elsewhere only need to detach.
    fn release(&mut self, node: NodeId) {
        self.detach(node);
    }

    /// The document body, the parent of every stack container.
    fn body(&self) -> NodeId;
}
