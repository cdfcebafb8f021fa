// SPDX-License-Identifier: MPL-2.0
//! In-memory document tree.
//!
//! Nodes live in an arena indexed by [`NodeId`]. Detached nodes stay in the
//! arena and keep resolving until they are released; released slots are
//! reused with a bumped generation, so stale handles resolve to nothing.

use super::{NodeId, RenderTarget};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Content {
    #[default]
    Empty,
    Text(String),
    Markup(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    content: Content,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: Vec::new(),
            styles: Vec::new(),
            content: Content::Empty,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

/// An inspectable in-memory document with a single `body` root.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    /// Indices of released slots, reused last-freed first.
    free: Vec<usize>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only `body`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                data: Some(NodeData::new("body")),
            }],
            free: Vec::new(),
            body: NodeId::new(0),
        }
    }

    fn node(&self, id: NodeId) -> Option<&NodeData> {
        let slot = self.slots.get(id.index())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.data.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.data.as_mut()
    }

    /// Number of live nodes, attached or not, the body included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots in the arena, live or free.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| n.tag.as_str())
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.node(node)
            .map(|n| n.classes.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    /// Literal text set on the node, if its content is text.
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Raw markup set on the node, if its content is markup.
    #[must_use]
    pub fn markup(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.content {
            Content::Markup(markup) => Some(markup),
            _ => None,
        }
    }

    /// Concatenated literal text of the node and its descendants.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.walk(node, &mut |id| {
            if let Some(text) = self.text(id) {
                out.push_str(text);
            }
        });
        out
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)?
            .attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.node(node)?
            .styles
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the node is reachable from the body.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.body {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Finds descendants of `root` (itself included) carrying `class`, in tree order.
    #[must_use]
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(root, &mut |id| {
            if self.has_class(id, class) {
                found.push(id);
            }
        });
        found
    }

    fn walk<F>(&self, node: NodeId, f: &mut F)
    where
        F: FnMut(NodeId),
    {
        if self.node(node).is_none() {
            return;
        }
        f(node);
        for child in self.children(node) {
            self.walk(*child, f);
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn unlink(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(data) = self.node_mut(parent) {
            data.children.retain(|c| *c != node);
        }
        if let Some(data) = self.node_mut(node) {
            data.parent = None;
        }
    }

    fn clear_children(&mut self, node: NodeId) {
        let children = match self.node_mut(node) {
            Some(data) => std::mem::take(&mut data.children),
            None => return,
        };
        for child in children {
            if let Some(data) = self.node_mut(child) {
                data.parent = None;
            }
        }
    }

    /// Serializes the subtree rooted at `node` as HTML.
    #[must_use]
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.node(node) else {
            return;
        };
        out.push('<');
        out.push_str(&data.tag);
        if !data.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_attribute(&data.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &data.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
        if !data.styles.is_empty() {
            let style = data
                .styles
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(" style=\"");
            out.push_str(&escape_attribute(&style));
            out.push('"');
        }
        out.push('>');
        match &data.content {
            Content::Empty => {}
            Content::Text(text) => out.push_str(&escape_text(text)),
            Content::Markup(markup) => out.push_str(markup),
        }
        for child in &data.children {
            self.write_html(*child, out);
        }
        out.push_str("</");
        out.push_str(&data.tag);
        out.push('>');
    }
}

impl RenderTarget for Document {
    fn create_element(&mut self, tag: &str) -> NodeId {
        let data = NodeData::new(tag);
        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(index) {
                slot.data = Some(data);
                return NodeId::with_generation(index, slot.generation);
            }
        }
        self.slots.push(Slot {
            generation: 0,
            data: Some(data),
        });
        NodeId::new(self.slots.len() - 1)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.clear_children(node);
        if let Some(data) = self.node_mut(node) {
            data.content = Content::Text(text.to_string());
        }
    }

    fn set_markup(&mut self, node: NodeId, markup: &str) {
        self.clear_children(node);
        if let Some(data) = self.node_mut(node) {
            data.content = Content::Markup(markup.to_string());
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if class.is_empty() {
            return;
        }
        if let Some(data) = self.node_mut(node) {
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(data) = self.node_mut(node) {
            data.classes.retain(|c| c != class);
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(data) = self.node_mut(node) else {
            return;
        };
        match data
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value.to_string(),
            None => data
                .attributes
                .push((name.to_ascii_lowercase(), value.to_string())),
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        let Some(data) = self.node_mut(node) else {
            return;
        };
        match data.styles.iter_mut().find(|(k, _)| k == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.styles.push((property.to_string(), value.to_string())),
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        if self.is_ancestor_or_self(child, parent) {
            return;
        }
        self.unlink(child);
        if let Some(data) = self.node_mut(parent) {
            data.children.push(child);
        }
        if let Some(data) = self.node_mut(child) {
            data.parent = Some(parent);
        }
    }

    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        if child == reference {
            return;
        }
        if self.parent(reference) != Some(parent) {
            self.append_child(parent, child);
            return;
        }
        if self.node(child).is_none() || self.is_ancestor_or_self(child, parent) {
            return;
        }
        self.unlink(child);
        if let Some(data) = self.node_mut(parent) {
            let position = data
                .children
                .iter()
                .position(|c| *c == reference)
                .unwrap_or(data.children.len());
            data.children.insert(position, child);
        }
        if let Some(data) = self.node_mut(child) {
            data.parent = Some(parent);
        }
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).first().copied()
    }

    fn detach(&mut self, node: NodeId) {
        self.unlink(node);
    }

    fn release(&mut self, node: NodeId) {
        if node == self.body || self.node(node).is_none() {
            return;
        }
        self.unlink(node);
        let mut subtree = Vec::new();
        self.walk(node, &mut |id| subtree.push(id));
        for id in subtree {
            if let Some(slot) = self.slots.get_mut(id.index()) {
                slot.data = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.index());
            }
        }
    }

    fn body(&self) -> NodeId {
        self.body
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html(self.body))
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
