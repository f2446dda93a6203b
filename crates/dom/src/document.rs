//! Arena-backed element tree.
//!
//! Responsibilities:
//! - Own every element ever created and the tree rooted at `body`.
//! - Provide attribute, class, text, style and layout access by `NodeId`.
//! - Answer the structural queries the wiring layer needs (trigger scan,
//!   nearest matching ancestor, hit testing).
//!
//! Does NOT handle:
//! - Input events or deferred tasks (see `events` and `timers`).
//! - Any form of rendering; layout rectangles are assigned by the embedder.
//!
//! Invariants:
//! - `NodeId`s never dangle: detached nodes stay allocated and remain
//!   inspectable.
//! - The tree under `body` is acyclic; `append_child` re-parents instead of
//!   duplicating.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{DomError, Result};
use crate::geometry::{Rect, Viewport};
use crate::style::InlineStyle;

/// Handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    style: InlineStyle,
    layout: Option<Rect>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            parent: None,
            children: Vec::new(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            style: InlineStyle::new(),
            layout: None,
        }
    }
}

/// A headless document: element arena, tree rooted at `body`, viewport.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
    viewport: Viewport,
}

impl Document {
    pub fn new() -> Self {
        Self::with_viewport(Viewport::default())
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            nodes: vec![Node::new("body")],
            body: NodeId(0),
            viewport,
        }
    }

    /// The tree root every attached element descends from.
    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    /// Create an element directly under `parent`. Unlike [`append_child`]
    /// this cannot fail: a fresh node has no descendants to cycle through.
    ///
    /// [`append_child`]: Document::append_child
    pub fn create_element_in(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.create_element(tag);
        self.node_mut(id).parent = Some(parent);
        self.node_mut(parent).children.push(id);
        id
    }

    /// Attach `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if parent == child {
            return Err(DomError::AppendToSelf);
        }
        if child == self.body {
            return Err(DomError::AppendRoot);
        }
        // Walk up from the parent; finding `child` there means a cycle.
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(DomError::AppendAncestor);
            }
            cursor = self.node(node).parent;
        }
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        Ok(())
    }

    /// Remove `node` from its parent. No-op when already detached.
    pub fn detach(&mut self, node: NodeId) {
        if node == self.body {
            warn!("ignoring attempt to detach the document body");
            return;
        }
        let Some(parent) = self.node(node).parent else {
            return;
        };
        self.node_mut(parent).children.retain(|&c| c != node);
        self.node_mut(node).parent = None;
    }

    /// Whether `node` is part of the tree rooted at `body`.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut cursor = node;
        loop {
            if cursor == self.body {
                return true;
            }
            match self.node(cursor).parent {
                Some(parent) => cursor = parent,
                None => return false,
            }
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.node_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.node(node).attributes.contains_key(name)
    }

    /// Add a class if not already present. Classes keep insertion order.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let classes = &mut self.node_mut(node).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.node_mut(node).classes.retain(|c| c != class);
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).classes.iter().any(|c| c == class)
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.node(node).classes
    }

    /// Replace the element's plain-text content. The text is never
    /// interpreted as markup.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.node_mut(node).text = text.to_string();
    }

    pub fn text(&self, node: NodeId) -> &str {
        &self.node(node).text
    }

    pub fn style(&self, node: NodeId) -> &InlineStyle {
        &self.node(node).style
    }

    pub fn style_mut(&mut self, node: NodeId) -> &mut InlineStyle {
        &mut self.node_mut(node).style
    }

    /// Assign the rectangle measurement reports for `node`.
    pub fn set_layout_rect(&mut self, node: NodeId, rect: Rect) {
        self.node_mut(node).layout = Some(rect);
    }

    /// The element's bounding rectangle; unmeasured elements report
    /// [`Rect::ZERO`] the way a headless DOM does.
    pub fn bounding_rect(&self, node: NodeId) -> Rect {
        self.node(node).layout.unwrap_or(Rect::ZERO)
    }

    /// Attached elements below `body`, in depth-first document order.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(self.body).children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.node(node).children.iter().rev().copied());
        }
        out
    }

    /// Attached elements carrying every one of the named attributes.
    pub fn elements_with_attributes(&self, names: &[&str]) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|&node| names.iter().all(|name| self.has_attribute(node, name)))
            .collect()
    }

    /// Nearest ancestor-or-self of `node` for which the predicate holds.
    pub fn closest(
        &self,
        node: NodeId,
        predicate: impl Fn(&Document, NodeId) -> bool,
    ) -> Option<NodeId> {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if predicate(self, current) {
                return Some(current);
            }
            cursor = self.node(current).parent;
        }
        None
    }

    /// Topmost attached element whose layout rectangle contains the point.
    /// Later document order wins, matching paint order.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<NodeId> {
        self.descendants()
            .into_iter()
            .rfind(|&node| self.bounding_rect(node).contains(x, y))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
