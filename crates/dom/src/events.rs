//! Input event vocabulary consumed by the wiring layer.

use crate::document::NodeId;

/// Key identity for document-level key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Char(char),
}

/// A pointer activation (click/tap) dispatched at document level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The deepest element under the pointer, or `None` for an activation
    /// over empty space.
    pub target: Option<NodeId>,
}

impl PointerEvent {
    pub fn on(target: NodeId) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub fn outside() -> Self {
        Self { target: None }
    }
}
