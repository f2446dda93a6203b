//! Trigger discovery and document-level input routing.
//!
//! The source wiring attached document listeners as a load-time side
//! effect. Here the host application constructs one controller per document
//! context and feeds it pointer and key events from its own loop, so
//! several independent controllers can coexist without interference.
//!
//! Responsibilities:
//! - Scan the document for annotated trigger elements.
//! - Route pointer activations: toggle on triggers, keep clicks inside the
//!   popover, dismiss everything else.
//! - Dismiss on Escape.

use popover_dom::{Document, Key, NodeId, PointerEvent};
use tracing::debug;

use crate::config::PopoverConfig;
use crate::widget::PopoverWidget;

/// Attributes an element must carry to be bound as a popover trigger.
pub const TRIGGER_ATTRS: [&str; 2] = ["data-title", "data-content"];

/// Routes document input to a [`PopoverWidget`] and its bound triggers.
#[derive(Debug)]
pub struct PopoverController {
    widget: PopoverWidget,
    triggers: Vec<NodeId>,
}

impl PopoverController {
    /// Scan `doc` for trigger elements and wrap a widget configured with
    /// `config`. Call once per document context.
    pub fn bind(doc: &Document, config: PopoverConfig) -> Self {
        let mut controller = Self {
            widget: PopoverWidget::with_config(config),
            triggers: Vec::new(),
        };
        controller.rebind(doc);
        controller
    }

    /// Re-scan the document for trigger elements, e.g. after the host has
    /// mutated the tree.
    pub fn rebind(&mut self, doc: &Document) {
        self.triggers = doc.elements_with_attributes(&TRIGGER_ATTRS);
        debug!("bound {} popover trigger(s)", self.triggers.len());
    }

    pub fn widget(&self) -> &PopoverWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut PopoverWidget {
        &mut self.widget
    }

    pub fn triggers(&self) -> &[NodeId] {
        &self.triggers
    }

    /// Route a pointer activation.
    ///
    /// Returns `true` when the activation landed on a bound trigger and was
    /// consumed, in which case the host should suppress its default
    /// handling. Activations inside a popover are left alone; anything else
    /// dismisses the open popover.
    pub fn handle_pointer(&mut self, doc: &mut Document, event: PointerEvent) -> bool {
        let Some(target) = event.target else {
            self.widget.hide(doc);
            return false;
        };

        if let Some(trigger) = doc.closest(target, |_, node| self.triggers.contains(&node)) {
            let title = doc
                .attribute(trigger, "data-title")
                .unwrap_or_default()
                .to_string();
            let content = doc
                .attribute(trigger, "data-content")
                .unwrap_or_default()
                .to_string();
            self.widget.toggle(doc, trigger, &title, &content);
            return true;
        }

        if doc
            .closest(target, |d, node| d.has_class(node, "popover"))
            .is_some()
        {
            return false;
        }

        self.widget.hide(doc);
        false
    }

    /// Route a key press. Escape dismisses the open popover; every other
    /// key is ignored. Returns `true` when a visible popover was dismissed.
    pub fn handle_key(&mut self, doc: &mut Document, key: Key) -> bool {
        match key {
            Key::Escape => {
                let was_visible = self.widget.is_visible();
                self.widget.hide(doc);
                was_visible
            }
            _ => false,
        }
    }

    /// Advance the widget's deferred work.
    pub fn advance(&mut self, doc: &mut Document, delta_ms: u64) {
        self.widget.advance(doc, delta_ms);
    }
}
