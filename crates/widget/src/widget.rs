//! Popover lifecycle: construction, reveal, dismissal, positioning.
//!
//! Responsibilities:
//! - Own the single popover element and its visibility flag.
//! - Build the popover subtree and anchor it above a target element.
//! - Stage the two-phase class toggle through deferred tasks.
//!
//! Does NOT handle:
//! - Trigger discovery or input routing (see `controller` module).
//! - Styling; the `show` class is driven by external styles.

use popover_dom::{Document, NodeId, TimerQueue};
use tracing::{debug, trace, warn};

use crate::config::PopoverConfig;

/// Deferred work staged by `show` and `hide`.
///
/// Each variant captures the popover node it was scheduled for. A task that
/// fires after its popover was superseded compares against the live state
/// and does nothing, so stale tasks can never touch a successor popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    /// Apply the reveal class to a freshly attached popover.
    Reveal { popover: NodeId },
    /// Detach a dismissed popover once its fade-out has run.
    Remove { popover: NodeId },
}

/// Stateful controller owning at most one popover element at a time.
///
/// The widget mutates a [`Document`] passed into every operation; it holds
/// no reference of its own, so one widget instance can be stored wherever
/// the host keeps its UI state.
#[derive(Debug)]
pub struct PopoverWidget {
    popover: Option<NodeId>,
    visible: bool,
    config: PopoverConfig,
    timers: TimerQueue<Deferred>,
}

impl PopoverWidget {
    pub fn new() -> Self {
        Self::with_config(PopoverConfig::default())
    }

    pub fn with_config(config: PopoverConfig) -> Self {
        Self {
            popover: None,
            visible: false,
            config,
            timers: TimerQueue::new(),
        }
    }

    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// Whether the popover is currently showing or animating in.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The currently constructed popover element, if any. A popover whose
    /// fade-out is still running counts until its deferred detach fires.
    pub fn popover(&self) -> Option<NodeId> {
        self.popover
    }

    /// Number of deferred tasks that have not fired yet.
    pub fn pending_deferred(&self) -> usize {
        self.timers.pending()
    }

    /// Build a popover for `title`/`content`, attach it, position it above
    /// `target`, and stage the reveal. Any open popover is hidden first.
    pub fn show(&mut self, doc: &mut Document, target: NodeId, title: &str, content: &str) {
        self.hide(doc);
        let popover = self.create_popover(doc, title, content);
        let body = doc.body();
        if let Err(err) = doc.append_child(body, popover) {
            warn!("failed to attach popover: {err}");
            return;
        }
        self.popover = Some(popover);
        self.position_popover(doc, target);
        self.timers
            .schedule(self.config.show_delay_ms, Deferred::Reveal { popover });
        debug!(
            "popover attached, reveal staged in {}ms",
            self.config.show_delay_ms
        );
    }

    /// Dismiss the popover: the reveal class is removed and the visibility
    /// flag cleared synchronously; detachment runs after the fade-out
    /// delay. Acts only when a popover exists and is visible, so repeated
    /// calls cannot double-schedule the detach.
    pub fn hide(&mut self, doc: &mut Document) {
        let Some(popover) = self.popover else {
            return;
        };
        if !self.visible {
            return;
        }
        doc.remove_class(popover, "show");
        self.visible = false;
        self.timers
            .schedule(self.config.hide_delay_ms, Deferred::Remove { popover });
        debug!(
            "popover dismissed, detach staged in {}ms",
            self.config.hide_delay_ms
        );
    }

    /// Hide when visible, otherwise show with the given arguments. The one
    /// entry point driven by repeated trigger activation.
    pub fn toggle(&mut self, doc: &mut Document, target: NodeId, title: &str, content: &str) {
        if self.visible {
            self.hide(doc);
        } else {
            self.show(doc, target, title, content);
        }
    }

    /// Pure construction of the popover subtree; the result is detached and
    /// widget state is untouched.
    ///
    /// Structure: `div.popover > [div.popover-header]? div.popover-body
    /// div.popover-arrow`. An empty title suppresses the header. Content is
    /// plain text and never interpreted as markup.
    pub fn create_popover(&self, doc: &mut Document, title: &str, content: &str) -> NodeId {
        let popover = doc.create_element("div");
        doc.add_class(popover, "popover");

        if !title.is_empty() {
            let header = doc.create_element_in(popover, "div");
            doc.add_class(header, "popover-header");
            doc.set_text(header, title);
        }

        let body = doc.create_element_in(popover, "div");
        doc.add_class(body, "popover-body");
        doc.set_text(body, content);

        let arrow = doc.create_element_in(popover, "div");
        doc.add_class(arrow, "popover-arrow");

        popover
    }

    /// Place the popover above `target`, horizontally centered on it, then
    /// clamp to the viewport. No-op without a current popover.
    pub fn position_popover(&mut self, doc: &mut Document, target: NodeId) {
        let Some(popover) = self.popover else {
            return;
        };
        let target_rect = doc.bounding_rect(target);
        let popover_rect = doc.bounding_rect(popover);

        let left = target_rect.left + target_rect.width / 2.0 - popover_rect.width / 2.0;
        let top = target_rect.top - popover_rect.height - self.config.anchor_gap;
        doc.style_mut(popover).set_px("left", left);
        doc.style_mut(popover).set_px("top", top);
        trace!("popover positioned at left={left} top={top}");

        self.adjust_position_for_viewport(doc);
    }

    /// Clamp the popover's assigned position to the viewport margins.
    ///
    /// The horizontal branches are mutually exclusive with the left check
    /// taking priority, so a popover wider than the usable viewport ends
    /// right-clamped and is not corrected further. There is no bottom
    /// clamp; the widget only anchors above its trigger.
    pub fn adjust_position_for_viewport(&mut self, doc: &mut Document) {
        let Some(popover) = self.popover else {
            return;
        };
        let width = doc.bounding_rect(popover).width;
        let viewport_width = doc.viewport().width;
        let margin = self.config.viewport_margin;

        let style = doc.style(popover);
        let (Some(left_px), Some(top_px)) = (style.px("left"), style.px("top")) else {
            return;
        };
        let mut left = left_px as f64;
        let mut top = top_px as f64;

        if left < margin {
            left = margin;
        } else if left + width > viewport_width - margin {
            left = viewport_width - width - margin;
        }
        if top < margin {
            top = margin;
        }

        doc.style_mut(popover).set_px("left", left);
        doc.style_mut(popover).set_px("top", top);
        trace!("popover clamped to left={left} top={top}");
    }

    /// Advance the widget's virtual clock, running deferred reveals and
    /// detachments that come due.
    pub fn advance(&mut self, doc: &mut Document, delta_ms: u64) {
        for task in self.timers.advance(delta_ms) {
            self.run_deferred(doc, task);
        }
    }

    fn run_deferred(&mut self, doc: &mut Document, task: Deferred) {
        match task {
            Deferred::Reveal { popover } => {
                // A reveal staged for a superseded popover must not fire.
                if self.popover != Some(popover) {
                    trace!("dropping stale reveal");
                    return;
                }
                doc.add_class(popover, "show");
                self.visible = true;
                debug!("popover revealed");
            }
            Deferred::Remove { popover } => {
                // The owner may have been detached by other means already.
                if doc.is_attached(popover) {
                    doc.detach(popover);
                }
                // Clear the handle only if it still refers to the node this
                // task captured; a stale detach must not clobber a successor.
                if self.popover == Some(popover) {
                    self.popover = None;
                }
                debug!("popover detached");
            }
        }
    }
}

impl Default for PopoverWidget {
    fn default() -> Self {
        Self::new()
    }
}
