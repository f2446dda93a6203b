//! Headless host document for the popover widget.
//!
//! This crate provides the environment facilities the widget consumes: an
//! element tree with attributes, class lists, text and inline pixel styles,
//! layout rectangles and viewport metrics, a deterministic deferred-task
//! clock, and the input event vocabulary the wiring layer routes.
//!
//! # Example
//!
//! ```rust
//! use popover_dom::{Document, Rect};
//!
//! let mut doc = Document::new();
//! let button = doc.create_element("button");
//! let body = doc.body();
//! doc.append_child(body, button).unwrap();
//! doc.set_layout_rect(button, Rect::new(100.0, 200.0, 150.0, 40.0));
//! assert!(doc.is_attached(button));
//! ```

pub mod document;
pub mod error;
pub mod events;
pub mod geometry;
pub mod style;
pub mod timers;

// Re-export commonly used types at the crate root
pub use document::{Document, NodeId};
pub use error::{DomError, Result};
pub use events::{Key, PointerEvent};
pub use geometry::{Rect, Viewport};
pub use style::{InlineStyle, format_px, parse_px};
pub use timers::{TimerId, TimerQueue};
