//! Popover widget: lifecycle controller and trigger wiring.
//!
//! This library provides the popover state machine ([`PopoverWidget`]), its
//! configuration, and the input routing layer ([`PopoverController`]) a
//! host application feeds pointer and key events from its own loop.
//!
//! # Example
//!
//! ```rust
//! use popover_dom::{Document, PointerEvent};
//! use popover_widget::{PopoverConfig, PopoverController};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let button = doc.create_element_in(body, "button");
//! doc.set_attribute(button, "data-title", "Hint");
//! doc.set_attribute(button, "data-content", "More detail here.");
//!
//! let mut controller = PopoverController::bind(&doc, PopoverConfig::default());
//! controller.handle_pointer(&mut doc, PointerEvent::on(button));
//! controller.advance(&mut doc, 10);
//! assert!(controller.widget().is_visible());
//! ```

pub mod config;
pub mod controller;
pub mod widget;

// Re-export commonly used types at the crate root
pub use config::PopoverConfig;
pub use controller::{PopoverController, TRIGGER_ATTRS};
pub use widget::PopoverWidget;
