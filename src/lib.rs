//! Bulma-styled alert boxes rendered from flash messages.
//!
//! The entry point is [`AlertFlash`], a configurable widget which reads every
//! pending message out of a [`FlashStore`], renders one
//! `div.notification.is-<level>` per severity level and removes the messages
//! it rendered from the store.
//!
//! ```
//! use bulma_alert::{AlertFlash, MemoryFlash, WidgetCounter};
//!
//! let mut flash = MemoryFlash::new();
//! flash.add("danger", [("body", "This is a test.")]);
//!
//! let counter = WidgetCounter::new();
//! let html = AlertFlash::with_counter(&counter)
//!     .layout_body("{body}")
//!     .render(&mut flash);
//!
//! assert_eq!(
//!     html,
//!     "<div id=\"w0-alert\" class=\"notification is-danger\" role=\"alert\">\n\
//!      <span>This is a test.</span>\n\
//!      </div>"
//! );
//! assert!(flash.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod flash;
pub mod html;
pub mod layout;
pub mod widgets;

pub use config::AlertConfig;
pub use error::{AlertError, Element, FlashError};
pub use flash::{FlashFields, FlashStore, MemoryFlash};
pub use widgets::alert::{AlertFlash, AlertMarkup};
pub use widgets::counter::WidgetCounter;
