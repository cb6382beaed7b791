//! User interface components.
//!
//! [`alert`] holds the flash-driven [`alert::AlertFlash`] widget;
//! [`notification`] renders a single message that never went through a flash
//! store.

pub mod alert;
pub mod counter;
pub mod notification;
