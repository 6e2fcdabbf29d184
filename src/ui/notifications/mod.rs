// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for visitor feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! (message sent, booking failed, ...) without blocking the page.
//!
//! # Components
//!
//! - [`Notification`] - Core struct with severity levels
//! - [`Manager`] - Queuing and lifecycle management
//!
//! # Usage
//!
//! ```
//! use eatery_flamingo::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-contact-success"));
//! assert_eq!(manager.visible_count(), 1);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s for success/info, 5s for warnings and errors
//! - Max visible toasts: 3 (others are queued)
//! - Every toast can also be closed by hand through its id

mod manager;
mod notification;

pub use manager::Manager;
pub use notification::{Notification, NotificationId, Severity};
