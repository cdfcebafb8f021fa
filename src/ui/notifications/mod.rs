// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications are transient messages rendered as element subtrees into a
//! [`RenderTarget`](crate::dom::RenderTarget), grouped in named stacks and
//! dismissed after a timeout or a click on their close button.
//!
//! # Components
//!
//! - [`options`] - `NotificationConfig`, the per-notification configuration
//! - [`notification`] - Core `Notification` struct and its effective config
//! - [`toast`] - Element subtree rendering for one notification
//! - [`stack`] - Named containers, newest notification first
//! - [`timers`] - One-shot tasks on a virtual clock
//! - [`manager`] - `Notifier`, the registry driving the lifecycle
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use toastdeck::ui::notifications::{NotificationConfig, Notifier};
//!
//! let mut notifier = Notifier::new();
//! let id = notifier
//!     .send(NotificationConfig::status_titled("success", "Image saved"))
//!     .id()
//!     .to_string();
//!
//! notifier.advance(Duration::from_millis(50));
//! assert!(notifier.has(&id));
//!
//! notifier.run_until_idle();
//! assert!(!notifier.has(&id));
//! ```
//!
//! # Lifecycle
//!
//! - Show: `active` is added 50ms after sending
//! - Auto-dismiss: after `autotimeout` (5000ms by default, disabled when ≤ 0)
//! - Close: `active` is removed, then the root is detached after `removeDelay`

pub mod manager;
pub mod notification;
pub mod options;
pub mod stack;
pub mod timers;
pub mod toast;

pub use manager::{Message as NotificationMessage, Notifier};
pub use notification::Notification;
pub use options::{ActionConfig, NotificationConfig};
pub use stack::Stack;
pub use timers::{Task, Timers};
pub use toast::{classes, Toast, ToastElements};
