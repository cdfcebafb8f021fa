// SPDX-License-Identifier: MPL-2.0
//! `toastdeck` renders toast notifications into a document tree.
//!
//! Notifications are described by a [`NotificationConfig`], rendered as
//! element subtrees through the [`RenderTarget`](dom::RenderTarget) trait,
//! grouped in named stacks and dismissed on a virtual clock driven by the
//! host. An in-memory [`Document`](dom::Document) is provided as the default
//! target.

#![doc(html_root_url = "https://docs.rs/toastdeck/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod domain;
pub mod error;
pub mod ui;

pub use config::Settings;
pub use dom::{Document, NodeId, RenderTarget};
pub use error::{Error, Result};
pub use ui::notifications::{NotificationConfig, NotificationMessage, Notifier};
