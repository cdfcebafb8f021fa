// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core notification types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability
//! and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notification`]: Notification value objects
//!   ([`NotificationId`](notification::NotificationId),
//!   [`StackName`](notification::StackName), [`Status`](notification::Status),
//!   [`AutoTimeout`](notification::AutoTimeout))

pub mod diagnostics;
pub mod notification;
