// SPDX-License-Identifier: MPL-2.0
//! Notification value objects.

mod newtypes;
mod status;

pub use newtypes::{AutoTimeout, NotificationId, StackName};
pub use status::Status;
