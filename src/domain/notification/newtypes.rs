// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! Type-safe wrappers for the identifiers and timing values a
//! notification carries.

use std::borrow::Borrow;
use std::fmt;
use std::time::Duration;

// =============================================================================
// NotificationId
// =============================================================================

/// Identifier of a notification, unique within one notifier.
///
/// Callers may pick their own ids; sending twice with the same id replaces
/// the registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(String);

impl NotificationId {
    /// Creates an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Renders a generated id from a counter value and an optional prefix.
    #[must_use]
    pub fn generated(counter: u64, prefix: Option<&str>) -> Self {
        match prefix {
            Some(prefix) => Self(format!("{prefix}{counter}")),
            None => Self(counter.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NotificationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// StackName
// =============================================================================

/// Name of a stack container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StackName(String);

impl StackName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class carried by the stack's container element.
    #[must_use]
    pub fn container_class(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.0)
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StackName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StackName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// AutoTimeout
// =============================================================================

/// Auto-dismiss timeout in milliseconds.
///
/// Any value less than or equal to zero disables auto-dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoTimeout(i64);

impl AutoTimeout {
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub fn millis(self) -> i64 {
        self.0
    }

    /// Returns the delay before auto-dismiss, or `None` when disabled.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        u64::try_from(self.0)
            .ok()
            .filter(|millis| *millis > 0)
            .map(Duration::from_millis)
    }

    /// CSS duration string for the progress animation (e.g. `5000ms`).
    #[must_use]
    pub fn css_duration(self) -> String {
        format!("{}ms", self.0)
    }
}
