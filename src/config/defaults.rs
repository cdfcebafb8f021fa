// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Show, close and removal delays
//! - **Auto-dismiss**: Progress bar timeout
//! - **Layout**: Default stack name and root classes
//! - **History**: Lifecycle event buffer capacity

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay before a freshly inserted notification receives the `active` class (in ms).
pub const DEFAULT_SHOW_DELAY_MS: u64 = 50;

/// Delay used by `close()` when no explicit delay is given (in ms).
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 60;

/// Delay between the close transition and detaching the element (in ms).
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 500;

// ==========================================================================
// Auto-dismiss Defaults
// ==========================================================================

/// Auto-dismiss timeout applied when a notification does not set one (in ms).
///
/// Values less than or equal to zero disable auto-dismiss.
pub const DEFAULT_AUTOTIMEOUT_MS: i64 = 5000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Stack used when a notification does not name one.
pub const DEFAULT_STACK: &str = "default";

/// Classes applied to a notification root when none are configured.
pub const DEFAULT_CLASSES: [&str; 2] = ["notification", "notification-fade"];

/// Prefix of the class given to every stack container.
pub const STACK_CLASS_PREFIX: &str = "notification-stack-";

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Minimum lifecycle history capacity.
pub const MIN_HISTORY_CAPACITY: usize = 1;

/// Maximum lifecycle history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // An auto-dismiss shorter than the show delay would close before showing.
    assert!(DEFAULT_AUTOTIMEOUT_MS > DEFAULT_SHOW_DELAY_MS as i64);
    assert!(DEFAULT_REMOVE_DELAY_MS > 0);

    assert!(MIN_HISTORY_CAPACITY > 0);
    assert!(MAX_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_SHOW_DELAY_MS, 50);
        assert_eq!(DEFAULT_CLOSE_DELAY_MS, 60);
        assert_eq!(DEFAULT_REMOVE_DELAY_MS, 500);
    }

    #[test]
    fn autotimeout_default_outlasts_show_delay() {
        assert_eq!(DEFAULT_AUTOTIMEOUT_MS, 5000);
        assert!(DEFAULT_AUTOTIMEOUT_MS > DEFAULT_SHOW_DELAY_MS as i64);
    }

    #[test]
    fn default_classes_start_with_notification() {
        assert_eq!(DEFAULT_CLASSES[0], "notification");
        assert_eq!(DEFAULT_STACK, "default");
    }

    #[test]
    fn history_defaults_are_valid() {
        assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
        assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
    }
}
