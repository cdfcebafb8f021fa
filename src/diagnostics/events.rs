// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types.
//!
//! One event is recorded for every observable step a notification goes
//! through, stamped with the notifier's virtual clock.

use serde::{Deserialize, Serialize};

/// A step in the life of a notification or stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A notification was built and inserted into its stack.
    Sent {
        id: String,
        stack: String,
    },

    /// A notification with neither title nor text was registered without
    /// rendering anything.
    SkippedEmpty {
        id: String,
    },

    /// A stack container was created and appended to the body.
    StackCreated {
        stack: String,
    },

    /// The `active` class was added.
    Shown {
        id: String,
    },

    /// The `active` class was removed and removal scheduled.
    Closing {
        id: String,
        /// Delay before the element is detached (in ms).
        remove_delay_ms: u64,
    },

    /// The element was detached and the id forgotten.
    Removed {
        id: String,
    },

    /// The id was dropped from the registry through `delete`.
    Deleted {
        id: String,
    },
}

impl LifecycleEvent {
    /// The notification id the event refers to, if any.
    #[must_use]
    pub fn notification_id(&self) -> Option<&str> {
        match self {
            LifecycleEvent::Sent { id, .. }
            | LifecycleEvent::SkippedEmpty { id }
            | LifecycleEvent::Shown { id }
            | LifecycleEvent::Closing { id, .. }
            | LifecycleEvent::Removed { id }
            | LifecycleEvent::Deleted { id } => Some(id),
            LifecycleEvent::StackCreated { .. } => None,
        }
    }
}

/// A lifecycle event with its virtual timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    /// Milliseconds since the notifier was created.
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: LifecycleEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tag() {
        let record = EventRecord {
            at_ms: 50,
            event: LifecycleEvent::Shown { id: "1".to_string() },
        };
        let json = serde_json::to_string(&record).expect("serialization should succeed");
        assert_eq!(json, r#"{"at_ms":50,"event":"shown","id":"1"}"#);
    }

    #[test]
    fn closing_event_round_trips() {
        let json = r#"{"event":"closing","id":"7","remove_delay_ms":500}"#;
        let event: LifecycleEvent =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            event,
            LifecycleEvent::Closing {
                id: "7".to_string(),
                remove_delay_ms: 500
            }
        );
    }

    #[test]
    fn stack_events_have_no_notification_id() {
        let event = LifecycleEvent::StackCreated {
            stack: "default".to_string(),
        };
        assert_eq!(event.notification_id(), None);
        assert_eq!(
            LifecycleEvent::Removed { id: "3".to_string() }.notification_id(),
            Some("3")
        );
    }
}
