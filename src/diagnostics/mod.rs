// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module recording the lifecycle of notifications.
//!
//! Every observable step (sent, shown, closing, removed, ...) is captured as
//! a [`LifecycleEvent`] stamped with the notifier's virtual clock and kept in
//! a memory-bounded circular buffer, so hosts and tests can inspect what
//! happened without hooking into the render target.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`LifecycleEvent`]: Enum representing the recorded steps
//! - [`History`]: Timestamped event log with JSON export

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{EventRecord, LifecycleEvent};

use std::time::Duration;

/// Bounded, timestamped log of lifecycle events.
#[derive(Debug, Clone)]
pub struct History {
    records: CircularBuffer<EventRecord>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl History {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            records: CircularBuffer::new(capacity),
        }
    }

    /// Records an event at the given virtual time.
    pub fn record(&mut self, at: Duration, event: LifecycleEvent) {
        let at_ms = u64::try_from(at.as_millis()).unwrap_or(u64::MAX);
        self.records.push(EventRecord { at_ms, event });
    }

    /// Returns the records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    /// Returns the events recorded for one notification, oldest first.
    pub fn for_notification<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a EventRecord> {
        self.records
            .iter()
            .filter(move |record| record.event.notification_id() == Some(id))
    }

    #[must_use]
    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Exports the records as a JSON array, oldest first.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let records: Vec<&EventRecord> = self.records.iter().collect();
        serde_json::to_string_pretty(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(id: &str) -> LifecycleEvent {
        LifecycleEvent::Shown { id: id.to_string() }
    }

    #[test]
    fn records_are_timestamped_in_milliseconds() {
        let mut history = History::default();
        history.record(Duration::from_millis(50), shown("1"));
        let last = history.last().expect("one record");
        assert_eq!(last.at_ms, 50);
        assert_eq!(last.event, shown("1"));
    }

    #[test]
    fn history_is_bounded() {
        let mut history = History::new(BufferCapacity::new(2));
        history.record(Duration::ZERO, shown("1"));
        history.record(Duration::ZERO, shown("2"));
        history.record(Duration::ZERO, shown("3"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.iter().next().map(|r| &r.event), Some(&shown("2")));
    }

    #[test]
    fn filters_by_notification() {
        let mut history = History::default();
        history.record(Duration::ZERO, shown("1"));
        history.record(
            Duration::ZERO,
            LifecycleEvent::StackCreated {
                stack: "default".to_string(),
            },
        );
        history.record(Duration::ZERO, shown("2"));
        let ids: Vec<_> = history
            .for_notification("2")
            .map(|r| r.event.clone())
            .collect();
        assert_eq!(ids, vec![shown("2")]);
    }

    #[test]
    fn exports_json_array() {
        let mut history = History::default();
        history.record(Duration::from_millis(5), LifecycleEvent::Removed { id: "9".to_string() });
        let json = history.to_json().expect("export should succeed");
        let parsed: Vec<EventRecord> = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].at_ms, 5);
    }
}
