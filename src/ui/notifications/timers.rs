// SPDX-License-Identifier: MPL-2.0
//! One-shot delayed tasks on a virtual clock.
//!
//! The notifier never blocks and never spawns: every step of the
//! show → close → remove sequence is queued here as a fire-once task and
//! executed when the host advances time. Tasks fall due in order of due
//! time, then in the order they were scheduled. Nothing can be cancelled.

use crate::dom::NodeId;
use crate::domain::notification::NotificationId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// A deferred notification step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Add the `active` class.
    Show { id: NotificationId, root: NodeId },
    /// Remove the `active` class, then schedule [`Task::Remove`].
    Close {
        id: NotificationId,
        root: NodeId,
        remove_delay: Duration,
    },
    /// Detach the root and forget the id.
    Remove { id: NotificationId, root: NodeId },
}

impl Task {
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        match self {
            Task::Show { id, .. } | Task::Close { id, .. } | Task::Remove { id, .. } => id,
        }
    }
}

#[derive(Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    task: Task,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Queue of pending tasks and the current virtual time.
#[derive(Debug, Default)]
pub struct Timers {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queues `task` to run `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: Task) {
        let due = self.now.saturating_add(delay);
        tracing::trace!(?task, ?due, "Scheduling notification task");
        self.queue.push(Reverse(Scheduled {
            due,
            seq: self.next_seq,
            task,
        }));
        self.next_seq += 1;
    }

    /// Pops the earliest task due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Task> {
        if self.queue.peek()?.0.due > until {
            return None;
        }
        let Reverse(scheduled) = self.queue.pop()?;
        self.now = self.now.max(scheduled.due);
        Some(scheduled.task)
    }

    /// Moves the clock forward to `until` once every due task has run.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(s)| s.due)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pending tasks in execution order.
    #[must_use]
    pub fn scheduled(&self) -> Vec<(Duration, &Task)> {
        let mut pending: Vec<&Scheduled> = self.queue.iter().map(|Reverse(s)| s).collect();
        pending.sort();
        pending.into_iter().map(|s| (s.due, &s.task)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: &str) -> Task {
        Task::Show {
            id: NotificationId::from(id),
            root: NodeId::new(1),
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn tasks_run_in_due_order() {
        let mut timers = Timers::new();
        timers.schedule(ms(60), show("late"));
        timers.schedule(ms(50), show("early"));

        assert_eq!(timers.pop_due(ms(100)), Some(show("early")));
        assert_eq!(timers.now(), ms(50));
        assert_eq!(timers.pop_due(ms(100)), Some(show("late")));
        assert_eq!(timers.pop_due(ms(100)), None);
    }

    #[test]
    fn equal_due_times_keep_scheduling_order() {
        let mut timers = Timers::new();
        timers.schedule(ms(10), show("first"));
        timers.schedule(ms(10), show("second"));
        assert_eq!(timers.pop_due(ms(10)), Some(show("first")));
        assert_eq!(timers.pop_due(ms(10)), Some(show("second")));
    }

    #[test]
    fn tasks_after_horizon_stay_queued() {
        let mut timers = Timers::new();
        timers.schedule(ms(500), show("a"));
        assert_eq!(timers.pop_due(ms(499)), None);
        assert_eq!(timers.pending(), 1);
        timers.settle(ms(499));
        assert_eq!(timers.now(), ms(499));
        assert_eq!(timers.next_due(), Some(ms(500)));
    }

    #[test]
    fn delays_are_relative_to_now() {
        let mut timers = Timers::new();
        timers.settle(ms(1000));
        timers.schedule(ms(60), show("a"));
        assert_eq!(timers.next_due(), Some(ms(1060)));
    }

    #[test]
    fn settle_never_moves_backwards() {
        let mut timers = Timers::new();
        timers.settle(ms(20));
        timers.settle(ms(5));
        assert_eq!(timers.now(), ms(20));
    }

    #[test]
    fn far_future_delays_saturate() {
        let mut timers = Timers::new();
        timers.settle(ms(1));
        timers.schedule(Duration::MAX, show("never"));
        assert_eq!(timers.next_due(), Some(Duration::MAX));
        assert_eq!(timers.pop_due(ms(1000)), None);
        assert_eq!(timers.pop_due(Duration::MAX), Some(show("never")));
        assert_eq!(timers.now(), Duration::MAX);
    }

    #[test]
    fn scheduled_lists_in_execution_order() {
        let mut timers = Timers::new();
        timers.schedule(ms(5000), show("close"));
        timers.schedule(ms(50), show("show"));
        let order: Vec<_> = timers
            .scheduled()
            .into_iter()
            .map(|(due, task)| (due, task.id().to_string()))
            .collect();
        assert_eq!(
            order,
            vec![(ms(50), "show".to_string()), (ms(5000), "close".to_string())]
        );
    }
}
