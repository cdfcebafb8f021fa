// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`Notifier`] is the registry of notifications and stacks. It owns the
//! render target, the icon set, the id counter and the virtual clock that
//! drives the show, close and remove steps of every notification.

use super::notification::Notification;
use super::options::NotificationConfig;
use super::stack::Stack;
use super::timers::{Task, Timers};
use super::toast::classes;
use crate::config::Settings;
use crate::diagnostics::{BufferCapacity, History, LifecycleEvent};
use crate::dom::{Document, NodeId, RenderTarget};
use crate::domain::notification::{NotificationId, StackName};
use crate::ui::icons::IconSet;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Advance the virtual clock.
    Tick(Duration),
    /// A user click on a node of the render target.
    Click(NodeId),
    /// Close a notification with the default delay.
    Close(NotificationId),
    /// Drop a notification from the registry.
    Delete(NotificationId),
}

/// What a click on a close button closes.
#[derive(Debug, Clone)]
struct Dismissal {
    id: NotificationId,
    root: NodeId,
    remove_delay: Duration,
}

/// Registry of notifications and stacks bound to one render target.
#[derive(Debug)]
pub struct Notifier<R: RenderTarget = Document> {
    target: R,
    settings: Settings,
    icons: IconSet,
    notifications: HashMap<NotificationId, Notification>,
    stacks: HashMap<StackName, Stack>,
    /// Close button node → the notification it closes.
    close_buttons: HashMap<NodeId, Dismissal>,
    timers: Timers,
    id_counter: u64,
    history: History,
}

impl Default for Notifier<Document> {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier<Document> {
    /// Creates a notifier over a fresh in-memory document with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_target(Document::new(), settings)
    }

    /// The in-memory document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.target
    }
}

impl<R: RenderTarget> Notifier<R> {
    /// Creates a notifier rendering into `target`.
    ///
    /// Icon overrides from `settings` are applied on top of the built-in set.
    pub fn with_target(target: R, settings: Settings) -> Self {
        let mut icons = IconSet::builtin();
        icons.extend(settings.icons.clone());
        let history = History::new(BufferCapacity::new(settings.history_capacity()));
        Self {
            target,
            settings,
            icons,
            notifications: HashMap::new(),
            stacks: HashMap::new(),
            close_buttons: HashMap::new(),
            timers: Timers::new(),
            id_counter: 0,
            history,
        }
    }

    /// Builds, registers and displays a notification.
    ///
    /// A missing id is generated; an explicit one, even empty, is used as
    /// given. A notification with the same id replaces the registered one;
    /// the replaced instance's elements and pending tasks are left alone.
    pub fn send(&mut self, config: NotificationConfig) -> &Notification {
        let id = match config.id.as_deref() {
            Some(id) => NotificationId::new(id),
            None => self.next_id(),
        };

        let now = self.timers.now();
        let notification = Notification::build(
            id.clone(),
            config,
            &mut self.target,
            &self.icons,
            &self.settings,
            now,
        );

        match notification.elements().copied() {
            Some(elements) => {
                let root = elements.root;
                let remove_delay = notification.remove_delay();
                if let Some(timeout) = notification.auto_dismiss() {
                    self.timers.schedule(
                        timeout,
                        Task::Close {
                            id: id.clone(),
                            root,
                            remove_delay,
                        },
                    );
                }
                if let Some(button) = elements.close_button {
                    self.close_buttons.insert(
                        button,
                        Dismissal {
                            id: id.clone(),
                            root,
                            remove_delay,
                        },
                    );
                }

                let stack = notification.stack().clone();
                let container = self.get_or_create_stack(stack.as_str()).clone();
                container.push(&mut self.target, root);
                self.timers.schedule(
                    self.settings.show_delay(),
                    Task::Show {
                        id: id.clone(),
                        root,
                    },
                );

                tracing::debug!(id = %id, stack = %stack, "Notification sent");
                self.history.record(
                    now,
                    LifecycleEvent::Sent {
                        id: id.to_string(),
                        stack: stack.to_string(),
                    },
                );
            }
            None => {
                tracing::debug!(id = %id, "Notification has no title or text, nothing rendered");
                self.history
                    .record(now, LifecycleEvent::SkippedEmpty { id: id.to_string() });
            }
        }

        match self.notifications.entry(id) {
            Entry::Occupied(mut entry) => {
                tracing::debug!(id = %entry.key(), "Replacing registered notification");
                entry.insert(notification);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(notification),
        }
    }

    /// Looks up a registered notification.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications.get(id)
    }

    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.notifications.contains_key(id)
    }

    /// Drops `id` from the registry. Its elements and timers are untouched.
    ///
    /// Returns `true` if the id was registered.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.notifications.remove(id).is_some();
        if removed {
            tracing::debug!(id, "Notification deleted");
            self.history
                .record(self.timers.now(), LifecycleEvent::Deleted { id: id.to_string() });
        }
        removed
    }

    /// Schedules the close step of `id` after `delay` (default close delay).
    ///
    /// Returns `false` for unknown or unrendered notifications.
    pub fn close(&mut self, id: &str, delay: Option<Duration>) -> bool {
        let Some(notification) = self.notifications.get(id) else {
            return false;
        };
        let Some(root) = notification.root() else {
            return false;
        };
        let task = Task::Close {
            id: notification.id().clone(),
            root,
            remove_delay: notification.remove_delay(),
        };
        let delay = delay.unwrap_or_else(|| self.settings.close_delay());
        self.timers.schedule(delay, task);
        true
    }

    /// Schedules removal of `id` after its remove delay, skipping the close step.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(notification) = self.notifications.get(id) else {
            return false;
        };
        let Some(root) = notification.root() else {
            return false;
        };
        let task = Task::Remove {
            id: notification.id().clone(),
            root,
        };
        self.timers.schedule(notification.remove_delay(), task);
        true
    }

    /// Dispatches a user click on `node`.
    ///
    /// Clicking a close button closes its notification with the default
    /// close delay. Returns `true` if the click was handled.
    pub fn click(&mut self, node: NodeId) -> bool {
        let Some(dismissal) = self.close_buttons.get(&node) else {
            return false;
        };
        tracing::debug!(id = %dismissal.id, "Close button clicked");
        let task = Task::Close {
            id: dismissal.id.clone(),
            root: dismissal.root,
            remove_delay: dismissal.remove_delay,
        };
        self.timers.schedule(self.settings.close_delay(), task);
        true
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick(dt) => {
                self.advance(*dt);
            }
            Message::Click(node) => {
                self.click(*node);
            }
            Message::Close(id) => {
                self.close(id.as_str(), None);
            }
            Message::Delete(id) => {
                self.delete(id.as_str());
            }
        }
    }

    /// Advances the virtual clock by `dt`, running every task falling due.
    ///
    /// Tasks scheduled while advancing run too when they fall due in the
    /// window. Returns the number of tasks run.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let until = self.timers.now().saturating_add(dt);
        let mut ran = 0;
        while let Some(task) = self.timers.pop_due(until) {
            self.run(task);
            ran += 1;
        }
        self.timers.settle(until);
        ran
    }

    /// Runs tasks until none is left. Returns the number of tasks run.
    pub fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.timers.next_due() {
            while let Some(task) = self.timers.pop_due(due) {
                self.run(task);
                ran += 1;
            }
        }
        ran
    }

    fn run(&mut self, task: Task) {
        tracing::trace!(?task, now = ?self.timers.now(), "Running notification task");
        let now = self.timers.now();
        match task {
            Task::Show { id, root } => {
                self.target.add_class(root, classes::ACTIVE);
                tracing::debug!(id = %id, "Notification shown");
                self.history
                    .record(now, LifecycleEvent::Shown { id: id.to_string() });
            }
            Task::Close {
                id,
                root,
                remove_delay,
            } => {
                self.target.remove_class(root, classes::ACTIVE);
                tracing::debug!(id = %id, ?remove_delay, "Notification closing");
                self.history.record(
                    now,
                    LifecycleEvent::Closing {
                        id: id.to_string(),
                        remove_delay_ms: u64::try_from(remove_delay.as_millis())
                            .unwrap_or(u64::MAX),
                    },
                );
                self.timers.schedule(remove_delay, Task::Remove { id, root });
            }
            Task::Remove { id, root } => {
                self.target.release(root);
                self.close_buttons.retain(|_, dismissal| dismissal.root != root);
                // A newer notification registered under the same id stays.
                let owns_id = self
                    .notifications
                    .get(&id)
                    .is_some_and(|n| n.root() == Some(root));
                if owns_id {
                    self.notifications.remove(&id);
                }
                tracing::debug!(id = %id, forgotten = owns_id, "Notification removed");
                self.history
                    .record(now, LifecycleEvent::Removed { id: id.to_string() });
            }
        }
    }

    fn next_id(&mut self) -> NotificationId {
        self.id_counter += 1;
        NotificationId::generated(self.id_counter, self.settings.id_prefix.as_deref())
    }

    /// Returns the stack named `name`, creating its container on first use.
    pub fn get_or_create_stack(&mut self, name: &str) -> &Stack {
        match self.stacks.entry(StackName::new(name)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let stack = Stack::create(entry.key().clone(), &mut self.target);
                tracing::debug!(stack = %name, "Stack created");
                self.history.record(
                    self.timers.now(),
                    LifecycleEvent::StackCreated {
                        stack: name.to_string(),
                    },
                );
                entry.insert(stack)
            }
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Due time of the next pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Pending tasks in execution order.
    #[must_use]
    pub fn scheduled(&self) -> Vec<(Duration, &Task)> {
        self.timers.scheduled()
    }

    #[must_use]
    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// Icon set used by notifications sent from now on.
    pub fn icons_mut(&mut self) -> &mut IconSet {
        &mut self.icons
    }

    /// Returns the stack registered under `name`, if any notification used it.
    #[must_use]
    pub fn stack(&self, name: &str) -> Option<&Stack> {
        self.stacks.get(name)
    }

    pub fn stacks(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.values()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of registered notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
