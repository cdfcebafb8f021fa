// SPDX-License-Identifier: MPL-2.0
//! Core notification data structure.
//!
//! A `Notification` keeps its id, its effective configuration, the stack it
//! belongs to and the handles of its rendered elements. Its lifecycle is
//! driven by the [`Notifier`](super::Notifier) through timer tasks; the
//! visible state lives entirely in the render target's class lists.

use super::options::NotificationConfig;
use super::toast::{Toast, ToastElements};
use crate::config::path::{has_key, resolve, KeyPath};
use crate::config::Settings;
use crate::dom::{NodeId, RenderTarget};
use crate::domain::notification::{AutoTimeout, NotificationId, StackName};
use crate::ui::icons::IconSet;
use serde_json::Value;
use std::time::Duration;

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Registry id.
    id: NotificationId,
    /// Effective configuration (id filled in, auto-dismiss defaulted).
    config: NotificationConfig,
    /// `config` as a JSON object, for path lookups.
    values: Value,
    stack: StackName,
    remove_delay: Duration,
    /// `None` when there was nothing to show.
    elements: Option<ToastElements>,
    /// Virtual time of creation.
    created_at: Duration,
}

impl Notification {
    /// Builds a notification and renders its elements on `target`.
    ///
    /// With neither title nor text nothing is rendered and the config is
    /// kept as given (apart from the id).
    pub(crate) fn build<R>(
        id: NotificationId,
        mut config: NotificationConfig,
        target: &mut R,
        icons: &IconSet,
        settings: &Settings,
        created_at: Duration,
    ) -> Self
    where
        R: RenderTarget + ?Sized,
    {
        config.id = Some(id.to_string());
        let stack = StackName::new(config.stack.as_deref().unwrap_or(settings.default_stack()));
        let remove_delay =
            Duration::from_millis(config.remove_delay.unwrap_or(settings.remove_delay_ms()));

        let elements = if config.is_blank() {
            None
        } else {
            config.autotimeout.get_or_insert(settings.autotimeout_ms());
            Some(Toast::render(&config, target, icons, settings))
        };

        let values = config.to_value();
        Self {
            id,
            config,
            values,
            stack,
            remove_delay,
            elements,
            created_at,
        }
    }

    /// Returns the notification's id.
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Returns the effective configuration.
    #[must_use]
    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Returns the stack this notification was pushed to.
    #[must_use]
    pub fn stack(&self) -> &StackName {
        &self.stack
    }

    /// Returns true if elements were built for this notification.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.elements.is_some()
    }

    #[must_use]
    pub fn elements(&self) -> Option<&ToastElements> {
        self.elements.as_ref()
    }

    /// Root element, if rendered.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.elements.map(|e| e.root)
    }

    /// Delay before auto-dismiss starts, `None` when disabled or not rendered.
    #[must_use]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        self.elements?;
        AutoTimeout::from_millis(self.config.autotimeout?).duration()
    }

    /// Delay between closing and detaching.
    #[must_use]
    pub fn remove_delay(&self) -> Duration {
        self.remove_delay
    }

    #[must_use]
    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    /// Returns true if `key` is set at the top level of the effective config.
    #[must_use]
    pub fn has_config(&self, key: &str) -> bool {
        has_key(Some(&self.values), key)
    }

    /// Resolves a dotted path (e.g. `action.url`) in the effective config.
    pub fn get_config<'a, 'p>(&'a self, path: impl Into<KeyPath<'p>>, default: &'a Value) -> &'a Value {
        resolve(Some(&self.values), path, default)
    }
}
