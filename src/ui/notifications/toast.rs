// SPDX-License-Identifier: MPL-2.0
//! Toast rendering for individual notifications.
//!
//! Toasts are the visual representation of notifications: a root element
//! carrying the configured classes and the status, an optional icon, a body
//! with title, text and call-to-action, an optional progress bar and an
//! optional close button. Everything is styled through class names; the only
//! inline style is the progress animation timing.

use super::options::NotificationConfig;
use crate::config::Settings;
use crate::dom::{ElementSpec, NodeId, RenderTarget};
use crate::domain::notification::AutoTimeout;
use crate::ui::icons::IconSet;

/// Class names making up the notification markup contract.
pub mod classes {
    pub const BODY: &str = "notification-body";
    pub const ICON: &str = "notification-icon";
    pub const TITLE: &str = "notification-title";
    pub const TEXT: &str = "notification-text";
    pub const ACTION: &str = "notification-action";
    pub const PROGRESS_BAR: &str = "notification-progressbar";
    pub const PROGRESS: &str = "notification-progress";
    pub const CLOSE: &str = "notification-close";
    /// Present while the notification is visible.
    pub const ACTIVE: &str = "active";
}

/// Handles to the elements of a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastElements {
    pub root: NodeId,
    pub body: NodeId,
    pub icon: Option<NodeId>,
    pub title: Option<NodeId>,
    pub text: Option<NodeId>,
    /// The action's anchor element.
    pub action: Option<NodeId>,
    /// The inner, animated progress element.
    pub progress: Option<NodeId>,
    pub close_button: Option<NodeId>,
}

/// Toast renderer.
pub struct Toast;

impl Toast {
    /// Builds the element subtree for `config`. The root is left detached.
    ///
    /// `config.autotimeout` is expected to be resolved already; when it is
    /// still absent the settings default applies.
    pub fn render<R>(
        config: &NotificationConfig,
        target: &mut R,
        icons: &IconSet,
        settings: &Settings,
    ) -> ToastElements
    where
        R: RenderTarget + ?Sized,
    {
        let root_classes = config.classes.clone().unwrap_or_else(|| settings.classes());
        let root = ElementSpec::with_classes(root_classes.iter().map(String::as_str)).build(target);
        let body = ElementSpec::with_classes([classes::BODY]).build(target);

        if let Some(status) = config.parsed_status() {
            target.add_class(root, status.as_str());
        }

        let icon = Self::apply_icon(config, target, icons, root);
        let (title, text) = Self::apply_content(config, target, root, body);
        let action = Self::apply_action(config, target, body);
        let timeout =
            AutoTimeout::from_millis(config.autotimeout.unwrap_or(settings.autotimeout_ms()));
        let progress = Self::apply_progress_bar(timeout, target, root);
        let close_button = Self::apply_close_button(config, target, icons, root);

        ToastElements {
            root,
            body,
            icon,
            title,
            text,
            action,
            progress,
            close_button,
        }
    }

    /// Explicit `icon` markup wins over the status icon; empty markup means no icon.
    fn icon_markup<'a>(config: &'a NotificationConfig, icons: &'a IconSet) -> &'a str {
        match &config.icon {
            Some(markup) => markup.as_str(),
            None => config
                .parsed_status()
                .map_or("", |status| icons.get(status.as_str())),
        }
    }

    fn apply_icon<R>(
        config: &NotificationConfig,
        target: &mut R,
        icons: &IconSet,
        root: NodeId,
    ) -> Option<NodeId>
    where
        R: RenderTarget + ?Sized,
    {
        if !config.show_icon.unwrap_or(true) {
            return None;
        }
        let markup = Self::icon_markup(config, icons);
        if markup.is_empty() {
            return None;
        }
        let icon = ElementSpec::new()
            .html(markup)
            .classes([classes::ICON])
            .build(target);
        target.append_child(root, icon);
        Some(icon)
    }

    fn apply_content<R>(
        config: &NotificationConfig,
        target: &mut R,
        root: NodeId,
        body: NodeId,
    ) -> (Option<NodeId>, Option<NodeId>)
    where
        R: RenderTarget + ?Sized,
    {
        let line = |content: &str, class: &str, target: &mut R| {
            if content.is_empty() {
                return None;
            }
            let node = ElementSpec::new().text(content).classes([class]).build(target);
            target.append_child(body, node);
            Some(node)
        };
        let title = line(config.title_or_empty(), classes::TITLE, target);
        let text = line(config.text_or_empty(), classes::TEXT, target);
        target.append_child(root, body);
        (title, text)
    }

    fn apply_action<R>(config: &NotificationConfig, target: &mut R, body: NodeId) -> Option<NodeId>
    where
        R: RenderTarget + ?Sized,
    {
        let action = config.action.as_ref()?;
        let wrapper = ElementSpec::with_classes([classes::ACTION]).build(target);
        let anchor = ElementSpec::new()
            .element("a")
            .text(action.title.as_deref().unwrap_or(""))
            .classes(action.classes.iter().flatten().map(String::as_str))
            .attribute("href", action.url.as_deref().unwrap_or(""))
            .build(target);
        target.append_child(wrapper, anchor);
        target.append_child(body, wrapper);
        Some(anchor)
    }

    fn apply_progress_bar<R>(timeout: AutoTimeout, target: &mut R, root: NodeId) -> Option<NodeId>
    where
        R: RenderTarget + ?Sized,
    {
        timeout.duration()?;
        let bar = ElementSpec::with_classes([classes::PROGRESS_BAR]).build(target);
        let progress = ElementSpec::with_classes([classes::PROGRESS]).build(target);
        target.set_style(progress, "animation-duration", &timeout.css_duration());
        target.append_child(bar, progress);
        target.set_style(progress, "animation-play-state", "running");
        target.append_child(root, bar);
        Some(progress)
    }

    fn apply_close_button<R>(
        config: &NotificationConfig,
        target: &mut R,
        icons: &IconSet,
        root: NodeId,
    ) -> Option<NodeId>
    where
        R: RenderTarget + ?Sized,
    {
        if !config.show_close_button.unwrap_or(true) {
            return None;
        }
        let button = ElementSpec::new()
            .html(icons.get("close"))
            .classes([classes::CLOSE])
            .build(target);
        target.append_child(root, button);
        Some(button)
    }
}
