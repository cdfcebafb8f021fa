// SPDX-License-Identifier: MPL-2.0
//! Per-notification configuration.
//!
//! [`NotificationConfig`] enumerates every recognized option. It can be
//! built in code with the `with_*` methods, deserialized with serde, or
//! converted fail-soft from an arbitrary JSON value with
//! [`NotificationConfig::from_value`], which reads each option through the
//! dotted-path resolver and treats wrongly typed values as absent.

use crate::config::path::{has_key, resolve};
use crate::domain::notification::Status;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level keys understood by [`NotificationConfig::from_value`].
const KNOWN_KEYS: [&str; 12] = [
    "id",
    "title",
    "text",
    "status",
    "icon",
    "showIcon",
    "action",
    "autotimeout",
    "showCloseButton",
    "removeDelay",
    "stack",
    "classes",
];

/// Call-to-action link shown under the notification text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
}

impl ActionConfig {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            classes: None,
        }
    }

    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }
}

/// Options of a single notification. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationConfig {
    /// Registry id; generated when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Style tag, added as a class and used to pick the default icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Raw icon markup overriding the status icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_icon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionConfig>,
    /// Auto-dismiss timeout in ms; `<= 0` disables it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotimeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_close_button: Option<bool>,
    /// Delay between closing and detaching, in ms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Root classes replacing the default list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
}

impl NotificationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a notification with a status and a title.
    pub fn status_titled(status: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new().with_status(status).with_title(title)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, markup: impl Into<String>) -> Self {
        self.icon = Some(markup.into());
        self
    }

    #[must_use]
    pub fn with_show_icon(mut self, show: bool) -> Self {
        self.show_icon = Some(show);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ActionConfig) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn with_autotimeout(mut self, millis: i64) -> Self {
        self.autotimeout = Some(millis);
        self
    }

    #[must_use]
    pub fn with_close_button(mut self, show: bool) -> Self {
        self.show_close_button = Some(show);
        self
    }

    #[must_use]
    pub fn with_remove_delay(mut self, millis: u64) -> Self {
        self.remove_delay = Some(millis);
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    /// Title, or the empty string.
    #[must_use]
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Text, or the empty string.
    #[must_use]
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// True when there is neither a title nor a text to show.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title_or_empty().is_empty() && self.text_or_empty().is_empty()
    }

    /// Parsed status, `None` when absent or empty.
    #[must_use]
    pub fn parsed_status(&self) -> Option<Status> {
        self.status.as_deref().and_then(Status::parse)
    }

    /// Serializes the present options into a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Parses a JSON document fail-soft. Only malformed JSON is an error.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Reads every recognized option from `value`.
    ///
    /// Never fails. Non-object roots yield the empty config and unrecognized
    /// keys are ignored. Values of the wrong type are treated as absent,
    /// except a boolean or `null` `autotimeout`.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let root = Some(value);

        if let Some(map) = value.as_object() {
            for key in map.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
                tracing::debug!(key = %key, "Ignoring unrecognized notification option");
            }
        }

        Self {
            id: scalar_text(root, "id"),
            title: scalar_text(root, "title"),
            text: scalar_text(root, "text"),
            status: scalar_text(root, "status"),
            icon: scalar_text(root, "icon"),
            show_icon: truthiness(root, "showIcon"),
            action: action(root),
            autotimeout: timeout(root),
            show_close_button: truthiness(root, "showCloseButton"),
            remove_delay: integer(root, "removeDelay").map(|ms| u64::try_from(ms).unwrap_or(0)),
            stack: scalar_text(root, "stack"),
            classes: string_list(root, "classes"),
        }
    }
}

impl From<&Value> for NotificationConfig {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

fn scalar_text(root: Option<&Value>, path: &str) -> Option<String> {
    match resolve(root, path, &Value::Null) {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Present keys are read with loose truthiness; an explicit `null` is false.
fn truthiness(root: Option<&Value>, key: &str) -> Option<bool> {
    if !has_key(root, key) {
        return None;
    }
    let flag = match resolve(root, key, &Value::Null) {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    Some(flag)
}

fn integer(root: Option<&Value>, path: &str) -> Option<i64> {
    match resolve(root, path, &Value::Null) {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|n| n as i64)),
        Value::String(text) => text.trim().parse::<f64>().ok().map(|n| n as i64),
        _ => None,
    }
}

/// A present `autotimeout` is never left to the default: `null` and `false`
/// disable auto-dismiss, `true` counts as 1ms.
fn timeout(root: Option<&Value>) -> Option<i64> {
    match resolve(root, "autotimeout", &Value::Null) {
        Value::Null if has_key(root, "autotimeout") => Some(0),
        Value::Bool(flag) => Some(i64::from(*flag)),
        _ => integer(root, "autotimeout"),
    }
}

fn string_list(root: Option<&Value>, path: &str) -> Option<Vec<String>> {
    match resolve(root, path, &Value::Null) {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(class) => Some(class.clone()),
                    Value::Number(number) => Some(number.to_string()),
                    _ => None,
                })
                .collect(),
        ),
        Value::String(classes) => Some(classes.split_whitespace().map(str::to_string).collect()),
        _ => None,
    }
}

/// `null` or absent disables the action; any other value enables it, with
/// its fields read from the nested object when there is one.
fn action(root: Option<&Value>) -> Option<ActionConfig> {
    if resolve(root, "action", &Value::Null).is_null() {
        return None;
    }
    Some(ActionConfig {
        title: scalar_text(root, "action.title"),
        url: scalar_text(root, "action.url"),
        classes: string_list(root, "action.classes"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_fields() {
        let config = NotificationConfig::status_titled("success", "Saved")
            .with_text("All changes stored")
            .with_autotimeout(0)
            .with_stack("bottom");
        assert_eq!(config.status.as_deref(), Some("success"));
        assert_eq!(config.title_or_empty(), "Saved");
        assert_eq!(config.autotimeout, Some(0));
        assert_eq!(config.parsed_status(), Some(Status::Success));
    }

    #[test]
    fn blank_when_title_and_text_are_empty() {
        assert!(NotificationConfig::new().is_blank());
        assert!(NotificationConfig::new().with_title("").is_blank());
        assert!(!NotificationConfig::new().with_text("x").is_blank());
    }

    #[test]
    fn to_value_uses_camel_case_and_skips_absent() {
        let value = NotificationConfig::new()
            .with_title("Hi")
            .with_close_button(false)
            .with_remove_delay(100)
            .to_value();
        assert_eq!(
            value,
            json!({ "title": "Hi", "showCloseButton": false, "removeDelay": 100 })
        );
    }

    #[test]
    fn from_value_reads_nested_action() {
        let value = json!({
            "title": "Deleted",
            "action": { "title": "Undo", "url": "/undo", "classes": ["btn"] },
        });
        let config = NotificationConfig::from_value(&value);
        assert_eq!(
            config.action,
            Some(ActionConfig::new("Undo", "/undo").with_classes(["btn"]))
        );
    }

    #[test]
    fn null_action_is_absent_but_other_values_enable_it() {
        let config = NotificationConfig::from_value(&json!({ "action": null }));
        assert_eq!(config.action, None);

        let config = NotificationConfig::from_value(&json!({ "action": "go" }));
        assert_eq!(config.action, Some(ActionConfig::default()));
    }

    #[test]
    fn wrong_types_fall_back_to_absent() {
        let value = json!({
            "title": { "nested": true },
            "autotimeout": [1, 2],
            "classes": 42,
            "removeDelay": -5,
        });
        let config = NotificationConfig::from_value(&value);
        assert_eq!(config.title, None);
        assert_eq!(config.autotimeout, None);
        assert_eq!(config.classes, None);
        assert_eq!(config.remove_delay, Some(0));
    }

    #[test]
    fn scalars_are_coerced_like_loose_config() {
        let value = json!({
            "id": 12,
            "autotimeout": "250",
            "showIcon": 0,
            "showCloseButton": null,
            "classes": "toast toast-dark",
        });
        let config = NotificationConfig::from_value(&value);
        assert_eq!(config.id.as_deref(), Some("12"));
        assert_eq!(config.autotimeout, Some(250));
        assert_eq!(config.show_icon, Some(false));
        assert_eq!(config.show_close_button, Some(false));
        assert_eq!(
            config.classes,
            Some(vec!["toast".to_string(), "toast-dark".to_string()])
        );
    }

    #[test]
    fn present_non_numeric_timeout_disables_auto_dismiss() {
        let config = NotificationConfig::from_value(&json!({ "autotimeout": null }));
        assert_eq!(config.autotimeout, Some(0));

        let config = NotificationConfig::from_value(&json!({ "autotimeout": false }));
        assert_eq!(config.autotimeout, Some(0));

        let config = NotificationConfig::from_value(&json!({ "autotimeout": true }));
        assert_eq!(config.autotimeout, Some(1));

        let config = NotificationConfig::from_value(&json!({ "title": "x" }));
        assert_eq!(config.autotimeout, None);
    }

    #[test]
    fn non_object_root_is_empty_config() {
        assert_eq!(
            NotificationConfig::from_value(&json!("hello")),
            NotificationConfig::default()
        );
        assert_eq!(
            NotificationConfig::from_value(&Value::Null),
            NotificationConfig::default()
        );
    }

    #[test]
    fn from_json_rejects_only_malformed_input() {
        assert!(NotificationConfig::from_json("{ not json").is_err());
        let config = NotificationConfig::from_json(r#"{"text":"ok","unknown":1}"#)
            .expect("valid json");
        assert_eq!(config.text.as_deref(), Some("ok"));
    }

    #[test]
    fn serde_deserialization_accepts_camel_case() {
        let config: NotificationConfig =
            serde_json::from_str(r#"{"showIcon":false,"removeDelay":10,"autotimeout":-1}"#)
                .expect("valid config");
        assert_eq!(config.show_icon, Some(false));
        assert_eq!(config.remove_delay, Some(10));
        assert_eq!(config.autotimeout, Some(-1));
    }
}
