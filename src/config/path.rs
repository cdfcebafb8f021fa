// SPDX-License-Identifier: MPL-2.0
//! Dotted key path lookup over nested configuration values.
//!
//! [`resolve`] walks a [`serde_json::Value`] one segment at a time and
//! falls back to a caller supplied default as soon as a step cannot be
//! taken. It never fails and never copies: the returned reference points
//! either into the searched value or at the default.
//!
//! ```
//! use serde_json::json;
//! use toastdeck::config::path::resolve;
//!
//! let config = json!({ "action": { "url": "/undo" } });
//! let fallback = json!("");
//!
//! assert_eq!(resolve(Some(&config), "action.url", &fallback), "/undo");
//! assert_eq!(resolve(Some(&config), "action.title", &fallback), "");
//! ```

use serde_json::Value;

/// An ordered sequence of segment names.
///
/// Built from a dotted string (`"action.title"`) or from segments that
/// were already split. The empty string is the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    /// Splits a dotted path into its segments.
    #[must_use]
    pub fn parse(dotted: &'a str) -> Self {
        if dotted.is_empty() {
            return Self::default();
        }
        Self {
            segments: dotted.split('.').collect(),
        }
    }

    /// Returns the segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns true if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<'a> From<&'a str> for KeyPath<'a> {
    fn from(dotted: &'a str) -> Self {
        Self::parse(dotted)
    }
}

impl<'a> From<&'a [&'a str]> for KeyPath<'a> {
    fn from(segments: &'a [&'a str]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for KeyPath<'a> {
    fn from(segments: [&'a str; N]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }
}

impl<'a> From<Vec<&'a str>> for KeyPath<'a> {
    fn from(segments: Vec<&'a str>) -> Self {
        Self { segments }
    }
}

/// Resolves `path` against `root`, returning `default` on the first step
/// that cannot be taken.
///
/// A step fails when the current value is absent or `null`, when it is not
/// an object or array, or when the segment is missing. Arrays are indexed
/// by decimal segments. An explicit `null` at the end of the path is
/// returned as-is, like any other resolved value. The empty path returns
/// `root` itself.
pub fn resolve<'v, 'p>(
    root: Option<&'v Value>,
    path: impl Into<KeyPath<'p>>,
    default: &'v Value,
) -> &'v Value {
    let path = path.into();
    let Some(mut current) = root else {
        return default;
    };

    for segment in path.segments() {
        let next = match current {
            Value::Object(map) => map.get(*segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return default,
        }
    }

    current
}

/// Returns true if `key` is present at the top level of `root`.
///
/// Unlike [`resolve`], the key is not split on dots.
#[must_use]
pub fn has_key(root: Option<&Value>, key: &str) -> bool {
    root.and_then(Value::as_object)
        .is_some_and(|map| map.contains_key(key))
}
