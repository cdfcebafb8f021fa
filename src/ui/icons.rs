// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for inline SVG markup.
//!
//! Icons are inserted as raw markup, so they inherit `currentColor` from the
//! notification's stylesheet and need no asset loading.
//!
//! # Module Structure
//!
//! - **`icons::*`** - One function per built-in icon returning its markup
//! - [`IconSet`] - Name-keyed table used by notifications, overridable per notifier
//!
//! # Naming Convention
//!
//! Built-in names double as status tags (`success`, `error`, `warning`,
//! `info`) plus `close` for the dismiss button.

use std::collections::BTreeMap;

/// Macro to define an icon function returning static markup.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> &'static str {
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none"  stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path stroke="none" d="M0 0h24v24H0z" fill="none"/>"#,
                $body,
                "</svg>"
            )
        }
    };
}

define_icon!(
    success,
    r#"<path d="M12 12m-9 0a9 9 0 1 0 18 0a9 9 0 1 0 -18 0" /><path d="M9 12l2 2l4 -4" />"#,
    "Circle with a check mark."
);
define_icon!(
    error,
    r#"<path d="M12 12m-9 0a9 9 0 1 0 18 0a9 9 0 1 0 -18 0" /><path d="M9 12l6 0" />"#,
    "Circle with a horizontal bar."
);
define_icon!(
    warning,
    r#"<path d="M3 12a9 9 0 1 0 18 0a9 9 0 0 0 -18 0" /><path d="M12 8v4" /><path d="M12 16h.01" />"#,
    "Circle with an exclamation mark."
);
define_icon!(
    info,
    r#"<path d="M3 12a9 9 0 1 0 18 0a9 9 0 0 0 -18 0" /><path d="M12 9h.01" /><path d="M11 12h1v4h1" />"#,
    "Circle with an information mark."
);
define_icon!(
    close,
    r#"<path d="M18 6l-12 12" /><path d="M6 6l12 12" />"#,
    "Diagonal cross."
);

/// Names of the built-in icons.
pub const BUILTIN_NAMES: [&str; 5] = ["success", "error", "warning", "info", "close"];

/// Name-keyed icon markup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    icons: BTreeMap<String, String>,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IconSet {
    /// The five built-in icons.
    #[must_use]
    pub fn builtin() -> Self {
        let icons = [
            ("success", success()),
            ("error", error()),
            ("warning", warning()),
            ("info", info()),
            ("close", close()),
        ]
        .into_iter()
        .map(|(name, markup)| (name.to_string(), markup.to_string()))
        .collect();
        Self { icons }
    }

    /// An empty set; every lookup yields empty markup.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            icons: BTreeMap::new(),
        }
    }

    /// Returns the markup for `name`, or the empty string if unknown.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.icons.get(name).map_or("", String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Adds or replaces an icon, returning the previous markup.
    pub fn insert(&mut self, name: impl Into<String>, markup: impl Into<String>) -> Option<String> {
        self.icons.insert(name.into(), markup.into())
    }

    /// Applies overrides on top of the current set.
    pub fn extend<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, markup) in overrides {
            self.insert(name, markup);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_has_all_names() {
        let icons = IconSet::builtin();
        for name in BUILTIN_NAMES {
            assert!(icons.contains(name), "missing icon {name}");
            assert!(icons.get(name).starts_with("<svg"));
            assert!(icons.get(name).ends_with("</svg>"));
        }
        assert_eq!(icons.names().count(), BUILTIN_NAMES.len());
    }

    #[test]
    fn builtin_icons_are_distinct() {
        let icons = IconSet::builtin();
        for (i, a) in BUILTIN_NAMES.iter().enumerate() {
            for b in &BUILTIN_NAMES[i + 1..] {
                assert_ne!(icons.get(a), icons.get(b));
            }
        }
    }

    #[test]
    fn unknown_names_yield_empty_markup() {
        let icons = IconSet::builtin();
        assert_eq!(icons.get("bogus"), "");
        assert_eq!(icons.get(""), "");
    }

    #[test]
    fn overrides_replace_builtins() {
        let mut icons = IconSet::builtin();
        icons.extend([("success", "<svg/>")]);
        assert_eq!(icons.get("success"), "<svg/>");
        assert_eq!(icons.get("error"), error());
    }
}
