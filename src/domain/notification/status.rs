// SPDX-License-Identifier: MPL-2.0
//! Notification status tags.

use std::fmt;

/// Style tag selecting a default icon and an extra root class.
///
/// The set is open: any tag other than the four known ones is kept as
/// [`Status::Other`] and still becomes a class, but has no built-in icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Other(String),
}

impl Status {
    /// Parses a tag, returning `None` for the empty string.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let status = match tag {
            "" => return None,
            "success" => Status::Success,
            "error" => Status::Error,
            "warning" => Status::Warning,
            "info" => Status::Info,
            other => Status::Other(other.to_string()),
        };
        Some(status)
    }

    /// The tag as written in configuration; also the class and icon key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
            Status::Warning => "warning",
            Status::Info => "info",
            Status::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse_to_variants() {
        assert_eq!(Status::parse("success"), Some(Status::Success));
        assert_eq!(Status::parse("error"), Some(Status::Error));
        assert_eq!(Status::parse("warning"), Some(Status::Warning));
        assert_eq!(Status::parse("info"), Some(Status::Info));
    }

    #[test]
    fn unknown_tags_are_kept() {
        let status = Status::parse("bogus").expect("non-empty tag");
        assert_eq!(status, Status::Other("bogus".to_string()));
        assert_eq!(status.as_str(), "bogus");
    }

    #[test]
    fn empty_tag_is_no_status() {
        assert_eq!(Status::parse(""), None);
    }
}
