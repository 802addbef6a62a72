//! Post status values
//!
//! The `posts.status` column is a free VARCHAR written by the pipeline, so
//! rows read back may hold anything. Operator edits are parsed into
//! [`PostStatus`] before they reach the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Lifecycle status of a generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Fresh output from the agent (column default)
    #[default]
    Generated,
    /// Being reworked by the operator
    Draft,
    /// Posted on the target network
    Published,
    /// Generation failed for this page
    Error,
}

impl PostStatus {
    /// Every status, in the order the edit form offers them.
    pub const ALL: [PostStatus; 4] = [
        PostStatus::Generated,
        PostStatus::Draft,
        PostStatus::Published,
        PostStatus::Error,
    ];

    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Error => "error",
        }
    }

    /// Human-readable label for list and detail views.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generated => "Generated",
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Error => "Error",
        }
    }

    /// Label for a raw column value, falling back to the value itself for
    /// statuses outside the known set.
    pub fn label_for(raw: &str) -> &str {
        raw.parse::<PostStatus>().map(|s| s.label()).unwrap_or(raw)
    }
}

impl FromStr for PostStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "generated" => Ok(Self::Generated),
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "error" => Ok(Self::Error),
            other => Err(ValidationError::InvalidVariant {
                field: "status",
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        for status in PostStatus::ALL {
            assert_eq!(status.as_str().parse::<PostStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_value() {
        let err = "archived".parse::<PostStatus>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVariant { field: "status", .. }));
    }

    #[test]
    fn rejects_wrong_case() {
        assert!("Published".parse::<PostStatus>().is_err());
    }

    #[test]
    fn label_for_unknown_passes_through() {
        assert_eq!(PostStatus::label_for("published"), "Published");
        assert_eq!(PostStatus::label_for("queued"), "queued");
    }

    #[test]
    fn default_is_generated() {
        assert_eq!(PostStatus::default(), PostStatus::Generated);
    }
}
