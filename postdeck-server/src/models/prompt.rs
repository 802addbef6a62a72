//! Agent prompt validation

use super::ValidationError;

/// Validated agent prompt: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentPrompt(String);

impl AgentPrompt {
    /// Create a prompt from operator input.
    ///
    /// Surrounding whitespace is removed; what remains must not be empty.
    ///
    /// # Example
    /// ```
    /// use postdeck_server::models::AgentPrompt;
    ///
    /// assert_eq!(AgentPrompt::new("  Write in first person.\n").unwrap().as_str(), "Write in first person.");
    /// assert!(AgentPrompt::new(" \n\t ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "prompt" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Get the prompt as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_inner_whitespace() {
        let p = AgentPrompt::new("  line one\n\nline two  ").unwrap();
        assert_eq!(p.as_str(), "line one\n\nline two");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            AgentPrompt::new("").unwrap_err(),
            ValidationError::Empty { field: "prompt" }
        );
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(AgentPrompt::new("   \r\n").is_err());
    }
}
