//! Configuration issues.
//!
//! Config loading never panics on bad values. Each problem becomes a
//! [`ConfigIssue`]; warnings fall back to defaults, errors stop the run.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name is empty.
    EmptyModelName { field: String },
    /// A string value does not name a known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric value violates a constraint.
    InvalidConstraint { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_constructors() {
        let w = ConfigIssue::warning(
            ConfigIssueCode::InvalidConstraint {
                field: "chunking.max_words_per_chunk".to_string(),
            },
            "must be positive",
        );
        assert!(!w.is_error());

        let e = ConfigIssue::error(
            ConfigIssueCode::EmptyModelName {
                field: "models.full".to_string(),
            },
            "empty",
        );
        assert!(e.is_error());
    }
}
