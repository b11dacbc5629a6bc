//! Structured configuration issues.
//!
//! Config validation does not fail fast; it collects every problem it finds
//! as a [`ConfigIssue`] so callers can print warnings and decide whether to
//! abort based on [`Severity`].

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `recommender.match_mode` is not a known mode.
    UnknownMatchMode,
    /// A `providers.models` key is not a catalog model.
    UnknownCatalogModel,
    /// A `providers.models` override maps to an empty vendor id.
    EmptyModelOverride,
    /// A provider's `base_url` is empty.
    EmptyBaseUrl,
    /// `providers.timeout_secs` is zero.
    ZeroTimeout,
    /// A provider's `max_tokens` is zero.
    ZeroMaxTokens,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
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

    /// Whether any issue in the list is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
