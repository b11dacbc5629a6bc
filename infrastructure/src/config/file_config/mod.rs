//! Raw TOML configuration data types
//!
//! These structs mirror the config file exactly. Conversion into the
//! runtime types ([`ProviderConfig`], [`WorkflowConfig`]) happens here so
//! the rest of the crate never sees raw strings.

mod engine;
mod history;
mod output;
mod providers;

pub use engine::{FileQuestionnaireConfig, FileRecommenderConfig};
pub use history::{FileHistoryConfig, FileLoggingConfig, expand_home};
pub use output::FileOutputConfig;
pub use providers::{FileAnthropicConfig, FileApiConfig, FileProvidersConfig};

use promptsmith_application::WorkflowConfig;
use promptsmith_domain::{ConfigIssue, ProviderConfig, RecommenderOptions, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal configuration problems, raised by [`FileConfig::check`]
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", messages(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn messages(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub questionnaire: FileQuestionnaireConfig,
    pub recommender: FileRecommenderConfig,
    pub providers: FileProvidersConfig,
    pub history: FileHistoryConfig,
    pub logging: FileLoggingConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.recommender.parse_match_mode().1);
        issues.extend(self.providers.validate());
        issues
    }

    /// Fail on error-level issues; hand back the warnings.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(|i| i.severity == Severity::Error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(errors))
        }
    }

    pub fn to_provider_config(&self) -> ProviderConfig {
        self.providers.to_provider_config()
    }

    pub fn to_workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig {
            questionnaire_seed: self.questionnaire.seed,
            questionnaire: self.questionnaire.to_options(),
            recommender: RecommenderOptions {
                match_mode: self.recommender.parse_match_mode().0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptsmith_domain::{ConfigIssueCode, MatchMode, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[questionnaire]
seed = 42
library_question = true

[recommender]
match_mode = "ranked-keywords"

[providers]
max_retries = 1
timeout_secs = 30

[providers.gemini]
base_url = "http://localhost:8080/v1beta"

[providers.models]
"Gemini 2.5 Flash" = "gemini-2.0-flash"

[history]
path = "/tmp/promptsmith/history.json"

[logging]
transcript = "promptsmith.jsonl"

[output]
format = "json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let workflow = config.to_workflow_config();
        assert_eq!(workflow.questionnaire_seed, Some(42));
        assert!(workflow.questionnaire.library_question);
        assert_eq!(workflow.recommender.match_mode, MatchMode::RankedKeywords);

        let providers = config.to_provider_config();
        assert_eq!(providers.max_retries, 1);
        assert_eq!(providers.timeout_secs, 30);
        assert_eq!(providers.gemini.base_url, "http://localhost:8080/v1beta");
        assert_eq!(providers.model_overrides.len(), 1);

        assert_eq!(config.logging.transcript.as_deref(), Some("promptsmith.jsonl"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.to_workflow_config(), WorkflowConfig::default());
        assert!(config.output.color);
        assert!(config.logging.transcript.is_none());
    }

    #[test]
    fn test_check_separates_errors_from_warnings() {
        let mut config = FileConfig::default();
        config.recommender.match_mode = "semantic".to_string();
        let warnings = config.check().unwrap();
        assert_eq!(warnings[0].code, ConfigIssueCode::UnknownMatchMode);

        config.providers.timeout_secs = 0;
        let err = config.check().unwrap_err();
        assert!(err.to_string().contains("providers.timeout_secs cannot be 0"));
    }
}
