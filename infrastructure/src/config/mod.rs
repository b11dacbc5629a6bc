//! Configuration loading
//!
//! Sources, highest priority first:
//!
//! 1. `--config <path>`
//! 2. Project root: `./promptsmith.toml` or `./.promptsmith.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/promptsmith/config.toml`
//! 4. `PROMPTSMITH_*` environment variables (`__` separates sections)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnthropicConfig, FileApiConfig, FileConfig, FileHistoryConfig,
    FileLoggingConfig, FileOutputConfig, FileProvidersConfig, FileQuestionnaireConfig,
    FileRecommenderConfig, expand_home,
};
pub use loader::ConfigLoader;
