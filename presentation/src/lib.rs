//! Presentation layer for promptsmith
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive questionnaire session.

pub mod cli;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::{ConsoleFormatter, ModelEntry};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use session::SessionRepl;
