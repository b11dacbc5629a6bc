//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use promptsmith_domain::QuestionnaireAnswer;
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for promptsmith_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => promptsmith_domain::OutputFormat::Text,
            OutputFormat::Json => promptsmith_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for promptsmith
#[derive(Parser, Debug)]
#[command(name = "promptsmith")]
#[command(author, version, about = "Refine prompts through a short questionnaire and route them to the right LLM")]
#[command(long_about = r#"
promptsmith turns a rough prompt into a better one.

The workflow has three steps:
1. Questions: a few clarifying questions are generated for your prompt
2. Optimize: your answers are folded into an improved prompt
3. Recommend: the catalog models best suited to the prompt are suggested

Prompts, answers and model outputs are kept in a local history so a stored
prompt can be sent to one model (respond) or several at once (compare).

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./promptsmith.toml       Project-level config
3. ~/.config/promptsmith/config.toml   Global config

Example:
  promptsmith questions "Write a blog post about Rust"
  promptsmith optimize "Write a story" -a "What is the main genre of the story?=fantasy"
  promptsmith submit "Explain TCP vs UDP" -a "Who is the audience?=beginners"
  promptsmith compare 1 -m "GPT-4.1" -m "Claude Sonnet 4"
  promptsmith session
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to `[output] format`, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate clarifying questions for a prompt
    Questions {
        prompt: String,
        /// Seed for a reproducible question set
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build the optimized prompt from a prompt and answers
    Optimize {
        prompt: String,
        /// Answer as QUESTION=ANSWER (repeatable)
        #[arg(short, long = "answer", value_name = "QUESTION=ANSWER")]
        answers: Vec<QuestionnaireAnswer>,
        /// Catalog model the prompt is meant for
        #[arg(short, long, value_name = "MODEL")]
        target: Option<String>,
    },

    /// Recommend catalog models for a prompt and answers
    Recommend {
        prompt: String,
        /// Answer as QUESTION=ANSWER (repeatable)
        #[arg(short, long = "answer", value_name = "QUESTION=ANSWER")]
        answers: Vec<QuestionnaireAnswer>,
    },

    /// Store a prompt and its answers in the history
    Submit {
        prompt: String,
        /// Answer as QUESTION=ANSWER (repeatable)
        #[arg(short, long = "answer", value_name = "QUESTION=ANSWER")]
        answers: Vec<QuestionnaireAnswer>,
        #[arg(long)]
        user_id: Option<u64>,
    },

    /// Send a stored prompt to one model and record the reply
    Respond {
        prompt_id: u64,
        /// Catalog model name, e.g. "GPT-4.1" or "claude-sonnet-4"
        #[arg(short, long, value_name = "MODEL")]
        model: String,
    },

    /// Send a stored prompt to several models concurrently
    Compare {
        prompt_id: u64,
        /// Models to compare (repeatable; defaults to the recommended models)
        #[arg(short, long, value_name = "MODEL")]
        model: Vec<String>,
    },

    /// List stored prompts
    History {
        #[arg(long)]
        user_id: Option<u64>,
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// Show a stored prompt with its answers and outputs
    Show { prompt_id: u64 },

    /// List catalog models and their vendor routing
    Models,

    /// Interactive questionnaire: answer, optimize, recommend and dispatch
    Session {
        /// Starting prompt (asked for when omitted)
        prompt: Option<String>,
        #[arg(long)]
        user_id: Option<u64>,
        /// Seed for a reproducible question set
        #[arg(long)]
        seed: Option<u64>,
    },
}
