//! Console output for command results
//!
//! Every result has a colored text rendering and a JSON rendering; the CLI
//! picks one according to `-o`.

use colored::Colorize;
use promptsmith_application::{CompareModelsOutput, GetModelResponseOutput, OptimizePromptOutput};
use promptsmith_domain::{CatalogModel, PromptDetail, PromptRecord, QuestionSet};
use serde::Serialize;

const PREVIEW_CHARS: usize = 60;

/// One row of the `models` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    pub model: CatalogModel,
    pub provider: String,
    pub vendor_model_id: String,
}

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Pretty JSON for any serializable result
    pub fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_questions(questions: &QuestionSet) -> String {
        let mut output = Self::section_header("Clarifying questions");
        for (i, question) in questions.iter().enumerate() {
            output.push_str(&format!("  {} {}\n", format!("{}.", i + 1).cyan(), question));
        }
        output
    }

    pub fn format_optimized(result: &OptimizePromptOutput) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Base prompt:".cyan().bold(),
            result.base_prompt
        ));
        output.push_str(&Self::section_header("Optimized prompt"));
        output.push_str(&result.optimized_prompt);
        output.push('\n');
        output
    }

    pub fn format_recommendations(models: &[CatalogModel]) -> String {
        let mut output = Self::section_header("Recommended models");
        for (i, model) in models.iter().enumerate() {
            output.push_str(&format!(
                "  {} {} {}\n",
                format!("{}.", i + 1).cyan(),
                model.as_str().bold(),
                format!("({})", model.family()).dimmed()
            ));
        }
        output
    }

    pub fn format_detail(detail: &PromptDetail) -> String {
        let prompt = &detail.prompt;
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            format!("Prompt #{}", prompt.id).cyan().bold(),
            prompt.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
        ));
        if let Some(user) = prompt.user_id {
            output.push_str(&format!("{} {}\n", "User:".dimmed(), user));
        }
        output.push_str(&format!("\n{}\n", prompt.base_prompt));

        if !detail.answers.is_empty() {
            output.push_str(&Self::section_header("Answers"));
            for answer in &detail.answers {
                output.push_str(&format!("  {} {}\n", "Q:".bold(), answer.question));
                output.push_str(&format!("  {} {}\n", "A:".green(), answer.answer));
            }
        }

        if !detail.outputs.is_empty() {
            output.push_str(&Self::section_header("Model outputs"));
            for record in &detail.outputs {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", record.model_name).yellow().bold(),
                    record.output
                ));
            }
        }
        output
    }

    pub fn format_history(prompts: &[PromptRecord]) -> String {
        if prompts.is_empty() {
            return format!("{}\n", "No prompts stored yet.".dimmed());
        }
        let mut output = String::new();
        for prompt in prompts {
            output.push_str(&format!(
                "{:>5}  {}  {}\n",
                prompt.id.to_string().cyan(),
                prompt.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                Self::preview(&prompt.base_prompt)
            ));
        }
        output
    }

    pub fn format_model_response(result: &GetModelResponseOutput) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n\n{}\n",
            format!("── {} (prompt #{}) ──", result.model_name, result.prompt_id)
                .yellow()
                .bold(),
            result.output
        ));
        output
    }

    pub fn format_comparison(result: &CompareModelsOutput) -> String {
        let mut output = Self::header(&format!("Prompt #{} across models", result.prompt_id));
        output.push('\n');
        for run in &result.runs {
            match (&run.output, &run.error) {
                (Some(text), None) => output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", run.model).yellow().bold(),
                    text
                )),
                (Some(text), Some(error)) => output.push_str(&format!(
                    "\n{}\n{}\n{}\n",
                    format!("── {} ──", run.model).yellow().bold(),
                    text,
                    error.red()
                )),
                (None, error) => output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", run.model).red().bold(),
                    error.as_deref().unwrap_or("Error: unknown failure")
                )),
            }
        }
        let succeeded = result.runs.iter().filter(|r| r.succeeded()).count();
        output.push_str(&format!(
            "\n{} {}/{} models answered\n",
            "Summary:".cyan().bold(),
            succeeded,
            result.runs.len()
        ));
        output
    }

    pub fn format_models(entries: &[ModelEntry]) -> String {
        let mut output = Self::section_header("Catalog models (priority order)");
        for entry in entries {
            output.push_str(&format!(
                "  {:<18} {:<10} {}\n",
                entry.model.as_str().bold(),
                entry.provider,
                entry.vendor_model_id.dimmed()
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// First line of `text`, shortened for one-line listings
    pub fn preview(text: &str) -> String {
        let first_line = text.lines().next().unwrap_or("");
        let mut shown: String = first_line.chars().take(PREVIEW_CHARS).collect();
        if shown.len() < text.trim_end().len() {
            shown.push_str("...");
        }
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use promptsmith_application::ModelRun;
    use promptsmith_domain::{AnswerRecord, ModelOutputRecord};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_questions_are_numbered() {
        plain();
        let questions: QuestionSet =
            serde_json::from_str(r#"["Who is the audience?","How long?"]"#).unwrap();
        let text = ConsoleFormatter::format_questions(&questions);
        assert!(text.contains("1. Who is the audience?"));
        assert!(text.contains("2. How long?"));
    }

    #[test]
    fn test_detail_lists_answers_and_outputs() {
        plain();
        let detail = PromptDetail {
            prompt: PromptRecord {
                id: 4,
                user_id: Some(7),
                base_prompt: "Write a limerick".to_string(),
                created_at: Utc::now(),
            },
            answers: vec![AnswerRecord {
                id: 1,
                prompt_id: 4,
                question: "Tone?".to_string(),
                answer: "silly".to_string(),
            }],
            outputs: vec![ModelOutputRecord {
                id: 1,
                prompt_id: 4,
                model_name: "Grok-3".to_string(),
                output: "There once was a crab".to_string(),
                created_at: Utc::now(),
            }],
        };
        let text = ConsoleFormatter::format_detail(&detail);
        assert!(text.contains("Prompt #4"));
        assert!(text.contains("User: 7"));
        assert!(text.contains("A: silly"));
        assert!(text.contains("── Grok-3 ──"));
        assert!(text.contains("There once was a crab"));
    }

    #[test]
    fn test_comparison_shows_failures_and_summary() {
        plain();
        let result = CompareModelsOutput {
            prompt_id: 2,
            runs: vec![
                ModelRun {
                    model: CatalogModel::Gpt41,
                    optimized_prompt_used: "p".to_string(),
                    output: Some("fine".to_string()),
                    error: None,
                },
                ModelRun {
                    model: CatalogModel::Grok3,
                    optimized_prompt_used: "p".to_string(),
                    output: None,
                    error: Some("Error: xAI Grok API key not configured".to_string()),
                },
            ],
        };
        let text = ConsoleFormatter::format_comparison(&result);
        assert!(text.contains("Error: xAI Grok API key not configured"));
        assert!(text.contains("1/2 models answered"));
    }

    #[test]
    fn test_comparison_shows_reply_that_was_not_stored() {
        plain();
        let result = CompareModelsOutput {
            prompt_id: 3,
            runs: vec![ModelRun {
                model: CatalogModel::ClaudeSonnet4,
                optimized_prompt_used: "p".to_string(),
                output: Some("kept reply".to_string()),
                error: Some("Error: Failed to store output: Storage error: disk full".to_string()),
            }],
        };
        let text = ConsoleFormatter::format_comparison(&result);
        assert!(text.contains("kept reply"));
        assert!(text.contains("Failed to store output"));
    }

    #[test]
    fn test_empty_history() {
        plain();
        assert!(ConsoleFormatter::format_history(&[]).contains("No prompts stored yet."));
    }

    #[test]
    fn test_preview() {
        assert_eq!(ConsoleFormatter::preview("short"), "short");
        assert_eq!(ConsoleFormatter::preview("line one\nline two"), "line one...");
        let long = "y".repeat(100);
        assert_eq!(ConsoleFormatter::preview(&long), format!("{}...", "y".repeat(60)));
    }

    #[test]
    fn test_json_uses_friendly_names() {
        let json = ConsoleFormatter::json(&[CatalogModel::ClaudeOpus4]);
        assert!(json.contains("\"Claude Opus 4\""));
    }
}
