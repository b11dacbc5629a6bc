//! Prompt optimizer
//!
//! Turns a base prompt plus questionnaire answers into an "optimized" prompt
//! by prepending an optional role sentence and appending instruction
//! fragments. The output always contains the base prompt verbatim.
//!
//! - [`rules`]: per-answer rules (first match wins)
//! - [`strategies`]: unconditional strategies, idempotent against the base prompt

pub mod rules;
pub mod strategies;

use crate::core::answer::QuestionnaireAnswer;
use rules::{AnswerDirective, interpret_answer};
use strategies::{clarity_instruction, role_instruction, step_by_step_instruction, target_flourish};

/// Build the optimized prompt.
///
/// `target_model` only selects a vendor flourish; it never gates the rules.
pub fn optimize_prompt(
    base_prompt: &str,
    answers: &[QuestionnaireAnswer],
    target_model: Option<&str>,
) -> String {
    let mut role: Option<String> = None;
    let mut fragments: Vec<String> = Vec::new();

    for answer in answers {
        match interpret_answer(answer) {
            Some(AnswerDirective::Role(sentence)) => {
                if role.is_none() {
                    role = Some(sentence);
                }
            }
            Some(AnswerDirective::Append(sentence)) => fragments.push(sentence),
            None => {}
        }
    }

    if role.is_none() {
        fragments.extend(role_instruction(base_prompt).map(str::to_string));
    }
    fragments.extend(step_by_step_instruction(base_prompt).map(str::to_string));
    fragments.extend(clarity_instruction(base_prompt).map(str::to_string));
    if let Some(target) = target_model {
        fragments.extend(target_flourish(target).map(str::to_string));
    }

    assemble(role.as_deref(), base_prompt, &fragments)
}

fn assemble(role: Option<&str>, base_prompt: &str, fragments: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(fragments.len() + 2);
    if let Some(role) = role {
        parts.push(role.trim());
    }
    if !base_prompt.is_empty() {
        parts.push(base_prompt);
    }
    parts.extend(
        fragments
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty()),
    );
    parts.join("\n")
}
