//! Unconditional optimization strategies
//!
//! Each strategy checks the base prompt (case-insensitively) first and
//! returns `None` when the prompt already carries its phrase.

use crate::core::string::contains_ignore_case;

pub const ACT_AS_EXPERT: &str = "Act as an expert in the relevant domain.";
pub const STEP_BY_STEP: &str = "Think step by step to ensure a comprehensive and accurate response.";
pub const CLARITY: &str =
    "Ensure your response is clear, concise, and directly addresses the query.";

/// Vendor flourishes keyed by a substring of the target model name.
/// The first hit wins.
pub const TARGET_FLOURISHES: [(&str, &str); 4] = [
    ("gpt-4", "Leverage advanced reasoning capabilities for GPT-4."),
    (
        "claude",
        "Be thorough and analytical in your response, as expected for Claude models.",
    ),
    ("gemini", "Utilize Gemini's multimodal understanding if applicable."),
    (
        "grok",
        "Draw on current, real-world knowledge where relevant, as expected for Grok models.",
    ),
];

/// Generic persona, unless the prompt already sets one.
pub fn role_instruction(base_prompt: &str) -> Option<&'static str> {
    let has_persona = contains_ignore_case(base_prompt, "act as")
        || contains_ignore_case(base_prompt, "you are an expert");
    (!has_persona).then_some(ACT_AS_EXPERT)
}

pub fn step_by_step_instruction(base_prompt: &str) -> Option<&'static str> {
    let present = contains_ignore_case(base_prompt, "step by step")
        || contains_ignore_case(base_prompt, "step-by-step");
    (!present).then_some(STEP_BY_STEP)
}

pub fn clarity_instruction(base_prompt: &str) -> Option<&'static str> {
    (!contains_ignore_case(base_prompt, "clear and concise")).then_some(CLARITY)
}

pub fn target_flourish(target_model: &str) -> Option<&'static str> {
    let target = target_model.to_lowercase();
    TARGET_FLOURISHES
        .iter()
        .find(|(cue, _)| target.contains(cue))
        .map(|(_, sentence)| *sentence)
}
