//! Per-answer optimization rules

use crate::core::answer::QuestionnaireAnswer;
use crate::signal::{Category, has_signal};

/// What a single answer contributes to the optimized prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerDirective {
    /// Persona sentence placed before the base prompt
    Role(String),
    /// Instruction appended after the base prompt
    Append(String),
}

const ROLE_ANSWER_CUES: &[&str] = &["act as", "role of", "expert in"];
const ROLE_QUESTION_CUES: &[&str] = &["role"];

/// Phrases after which the role domain starts. Checked in order, so the
/// longer "act as ..." forms must precede "act as".
const ROLE_MARKERS: &[&str] = &[
    "expert in ",
    "role of ",
    "act as an expert ",
    "act as an ",
    "act as a ",
    "act as ",
];

const FORMAT_INSTRUCTIONS: &[(&str, &str)] = &[
    ("json", "Please provide the output in JSON format."),
    ("markdown", "Please provide the output in Markdown format."),
    ("xml", "Please provide the output in XML format."),
    ("list", "Please provide the output as a list."),
];

/// Apply the first matching rule to one answer.
///
/// Returns `None` for no-signal answers.
pub fn interpret_answer(answer: &QuestionnaireAnswer) -> Option<AnswerDirective> {
    if answer.is_no_signal() {
        return None;
    }

    let question = answer.question_lower();
    let answer_lower = answer.answer_lower();
    let text = answer.answer.trim();

    if has_signal(&answer_lower, ROLE_ANSWER_CUES) || has_signal(&question, ROLE_QUESTION_CUES) {
        let domain = extract_role_domain(&answer.answer);
        return Some(AnswerDirective::Role(format!("You are an expert in {domain}.")));
    }

    if Category::Format.detect(&question) {
        if let Some((_, instruction)) = FORMAT_INSTRUCTIONS
            .iter()
            .find(|(cue, _)| answer_lower.contains(cue))
        {
            return Some(AnswerDirective::Append((*instruction).to_string()));
        }
    }

    let sentence = if Category::Length.detect(&question) {
        format!("Ensure the response has a length of approximately: {text}.")
    } else if Category::Audience.detect(&question) {
        format!("The target audience is: {text}.")
    } else if question.contains("programming language") {
        format!("The preferred programming language is {text}.")
    } else if Category::Tone.detect(&question) {
        format!("Use a {text} tone/style.")
    } else {
        format!("Consider also: {} - {text}.", answer.question.trim())
    };
    Some(AnswerDirective::Append(sentence))
}

/// Domain phrase following the first role marker, or the whole answer.
pub fn extract_role_domain(answer: &str) -> String {
    // Lowercase per char, remembering where each original char starts in
    // the lowered text. Lowercasing may change a char's byte length.
    let mut lowered = String::with_capacity(answer.len());
    let mut starts: Vec<(usize, usize)> = Vec::with_capacity(answer.len() + 1);
    for (at, c) in answer.char_indices() {
        starts.push((lowered.len(), at));
        lowered.extend(c.to_lowercase());
    }
    starts.push((lowered.len(), answer.len()));

    let tail = ROLE_MARKERS
        .iter()
        .find_map(|marker| {
            let end = lowered.find(marker)? + marker.len();
            let original = starts
                .iter()
                .find(|(low, _)| *low == end)
                .map(|&(_, at)| &answer[at..]);
            // Markers end in ASCII, so `end` is a boundary of `lowered`
            Some(original.unwrap_or(&lowered[end..]))
        })
        .map(strip_trailing_punctuation)
        .filter(|domain| !domain.is_empty());

    match tail {
        Some(domain) => domain.to_string(),
        None => strip_trailing_punctuation(answer).to_string(),
    }
}

fn strip_trailing_punctuation(s: &str) -> &str {
    s.trim()
        .trim_end_matches(['.', ',', '!', '?', ';', ':'])
        .trim_end()
}
