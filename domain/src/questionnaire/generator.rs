//! Questionnaire generator
//!
//! Produces 3 to 5 clarifying questions for a base prompt, mixing
//! context-triggered questions with the general pool. The question count and
//! the order of non-priority picks come from an injected RNG, so callers that
//! need reproducible output pass a seeded generator.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::questions::{
    CODE_TRIGGER, GENERAL, HEADLINES, LANGUAGE, LIBRARIES, MORE_DETAILS, PRIMARY_GOAL, TRIGGERS,
};
use crate::signal::has_signal;

/// Lower bound on the number of questions returned
pub const MIN_QUESTIONS: usize = 3;
/// Upper bound on the number of questions returned
pub const MAX_QUESTIONS: usize = 5;

const MAX_CONTEXT_QUESTIONS: usize = 3;
const MAX_HEADLINES: usize = 2;
const SHORT_PROMPT_WORDS: usize = 10;

/// Knobs for question selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireOptions {
    /// Also ask about libraries/frameworks when the prompt looks like code
    pub library_question: bool,
}

/// Ordered, duplicate-free list of clarifying questions (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<String>);

impl QuestionSet {
    pub fn questions(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, question: &str) -> bool {
        self.0.iter().any(|q| q == question)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl IntoIterator for QuestionSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generate questions using the thread-local RNG and default options.
pub fn generate_questions(base_prompt: &str) -> QuestionSet {
    generate_questions_with(
        base_prompt,
        &QuestionnaireOptions::default(),
        &mut rand::thread_rng(),
    )
}

/// Generate questions with explicit options and randomness source.
pub fn generate_questions_with<R: Rng>(
    base_prompt: &str,
    options: &QuestionnaireOptions,
    rng: &mut R,
) -> QuestionSet {
    let lowered = base_prompt.to_lowercase();
    let blank = base_prompt.trim().is_empty();
    let pool = context_pool(base_prompt, options);

    let target = rng.gen_range(MIN_QUESTIONS..=MAX_QUESTIONS);
    let context_quota = pool.len().min(MAX_CONTEXT_QUESTIONS);

    let mut chosen: Vec<&str> = Vec::with_capacity(MAX_QUESTIONS);

    // An empty prompt always leads with a request for more detail
    if blank && pool.contains(&MORE_DETAILS) {
        chosen.push(MORE_DETAILS);
    }

    let headlines = HEADLINES
        .iter()
        .filter(|(theme, question)| lowered.contains(theme) && pool.contains(question))
        .map(|(_, question)| *question)
        .take(MAX_HEADLINES);
    for question in headlines {
        if chosen.len() < context_quota && !chosen.contains(&question) {
            chosen.push(question);
        }
    }

    let mut rest: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|q| !chosen.contains(q))
        .collect();
    rest.shuffle(rng);
    let open_context_slots = context_quota.saturating_sub(chosen.len());
    chosen.extend(rest.into_iter().take(open_context_slots));

    let mut general: Vec<&str> = GENERAL.to_vec();
    general.shuffle(rng);
    let open_slots = target.saturating_sub(chosen.len());
    let fill: Vec<&str> = general
        .iter()
        .copied()
        .filter(|q| !chosen.contains(q))
        .take(open_slots)
        .collect();
    chosen.extend(fill);

    for question in general {
        if chosen.len() >= MIN_QUESTIONS {
            break;
        }
        if !chosen.contains(&question) {
            chosen.push(question);
        }
    }

    if chosen.is_empty() {
        chosen.extend_from_slice(&GENERAL[..MIN_QUESTIONS]);
    }

    let mut unique: Vec<String> = Vec::with_capacity(chosen.len());
    for question in chosen {
        if !unique.iter().any(|q| q == question) {
            unique.push(question.to_string());
        }
    }
    unique.truncate(MAX_QUESTIONS);
    QuestionSet(unique)
}

/// Context-specific candidates, deduplicated in first-seen order
fn context_pool(base_prompt: &str, options: &QuestionnaireOptions) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = Vec::new();
    let mut push = |question: &'static str| {
        if !pool.contains(&question) {
            pool.push(question);
        }
    };

    if has_signal(base_prompt, CODE_TRIGGER) {
        push(LANGUAGE);
        if options.library_question {
            push(LIBRARIES);
        }
    }
    for trigger in TRIGGERS {
        if has_signal(base_prompt, trigger.keywords) {
            for &question in trigger.questions {
                push(question);
            }
        }
    }
    if base_prompt.split_whitespace().count() < SHORT_PROMPT_WORDS {
        push(MORE_DETAILS);
        push(PRIMARY_GOAL);
    }
    pool
}
