//! Recommendation rule tables and corpus matching

use super::MatchMode;
use crate::core::model::CatalogModel::{self, *};
use crate::signal::{Category, has_signal, rank_keywords};

/// Number of ranked tokens compared in [`MatchMode::RankedKeywords`]
pub const RANKED_KEYWORD_LIMIT: usize = 7;

/// Content category → models it adds
pub const CATEGORY_RULES: &[(Category, &[CatalogModel])] = &[
    (Category::Creative, &[ClaudeOpus4, Gpt41]),
    (
        Category::Summary,
        &[ClaudeSonnet4, Gpt41Mini, Gemini25Flash, Grok3Mini],
    ),
    (Category::Code, &[ClaudeOpus4, Gpt41, Grok3]),
    (Category::Explanation, &[Gpt41, ClaudeOpus4, ClaudeSonnet4]),
];

/// A rule keyed on a single (question, answer) pair
pub struct AnswerOverride {
    pub question_cue: &'static str,
    pub answer_cues: &'static [&'static str],
    pub models: &'static [CatalogModel],
}

pub const ANSWER_OVERRIDES: &[AnswerOverride] = &[
    AnswerOverride {
        question_cue: "format",
        answer_cues: &["json"],
        models: &[Gpt41, ClaudeOpus4],
    },
    AnswerOverride {
        question_cue: "tone",
        answer_cues: &["formal"],
        models: &[ClaudeOpus4],
    },
    AnswerOverride {
        question_cue: "audience",
        answer_cues: &["beginner"],
        models: &[ClaudeSonnet4, Gpt41Mini],
    },
    AnswerOverride {
        question_cue: "length",
        answer_cues: &["detailed", "comprehensive", "long"],
        models: &[ClaudeOpus4, Gpt41],
    },
];

/// Tests categories against a corpus in the configured mode.
pub struct CorpusMatcher<'a> {
    corpus: &'a str,
    ranked: Option<Vec<String>>,
}

impl<'a> CorpusMatcher<'a> {
    pub fn new(corpus: &'a str, mode: MatchMode) -> Self {
        let ranked = match mode {
            MatchMode::Substring => None,
            MatchMode::RankedKeywords => Some(rank_keywords(corpus, RANKED_KEYWORD_LIMIT)),
        };
        Self { corpus, ranked }
    }

    pub fn matches(&self, category: Category) -> bool {
        match &self.ranked {
            None => has_signal(self.corpus, category.keywords()),
            Some(tokens) => category
                .keywords()
                .iter()
                .any(|keyword| tokens.iter().any(|token| token == keyword)),
        }
    }
}
