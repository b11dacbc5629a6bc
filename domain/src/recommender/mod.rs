//! Model recommender
//!
//! Picks up to four catalog models for a prompt and its answers using
//! keyword rules. Results are ordered by the catalog's fixed priority
//! (the derived `Ord` of [`CatalogModel`]), never by rule order.

pub mod rules;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::core::answer::QuestionnaireAnswer;
use crate::core::error::DomainError;
use crate::core::model::CatalogModel;
use rules::{ANSWER_OVERRIDES, CATEGORY_RULES};

/// Upper bound on the number of recommended models
pub const MAX_RECOMMENDATIONS: usize = 4;

/// How category keywords are matched against the corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Any keyword occurring anywhere in the corpus
    #[default]
    Substring,
    /// Exact equality against the top ranked corpus keywords (legacy)
    RankedKeywords,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Substring => "substring",
            MatchMode::RankedKeywords => "ranked-keywords",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "substring" => Ok(MatchMode::Substring),
            "ranked-keywords" | "ranked" => Ok(MatchMode::RankedKeywords),
            _ => Err(DomainError::UnknownMatchMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderOptions {
    pub match_mode: MatchMode,
}

/// Recommend models with default options.
pub fn recommend_models(base_prompt: &str, answers: &[QuestionnaireAnswer]) -> Vec<CatalogModel> {
    recommend_models_with(base_prompt, answers, &RecommenderOptions::default())
}

pub fn recommend_models_with(
    base_prompt: &str,
    answers: &[QuestionnaireAnswer],
    options: &RecommenderOptions,
) -> Vec<CatalogModel> {
    let corpus = build_corpus(base_prompt, answers);
    let mut picked: BTreeSet<CatalogModel> = BTreeSet::new();

    let matcher = rules::CorpusMatcher::new(&corpus, options.match_mode);
    for (category, models) in CATEGORY_RULES {
        if matcher.matches(*category) {
            picked.extend(models.iter().copied());
        }
    }

    for answer in answers.iter().filter(|a| !a.is_no_signal()) {
        let question = answer.question_lower();
        let text = answer.answer_lower();
        for rule in ANSWER_OVERRIDES {
            if question.contains(rule.question_cue)
                && rule.answer_cues.iter().any(|cue| text.contains(cue))
            {
                picked.extend(rule.models.iter().copied());
            }
        }
    }

    if picked.is_empty() {
        picked.extend(CatalogModel::fallback_models());
    }

    picked.into_iter().take(MAX_RECOMMENDATIONS).collect()
}

/// Lowercased base prompt followed by every signal-bearing answer.
fn build_corpus(base_prompt: &str, answers: &[QuestionnaireAnswer]) -> String {
    let mut corpus = base_prompt.to_lowercase();
    for answer in answers.iter().filter(|a| !a.is_no_signal()) {
        corpus.push(' ');
        corpus.push_str(&answer.answer_lower());
    }
    corpus
}

#[cfg(test)]
mod tests {
    use super::*;
    use CatalogModel::*;

    fn qa(question: &str, answer: &str) -> QuestionnaireAnswer {
        QuestionnaireAnswer::new(question, answer)
    }

    fn assert_well_formed(models: &[CatalogModel]) {
        assert!((1..=MAX_RECOMMENDATIONS).contains(&models.len()), "{models:?}");
        let unique: BTreeSet<_> = models.iter().collect();
        assert_eq!(unique.len(), models.len());
        let mut sorted = models.to_vec();
        sorted.sort();
        assert_eq!(sorted, models, "not in priority order");
    }

    #[test]
    fn test_poem_prefers_creative_models() {
        let models = recommend_models("Write a poem about the sea.", &[]);
        assert_eq!(models, vec![ClaudeOpus4, Gpt41]);
    }

    #[test]
    fn test_summary_prefers_fast_models() {
        let models = recommend_models("Summarize this quickly.", &[]);
        assert_eq!(models, vec![ClaudeSonnet4, Gpt41Mini, Gemini25Flash, Grok3Mini]);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let models = recommend_models("Hello there", &[]);
        assert_eq!(models, vec![ClaudeSonnet4, Gemini25Pro, Gpt41Mini]);
        assert_eq!(recommend_models("", &[]), models);
    }

    #[test]
    fn test_union_is_truncated_by_priority() {
        let models = recommend_models("Write a python script that tells a short story", &[]);
        assert_eq!(models, vec![ClaudeOpus4, Gpt41, ClaudeSonnet4, Grok3]);
    }

    #[test]
    fn test_answer_overrides() {
        let answers = [qa("What is the target audience?", "Beginners")];
        assert_eq!(
            recommend_models("Hello there", &answers),
            vec![ClaudeSonnet4, Gpt41Mini]
        );

        let answers = [qa("Tone?", "formal")];
        assert_eq!(recommend_models("Hello there", &answers), vec![ClaudeOpus4]);

        let answers = [qa("Output format?", "json")];
        assert_eq!(recommend_models("Hello there", &answers), vec![ClaudeOpus4, Gpt41]);

        let answers = [qa("What is the desired length?", "comprehensive")];
        assert_eq!(recommend_models("Hello there", &answers), vec![ClaudeOpus4, Gpt41]);
    }

    #[test]
    fn test_answers_feed_the_corpus() {
        let answers = [qa("Anything else?", "make it a story")];
        assert_eq!(recommend_models("Hello there", &answers), vec![ClaudeOpus4, Gpt41]);
    }

    #[test]
    fn test_no_signal_answers_ignored() {
        let answers = [qa("Tone?", "none"), qa("What is the target audience?", "n/a")];
        assert_eq!(
            recommend_models("Hello there", &answers),
            recommend_models("Hello there", &[])
        );
    }

    #[test]
    fn test_substring_matching_is_naive() {
        // "shortcut" carries the "short" summary cue
        let models = recommend_models("Keyboard shortcut ideas", &[]);
        assert!(models.contains(&Gpt41Mini));
    }

    #[test]
    fn test_ranked_keywords_mode_requires_whole_tokens() {
        let options = RecommenderOptions {
            match_mode: MatchMode::RankedKeywords,
        };
        let models = recommend_models_with("Keyboard shortcut ideas", &[], &options);
        assert_eq!(models, vec![ClaudeSonnet4, Gemini25Pro, Gpt41Mini]);

        let models = recommend_models_with("Write a poem about the sea.", &[], &options);
        assert_eq!(models, vec![ClaudeOpus4, Gpt41]);
    }

    #[test]
    fn test_well_formed_for_assorted_inputs() {
        let answers = [
            qa("What format?", "JSON"),
            qa("Tone?", "formal"),
            qa("What is the target audience?", "beginner"),
            qa("Length?", "long and detailed"),
        ];
        for prompt in [
            "",
            "Explain recursion with python code, then summarize it in a short poem",
            "Compare two novels",
            "?",
        ] {
            assert_well_formed(&recommend_models(prompt, &[]));
            assert_well_formed(&recommend_models(prompt, &answers));
            let ranked = RecommenderOptions {
                match_mode: MatchMode::RankedKeywords,
            };
            assert_well_formed(&recommend_models_with(prompt, &answers, &ranked));
        }
    }

    #[test]
    fn test_match_mode_parse() {
        assert_eq!("substring".parse::<MatchMode>().unwrap(), MatchMode::Substring);
        assert_eq!(
            "Ranked_Keywords".parse::<MatchMode>().unwrap(),
            MatchMode::RankedKeywords
        );
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }
}
