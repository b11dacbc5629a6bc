//! Keyword categories and substring signal tests

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named keyword set whose presence signals an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Code,
    Creative,
    Summary,
    Explanation,
    Comparison,
    Format,
    Tone,
    Length,
    Audience,
}

const CODE: &[&str] = &[
    "code",
    "script",
    "program",
    "python",
    "javascript",
    "debug",
    "algorithm",
    "function",
];
const CREATIVE: &[&str] = &[
    "creative",
    "story",
    "poem",
    "novel",
    "fiction",
    "narrative",
    "lyrics",
    "screenplay",
];
const SUMMARY: &[&str] = &[
    "summary",
    "summarize",
    "summarise",
    "short",
    "quick",
    "brief",
    "tl;dr",
];
const EXPLANATION: &[&str] = &[
    "explain",
    "define",
    "definition",
    "what is",
    "describe",
    "how does",
];
const COMPARISON: &[&str] = &["compare", "contrast", "difference between"];
// Question-side cues: these classify what a clarifying question asked about.
const FORMAT: &[&str] = &["format"];
const TONE: &[&str] = &["tone", "style"];
const LENGTH: &[&str] = &["length"];
const AUDIENCE: &[&str] = &["audience"];

impl Category {
    /// Categories describing the content of a prompt
    pub const CONTENT: [Category; 5] = [
        Category::Code,
        Category::Creative,
        Category::Summary,
        Category::Explanation,
        Category::Comparison,
    ];

    /// Categories describing what a clarifying question asks about
    pub const QUESTION: [Category; 4] = [
        Category::Format,
        Category::Tone,
        Category::Length,
        Category::Audience,
    ];

    /// Keyword table for this category (all lowercase)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Code => CODE,
            Category::Creative => CREATIVE,
            Category::Summary => SUMMARY,
            Category::Explanation => EXPLANATION,
            Category::Comparison => COMPARISON,
            Category::Format => FORMAT,
            Category::Tone => TONE,
            Category::Length => LENGTH,
            Category::Audience => AUDIENCE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Code => "code",
            Category::Creative => "creative",
            Category::Summary => "summary",
            Category::Explanation => "explanation",
            Category::Comparison => "comparison",
            Category::Format => "format",
            Category::Tone => "tone",
            Category::Length => "length",
            Category::Audience => "audience",
        }
    }

    /// Whether `text` carries this category's signal
    pub fn detect(&self, text: &str) -> bool {
        has_signal(text, self.keywords())
    }

    /// All content categories present in `text`
    pub fn detect_content(text: &str) -> BTreeSet<Category> {
        matches_any(text, Category::CONTENT.map(|c| (c, c.keywords())))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if any keyword occurs in `text`, ignoring case.
pub fn has_signal<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let lowered = text.to_lowercase();
    contains_any(&lowered, keywords)
}

/// Every category whose keyword set hits `text`, tested in one pass.
pub fn matches_any<'a, C, I>(text: &str, keyword_sets: I) -> BTreeSet<C>
where
    C: Ord,
    I: IntoIterator<Item = (C, &'a [&'a str])>,
{
    let lowered = text.to_lowercase();
    keyword_sets
        .into_iter()
        .filter(|(_, keywords)| contains_any(&lowered, keywords))
        .map(|(category, _)| category)
        .collect()
}

fn contains_any<S: AsRef<str>>(lowered: &str, keywords: &[S]) -> bool {
    keywords
        .iter()
        .any(|kw| lowered.contains(kw.as_ref().to_lowercase().as_str()))
}
