//! Catalog model value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Vendor family a catalog model belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    OpenAi,
    Anthropic,
    Google,
    Xai,
}

impl ModelFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::OpenAi => "openai",
            ModelFamily::Anthropic => "anthropic",
            ModelFamily::Google => "google",
            ModelFamily::Xai => "xai",
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Models the recommender may suggest (Value Object)
///
/// The catalog is closed: anything outside it is rejected with
/// [`DomainError::UnknownModel`]. Variants are declared in recommendation
/// priority order, so the derived `Ord` is the ranking used for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CatalogModel {
    ClaudeOpus4,
    Gpt41,
    ClaudeSonnet4,
    Grok3,
    Gemini25Pro,
    Gpt41Mini,
    Gemini25Flash,
    Grok3Mini,
}

impl CatalogModel {
    /// Every catalog entry, in priority order
    pub const ALL: [CatalogModel; 8] = [
        CatalogModel::ClaudeOpus4,
        CatalogModel::Gpt41,
        CatalogModel::ClaudeSonnet4,
        CatalogModel::Grok3,
        CatalogModel::Gemini25Pro,
        CatalogModel::Gpt41Mini,
        CatalogModel::Gemini25Flash,
        CatalogModel::Grok3Mini,
    ];

    /// Friendly display name (the identifier exchanged with callers)
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogModel::Gpt41 => "GPT-4.1",
            CatalogModel::Gpt41Mini => "GPT-4.1 Mini",
            CatalogModel::ClaudeOpus4 => "Claude Opus 4",
            CatalogModel::ClaudeSonnet4 => "Claude Sonnet 4",
            CatalogModel::Grok3 => "Grok-3",
            CatalogModel::Grok3Mini => "Grok-3 Mini",
            CatalogModel::Gemini25Pro => "Gemini 2.5 Pro",
            CatalogModel::Gemini25Flash => "Gemini 2.5 Flash",
        }
    }

    /// Kebab-case alias, e.g. `claude-opus-4`
    pub fn slug(&self) -> String {
        self.as_str().to_lowercase().replace(' ', "-")
    }

    pub fn family(&self) -> ModelFamily {
        match self {
            CatalogModel::Gpt41 | CatalogModel::Gpt41Mini => ModelFamily::OpenAi,
            CatalogModel::ClaudeOpus4 | CatalogModel::ClaudeSonnet4 => ModelFamily::Anthropic,
            CatalogModel::Grok3 | CatalogModel::Grok3Mini => ModelFamily::Xai,
            CatalogModel::Gemini25Pro | CatalogModel::Gemini25Flash => ModelFamily::Google,
        }
    }

    /// Fallback shortlist used when no recommendation rule fires
    pub fn fallback_models() -> Vec<CatalogModel> {
        vec![
            CatalogModel::Gpt41Mini,
            CatalogModel::ClaudeSonnet4,
            CatalogModel::Gemini25Pro,
        ]
    }
}

impl std::fmt::Display for CatalogModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CatalogModel {
    type Err = DomainError;

    /// Accepts the friendly name or its slug, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CatalogModel::ALL
            .into_iter()
            .find(|m| m.as_str().to_lowercase() == wanted || m.slug() == wanted)
            .ok_or_else(|| DomainError::UnknownModel(s.to_string()))
    }
}

impl Serialize for CatalogModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CatalogModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
