//! Keyword/signal extraction shared by all rule engines.
//!
//! Matching is plain case-insensitive substring containment: no tokenizing,
//! no stemming. `"gpt"` matches inside `"forgetful"`. The engines depend on
//! exactly this behaviour, so it is kept naive on purpose.
//!
//! - [`keywords`]: [`Category`] tables, [`has_signal`], [`matches_any`]
//! - [`ranking`]: deterministic [`rank_keywords`] used by the ranked-keyword match mode

pub mod keywords;
pub mod ranking;

pub use keywords::{Category, has_signal, matches_any};
pub use ranking::rank_keywords;
