//! Rule-engine settings handed to the use cases.

use promptsmith_domain::{QuestionnaireOptions, RecommenderOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Knobs the use cases pass through to the domain engines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Fixed questionnaire seed; `None` draws from the thread RNG.
    pub questionnaire_seed: Option<u64>,
    pub questionnaire: QuestionnaireOptions,
    pub recommender: RecommenderOptions,
}

impl WorkflowConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.questionnaire_seed = Some(seed);
        self
    }

    /// RNG for one questionnaire draw. An explicit seed wins over the
    /// configured one; with neither, the RNG is seeded from entropy.
    pub fn questionnaire_rng(&self, seed_override: Option<u64>) -> StdRng {
        match seed_override.or(self.questionnaire_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
