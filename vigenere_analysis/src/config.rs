//! Tunable thresholds for a cryptanalysis run

use crate::fitness::DEFAULT_UNSEEN_PENALTY;
use crate::key_length::DEFAULT_IC_THRESHOLD;
use crate::search::exhaustive::DEFAULT_EARLY_EXIT_SCORE;
use crate::search::stochastic::DEFAULT_STOCHASTIC_THRESHOLD;
use std::time::Duration;

/// Longest key that is brute forced instead of searched stochastically.
pub const DEFAULT_EXHAUSTIVE_MAX_PERIOD: usize = 4;

/// Thresholds and limits used by [`crate::crack`].
///
/// The defaults are the values tuned on Swedish text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Fitness contribution of a quadgram missing from the model
    pub unseen_penalty: f64,
    /// Average IC that marks a trial period as the key length
    pub ic_threshold: f64,
    /// Longest trial period; the text length when `None`
    pub max_period: Option<usize>,
    pub exhaustive_max_period: usize,
    /// Score that ends the exhaustive search early; `None` enumerates every key
    pub early_exit_score: Option<f64>,
    /// Score the stochastic search must reach
    pub stochastic_threshold: f64,
    pub max_rounds: Option<u64>,
    pub time_limit: Option<Duration>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            unseen_penalty: DEFAULT_UNSEEN_PENALTY,
            ic_threshold: DEFAULT_IC_THRESHOLD,
            max_period: None,
            exhaustive_max_period: DEFAULT_EXHAUSTIVE_MAX_PERIOD,
            early_exit_score: Some(DEFAULT_EARLY_EXIT_SCORE),
            stochastic_threshold: DEFAULT_STOCHASTIC_THRESHOLD,
            max_rounds: None,
            time_limit: None,
        }
    }
}
