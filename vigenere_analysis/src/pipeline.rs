//! End-to-end key recovery: key length, then the matching search strategy

use crate::config::AnalysisConfig;
use crate::error::{Result, VigenereError};
use crate::fitness::QuadgramScorer;
use crate::key_length::KeyLengthEstimator;
use crate::model::FrequencyModel;
use crate::search::{ExhaustiveSearch, SearchOutcome, StochasticSearch};
use rand::Rng;
use tracing::{info, warn};

/// Below this many symbols the IC and quadgram statistics get unreliable.
const SHORT_TEXT_WARNING: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Exhaustive,
    Stochastic,
}

/// Result of [`crack`].
#[derive(Debug, Clone, PartialEq)]
pub struct CrackReport {
    /// Estimated key length
    pub period: usize,
    pub strategy: Strategy,
    pub outcome: SearchOutcome,
}

/// Recovers the key of a normalized ciphertext.
///
/// # Arguments
///
/// * `ciphertext` - Alphabet indices of the ciphertext.
/// * `model` - Quadgram statistics of the plaintext language.
/// * `config` - Thresholds and limits.
/// * `rng` - Position picker for the stochastic search.
///
/// # Errors
///
/// * [`VigenereError::Unscoreable`] if the ciphertext has fewer than four symbols.
/// * [`VigenereError::KeyLengthNotFound`] if no period passes the IC threshold.
pub fn crack<R: Rng + ?Sized>(
    ciphertext: &[u8],
    model: &FrequencyModel,
    config: &AnalysisConfig,
    rng: &mut R,
) -> Result<CrackReport> {
    if ciphertext.len() < 4 {
        return Err(VigenereError::Unscoreable {
            length: ciphertext.len(),
        });
    }
    if ciphertext.len() < SHORT_TEXT_WARNING {
        warn!(length = ciphertext.len(), "text may be too short for reliable analysis");
    }

    let period = KeyLengthEstimator::new(config.ic_threshold)
        .with_max_period(config.max_period)
        .estimate(ciphertext)?;

    let scorer = QuadgramScorer::with_penalty(model, config.unseen_penalty);

    let (strategy, outcome) = if period <= config.exhaustive_max_period {
        info!(period, "searching all keys");
        let outcome = ExhaustiveSearch::new(config.early_exit_score)
            .run(ciphertext, period, &scorer)?
            .ok_or(VigenereError::Unscoreable {
                length: ciphertext.len(),
            })?;
        (Strategy::Exhaustive, outcome)
    } else {
        info!(period, "searching keys by coordinate ascent");
        let outcome = StochasticSearch::new(config.stochastic_threshold)
            .with_max_rounds(config.max_rounds)
            .with_time_limit(config.time_limit)
            .run(ciphertext, period, &scorer, rng)?;
        (Strategy::Stochastic, outcome)
    };

    Ok(CrackReport {
        period,
        strategy,
        outcome,
    })
}
