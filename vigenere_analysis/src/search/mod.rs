//! Key search strategies

pub mod exhaustive;
pub mod stochastic;

pub use exhaustive::ExhaustiveSearch;
pub use stochastic::StochasticSearch;

use crate::alphabet::ALPHABET_SIZE;
use crate::cipher;
use crate::error::Result;
use crate::fitness::Fitness;
use rayon::prelude::*;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A candidate scored above the success threshold
    ThresholdReached,
    /// Every candidate key was tried
    SpaceExhausted,
    /// The configured round cap was hit
    RoundLimit,
    /// The configured wall-clock cap was hit
    TimeLimit,
}

/// Best key found by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub key: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub score: f64,
    /// Number of candidate keys scored
    pub evaluations: u64,
    pub stop: StopReason,
}

impl SearchOutcome {
    /// Whether the search ended because a good enough key was found
    pub fn converged(&self) -> bool {
        self.stop == StopReason::ThresholdReached
    }
}

/// Scores the 29 keys obtained by setting `base[position]` to every symbol.
///
/// Candidates are scored in parallel; the returned scores are in symbol order.
pub(crate) fn sweep<F: Fitness + Sync>(
    ciphertext: &[u8],
    base: &[u8],
    position: usize,
    fitness: &F,
) -> Result<Vec<f64>> {
    (0..ALPHABET_SIZE as u8)
        .into_par_iter()
        .map(|symbol| {
            let mut key = base.to_vec();
            key[position] = symbol;
            let plaintext = cipher::decrypt(ciphertext, &key)?;
            Ok(fitness.score(&plaintext))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rewards plaintexts that start with symbol 0
    struct LeadingZero;

    impl Fitness for LeadingZero {
        fn score(&self, text: &[u8]) -> f64 {
            -(text[0] as f64)
        }
    }

    #[test]
    fn test_sweep_scores_in_symbol_order() {
        let scores = sweep(&[5, 9], &[0, 0], 0, &LeadingZero).unwrap();
        assert_eq!(scores.len(), ALPHABET_SIZE);
        assert_eq!(scores[5], 0.0);
        assert_eq!(scores[0], -5.0);
        assert_eq!(scores[6], -28.0);
    }
}
