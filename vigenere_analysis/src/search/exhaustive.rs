//! Brute force search over every key of a given length

use super::{sweep, SearchOutcome, StopReason};
use crate::alphabet::ALPHABET_SIZE;
use crate::cipher;
use crate::error::{Result, VigenereError};
use crate::fitness::Fitness;
use tracing::{debug, info};

/// Score above which a decryption is taken as valid Swedish text.
pub const DEFAULT_EARLY_EXIT_SCORE: f64 = -50.0;

/// Enumerates all 29^P keys in lexicographic order (last position fastest).
///
/// With an early-exit score the search stops at the first candidate scoring above
/// it, which is not necessarily the best key in the space.
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveSearch {
    early_exit: Option<f64>,
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self::new(Some(DEFAULT_EARLY_EXIT_SCORE))
    }
}

impl ExhaustiveSearch {
    pub fn new(early_exit: Option<f64>) -> Self {
        Self { early_exit }
    }

    /// Searches all keys of length `period`.
    ///
    /// Returns `None` when no candidate ever scored above negative infinity,
    /// e.g. for a ciphertext shorter than four symbols.
    ///
    /// # Errors
    ///
    /// [`VigenereError::InvalidKey`] if `period` is 0.
    pub fn run<F: Fitness + Sync>(
        &self,
        ciphertext: &[u8],
        period: usize,
        fitness: &F,
    ) -> Result<Option<SearchOutcome>> {
        if period == 0 {
            return Err(VigenereError::InvalidKey);
        }

        let last = period - 1;
        let mut prefix = vec![0u8; period];
        let mut best_key: Option<Vec<u8>> = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut evaluations = 0u64;

        let stop = 'search: loop {
            let scores = sweep(ciphertext, &prefix, last, fitness)?;

            for (symbol, score) in scores.into_iter().enumerate() {
                evaluations += 1;

                if score > best_score {
                    let mut key = prefix.clone();
                    key[last] = symbol as u8;
                    debug!(?key, score, "new best key");
                    best_score = score;
                    best_key = Some(key);
                }

                if self.early_exit.is_some_and(|threshold| score > threshold) {
                    break 'search StopReason::ThresholdReached;
                }
            }

            if !advance(&mut prefix[..last]) {
                break StopReason::SpaceExhausted;
            }
        };

        let Some(key) = best_key else {
            info!(evaluations, "no scoreable key found");
            return Ok(None);
        };

        let plaintext = cipher::decrypt(ciphertext, &key)?;
        info!(evaluations, score = best_score, ?stop, "exhaustive search finished");

        Ok(Some(SearchOutcome {
            key,
            plaintext,
            score: best_score,
            evaluations,
            stop,
        }))
    }
}

/// Steps `digits` to the next key in lexicographic order; false after the last one.
fn advance(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if (*digit as usize) < ALPHABET_SIZE {
            return true;
        }
        *digit = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores a plaintext by how close it is to a fixed target
    struct Distance(Vec<u8>);

    impl Fitness for Distance {
        fn score(&self, text: &[u8]) -> f64 {
            -(text.iter().zip(&self.0).filter(|(a, b)| a != b).count() as f64)
        }
    }

    /// Every candidate gets the same score
    struct Flat(f64);

    impl Fitness for Flat {
        fn score(&self, _text: &[u8]) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_advance() {
        let mut digits = [0, 28];
        assert!(advance(&mut digits));
        assert_eq!(digits, [1, 0]);

        let mut digits = [28, 28];
        assert!(!advance(&mut digits));
        assert_eq!(digits, [0, 0]);

        assert!(!advance(&mut []));
    }

    #[test]
    fn test_recovers_key_without_early_exit() {
        let plaintext: Vec<u8> = vec![3, 14, 15, 9, 26, 5, 3, 5, 8, 9];
        let key = vec![7, 2];
        let ciphertext = cipher::encrypt(&plaintext, &key).unwrap();

        let outcome = ExhaustiveSearch::new(None)
            .run(&ciphertext, 2, &Distance(plaintext.clone()))
            .unwrap()
            .unwrap();

        assert_eq!(outcome.key, key);
        assert_eq!(outcome.plaintext, plaintext);
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.evaluations, 29 * 29);
        assert_eq!(outcome.stop, StopReason::SpaceExhausted);
    }

    #[test]
    fn test_early_exit_stops_at_first_good_key() {
        let plaintext: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let key = vec![0, 4];
        let ciphertext = cipher::encrypt(&plaintext, &key).unwrap();

        let outcome = ExhaustiveSearch::new(Some(-0.5))
            .run(&ciphertext, 2, &Distance(plaintext.clone()))
            .unwrap()
            .unwrap();

        assert_eq!(outcome.key, key);
        assert_eq!(outcome.evaluations, 5);
        assert_eq!(outcome.stop, StopReason::ThresholdReached);
        assert!(outcome.converged());
    }

    #[test]
    fn test_ties_keep_first_key() {
        let outcome = ExhaustiveSearch::new(None)
            .run(&[1, 2, 3, 4], 1, &Flat(-3.0))
            .unwrap()
            .unwrap();
        assert_eq!(outcome.key, vec![0]);
        assert_eq!(outcome.evaluations, 29);
    }

    #[test]
    fn test_no_scoreable_key() {
        let outcome = ExhaustiveSearch::default()
            .run(&[1, 2, 3], 1, &Flat(f64::NEG_INFINITY))
            .unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_zero_period() {
        let result = ExhaustiveSearch::default().run(&[1, 2, 3, 4], 0, &Flat(0.0));
        assert!(matches!(result, Err(VigenereError::InvalidKey)));
    }
}
