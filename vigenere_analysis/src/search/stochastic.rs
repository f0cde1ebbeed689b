//! Greedy coordinate search for keys too long to brute force

use super::{sweep, SearchOutcome, StopReason};
use crate::cipher;
use crate::error::{Result, VigenereError};
use crate::fitness::Fitness;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Score at which the search accepts a key as valid Swedish text.
pub const DEFAULT_STOCHASTIC_THRESHOLD: f64 = -100.0;

/// Hill climbing one key position at a time.
///
/// Each round picks a random position and tries all 29 symbols there, adopting any
/// strict improvement. The score never decreases. Without a round or time cap the
/// search runs until the threshold is reached.
#[derive(Debug, Clone, Copy)]
pub struct StochasticSearch {
    threshold: f64,
    max_rounds: Option<u64>,
    time_limit: Option<Duration>,
}

impl Default for StochasticSearch {
    fn default() -> Self {
        Self::new(DEFAULT_STOCHASTIC_THRESHOLD)
    }
}

impl StochasticSearch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            max_rounds: None,
            time_limit: None,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: Option<u64>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Searches for a key of length `period`, starting from all zeros.
    ///
    /// # Arguments
    ///
    /// * `ciphertext` - Alphabet indices of the ciphertext.
    /// * `period` - Key length.
    /// * `fitness` - Scores candidate plaintexts.
    /// * `rng` - Source for the position picked each round.
    ///
    /// # Errors
    ///
    /// [`VigenereError::InvalidKey`] if `period` is 0.
    pub fn run<F, R>(
        &self,
        ciphertext: &[u8],
        period: usize,
        fitness: &F,
        rng: &mut R,
    ) -> Result<SearchOutcome>
    where
        F: Fitness + Sync,
        R: Rng + ?Sized,
    {
        if period == 0 {
            return Err(VigenereError::InvalidKey);
        }

        let start = Instant::now();
        let mut key = vec![0u8; period];
        let mut best_score = f64::NEG_INFINITY;
        let mut rounds = 0u64;
        let mut evaluations = 0u64;

        let stop = loop {
            if best_score >= self.threshold {
                break StopReason::ThresholdReached;
            }
            if self.max_rounds.is_some_and(|max| rounds >= max) {
                break StopReason::RoundLimit;
            }
            if self.time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                break StopReason::TimeLimit;
            }

            let position = rng.gen_range(0..period);
            let scores = sweep(ciphertext, &key, position, fitness)?;
            evaluations += scores.len() as u64;
            rounds += 1;

            let mut improved = None;
            for (symbol, score) in scores.into_iter().enumerate() {
                if score > best_score {
                    best_score = score;
                    improved = Some(symbol as u8);
                }
            }

            if let Some(symbol) = improved {
                key[position] = symbol;
                debug!(rounds, position, score = best_score, "key improved");
            }
        };

        let plaintext = cipher::decrypt(ciphertext, &key)?;
        info!(rounds, evaluations, score = best_score, ?stop, "stochastic search finished");

        Ok(SearchOutcome {
            key,
            plaintext,
            score: best_score,
            evaluations,
            stop,
        })
    }
}
