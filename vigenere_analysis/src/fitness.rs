//! Fitness functions measuring how much a candidate plaintext looks like Swedish

use crate::model::{quadgram_index, FrequencyModel};

/// Contribution of a quadgram that never occurs in the training text.
pub const DEFAULT_UNSEEN_PENALTY: f64 = -1000.0;

/// Trait for scoring a candidate plaintext; larger is better.
///
/// Implementations must be pure so candidates can be scored in any order.
pub trait Fitness {
    /// Scores a symbol sequence
    fn score(&self, text: &[u8]) -> f64;
}

/// Average quadgram log-likelihood against a [`FrequencyModel`].
///
/// Texts shorter than four symbols score negative infinity.
#[derive(Debug, Clone, Copy)]
pub struct QuadgramScorer<'m> {
    model: &'m FrequencyModel,
    unseen_penalty: f64,
}

impl<'m> QuadgramScorer<'m> {
    pub fn new(model: &'m FrequencyModel) -> Self {
        Self::with_penalty(model, DEFAULT_UNSEEN_PENALTY)
    }

    /// Creates a scorer with a custom contribution for unseen quadgrams
    pub fn with_penalty(model: &'m FrequencyModel, unseen_penalty: f64) -> Self {
        Self {
            model,
            unseen_penalty,
        }
    }

    pub fn unseen_penalty(&self) -> f64 {
        self.unseen_penalty
    }
}

impl Fitness for QuadgramScorer<'_> {
    fn score(&self, text: &[u8]) -> f64 {
        if text.len() < 4 {
            return f64::NEG_INFINITY;
        }

        let total: f64 = text
            .windows(4)
            .map(|window| {
                let p = self.model.probability(quadgram_index(window));
                if p > 0.0 {
                    p.ln()
                } else {
                    self.unseen_penalty
                }
            })
            .sum();

        // Normalize by the number of quadgrams so texts of different length compare
        total / (text.len() - 3) as f64
    }
}
