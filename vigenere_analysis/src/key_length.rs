//! Key length estimation using the Index of Coincidence

use crate::alphabet::ALPHABET_SIZE;
use crate::error::{Result, VigenereError};
use tracing::{debug, info};

/// Average IC above which a trial period is accepted. Swedish text sits around 1.7.
pub const DEFAULT_IC_THRESHOLD: f64 = 1.6;

/// Splits text into `period` subtexts; symbol `i` goes to subtext `i % period`.
/// Each subtext holds the symbols encrypted with the same key symbol.
pub fn split_by_period(text: &[u8], period: usize) -> Vec<Vec<u8>> {
    let mut subtexts = vec![Vec::with_capacity(text.len() / period.max(1) + 1); period];

    for (i, &symbol) in text.iter().enumerate() {
        subtexts[i % period].push(symbol);
    }

    subtexts
}

/// Calculates the Index of Coincidence normalized by the alphabet size.
///
/// Uniformly random text scores about 1.0. Returns 0.0 for fewer than two symbols.
pub fn index_of_coincidence(text: &[u8]) -> f64 {
    let mut counts = [0u64; ALPHABET_SIZE];
    for &symbol in text {
        if let Some(count) = counts.get_mut(symbol as usize) {
            *count += 1;
        }
    }

    let total: u64 = counts.iter().sum();
    if total < 2 {
        return 0.0;
    }

    let numerator: u64 = counts.iter().map(|&c| c * c.saturating_sub(1)).sum();
    ALPHABET_SIZE as f64 * numerator as f64 / (total * (total - 1)) as f64
}

/// Mean IC over the `period` interleaved subtexts.
pub fn average_ic(text: &[u8], period: usize) -> f64 {
    if period == 0 {
        return 0.0;
    }

    let subtexts = split_by_period(text, period);
    subtexts.iter().map(|s| index_of_coincidence(s)).sum::<f64>() / period as f64
}

/// Finds the period of a Vigenère ciphertext.
///
/// Trial periods are scanned in increasing order and the first whose average IC
/// exceeds the threshold wins. Multiples of the true period pass as well, so the
/// smallest one is reported.
#[derive(Debug, Clone, Copy)]
pub struct KeyLengthEstimator {
    threshold: f64,
    max_period: Option<usize>,
}

impl Default for KeyLengthEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_IC_THRESHOLD)
    }
}

impl KeyLengthEstimator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            max_period: None,
        }
    }

    /// Caps the scan below the text length.
    pub fn with_max_period(mut self, max_period: Option<usize>) -> Self {
        self.max_period = max_period;
        self
    }

    fn bound(&self, text: &[u8]) -> usize {
        match self.max_period {
            Some(max) => max.min(text.len()),
            None => text.len(),
        }
    }

    /// Returns the first period whose average IC exceeds the threshold.
    ///
    /// # Errors
    ///
    /// [`VigenereError::KeyLengthNotFound`] if no period up to the bound qualifies.
    pub fn estimate(&self, text: &[u8]) -> Result<usize> {
        let max_period = self.bound(text);

        for period in 1..=max_period {
            let ic = average_ic(text, period);
            debug!(period, ic, "trial period");

            if ic > self.threshold {
                info!(period, ic, "key length found");
                return Ok(period);
            }
        }

        Err(VigenereError::KeyLengthNotFound { max_period })
    }

    /// Average IC of every trial period up to the bound, for reporting.
    pub fn profile(&self, text: &[u8]) -> Vec<(usize, f64)> {
        (1..=self.bound(text))
            .map(|period| (period, average_ic(text, period)))
            .collect()
    }
}
