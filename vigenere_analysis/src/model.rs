//! Quadgram frequency model built from a training corpus

use crate::alphabet::{ALPHABET, ALPHABET_SIZE};
use crate::error::{Result, VigenereError};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Number of distinct quadgrams over the alphabet (29⁴).
pub const QUADGRAM_COUNT: usize = ALPHABET_SIZE * ALPHABET_SIZE * ALPHABET_SIZE * ALPHABET_SIZE;

/// Index of the quadgram `window[0..4]` in the frequency table.
///
/// `window` must hold at least four symbols; only the first four are used.
pub fn quadgram_index(window: &[u8]) -> usize {
    window[..4]
        .iter()
        .fold(0, |acc, &s| acc * ALPHABET_SIZE + s as usize)
}

/// On-disk form: only observed quadgrams are stored.
#[derive(Serialize, Deserialize)]
struct ModelFile {
    alphabet: String,
    entries: Vec<(u32, f64)>,
}

/// Probability of every quadgram in the training text.
///
/// Read-only once built. Unseen quadgrams have probability 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    probabilities: Box<[f64]>,
}

impl FrequencyModel {
    /// Wraps a dense table of [`QUADGRAM_COUNT`] probabilities.
    ///
    /// # Errors
    ///
    /// [`VigenereError::InvalidModel`] if the table has the wrong length or holds a
    /// negative or non-finite value.
    pub fn from_probabilities(probabilities: Vec<f64>) -> Result<Self> {
        if probabilities.len() != QUADGRAM_COUNT {
            return Err(VigenereError::InvalidModel(format!(
                "expected {} entries, found {}",
                QUADGRAM_COUNT,
                probabilities.len()
            )));
        }

        if let Some(bad) = probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(VigenereError::InvalidModel(format!(
                "invalid probability {}",
                bad
            )));
        }

        Ok(Self {
            probabilities: probabilities.into_boxed_slice(),
        })
    }

    /// Counts every quadgram of a normalized corpus and divides by the number of
    /// quadgram positions (`len - 3`).
    ///
    /// A corpus shorter than four symbols yields an all-zero model.
    pub fn from_corpus(corpus: &[u8]) -> Result<Self> {
        if let Some(&bad) = corpus.iter().find(|&&s| s as usize >= ALPHABET_SIZE) {
            return Err(VigenereError::InvalidIndex(bad as usize));
        }

        let mut counts = vec![0u64; QUADGRAM_COUNT];
        for window in corpus.windows(4) {
            counts[quadgram_index(window)] += 1;
        }

        let total = corpus.len().saturating_sub(3);
        let probabilities: Vec<f64> = if total > 0 {
            counts.iter().map(|&c| c as f64 / total as f64).collect()
        } else {
            vec![0.0; QUADGRAM_COUNT]
        };

        debug!(positions = total, "built quadgram table");
        Self::from_probabilities(probabilities)
    }

    /// Probability of quadgram `index`; 0 when unseen or out of range.
    pub fn probability(&self, index: usize) -> f64 {
        self.probabilities.get(index).copied().unwrap_or(0.0)
    }

    /// Number of quadgrams with non-zero probability.
    pub fn observed(&self) -> usize {
        self.probabilities.iter().filter(|&&p| p > 0.0).count()
    }

    /// Writes the model atomically (temporary file + rename).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let file = ModelFile {
            alphabet: ALPHABET.to_string(),
            entries: self
                .probabilities
                .iter()
                .enumerate()
                .filter(|(_, p)| **p > 0.0)
                .map(|(i, &p)| (i as u32, p))
                .collect(),
        };

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &file)?;
        writer.flush()?;
        drop(writer);

        temp_file.persist(path).map_err(|e| e.error)?;
        info!(path = %path.display(), observed = file.entries.len(), "saved frequency model");
        Ok(())
    }

    /// Reads a model written by [`FrequencyModel::save`].
    ///
    /// # Errors
    ///
    /// [`VigenereError::InvalidModel`] if the file was built for another alphabet or
    /// refers to a quadgram outside the table.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let file: ModelFile = bincode::deserialize_from(reader)?;

        if file.alphabet != ALPHABET {
            return Err(VigenereError::InvalidModel(format!(
                "model alphabet {:?} does not match {:?}",
                file.alphabet, ALPHABET
            )));
        }

        let mut probabilities = vec![0.0; QUADGRAM_COUNT];
        for (index, p) in file.entries {
            let slot = probabilities.get_mut(index as usize).ok_or_else(|| {
                VigenereError::InvalidModel(format!("quadgram index {} out of range", index))
            })?;
            *slot = p;
        }

        let model = Self::from_probabilities(probabilities)?;
        info!(path = %path.display(), observed = model.observed(), "loaded frequency model");
        Ok(model)
    }
}
