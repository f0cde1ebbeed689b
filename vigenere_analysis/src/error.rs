//! Error types for cipher and cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VigenereError {
    #[error("Invalid symbol {0:?} (not part of the alphabet)")]
    InvalidSymbol(char),

    #[error("Invalid symbol index {0} (must be < 29)")]
    InvalidIndex(usize),

    #[error("Invalid key (must contain at least one symbol)")]
    InvalidKey,

    #[error("No key length up to {max_period} reached the coincidence threshold")]
    KeyLengthNotFound { max_period: usize },

    #[error("Text of length {length} is too short to score (needs at least 4 symbols)")]
    Unscoreable { length: usize },

    #[error("Invalid frequency model: {0}")]
    InvalidModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, VigenereError>;
