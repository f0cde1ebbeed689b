//! # Vigenère Analysis Library
//!
//! Recovers the key of a Vigenère cipher over the 29-letter Swedish alphabet
//! (`a`-`z`, `å`, `ä`, `ö`) from ciphertext alone.
//!
//! ## Steps
//!
//! - **Key length** - Index of Coincidence over interleaved subtexts
//! - **Short keys** - brute force over every key, scored with quadgram statistics
//! - **Long keys** - greedy coordinate search, one key position per round
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{alphabet, cipher};
//!
//! let plaintext = alphabet::normalize("Hej då!");
//! let key = alphabet::normalize("nyckel");
//!
//! let ciphertext = cipher::encrypt(&plaintext, &key)?;
//! let decrypted = cipher::decrypt(&ciphertext, &key)?;
//! assert_eq!(decrypted, plaintext);
//! # Ok::<(), vigenere_analysis::VigenereError>(())
//! ```
//!
//! Breaking a ciphertext needs a [`FrequencyModel`] built from Swedish text:
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use vigenere_analysis::{alphabet, crack, AnalysisConfig, FrequencyModel};
//!
//! let model = FrequencyModel::load("tetrafrequencies.bin")?;
//! let ciphertext = alphabet::normalize(&std::fs::read_to_string("secret.txt")?);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let report = crack(&ciphertext, &model, &AnalysisConfig::default(), &mut rng)?;
//! println!("{}", alphabet::render(&report.outcome.key)?);
//! # Ok::<(), vigenere_analysis::VigenereError>(())
//! ```

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod error;
pub mod fitness;
pub mod key_length;
pub mod model;
pub mod pipeline;
pub mod search;

pub use cipher::Direction;
pub use config::AnalysisConfig;
pub use error::{Result, VigenereError};
pub use fitness::{Fitness, QuadgramScorer};
pub use key_length::KeyLengthEstimator;
pub use model::FrequencyModel;
pub use pipeline::{crack, CrackReport, Strategy};
pub use search::{ExhaustiveSearch, SearchOutcome, StochasticSearch, StopReason};
