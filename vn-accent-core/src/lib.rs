//! Vietnamese diacritic restoration.
//!
//! This crate restores accents on unaccented text by querying a fixed-width
//! character-sequence predictor over sliding word windows and reconciling
//! the overlapping guesses by plurality vote. It provides:
//! - A positional one-hot codec over a closed alphabet
//! - Accent stripping, segmentation and case restoration
//! - N-gram windowing and per-position voting
//! - The `Oracle` contract and a corpus-trained implementation
//!
//! The predictor itself is a black box: anything implementing `Oracle`
//! can be plugged into `AccentRestorer`.

/// Alphabet and one-hot codec.
pub mod codec;

/// Restoration settings.
pub mod config;

/// Error type shared by the whole pipeline.
pub mod error;

/// Windowing, voting, oracle contract and orchestration.
pub mod model;

/// Accent table, tokenizer and case mask.
pub mod text;

/// I/O utilities (corpus loading, cache paths).
///
/// Not exposed
pub(crate) mod io;

pub use codec::alphabet::{Alphabet, PAD};
pub use codec::alphabet_codec::{AlphabetCodec, EncodedWindow};
pub use config::AccentConfig;
pub use error::{Error, OracleError, Result};
pub use model::lexicon::Lexicon;
pub use model::lexicon_oracle::LexiconOracle;
pub use model::oracle::Oracle;
pub use model::restorer::AccentRestorer;
pub use text::accent_table::AccentTable;
