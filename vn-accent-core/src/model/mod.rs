//! Prediction side of the restoration pipeline.
//!
//! - Sliding n-word windows (`gen_ngram`)
//! - The external predictor contract (`Oracle`)
//! - Plurality vote over overlapping window guesses (`VoteTally`)
//! - The end-to-end orchestrator (`AccentRestorer`)
//! - A corpus-trained predictor (`Lexicon`, `LexiconOracle`)

/// Fixed-size word windows with tail padding.
pub mod ngram;

/// Per-position plurality vote.
pub mod vote;

/// Predictor contract consumed by the restorer.
pub mod oracle;

/// End-to-end accent restoration.
pub mod restorer;

/// Accented form counts for one key.
///
/// Not exposed publicly.
mod forms;

/// Word-level accent statistics learned from a corpus.
pub mod lexicon;

/// `Oracle` implementation backed by a `Lexicon`.
pub mod lexicon_oracle;
