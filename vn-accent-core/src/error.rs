use thiserror::Error;

/// Error returned by an [`Oracle`](crate::model::oracle::Oracle) implementation.
///
/// Boxed so that any predictor backend can report its own failure type.
pub type OracleError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by the accent restoration pipeline.
///
/// # Variants
/// - `UnknownCharacter`: strict encoding met a character outside the alphabet.
/// - `InvalidClass` / `ShapeMismatch`: a prediction could not be decoded
///   against the alphabet.
/// - `InvalidWindowSize`: an n-gram size of zero was requested.
/// - `WindowTooWide`: a joined window does not fit in `maxlen` characters.
/// - `OracleFailure`: the external predictor failed; fatal for the call.
/// - `LengthMismatch`: original and restored texts are not aligned
///   character by character, so case cannot be restored.
/// - `InvalidConfig`, `Io`, `Json`, `Serialization`: setup failures.
#[derive(Debug, Error)]
pub enum Error {
	#[error("unknown character {0:?} (not in alphabet)")]
	UnknownCharacter(char),

	#[error("class index {0} is outside the alphabet")]
	InvalidClass(usize),

	#[error("prediction has {found} columns, alphabet has {expected}")]
	ShapeMismatch { expected: usize, found: usize },

	#[error("window size must be >= 1, got {0}")]
	InvalidWindowSize(usize),

	#[error("window {window:?} is {width} characters wide, MAXLEN is {maxlen}: it would be truncated")]
	WindowTooWide { window: String, width: usize, maxlen: usize },

	#[error("oracle failure: {0}")]
	OracleFailure(#[source] OracleError),

	#[error("length mismatch: original has {original} characters, restored has {restored}")]
	LengthMismatch { original: usize, restored: usize },

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] postcard::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
