use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::alphabet::Alphabet;
use crate::codec::alphabet_codec::AlphabetCodec;
use crate::error::{Error, Result};
use crate::text::accent_table::AccentTable;

/// Restoration settings, supplied once at startup.
///
/// Field names on disk follow the model directory's `config.json`
/// (`MAXLEN`, `INVERT`, `NGRAM`, ...). Missing keys take their default.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AccentConfig {
	/// Window width in characters.
	pub maxlen: usize,

	/// Reverse the window text before encoding. Must match the oracle's
	/// training convention.
	pub invert: bool,

	/// Window size in words.
	pub ngram: usize,

	/// Pad word sequences shorter than `ngram` with pad tokens.
	#[serde(rename = "PAD_WORDS_INPUT")]
	pub pad_tails: bool,

	/// Encode oracle input with the unaccented alphabet only.
	pub base_codec_input: bool,

	/// Pass a word segment through unchanged when one of its windows
	/// cannot be encoded, instead of failing the whole call.
	pub tolerant_encoding: bool,

	/// Fan the windows of a segment out over worker threads.
	pub parallel_windows: bool,
}

impl Default for AccentConfig {
	fn default() -> Self {
		Self {
			maxlen: 32,
			invert: true,
			ngram: 5,
			pad_tails: true,
			base_codec_input: false,
			tolerant_encoding: false,
			parallel_windows: false,
		}
	}
}

impl AccentConfig {
	/// Parses and validates a JSON configuration.
	///
	/// # Errors
	/// `Error::Json` on malformed JSON, `Error::InvalidConfig` if a value is out of range.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and validates a JSON configuration file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let json = std::fs::read_to_string(path)?;
		Self::from_json(&json)
	}

	/// Checks value ranges.
	///
	/// # Errors
	/// Returns `Error::InvalidConfig` if `maxlen` or `ngram` is zero.
	pub fn validate(&self) -> Result<()> {
		if self.maxlen == 0 {
			return Err(Error::InvalidConfig("MAXLEN must be >= 1".to_owned()));
		}
		if self.ngram == 0 {
			return Err(Error::InvalidConfig("NGRAM must be >= 1".to_owned()));
		}
		Ok(())
	}

	/// Codec for the oracle's output: the full accented alphabet.
	pub fn output_codec(&self, table: &AccentTable) -> AlphabetCodec {
		AlphabetCodec::new(Alphabet::full(table), self.maxlen)
	}

	/// Codec for the oracle's input: the base alphabet when
	/// `base_codec_input` is set, the full alphabet otherwise.
	pub fn input_codec(&self, table: &AccentTable) -> AlphabetCodec {
		if self.base_codec_input {
			AlphabetCodec::new(Alphabet::base(), self.maxlen)
		} else {
			self.output_codec(table)
		}
	}
}
