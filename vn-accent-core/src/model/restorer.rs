use std::sync::mpsc;
use std::thread;

use log::{debug, warn};

use super::ngram::{gen_ngram, join_window, split_words, strip_pad};
use super::oracle::Oracle;
use super::vote::reconcile;
use crate::codec::alphabet_codec::{AlphabetCodec, EncodedWindow, pad};
use crate::config::AccentConfig;
use crate::error::{Error, OracleError, Result};
use crate::text::accent_table::AccentTable;
use crate::text::case::CaseMask;
use crate::text::tokenizer::tokenize;

/// Restores Vietnamese diacritics on plain text.
///
/// Owns the immutable tables (configuration, accent table, codecs) and an
/// [`Oracle`]. A restorer can be shared by reference across threads; each
/// call to [`add_accent`](Self::add_accent) is independent.
///
/// # Pipeline
/// 1. Record the case of the input
/// 2. Lowercase and strip known accents
/// 3. Split into word-like and symbol-like segments
/// 4. For each word segment: windows → encode → oracle → vote
/// 5. Reassemble with the untouched symbol segments
/// 6. Re-apply the recorded case
pub struct AccentRestorer<O: Oracle> {
	config: AccentConfig,
	table: AccentTable,
	input_codec: AlphabetCodec,
	codec: AlphabetCodec,
	oracle: O,
}

impl<O: Oracle> AccentRestorer<O> {
	/// Builds a restorer.
	///
	/// # Errors
	/// Returns `Error::InvalidConfig` if the configuration does not validate.
	pub fn new(config: AccentConfig, table: AccentTable, oracle: O) -> Result<Self> {
		config.validate()?;
		let input_codec = config.input_codec(&table);
		let codec = config.output_codec(&table);
		Ok(Self { config, table, input_codec, codec, oracle })
	}

	pub fn config(&self) -> &AccentConfig {
		&self.config
	}

	pub fn table(&self) -> &AccentTable {
		&self.table
	}

	/// Codec used to encode oracle input.
	pub fn input_codec(&self) -> &AlphabetCodec {
		&self.input_codec
	}

	/// Codec of the oracle's output alphabet.
	pub fn codec(&self) -> &AlphabetCodec {
		&self.codec
	}

	pub fn oracle(&self) -> &O {
		&self.oracle
	}

	/// Adds diacritics to `text`.
	///
	/// Symbol runs are kept byte for byte, word runs are predicted, and the
	/// case of the original text is re-applied character by character.
	///
	/// # Errors
	/// - `Error::UnknownCharacter` if a window cannot be encoded (strict mode)
	/// - `Error::WindowTooWide` if a window's words exceed `maxlen` (strict mode)
	/// - `Error::OracleFailure` if the oracle fails
	/// - `Error::LengthMismatch` if the restored text does not align with the input
	///
	/// Nothing is returned on failure: the call is all-or-nothing.
	pub fn add_accent(&self, text: &str) -> Result<String> {
		let mask = CaseMask::from_text(text);
		let prepared = self.table.remove_accent(&text.to_lowercase());

		let segments = tokenize(&prepared);
		debug!("input: {:?}", segments.iter().map(|s| s.text).collect::<Vec<_>>());

		let mut outputs = Vec::with_capacity(segments.len());
		for segment in &segments {
			if segment.is_words() {
				outputs.push(self.restore_segment(segment.text)?);
			} else {
				outputs.push(segment.text.to_owned());
			}
		}
		debug!("output: {outputs:?}");

		mask.apply(&outputs.concat())
	}

	/// Restores one word-like segment, keeping its original spacing.
	///
	/// In tolerant mode a segment whose windows cannot be encoded is
	/// returned unchanged.
	fn restore_segment(&self, segment: &str) -> Result<String> {
		match self.restore_phrase(segment)? {
			Some(phrase) => Ok(project_spacing(segment, &phrase)),
			None => Ok(segment.to_owned()),
		}
	}

	/// Restores a phrase already lowercased and stripped by `add_accent`.
	///
	/// Returns the reconciled words joined by single spaces, or `None` when
	/// tolerant encoding skipped the phrase.
	fn restore_phrase(&self, phrase: &str) -> Result<Option<String>> {
		let words = split_words(phrase);
		let windows = gen_ngram(&words, self.config.ngram, self.config.pad_tails)?;

		let mut encoded = Vec::with_capacity(windows.len());
		for window in &windows {
			if !self.config.tolerant_encoding {
				encoded.push(self.input_codec.encode(&self.prepare_window(window)?)?);
				continue;
			}

			match self.prepare_window(window) {
				Ok(text) => match self.input_codec.try_encode(&text) {
					Some(x) => encoded.push(x),
					None => {
						warn!("skipping {phrase:?}: window {window:?} has characters outside the alphabet");
						return Ok(None);
					}
				},
				Err(Error::WindowTooWide { width, maxlen, .. }) => {
					warn!("skipping {phrase:?}: window {window:?} is {width} characters wide, MAXLEN is {maxlen}");
					return Ok(None);
				}
				Err(e) => return Err(e),
			}
		}

		let guesses = self.predict_windows(&encoded)?;
		let guesses: Vec<&str> = guesses.iter().map(|guess| strip_pad(guess)).collect();
		Ok(Some(reconcile(&guesses, self.config.ngram)))
	}

	/// Predicts a single window and returns the pad-stripped guess.
	pub fn guess(&self, window: &[&str]) -> Result<String> {
		let encoded = self.input_codec.encode(&self.prepare_window(window)?)?;
		let guess = self.oracle.predict(&encoded).map_err(Error::OracleFailure)?;
		Ok(strip_pad(&guess).to_owned())
	}

	/// Joins a window, pads it to `maxlen` and reverses it if configured.
	///
	/// The trailing pad tokens of a padded window do not count against
	/// `maxlen`: they are pure padding and the encoder may drop them.
	///
	/// # Errors
	/// Returns `Error::WindowTooWide` if the words themselves do not fit in
	/// `maxlen` characters. Truncating them would shift the oracle's words
	/// out of their vote positions.
	pub fn prepare_window(&self, window: &[&str]) -> Result<String> {
		let joined = join_window(window);
		let width = strip_pad(&joined).chars().count();
		if width > self.config.maxlen {
			return Err(Error::WindowTooWide { window: joined, width, maxlen: self.config.maxlen });
		}

		let text: String = pad(&joined, self.config.maxlen).chars().take(self.config.maxlen).collect();
		Ok(if self.config.invert { text.chars().rev().collect() } else { text })
	}

	/// Runs the oracle over every window of a segment, preserving order.
	///
	/// With `parallel_windows`, windows are split into one chunk per CPU
	/// and each chunk is predicted on a scoped worker thread. Results are
	/// collected on an `mpsc` channel and put back in window order.
	fn predict_windows(&self, encoded: &[EncodedWindow]) -> Result<Vec<String>> {
		if !self.config.parallel_windows || encoded.len() < 2 {
			return self.oracle.predict_batch(encoded).map_err(Error::OracleFailure);
		}

		let chunk_size = encoded.len().div_ceil(num_cpus::get().max(1));
		let (tx, rx) = mpsc::channel::<(usize, std::result::Result<Vec<String>, OracleError>)>();

		thread::scope(|scope| {
			for (index, chunk) in encoded.chunks(chunk_size).enumerate() {
				let tx = tx.clone();
				let oracle = &self.oracle;
				scope.spawn(move || {
					// The receiver outlives the scope.
					let _ = tx.send((index, oracle.predict_batch(chunk)));
				});
			}
		});
		drop(tx);

		let mut parts: Vec<_> = rx.iter().collect();
		parts.sort_by_key(|(index, _)| *index);

		let mut guesses = Vec::with_capacity(encoded.len());
		for (_, part) in parts {
			guesses.extend(part.map_err(Error::OracleFailure)?);
		}
		Ok(guesses)
	}
}

/// Lays restored words back onto the whitespace of the original segment.
///
/// Falls back to the single-spaced phrase when the word counts differ.
fn project_spacing(segment: &str, phrase: &str) -> String {
	let restored: Vec<&str> = phrase.split_whitespace().collect();
	if restored.len() != split_words(segment).len() {
		return phrase.to_owned();
	}

	let mut output = String::with_capacity(segment.len() + phrase.len());
	let mut words = restored.into_iter();
	let mut in_word = false;
	for c in segment.chars() {
		if c.is_whitespace() {
			output.push(c);
			in_word = false;
		} else if !in_word {
			in_word = true;
			output.extend(words.next());
		}
	}
	output
}
