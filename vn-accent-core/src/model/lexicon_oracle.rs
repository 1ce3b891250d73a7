use super::lexicon::Lexicon;
use super::ngram::{split_words, strip_pad};
use super::oracle::Oracle;
use crate::codec::alphabet::PAD;
use crate::codec::alphabet_codec::{AlphabetCodec, EncodedWindow};
use crate::config::AccentConfig;
use crate::error::OracleError;
use crate::text::accent_table::AccentTable;

/// [`Oracle`] backed by a [`Lexicon`].
///
/// Decodes the window with the same input codec the restorer encodes with,
/// undoes the configured inversion, then predicts word by word using the
/// neighbours inside the window as context.
#[derive(Clone, Debug)]
pub struct LexiconOracle {
	lexicon: Lexicon,
	codec: AlphabetCodec,
	invert: bool,
}

impl LexiconOracle {
	pub fn new(lexicon: Lexicon, config: &AccentConfig, table: &AccentTable) -> Self {
		Self { lexicon, codec: config.input_codec(table), invert: config.invert }
	}

	pub fn lexicon(&self) -> &Lexicon {
		&self.lexicon
	}
}

impl Oracle for LexiconOracle {
	fn predict(&self, window: &EncodedWindow) -> Result<String, OracleError> {
		let decoded = self.codec.decode(window)?;
		let text: String = if self.invert { decoded.chars().rev().collect() } else { decoded };

		let bases = split_words(strip_pad(&text));
		let guess = self.lexicon.predict_phrase(&bases).join(" ");

		let maxlen = self.codec.maxlen();
		Ok(guess.chars().chain(std::iter::repeat(PAD)).take(maxlen).collect())
	}
}
