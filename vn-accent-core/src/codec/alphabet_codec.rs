use ndarray::Array2;

use super::alphabet::{Alphabet, PAD};
use crate::error::{Error, Result};

/// One-hot encoded window: `maxlen` rows by `alphabet.len()` columns.
pub type EncodedWindow = Array2<f32>;

/// Right-pads `text` with the pad sentinel to exactly `maxlen` characters.
///
/// Longer text is returned unchanged (truncation is the encoder's job).
pub fn pad(text: &str, maxlen: usize) -> String {
	let len = text.chars().count();
	let mut padded = String::with_capacity(text.len() + maxlen.saturating_sub(len));
	padded.push_str(text);
	padded.extend(std::iter::repeat_n(PAD, maxlen.saturating_sub(len)));
	padded
}

/// Fixed-width positional one-hot codec over a closed alphabet.
///
/// # Invariants
/// - `encode` always produces exactly `maxlen` rows (truncation or padding).
/// - Every input character must belong to the alphabet.
#[derive(Clone, Debug)]
pub struct AlphabetCodec {
	alphabet: Alphabet,
	maxlen: usize,
}

impl AlphabetCodec {
	pub fn new(alphabet: Alphabet, maxlen: usize) -> Self {
		Self { alphabet, maxlen }
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	pub fn maxlen(&self) -> usize {
		self.maxlen
	}

	/// Encodes `text` into a `maxlen` x `|alphabet|` one-hot matrix.
	///
	/// # Behavior
	/// - Row `i` holds the one-hot encoding of the `i`-th character.
	/// - Characters beyond `maxlen` are dropped; missing rows encode the pad sentinel.
	///
	/// # Errors
	/// Returns `Error::UnknownCharacter` for the first character (within the
	/// first `maxlen`) that is not in the alphabet.
	pub fn encode(&self, text: &str) -> Result<EncodedWindow> {
		self.encode_with(text, self.maxlen)
	}

	/// Same as [`encode`](Self::encode) with an explicit width.
	pub fn encode_with(&self, text: &str, maxlen: usize) -> Result<EncodedWindow> {
		let mut x = Array2::zeros((maxlen, self.alphabet.len()));
		let chars = text.chars().chain(std::iter::repeat(PAD)).take(maxlen);
		for (row, c) in chars.enumerate() {
			let column = self.alphabet.index_of(c).ok_or(Error::UnknownCharacter(c))?;
			x[[row, column]] = 1.0;
		}
		Ok(x)
	}

	/// Tolerant variant of [`encode`](Self::encode): returns `None` instead of
	/// failing on an unknown character.
	pub fn try_encode(&self, text: &str) -> Option<EncodedWindow> {
		self.encode(text).ok()
	}

	/// Decodes a score matrix by taking the argmax column of every row.
	///
	/// Ties resolve to the lowest column.
	///
	/// # Errors
	/// Returns `Error::ShapeMismatch` if the matrix width differs from the alphabet size.
	pub fn decode(&self, x: &Array2<f32>) -> Result<String> {
		if x.ncols() != self.alphabet.len() {
			return Err(Error::ShapeMismatch { expected: self.alphabet.len(), found: x.ncols() });
		}

		let mut classes = Vec::with_capacity(x.nrows());
		for row in x.rows() {
			let mut best = 0;
			for (column, &score) in row.iter().enumerate() {
				if score > row[best] {
					best = column;
				}
			}
			classes.push(best);
		}
		self.decode_classes(&classes)
	}

	/// Decodes rows that are already reduced to class indices.
	///
	/// # Errors
	/// Returns `Error::InvalidClass` for an index outside the alphabet.
	pub fn decode_classes(&self, classes: &[usize]) -> Result<String> {
		classes
			.iter()
			.map(|&class| self.alphabet.char_at(class).ok_or(Error::InvalidClass(class)))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::accent_table::AccentTable;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	fn codec(maxlen: usize) -> AlphabetCodec {
		AlphabetCodec::new(Alphabet::full(&AccentTable::vietnamese()), maxlen)
	}

	#[test]
	fn encode_shape_and_one_hot_rows() {
		let codec = codec(8);
		let x = codec.encode("cô").unwrap();
		assert_eq!(x.shape(), [8, codec.alphabet().len()]);
		for row in x.rows() {
			assert_eq!(row.sum(), 1.0);
		}
		assert_eq!(x[[1, codec.alphabet().index_of('ô').unwrap()]], 1.0);
		assert_eq!(x[[7, 0]], 1.0, "tail rows are padding");
	}

	#[test]
	fn encode_truncates_long_text() {
		let codec = codec(4);
		let x = codec.encode("xin chao").unwrap();
		assert_eq!(x.nrows(), 4);
		assert_eq!(codec.decode(&x).unwrap(), "xin ");
	}

	#[test]
	fn unknown_character_fails_strict_and_is_absent_tolerant() {
		let codec = codec(8);
		assert!(matches!(codec.encode("café!"), Err(Error::UnknownCharacter('!'))));
		assert!(codec.try_encode("café!").is_none());
		assert!(codec.try_encode("cafe").is_some());
	}

	#[test]
	fn unknown_character_past_maxlen_is_ignored() {
		let codec = codec(3);
		assert!(codec.encode("abc!").is_ok());
	}

	#[test]
	fn decode_checks_width() {
		let codec = codec(2);
		let x = Array2::<f32>::zeros((2, 5));
		assert!(matches!(codec.decode(&x), Err(Error::ShapeMismatch { found: 5, .. })));
	}

	#[test]
	fn decode_classes_rejects_out_of_range() {
		let codec = codec(2);
		assert!(matches!(codec.decode_classes(&[0, 999]), Err(Error::InvalidClass(999))));
	}

	#[test]
	fn decode_soft_scores_uses_argmax() {
		let codec = AlphabetCodec::new(Alphabet::new("ab".chars()), 2);
		let x = ndarray::array![[0.1, 0.7, 0.2], [0.0, 0.3, 0.6]];
		assert_eq!(codec.decode(&x).unwrap(), "ab");
	}

	#[test]
	fn round_trip_pads_to_maxlen() {
		let codec = codec(12);
		let pool = codec.alphabet().chars().to_vec();
		let mut rng = StdRng::seed_from_u64(5);

		for _ in 0..100 {
			let len = rng.random_range(0..=12);
			let s: String = (0..len).map(|_| pool[rng.random_range(0..pool.len())]).collect();
			let decoded = codec.decode(&codec.encode(&s).unwrap()).unwrap();
			assert_eq!(decoded, pad(&s, 12));
		}
	}

	#[test]
	fn pad_counts_characters() {
		assert_eq!(pad("đi", 4), "đi\0\0");
		assert_eq!(pad("long", 2), "long");
	}
}
