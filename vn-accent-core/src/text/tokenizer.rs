use std::sync::LazyLock;

use regex::Regex;

// Static patterns: a failure to compile is a programming error.
static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w[\w ]*|\W+").unwrap());
static WORDS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w[\w ]*$").unwrap());

/// Classification of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
	/// Starts with a word character and holds only word characters and spaces.
	Words,
	/// Everything else: punctuation, symbols, stray whitespace.
	Symbols,
}

/// A maximal run of the input, borrowed from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
	pub text: &'a str,
	pub kind: SegmentKind,
}

impl Segment<'_> {
	pub fn is_words(&self) -> bool {
		self.kind == SegmentKind::Words
	}
}

/// Returns `true` if the whole of `text` is a word-like run.
pub fn is_words(text: &str) -> bool {
	WORDS_RE.is_match(text)
}

/// Splits `text` into word-like and symbol-like runs.
///
/// Runs are returned in input order and concatenating their `text`
/// reproduces `text` exactly: every character belongs to exactly one run.
///
/// # Example
/// `"Co gai, den tu."` → `["Co gai", ", ", "den tu", "."]`
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
	SEGMENT_RE
		.find_iter(text)
		.map(|m| {
			let kind = if is_words(m.as_str()) { SegmentKind::Words } else { SegmentKind::Symbols };
			Segment { text: m.as_str(), kind }
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	#[test]
	fn splits_words_and_punctuation() {
		let segments = tokenize("Co gai, den tu.");
		let texts: Vec<&str> = segments.iter().map(|s| s.text).collect();
		assert_eq!(texts, ["Co gai", ", ", "den tu", "."]);

		let kinds: Vec<SegmentKind> = segments.iter().map(|s| s.kind).collect();
		assert_eq!(kinds, [SegmentKind::Words, SegmentKind::Symbols, SegmentKind::Words, SegmentKind::Symbols]);
	}

	#[test]
	fn leading_space_is_a_symbol_run() {
		let texts: Vec<&str> = tokenize("  xin chao  ").iter().map(|s| s.text).collect();
		// trailing spaces stay attached to the word run
		assert_eq!(texts, ["  ", "xin chao  "]);
	}

	#[test]
	fn repeated_symbols_form_one_run() {
		let segments = tokenize("a?!... b");
		assert_eq!(segments.len(), 3);
		assert_eq!(segments[1].text, "?!... ");
		assert!(!segments[1].is_words());
	}

	#[test]
	fn empty_input_has_no_segments() {
		assert!(tokenize("").is_empty());
	}

	#[test]
	fn partition_is_complete() {
		let pool: Vec<char> = "ab đêz09_ ,.!?\n\t-\"'()ưọ".chars().collect();
		let mut rng = StdRng::seed_from_u64(3);

		for _ in 0..300 {
			let len = rng.random_range(0..50);
			let s: String = (0..len).map(|_| pool[rng.random_range(0..pool.len())]).collect();
			let joined: String = tokenize(&s).iter().map(|seg| seg.text).collect();
			assert_eq!(joined, s);
		}
	}
}
