use std::collections::{BTreeSet, HashMap};

use crate::text::accent_table::AccentTable;

/// Reserved character used to right-fill strings and windows to a fixed width.
pub const PAD: char = '\0';

/// Fixed, ordered character set shared by the codec and the oracle.
///
/// Characters are sorted by code point and deduplicated, so the pad
/// sentinel always sits at index 0. The column of a character in an
/// encoded window is its index here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
	chars: Vec<char>,
	index: HashMap<char, usize>,
}

impl Alphabet {
	/// Builds an alphabet from any set of characters. The pad sentinel is
	/// always included.
	pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
		let set: BTreeSet<char> = chars.into_iter().chain([PAD]).collect();
		let chars: Vec<char> = set.into_iter().collect();
		let index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
		Self { chars, index }
	}

	/// Pad, space, underscore, `a-z` and `0-9`.
	pub fn base() -> Self {
		Self::new(base_chars())
	}

	/// Base alphabet plus every character of `table`.
	pub fn full(table: &AccentTable) -> Self {
		Self::new(base_chars().chain(table.chars()))
	}

	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	/// Column of `c`, or `None` if `c` is not part of the alphabet.
	pub fn index_of(&self, c: char) -> Option<usize> {
		self.index.get(&c).copied()
	}

	/// Character at column `index`.
	pub fn char_at(&self, index: usize) -> Option<char> {
		self.chars.get(index).copied()
	}

	pub fn contains(&self, c: char) -> bool {
		self.index.contains_key(&c)
	}

	pub fn chars(&self) -> &[char] {
		&self.chars
	}
}

fn base_chars() -> impl Iterator<Item = char> {
	[PAD, ' ', '_'].into_iter().chain('a'..='z').chain('0'..='9')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn base_alphabet_layout() {
		let alphabet = Alphabet::base();
		assert_eq!(alphabet.len(), 39);
		assert_eq!(alphabet.index_of(PAD), Some(0));
		assert_eq!(alphabet.char_at(1), Some(' '));
		assert!(alphabet.contains('_'));
		assert!(!alphabet.contains('á'));
	}

	#[test]
	fn full_alphabet_adds_accented_variants() {
		let alphabet = Alphabet::full(&AccentTable::vietnamese());
		// 7 base letters are already in the base alphabet
		assert_eq!(alphabet.len(), 39 + 74 - 7);
		assert!(alphabet.contains('ữ'));
		assert!(alphabet.contains('đ'));
	}

	#[test]
	fn order_is_by_code_point() {
		let alphabet = Alphabet::new("cba".chars());
		assert_eq!(alphabet.chars(), [PAD, 'a', 'b', 'c']);
	}
}
