use crate::codec::alphabet::PAD;
use crate::error::{Error, Result};

/// Token appended to short word sequences when tail padding is enabled.
pub const PAD_TOKEN: &str = "\0";

/// An ordered tuple of consecutive words.
///
/// Holds exactly `n` words, except for the single short window produced
/// when tail padding is disabled.
pub type Window<'a> = Vec<&'a str>;

/// Splits a phrase on whitespace runs, ignoring leading and trailing whitespace.
pub fn split_words(phrase: &str) -> Vec<&str> {
	phrase.split_whitespace().collect()
}

/// Slides an `n`-word window over `words`.
///
/// # Behavior
/// - `words.len() >= n`: every contiguous window, one word apart, in order
///   (`words.len() - n + 1` windows).
/// - `words.len() < n` and `pad_tails`: one window, `words` followed by
///   `n - words.len()` pad tokens.
/// - `words.len() < n` and not `pad_tails`: one short window holding
///   `words` as-is.
///
/// # Errors
/// Returns `Error::InvalidWindowSize` if `n` is zero.
pub fn gen_ngram<'a>(words: &[&'a str], n: usize, pad_tails: bool) -> Result<Vec<Window<'a>>> {
	if n == 0 {
		return Err(Error::InvalidWindowSize(n));
	}

	if words.len() < n {
		let mut window = words.to_vec();
		if pad_tails {
			window.resize(n, PAD_TOKEN);
		}
		return Ok(vec![window]);
	}

	Ok(words.windows(n).map(<[&str]>::to_vec).collect())
}

/// Joins a window's words with single spaces.
///
/// Pad tokens are kept, so a padded window reads `"co gai \0"`.
pub fn join_window(window: &[&str]) -> String {
	window.join(" ")
}

/// Removes pad sentinels and spaces from both ends.
pub(crate) fn strip_pad(text: &str) -> &str {
	text.trim_matches(|c| c == PAD || c == ' ')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slides_one_word_at_a_time() {
		let words = split_words("co gai den tu hom qua");
		let windows = gen_ngram(&words, 3, true).unwrap();
		assert_eq!(windows.len(), 6 - 3 + 1);
		assert_eq!(windows[0], ["co", "gai", "den"]);
		assert_eq!(windows[1], ["gai", "den", "tu"]);
		assert_eq!(windows[3], ["tu", "hom", "qua"]);
	}

	#[test]
	fn exact_length_yields_one_window() {
		let words = split_words("a b c");
		assert_eq!(gen_ngram(&words, 3, false).unwrap(), vec![vec!["a", "b", "c"]]);
	}

	#[test]
	fn short_sequence_is_padded() {
		let words = split_words("co gai");
		let windows = gen_ngram(&words, 5, true).unwrap();
		assert_eq!(windows.len(), 1);
		assert_eq!(windows[0], ["co", "gai", PAD_TOKEN, PAD_TOKEN, PAD_TOKEN]);
	}

	#[test]
	fn short_sequence_without_padding_stays_short() {
		let words = split_words("co gai");
		assert_eq!(gen_ngram(&words, 5, false).unwrap(), vec![vec!["co", "gai"]]);
	}

	#[test]
	fn zero_size_is_rejected() {
		assert!(matches!(gen_ngram(&["a"], 0, true), Err(Error::InvalidWindowSize(0))));
	}

	#[test]
	fn split_collapses_whitespace() {
		assert_eq!(split_words("  xin   chao \t ban "), ["xin", "chao", "ban"]);
	}

	#[test]
	fn join_and_strip() {
		let joined = join_window(&["co", "gai", PAD_TOKEN]);
		assert_eq!(joined, "co gai \0");
		assert_eq!(strip_pad("cô gái \0\0\0"), "cô gái");
	}
}
