use crate::error::{Error, Result};

/// Per-character record of which characters of a text were uppercase.
///
/// Indices are character indices (not bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseMask {
	upper: Vec<bool>,
}

impl CaseMask {
	/// Records the case of every character of `text`.
	pub fn from_text(text: &str) -> Self {
		Self { upper: text.chars().map(char::is_uppercase).collect() }
	}

	/// Number of characters covered by the mask.
	pub fn len(&self) -> usize {
		self.upper.len()
	}

	pub fn is_empty(&self) -> bool {
		self.upper.is_empty()
	}

	/// Uppercases every character of `restored` whose index was uppercase
	/// in the recorded text.
	///
	/// # Errors
	/// Returns `Error::LengthMismatch` if `restored` does not have exactly as
	/// many characters as the recorded text.
	pub fn apply(&self, restored: &str) -> Result<String> {
		let restored_len = restored.chars().count();
		if restored_len != self.upper.len() {
			return Err(Error::LengthMismatch { original: self.upper.len(), restored: restored_len });
		}

		let mut output = String::with_capacity(restored.len());
		for (c, &upper) in restored.chars().zip(&self.upper) {
			if upper {
				output.extend(c.to_uppercase());
			} else {
				output.push(c);
			}
		}
		Ok(output)
	}
}

/// Re-applies the case of `original` onto `restored`.
///
/// See [`CaseMask::apply`].
pub fn restore_case(original: &str, restored: &str) -> Result<String> {
	CaseMask::from_text(original).apply(restored)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn restores_leading_capital() {
		assert_eq!(restore_case("Co gai", "co gai").unwrap(), "Co gai");
		assert_eq!(restore_case("Co gai", "cô gái").unwrap(), "Cô gái");
	}

	#[test]
	fn restores_full_uppercase() {
		assert_eq!(restore_case("CO", "co").unwrap(), "CO");
		assert_eq!(restore_case("DEN", "đến").unwrap(), "ĐẾN");
	}

	#[test]
	fn lowercase_mask_leaves_text_unchanged() {
		assert_eq!(restore_case("co gai", "cô gái").unwrap(), "cô gái");
	}

	#[test]
	fn length_mismatch_is_an_error() {
		let err = restore_case("co gai ", "cô gái").unwrap_err();
		assert!(matches!(err, Error::LengthMismatch { original: 7, restored: 6 }));
	}

	#[test]
	fn mask_counts_characters_not_bytes() {
		let mask = CaseMask::from_text("Đà");
		assert_eq!(mask.len(), 2);
		assert_eq!(mask.apply("đà").unwrap(), "Đà");
	}
}
