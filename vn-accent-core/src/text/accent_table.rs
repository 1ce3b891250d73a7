use std::collections::HashMap;

/// Vietnamese diacritic groups: one entry per base letter, listing the base
/// letter itself followed by every toned or modified variant.
const VIETNAMESE_GROUPS: &[(char, &str)] = &[
	('a', "a á à ả ã ạ â ấ ầ ẩ ẫ ậ ă ắ ằ ẳ ẵ ặ"),
	('o', "o ó ò ỏ õ ọ ô ố ồ ổ ỗ ộ ơ ớ ờ ở ỡ ợ"),
	('e', "e é è ẻ ẽ ẹ ê ế ề ể ễ ệ"),
	('u', "u ú ù ủ ũ ụ ư ứ ừ ử ữ ự"),
	('i', "i í ì ỉ ĩ ị"),
	('y', "y ý ỳ ỷ ỹ ỵ"),
	('d', "d đ"),
];

/// Maps accented characters back to their base letter.
///
/// Built once from enumerated groups and never mutated afterwards, so a
/// single table can be shared by reference across any number of
/// restoration calls.
///
/// # Invariants
/// - Every variant of a group (base letter included) maps to that group's base.
/// - Characters absent from the table map to themselves.
#[derive(Clone, Debug)]
pub struct AccentTable {
	to_base: HashMap<char, char>,
}

impl AccentTable {
	/// Builds the table from `(base, "v1 v2 ...")` groups.
	///
	/// Variants are separated by whitespace.
	pub fn from_groups(groups: &[(char, &str)]) -> Self {
		let mut to_base = HashMap::new();
		for (base, variants) in groups {
			for variant in variants.split_whitespace().flat_map(str::chars) {
				to_base.insert(variant, *base);
			}
		}
		Self { to_base }
	}

	/// Standard lowercase Vietnamese table (a, o, e, u, i, y, d groups).
	pub fn vietnamese() -> Self {
		Self::from_groups(VIETNAMESE_GROUPS)
	}

	/// Returns the base letter of `c`, or `None` if `c` is not in the table.
	pub fn base_of(&self, c: char) -> Option<char> {
		self.to_base.get(&c).copied()
	}

	/// Every character known to the table (bases and variants), unordered.
	pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
		self.to_base.keys().copied()
	}

	/// Strips known accents from `text`.
	///
	/// Characters not in the table (punctuation, uppercase, already-base
	/// letters) are kept as-is. The operation is idempotent.
	pub fn remove_accent(&self, text: &str) -> String {
		text.chars().map(|c| self.base_of(c).unwrap_or(c)).collect()
	}
}

impl Default for AccentTable {
	fn default() -> Self {
		Self::vietnamese()
	}
}
