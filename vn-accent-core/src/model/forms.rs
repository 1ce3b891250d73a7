use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Accented forms observed for one unaccented key, with their counts.
///
/// Example: key `"co"` → `{ "có" => 42, "cô" => 17, "cơ" => 3 }`
///
/// # Invariants
/// - Every stored count is strictly positive
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormCounts {
	forms: HashMap<String, usize>,
}

impl FormCounts {
	/// Records one occurrence of `form`.
	pub fn add_form(&mut self, form: &str) {
		*self.forms.entry(form.to_owned()).or_insert(0) += 1;
	}

	/// Most frequent form.
	///
	/// Ties resolve to the lexicographically smallest form so the result
	/// does not depend on hash order. Returns `None` if nothing was recorded.
	pub fn best(&self) -> Option<&str> {
		self.forms
			.iter()
			.max_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| b.cmp(a)))
			.map(|(form, _)| form.as_str())
	}

	/// Adds the counts of `other` into this one.
	pub fn merge(&mut self, other: &Self) {
		for (form, count) in &other.forms {
			*self.forms.entry(form.clone()).or_insert(0) += *count;
		}
	}
}
