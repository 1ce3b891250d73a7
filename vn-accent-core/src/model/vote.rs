use super::ngram::strip_pad;

/// Observed words at one absolute word position, in first-insertion order.
///
/// Conceptually a small multiset: each entry is a distinct word and the
/// number of windows that predicted it at this position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Slot {
	counts: Vec<(String, usize)>,
}

impl Slot {
	fn observe(&mut self, word: &str) {
		match self.counts.iter_mut().find(|(w, _)| w == word) {
			Some((_, count)) => *count += 1,
			None => self.counts.push((word.to_owned(), 1)),
		}
	}

	/// Plurality winner. Ties go to the word inserted first.
	fn winner(&self) -> Option<&str> {
		let mut best: Option<&(String, usize)> = None;
		for entry in &self.counts {
			if best.is_none_or(|b| entry.1 > b.1) {
				best = Some(entry);
			}
		}
		best.map(|(word, _)| word.as_str())
	}
}

/// Per-position vote tally over a sequence of overlapping windows.
///
/// # Invariants
/// - Holds exactly `window_count + n - 1` slots.
/// - The window at index `idx` votes for positions `idx..idx + n`.
///
/// # Tie-break
/// When several words share the highest count at a position, the word
/// first inserted into that position wins. This is a stable policy, not
/// an artifact of iteration order.
#[derive(Clone, Debug)]
pub struct VoteTally {
	n: usize,
	slots: Vec<Slot>,
}

impl VoteTally {
	pub fn new(window_count: usize, n: usize) -> Self {
		let len = (window_count + n).saturating_sub(1);
		Self { n, slots: vec![Slot::default(); len] }
	}

	/// Number of word positions.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Records the guess of the window at index `idx`.
	///
	/// The guess is split on whitespace and at most `n` words are counted.
	/// Words that would fall past the last slot are ignored.
	pub fn observe(&mut self, idx: usize, guess: &str) {
		for (wid, word) in guess.split_whitespace().take(self.n).enumerate() {
			if let Some(slot) = self.slots.get_mut(idx + wid) {
				slot.observe(word);
			}
		}
	}

	/// Observation counts at `position`, in first-insertion order.
	pub fn counts(&self, position: usize) -> Option<&[(String, usize)]> {
		self.slots.get(position).map(|slot| slot.counts.as_slice())
	}

	/// Winning word of every position that has at least one observation.
	///
	/// Positions nobody voted on are skipped.
	pub fn winners(&self) -> Vec<&str> {
		self.slots.iter().filter_map(Slot::winner).collect()
	}

	/// Joins the winners with single spaces and strips trailing padding.
	pub fn into_phrase(self) -> String {
		strip_pad(&self.winners().join(" ")).to_owned()
	}
}

/// Reconciles overlapping window guesses into one phrase.
///
/// `guesses[idx]` is the decoded (pad-stripped) guess of the window
/// starting at word `idx`; `n` is the window size.
pub fn reconcile<S: AsRef<str>>(guesses: &[S], n: usize) -> String {
	let mut tally = VoteTally::new(guesses.len(), n);
	for (idx, guess) in guesses.iter().enumerate() {
		tally.observe(idx, guess.as_ref());
	}
	tally.into_phrase()
}
