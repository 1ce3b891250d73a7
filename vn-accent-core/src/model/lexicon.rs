use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

use super::forms::FormCounts;
use super::ngram::split_words;
use crate::error::{Error, Result};
use crate::io::{CorpusFile, list_corpora, normalize_folder, read_corpus};
use crate::text::accent_table::AccentTable;
use crate::text::tokenizer::tokenize;

/// Word-level accent statistics learned from accented text.
///
/// For every word of the corpus the unaccented base form is the key and the
/// accented spelling is the observed form. Three tables are kept:
/// - `unigrams`: base → forms
/// - `left`: `"prev base"` → forms of `base` following `prev`
/// - `right`: `"base next"` → forms of `base` preceding `next`
///
/// # Invariants
/// - Keys are lowercase and accent-free; forms are lowercase
/// - Base forms never contain whitespace, so `"a b"` keys are unambiguous
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Lexicon {
	unigrams: HashMap<String, FormCounts>,
	left: HashMap<String, FormCounts>,
	right: HashMap<String, FormCounts>,
	sentences: usize,
	corpus_names: Vec<String>,
}

impl Lexicon {
	/// Loads a lexicon for a corpus file.
	///
	/// - If `<stem>.bin` exists next to the corpus and is not older than it,
	///   it is read with `postcard`.
	/// - Otherwise the corpus is learned in parallel and the result is cached
	///   to `<stem>.bin` for the next load.
	pub fn new<P: AsRef<Path>>(corpus_path: P, table: &AccentTable) -> Result<Self> {
		let corpus = CorpusFile::new(corpus_path)?;
		let start = Instant::now();

		let mut lexicon: Self = if corpus.cache_is_fresh()? {
			let bytes = std::fs::read(&corpus.cache)?;
			postcard::from_bytes(&bytes)?
		} else {
			if corpus.cache.exists() {
				info!("{} changed since {} was written, rebuilding", corpus.path.display(), corpus.cache.display());
			}
			let lexicon = Self::learn_corpus(&corpus.path, table)?;
			std::fs::write(&corpus.cache, postcard::to_stdvec(&lexicon)?)?;
			lexicon
		};
		lexicon.corpus_names.push(corpus.name);

		info!(
			"loaded lexicon {} ({} sentences, {} words) in {:.2?}",
			corpus.path.display(),
			lexicon.sentences,
			lexicon.unigrams.len(),
			start.elapsed()
		);
		Ok(lexicon)
	}

	/// Loads and merges every `.txt` corpus of a directory.
	///
	/// # Errors
	/// Returns an error if `folder` is not a directory or a corpus fails to load.
	pub fn from_folder<P: AsRef<Path>>(folder: P, table: &AccentTable) -> Result<Self> {
		let folder = normalize_folder(folder.as_ref());
		if !folder.is_dir() {
			return Err(Error::InvalidConfig(format!("expected a corpus directory, got: {}", folder.display())));
		}

		let mut lexicon = Self::default();
		for corpus in list_corpora(&folder, "txt")? {
			lexicon.merge(&Self::new(&corpus, table)?);
		}
		Ok(lexicon)
	}

	/// Reads a corpus and learns it over `num_cpus * 8` chunks.
	///
	/// Each worker builds a partial lexicon; partials are collected on an
	/// `mpsc` channel and merged.
	fn learn_corpus<P: AsRef<Path>>(corpus_path: P, table: &AccentTable) -> Result<Self> {
		let lines = read_corpus(&corpus_path)?;
		let chunks = num_cpus::get() * 8;
		let chunk_size = lines.len().div_ceil(chunks).max(1);

		let (tx, rx) = mpsc::channel();
		for chunk in lines.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk = chunk.to_vec();
			let table = table.clone();

			thread::spawn(move || {
				let mut partial = Lexicon::default();
				for sentence in &chunk {
					partial.add_sentence(sentence, &table);
				}
				// The receiver outlives every worker.
				let _ = tx.send(partial);
			});
		}
		drop(tx);

		let mut lexicon = Lexicon::default();
		for partial in rx.iter() {
			lexicon.merge(&partial);
		}
		Ok(lexicon)
	}

	/// Learns one accented sentence.
	///
	/// The sentence is lowercased and split into word runs; punctuation
	/// breaks the context, so neighbours are only taken within one run.
	pub fn add_sentence(&mut self, sentence: &str, table: &AccentTable) {
		let lowered = sentence.to_lowercase();
		for segment in tokenize(&lowered).iter().filter(|s| s.is_words()) {
			let forms = split_words(segment.text);
			let bases: Vec<String> = forms.iter().map(|form| table.remove_accent(form)).collect();

			for (i, (form, base)) in forms.iter().zip(&bases).enumerate() {
				self.unigrams.entry(base.clone()).or_default().add_form(form);
				if let Some(prev) = i.checked_sub(1).and_then(|p| bases.get(p)) {
					self.left.entry(format!("{prev} {base}")).or_default().add_form(form);
				}
				if let Some(next) = bases.get(i + 1) {
					self.right.entry(format!("{base} {next}")).or_default().add_form(form);
				}
			}
		}
		self.sentences += 1;
	}

	/// Predicts the accented form of `base`.
	///
	/// Falls back from left context, to right context, to the word alone.
	/// Returns `None` for a word never seen in the corpus.
	pub fn predict_word(&self, prev: Option<&str>, base: &str, next: Option<&str>) -> Option<&str> {
		let left = prev.and_then(|prev| self.left.get(&format!("{prev} {base}")));
		let right = next.and_then(|next| self.right.get(&format!("{base} {next}")));

		left.and_then(FormCounts::best)
			.or_else(|| right.and_then(FormCounts::best))
			.or_else(|| self.unigrams.get(base).and_then(FormCounts::best))
	}

	/// Predicts every word of an unaccented phrase; unknown words are kept.
	pub fn predict_phrase<'a>(&'a self, bases: &[&'a str]) -> Vec<&'a str> {
		(0..bases.len())
			.map(|i| {
				let prev = i.checked_sub(1).and_then(|p| bases.get(p)).copied();
				let next = bases.get(i + 1).copied();
				self.predict_word(prev, bases[i], next).unwrap_or(bases[i])
			})
			.collect()
	}

	/// Merges another lexicon into this one; counts are summed.
	pub fn merge(&mut self, other: &Self) {
		for (target, source) in [
			(&mut self.unigrams, &other.unigrams),
			(&mut self.left, &other.left),
			(&mut self.right, &other.right),
		] {
			for (key, counts) in source {
				target.entry(key.clone()).or_default().merge(counts);
			}
		}
		self.sentences += other.sentences;
		self.corpus_names.extend(other.corpus_names.iter().cloned());
	}

	/// Names of the corpora this lexicon was built from.
	pub fn corpus_names(&self) -> &[String] {
		&self.corpus_names
	}

	/// Number of distinct base words.
	pub fn len(&self) -> usize {
		self.unigrams.len()
	}

	pub fn is_empty(&self) -> bool {
		self.unigrams.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn learned(sentences: &[&str]) -> Lexicon {
		let table = AccentTable::vietnamese();
		let mut lexicon = Lexicon::default();
		for sentence in sentences {
			lexicon.add_sentence(sentence, &table);
		}
		lexicon
	}

	#[test]
	fn unigram_prediction() {
		let lexicon = learned(&["Cô gái đến từ hôm qua."]);
		assert_eq!(lexicon.predict_word(None, "gai", None), Some("gái"));
		assert_eq!(lexicon.predict_word(None, "xyz", None), None);
		assert_eq!(lexicon.len(), 6);
	}

	#[test]
	fn context_beats_unigram() {
		let lexicon = learned(&["tôi có cá", "tôi có cá", "cô giáo", "bà cô ấy"]);
		// unigram for "co": có x2, cô x2 -> "có" by tie-break
		assert_eq!(lexicon.predict_word(None, "co", None), Some("có"));
		// left context "ba co" was only seen as "cô"
		assert_eq!(lexicon.predict_word(Some("ba"), "co", None), Some("cô"));
		// right context "co giao"
		assert_eq!(lexicon.predict_word(Some("zz"), "co", Some("giao")), Some("cô"));
	}

	#[test]
	fn punctuation_breaks_context() {
		let lexicon = learned(&["ăn, cơm"]);
		assert_eq!(lexicon.predict_word(Some("an"), "com", None), Some("cơm"));
		assert!(lexicon.left.is_empty());
	}

	#[test]
	fn phrase_keeps_unknown_words() {
		let lexicon = learned(&["cô gái đến từ hôm qua"]);
		assert_eq!(lexicon.predict_phrase(&["co", "gai", "abc"]), ["cô", "gái", "abc"]);
	}

	#[test]
	fn merge_adds_counts() {
		let mut a = learned(&["cơ hội"]);
		let b = learned(&["có", "có"]);
		a.merge(&b);
		assert_eq!(a.predict_word(None, "co", None), Some("có"));
		assert_eq!(a.sentences, 3);
	}

	#[test]
	fn learns_corpus_file_and_caches_it() {
		let dir = std::env::temp_dir().join(format!("vn-accent-lexicon-{}", std::process::id()));
		std::fs::create_dir_all(&dir).unwrap();
		let corpus = dir.join("news.txt");
		std::fs::write(&corpus, "Cô gái đến từ hôm qua\n\nTôi đi học\n").unwrap();

		let table = AccentTable::vietnamese();
		let built = Lexicon::new(&corpus, &table).unwrap();
		assert!(dir.join("news.bin").exists());
		assert_eq!(built.sentences, 2);
		assert_eq!(built.corpus_names(), ["news"]);

		let cached = Lexicon::new(&corpus, &table).unwrap();
		assert_eq!(cached.predict_word(None, "hoc", None), Some("học"));

		let folder = Lexicon::from_folder(&dir, &table).unwrap();
		assert_eq!(folder.len(), built.len());

		std::fs::remove_dir_all(&dir).unwrap();
	}

	#[test]
	fn stale_cache_is_rebuilt() {
		use std::fs::{self, File};
		use std::time::Duration;

		let dir = std::env::temp_dir().join(format!("vn-accent-stale-{}", std::process::id()));
		fs::create_dir_all(&dir).unwrap();
		let corpus = dir.join("news.txt");
		let table = AccentTable::vietnamese();

		fs::write(&corpus, "tôi có cá\n").unwrap();
		Lexicon::new(&corpus, &table).unwrap();
		let written = fs::metadata(dir.join("news.bin")).unwrap().modified().unwrap();
		let touch = |at| File::options().write(true).open(&corpus).unwrap().set_modified(at).unwrap();

		// an older corpus keeps the cache
		fs::write(&corpus, "cô giáo\n").unwrap();
		touch(written - Duration::from_secs(60));
		assert_eq!(Lexicon::new(&corpus, &table).unwrap().predict_word(None, "co", None), Some("có"));

		// a newer corpus replaces it
		touch(written + Duration::from_secs(60));
		assert_eq!(Lexicon::new(&corpus, &table).unwrap().predict_word(None, "co", None), Some("cô"));

		fs::remove_dir_all(&dir).unwrap();
	}
}
