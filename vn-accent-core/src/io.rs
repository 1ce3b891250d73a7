use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a corpus file and returns its non-blank lines.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`, trims each line and drops empty ones
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// A corpus text file and the compiled lexicon cached next to it.
///
/// Example: `data/news.txt` is named `news` and cached as `data/news.bin`.
pub(crate) struct CorpusFile {
	pub path: PathBuf,
	pub name: String,
	pub cache: PathBuf,
}

impl CorpusFile {
	pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
		let path = path.as_ref().to_path_buf();
		let name = path
			.file_stem()
			.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Corpus path has no filename"))?
			.to_string_lossy()
			.into_owned();
		let cache = path.with_extension("bin");

		Ok(Self { path, name, cache })
	}

	/// Whether the cache exists and was written no earlier than the corpus.
	///
	/// A corpus edited after its cache was written makes the cache stale.
	pub fn cache_is_fresh(&self) -> io::Result<bool> {
		let cache = match fs::metadata(&self.cache) {
			Ok(metadata) => metadata,
			Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
			Err(e) => return Err(e),
		};
		let corpus = fs::metadata(&self.path)?;

		Ok(cache.modified()? >= corpus.modified()?)
	}
}

/// `"."` or `"./"` resolves to the current working directory, other
/// paths are returned as-is.
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists the files of `dir` with the given extension, sorted by path.
///
/// Subdirectories are ignored.
pub(crate) fn list_corpora<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}
