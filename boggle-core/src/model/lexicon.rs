use std::path::Path;
use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::io::{build_output_path, parse_words, read_words};
use super::frequency::{LetterCounts, LetterFrequency};
use super::trie::Trie;

/// Word lists at or below this size are built on the calling thread.
const PARALLEL_THRESHOLD: usize = 4096;

/// Letter-frequency table and prefix trie derived from one word list.
///
/// Both parts are immutable once built and are shared by board generation,
/// path validation and the solver.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Lexicon {
	frequency: LetterFrequency,
	trie: Trie,
	word_count: usize,
}

/// Counts and trie for one chunk of the word list, before weights are derived.
#[derive(Default)]
struct PartialLexicon {
	counts: LetterCounts,
	trie: Trie,
}

impl PartialLexicon {
	fn add_word(&mut self, word: &str) {
		self.counts.add_word(word);
		self.trie.insert(word);
	}

	fn merge(&mut self, other: PartialLexicon) {
		self.counts.merge(&other.counts);
		self.trie.merge(other.trie);
	}

	fn finish(self) -> Result<Lexicon> {
		let frequency = LetterFrequency::from_counts(&self.counts)?;
		log::debug!(
			"Lexicon built: {} words, {} letters, {} shadowed words",
			self.counts.words(),
			frequency.len(),
			self.trie.shadowed()
		);
		Ok(Lexicon { frequency, trie: self.trie, word_count: self.counts.words() })
	}
}

impl Lexicon {
	/// Loads a lexicon for a word-list file.
	///
	/// - If `<stem>.bin` exists next to `filepath`, it is deserialized with `postcard`.
	/// - Otherwise the text file is read, split on whitespace, built, and the
	///   binary cache written for the next load. A failed cache write is logged only.
	///
	/// # Errors
	/// - I/O errors reading the word list or the cache.
	/// - [`Error::Cache`] if the cache exists but cannot be decoded.
	/// - [`Error::EmptyWordList`] if the file holds no words.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let binary_data_path = build_output_path(&filepath, "bin")?;
		if binary_data_path.exists() {
			log::info!("Loading lexicon cache {}", binary_data_path.display());
			let bytes = std::fs::read(&binary_data_path)?;
			return Ok(postcard::from_bytes(&bytes)?);
		}

		log::info!("Building lexicon from {}", filepath.as_ref().display());
		let lexicon = Self::build(&read_words(&filepath)?)?;

		match postcard::to_stdvec(&lexicon) {
			Ok(bytes) => {
				if let Err(e) = std::fs::write(&binary_data_path, bytes) {
					log::warn!("Failed to write lexicon cache {}: {}", binary_data_path.display(), e);
				}
			}
			Err(e) => log::warn!("Failed to encode lexicon cache: {}", e),
		}

		Ok(lexicon)
	}

	/// Parses whitespace-delimited words from in-memory text and builds a lexicon.
	pub fn from_text(contents: &str) -> Result<Self> {
		Self::build(&parse_words(contents))
	}

	/// Builds a lexicon from a word list on the calling thread.
	///
	/// # Errors
	/// [`Error::EmptyWordList`] if `words` is empty, [`Error::NoLetters`] if
	/// every word is empty.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self> {
		if words.is_empty() {
			return Err(Error::EmptyWordList);
		}
		let mut partial = PartialLexicon::default();
		for word in words {
			partial.add_word(word.as_ref());
		}
		partial.finish()
	}

	/// Builds a lexicon, spreading large word lists over worker threads.
	///
	/// # Behavior
	/// - Splits the words into chunks (based on CPU cores * factor).
	/// - Spawns threads to build partial counts and tries for each chunk.
	/// - Merges all partial results sequentially.
	///
	/// The result is identical to [`Lexicon::from_words`].
	pub fn build(words: &[String]) -> Result<Self> {
		if words.len() <= PARALLEL_THRESHOLD {
			return Self::from_words(words);
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = words.len().div_ceil(chunks);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for chunk in words.chunks(chunk_size) {
				let tx = tx.clone();
				scope.spawn(move || {
					let mut partial = PartialLexicon::default();
					for word in chunk {
						partial.add_word(word);
					}
					// The receiver outlives the scope, sending cannot fail.
					let _ = tx.send(partial);
				});
			}
		});
		drop(tx);

		let mut final_lexicon = PartialLexicon::default();
		for partial in rx.iter() {
			final_lexicon.merge(partial);
		}
		final_lexicon.finish()
	}

	pub fn frequency(&self) -> &LetterFrequency {
		&self.frequency
	}

	pub fn trie(&self) -> &Trie {
		&self.trie
	}

	/// Number of words in the source list, duplicates included.
	pub fn word_count(&self) -> usize {
		self.word_count
	}

	/// Words that could not be stored because a longer word extends them.
	pub fn shadowed(&self) -> usize {
		self.trie.shadowed()
	}
}
