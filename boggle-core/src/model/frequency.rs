use std::collections::BTreeMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Fixed board row length used in the frequency denominator.
///
/// Weights are `count / (word_count * ROW_LENGTH)`, not `count / total_letters`,
/// so they only sum to 1 when every word is exactly `ROW_LENGTH` letters long.
pub const ROW_LENGTH: usize = 5;

/// Raw per-letter occurrence counts accumulated while reading a word list.
///
/// ## Responsibilities:
/// - Accumulate letter occurrences during learning
/// - Merge with counts built from another chunk of the same word list
///
/// ## Invariants
/// - Each stored count is strictly positive
/// - `words` counts every word seen, including those contributing no letters
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LetterCounts {
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: BTreeMap<char, usize>,
	/// Number of words ingested.
	words: usize,
}

impl LetterCounts {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records every character of `word`, case-sensitive.
	pub fn add_word(&mut self, word: &str) {
		self.words += 1;
		for letter in word.chars() {
			*self.counts.entry(letter).or_insert(0) += 1;
		}
	}

	/// Number of words ingested so far.
	pub fn words(&self) -> usize {
		self.words
	}

	/// Merges counts produced from another chunk of the word list.
	pub fn merge(&mut self, other: &Self) {
		self.words += other.words;
		for (letter, count) in &other.counts {
			*self.counts.entry(*letter).or_insert(0) += *count;
		}
	}
}

/// Letter → sampling weight table.
///
/// Built once from [`LetterCounts`] and immutable afterward. Letters are kept
/// in sorted order so that a seeded RNG always reproduces the same board.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LetterFrequency {
	weights: BTreeMap<char, f64>,
}

impl LetterFrequency {
	/// Converts raw counts into weights `count / (words * ROW_LENGTH)`.
	///
	/// # Errors
	/// - [`Error::EmptyWordList`] when no word was counted (the denominator would be zero).
	/// - [`Error::NoLetters`] when words were counted but none had a letter.
	pub fn from_counts(counts: &LetterCounts) -> Result<Self> {
		if counts.words == 0 {
			return Err(Error::EmptyWordList);
		}
		if counts.counts.is_empty() {
			return Err(Error::NoLetters);
		}

		let denominator = (counts.words * ROW_LENGTH) as f64;
		let weights = counts
			.counts
			.iter()
			.map(|(letter, count)| (*letter, *count as f64 / denominator))
			.collect();

		Ok(Self { weights })
	}

	/// Weight of `letter`, or `None` if it never appeared in the word list.
	pub fn get(&self, letter: char) -> Option<f64> {
		self.weights.get(&letter).copied()
	}

	/// Iterates over `(letter, weight)` pairs in letter order.
	pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
		self.weights.iter().map(|(letter, weight)| (*letter, *weight))
	}

	pub fn len(&self) -> usize {
		self.weights.len()
	}

	pub fn is_empty(&self) -> bool {
		self.weights.is_empty()
	}

	/// Draws one letter using weighted random sampling.
	///
	/// The probability of selecting a letter is proportional to its weight;
	/// weights need not sum to 1.
	///
	/// Returns `None` if the table is empty.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<char> {
		let total: f64 = self.weights.values().sum();
		if total <= 0.0 {
			return None;
		}

		let mut r = rng.random_range(0.0..total);

		let mut fallback: Option<char> = None;
		for (letter, weight) in &self.weights {
			if r < *weight {
				return Some(*letter);
			}
			r -= weight;
			fallback = Some(*letter);
		}

		// Floating-point drift can leave `r` marginally above the last bucket.
		fallback
	}
}
