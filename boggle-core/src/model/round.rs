use std::collections::BTreeSet;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use super::board::{Board, Cell};
use super::lexicon::Lexicon;
use super::solver::solve_unique;
use super::validator::{SearchResult, validate};

/// Result of appending one cell to the active path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", content = "word", rename_all = "snake_case")]
pub enum Move {
	/// The cell is already on the path; nothing changed.
	AlreadyUsed,
	/// Dead end; the offending cell was popped.
	Invalid,
	/// Valid prefix; the cell stays on the path.
	Partial,
	/// A word was completed; the path was cleared.
	Word(String),
}

impl Move {
	pub fn is_valid(&self) -> bool {
		matches!(self, Move::Partial | Move::Word(_))
	}
}

/// One game: the current board and the path the player is building on it.
///
/// The lexicon is shared read-only, so several rounds (or a solver running on
/// another thread) can use it without touching each other's path.
pub struct Round {
	lexicon: Arc<Lexicon>,
	board: Board,
	path: Vec<Cell>,
	found: Vec<String>,
	rng: StdRng,
}

impl Round {
	/// Starts a round on a freshly generated `size`×`size` board.
	pub fn new(lexicon: Arc<Lexicon>, size: usize) -> Result<Self> {
		Self::with_rng(lexicon, size, StdRng::from_os_rng())
	}

	/// Starts a reproducible round: the same seed yields the same boards.
	pub fn with_seed(lexicon: Arc<Lexicon>, size: usize, seed: u64) -> Result<Self> {
		Self::with_rng(lexicon, size, StdRng::seed_from_u64(seed))
	}

	/// Starts a round on an existing board.
	pub fn with_board(lexicon: Arc<Lexicon>, board: Board) -> Self {
		Self { lexicon, board, path: Vec::new(), found: Vec::new(), rng: StdRng::from_os_rng() }
	}

	fn with_rng(lexicon: Arc<Lexicon>, size: usize, mut rng: StdRng) -> Result<Self> {
		let board = Board::generate(lexicon.frequency(), size, &mut rng)?;
		Ok(Self { lexicon, board, path: Vec::new(), found: Vec::new(), rng })
	}

	/// Replaces the board with a new one and clears the path.
	///
	/// On error the current board and path are left untouched.
	pub fn new_board(&mut self, size: usize) -> Result<&Board> {
		let board = Board::generate(self.lexicon.frequency(), size, &mut self.rng)?;
		log::info!("New {}x{} board", size, size);
		self.board = board;
		self.path.clear();
		self.found.clear();
		Ok(&self.board)
	}

	/// Extends the path with `cell` and reports the outcome.
	///
	/// - Already on the path: rejected, path unchanged.
	/// - Invalid: the cell is popped, the rest of the path is kept.
	/// - Partial: the cell stays.
	/// - Word: the word is recorded and the path reset.
	pub fn append_move(&mut self, cell: Cell) -> Move {
		if self.path.contains(&cell) {
			log::debug!("Cell ({}, {}) already used", cell.row, cell.col);
			return Move::AlreadyUsed;
		}

		self.path.push(cell);
		let outcome = match validate(&self.path, &self.board, self.lexicon.trie()) {
			SearchResult::Invalid => Move::Invalid,
			SearchResult::PartialNode(_) => Move::Partial,
			SearchResult::CompleteWord(word) => Move::Word(word.to_owned()),
		};

		match &outcome {
			Move::Invalid => {
				self.path.pop();
			}
			Move::Word(word) => {
				log::info!("Found word: {}", word);
				self.found.push(word.clone());
				self.path.clear();
			}
			Move::Partial | Move::AlreadyUsed => (),
		}

		outcome
	}

	/// Clears the active path; the board is kept.
	pub fn reset_path(&mut self) {
		self.path.clear();
	}

	pub fn current_board(&self) -> &Board {
		&self.board
	}

	/// Cells selected so far, in selection order.
	pub fn path(&self) -> &[Cell] {
		&self.path
	}

	/// Words completed on this board, in the order they were found.
	pub fn found_words(&self) -> &[String] {
		&self.found
	}

	pub fn lexicon(&self) -> &Lexicon {
		&self.lexicon
	}

	/// Every distinct word on the current board, sorted.
	pub fn solve_all(&self) -> BTreeSet<String> {
		solve_unique(&self.board, self.lexicon.trie())
	}
}
