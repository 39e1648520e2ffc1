use std::io;

/// Errors raised while loading a lexicon or building a board.
///
/// Lookup misses during validation or search are never errors: they are
/// reported as [`SearchResult::Invalid`](crate::model::validator::SearchResult)
/// or simply prune a branch of the solver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Word list is empty: at least one word is required to build a lexicon")]
	EmptyWordList,
	#[error("Word list contains no letters: cannot derive a letter frequency table")]
	NoLetters,
	#[error("Invalid board size {size}: must be at least 1")]
	InvalidBoardSize { size: usize },
	#[error("Board row {row} has {found} cells, expected {expected}")]
	RaggedBoard { row: usize, found: usize, expected: usize },
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
	#[error("Lexicon cache error: {0}")]
	Cache(#[from] postcard::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
