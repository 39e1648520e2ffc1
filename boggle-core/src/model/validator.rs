use super::board::{Board, Cell};
use super::trie::{Node, Subtree, Trie};

/// Outcome of checking a path against the board and the trie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchResult<'a> {
	/// Dead end: repeated cell, non-adjacent step, or no word continues this way.
	Invalid,
	/// Valid so far; the subtree holds every possible continuation.
	PartialNode(&'a Subtree),
	/// The path spells this word.
	CompleteWord(&'a str),
}

impl SearchResult<'_> {
	pub fn is_valid(&self) -> bool {
		!matches!(self, SearchResult::Invalid)
	}
}

/// Checks a whole path from scratch.
///
/// Rules, in order:
/// 1. Every cell is on the board and appears once.
/// 2. Each cell after the first is orthogonally adjacent to the previous one.
/// 3. Descending the trie by each cell's letter never misses and never
///    continues past a finished word.
///
/// An empty path sits at the root and is reported as a partial node.
pub fn validate<'t>(path: &[Cell], board: &Board, trie: &'t Trie) -> SearchResult<'t> {
	for (i, cell) in path.iter().enumerate() {
		if !board.contains(*cell) || path[..i].contains(cell) {
			return SearchResult::Invalid;
		}
	}

	if path.windows(2).any(|pair| !pair[0].is_adjacent(&pair[1])) {
		return SearchResult::Invalid;
	}

	let mut current = trie.root();
	let mut found: Option<&'t str> = None;
	for cell in path {
		// A finished word cannot be extended.
		if found.is_some() {
			return SearchResult::Invalid;
		}
		let Some(letter) = board.letter(*cell) else {
			return SearchResult::Invalid;
		};
		match current.get(letter) {
			None => return SearchResult::Invalid,
			Some(Node::Subtree(subtree)) => current = subtree,
			Some(Node::Word(word)) => found = Some(word),
		}
	}

	match found {
		Some(word) => SearchResult::CompleteWord(word),
		None => SearchResult::PartialNode(current),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cells(coords: &[(usize, usize)]) -> Vec<Cell> {
		coords.iter().copied().map(Cell::from).collect()
	}

	fn fixture() -> (Board, Trie) {
		let board = Board::from_rows(&["cat", "xro", "dog"]).unwrap();
		let trie = Trie::from_words(&["cat", "car", "dog"]);
		(board, trie)
	}

	#[test]
	fn first_letter_is_partial() {
		let (board, trie) = fixture();
		let result = validate(&cells(&[(0, 0)]), &board, &trie);
		assert!(matches!(result, SearchResult::PartialNode(_)));
	}

	#[test]
	fn partial_node_exposes_continuations() {
		let (board, trie) = fixture();
		let SearchResult::PartialNode(subtree) = validate(&cells(&[(0, 0), (0, 1)]), &board, &trie) else {
			panic!("expected a partial node");
		};
		assert!(subtree.contains('t'));
		assert!(subtree.contains('r'));
	}

	#[test]
	fn complete_word_along_a_row() {
		let (board, trie) = fixture();
		let result = validate(&cells(&[(0, 0), (0, 1), (0, 2)]), &board, &trie);
		assert_eq!(result, SearchResult::CompleteWord("cat"));
	}

	#[test]
	fn complete_word_turning_a_corner() {
		let (board, trie) = fixture();
		// c(0,0) a(0,1) r(1,1)
		let result = validate(&cells(&[(0, 0), (0, 1), (1, 1)]), &board, &trie);
		assert_eq!(result, SearchResult::CompleteWord("car"));
	}

	#[test]
	fn diagonal_step_is_invalid_regardless_of_trie() {
		let board = Board::from_rows(&["ab", "cd"]).unwrap();
		let trie = Trie::from_words(&["ad"]);
		let result = validate(&cells(&[(0, 0), (1, 1)]), &board, &trie);
		assert_eq!(result, SearchResult::Invalid);
	}

	#[test]
	fn repeated_cell_is_invalid() {
		let board = Board::from_rows(&["aba", "xxx", "xxx"]).unwrap();
		let trie = Trie::from_words(&["aba"]);
		let result = validate(&cells(&[(0, 0), (0, 1), (0, 0)]), &board, &trie);
		assert_eq!(result, SearchResult::Invalid);
	}

	#[test]
	fn every_step_must_be_adjacent() {
		let (board, trie) = fixture();
		// Jump in the middle of the path, last step adjacent
		let result = validate(&cells(&[(0, 0), (2, 1), (2, 2)]), &board, &trie);
		assert_eq!(result, SearchResult::Invalid);
	}

	#[test]
	fn missing_letter_is_invalid() {
		let (board, trie) = fixture();
		let result = validate(&cells(&[(1, 0)]), &board, &trie);
		assert_eq!(result, SearchResult::Invalid);
	}

	#[test]
	fn continuing_past_a_word_is_invalid() {
		let board = Board::from_rows(&["cat", "xxs", "xxx"]).unwrap();
		let trie = Trie::from_words(&["cat"]);
		let result = validate(&cells(&[(0, 0), (0, 1), (0, 2), (1, 2)]), &board, &trie);
		assert_eq!(result, SearchResult::Invalid);
	}

	#[test]
	fn out_of_bounds_cell_is_invalid() {
		let (board, trie) = fixture();
		let result = validate(&cells(&[(0, 2), (0, 3)]), &board, &trie);
		assert_eq!(result, SearchResult::Invalid);
	}

	#[test]
	fn empty_path_sits_at_the_root() {
		let (board, trie) = fixture();
		assert_eq!(validate(&[], &board, &trie), SearchResult::PartialNode(trie.root()));
	}

	#[test]
	fn validation_is_idempotent() {
		let (board, trie) = fixture();
		let paths = [
			cells(&[(0, 0), (0, 1)]),
			cells(&[(0, 0), (0, 1), (0, 2)]),
			cells(&[(0, 0), (1, 1)]),
		];
		for path in &paths {
			let first = validate(path, &board, &trie);
			for _ in 0..3 {
				assert_eq!(validate(path, &board, &trie), first);
			}
		}
	}

	#[test]
	fn every_source_word_is_complete_when_spelled() {
		let words = ["tone", "note", "ten", "one"];
		let trie = Trie::from_words(&words);
		for word in words {
			// Lay the word out along the first row of a square board
			let size = word.chars().count();
			let mut rows = vec![word.to_owned()];
			rows.extend((1..size).map(|_| "#".repeat(size)));
			let board = Board::from_rows(&rows).unwrap();
			let path: Vec<Cell> = (0..size).map(|col| Cell::new(0, col)).collect();

			for end in 1..size {
				assert!(matches!(validate(&path[..end], &board, &trie), SearchResult::PartialNode(_)));
			}
			assert_eq!(validate(&path, &board, &trie), SearchResult::CompleteWord(word));
		}
	}
}
