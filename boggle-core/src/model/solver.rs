use std::collections::BTreeSet;
use std::sync::mpsc;
use std::thread;

use super::board::{Board, Cell};
use super::trie::{Node, Trie};

/// Finds every word on the board, once per path that spells it.
///
/// Starting cells are scanned row-major, neighbours are tried right, left, up,
/// down. The same word reached from different origins (or along different
/// paths) appears once per path.
pub fn solve_all(board: &Board, trie: &Trie) -> Vec<String> {
	let starts: Vec<Cell> = board.cells().collect();
	solve_from(board, trie, &starts)
}

/// Sorted, duplicate-free set of the words on the board.
pub fn solve_unique(board: &Board, trie: &Trie) -> BTreeSet<String> {
	solve_all(board, trie).into_iter().collect()
}

/// Same result as [`solve_all`], computed with one thread per chunk of starting cells.
///
/// # Behavior
/// - Splits starting cells into `num_cpus::get()` chunks.
/// - Each thread searches its chunk over the shared, read-only board and trie.
/// - Partial results are collected through an MPSC channel and reassembled in
///   chunk order, so the output matches the sequential scan.
pub fn solve_all_parallel(board: &Board, trie: &Trie) -> Vec<String> {
	let starts: Vec<Cell> = board.cells().collect();
	let chunks = num_cpus::get().max(1);
	let chunk_size = starts.len().div_ceil(chunks).max(1);

	let (tx, rx) = mpsc::channel();
	thread::scope(|scope| {
		for (index, chunk) in starts.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			scope.spawn(move || {
				// The receiver outlives the scope, sending cannot fail.
				let _ = tx.send((index, solve_from(board, trie, chunk)));
			});
		}
	});
	drop(tx);

	let mut partials: Vec<(usize, Vec<String>)> = rx.iter().collect();
	partials.sort_by_key(|(index, _)| *index);
	partials.into_iter().flat_map(|(_, words)| words).collect()
}

/// Runs the depth-first search from each of `starts`.
fn solve_from(board: &Board, trie: &Trie, starts: &[Cell]) -> Vec<String> {
	let mut found = Vec::new();
	let mut path = Vec::with_capacity(board.size() * board.size());

	for &start in starts {
		let Some(node) = board.letter(start).and_then(|letter| trie.root().get(letter)) else {
			continue;
		};
		path.push(start);
		search(board, start, node, &mut path, &mut found);
		path.pop();
	}

	found
}

/// Backtracking step. `path` already ends with `cell`; it is restored before returning.
fn search(board: &Board, cell: Cell, node: &Node, path: &mut Vec<Cell>, found: &mut Vec<String>) {
	let subtree = match node {
		Node::Word(word) => {
			found.push(word.clone());
			return;
		}
		Node::Subtree(subtree) => subtree,
	};

	for next in board.neighbors(cell) {
		if path.contains(&next) {
			continue;
		}
		let Some(child) = board.letter(next).and_then(|letter| subtree.get(letter)) else {
			continue;
		};
		path.push(next);
		search(board, next, child, path, found);
		path.pop();
	}
}
