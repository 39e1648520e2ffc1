use std::fmt;

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use super::frequency::LetterFrequency;

/// Default board width and height.
pub const DEFAULT_SIZE: usize = 5;

/// A `(row, col)` board coordinate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
	pub row: usize,
	pub col: usize,
}

impl Cell {
	pub const fn new(row: usize, col: usize) -> Self {
		Self { row, col }
	}

	/// Manhattan distance between two cells.
	pub fn distance(&self, other: &Cell) -> usize {
		self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
	}

	/// True when both cells share an edge (diagonals excluded).
	pub fn is_adjacent(&self, other: &Cell) -> bool {
		self.distance(other) == 1
	}
}

impl From<(usize, usize)> for Cell {
	fn from((row, col): (usize, usize)) -> Self {
		Self { row, col }
	}
}

/// Orthogonal step offsets, in search order: right, left, up, down.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Square grid of letters indexed by `(row, col)`.
///
/// Replaced wholesale on a new game, otherwise immutable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Board {
	size: usize,
	/// Row-major letters, `size * size` long.
	cells: Vec<char>,
}

impl Board {
	/// Generates a `size`×`size` board.
	///
	/// Every cell is an independent weighted draw (with replacement) from the
	/// letters of `frequency`. No uniqueness or balance across the board.
	///
	/// # Errors
	/// - [`Error::InvalidBoardSize`] if `size` is zero.
	/// - [`Error::NoLetters`] if `frequency` is empty.
	pub fn generate<R: Rng>(frequency: &LetterFrequency, size: usize, rng: &mut R) -> Result<Self> {
		if size == 0 {
			return Err(Error::InvalidBoardSize { size });
		}

		let mut cells = Vec::with_capacity(size * size);
		for _ in 0..size * size {
			cells.push(frequency.sample(rng).ok_or(Error::NoLetters)?);
		}

		Ok(Self { size, cells })
	}

	/// Builds a board from explicit rows, e.g. a saved or hand-made grid.
	///
	/// # Errors
	/// - [`Error::InvalidBoardSize`] if there are no rows.
	/// - [`Error::RaggedBoard`] if any row length differs from the row count.
	pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self> {
		let size = rows.len();
		if size == 0 {
			return Err(Error::InvalidBoardSize { size });
		}

		let mut cells = Vec::with_capacity(size * size);
		for (row, line) in rows.iter().enumerate() {
			let before = cells.len();
			cells.extend(line.as_ref().chars());
			let found = cells.len() - before;
			if found != size {
				return Err(Error::RaggedBoard { row, found, expected: size });
			}
		}

		Ok(Self { size, cells })
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn contains(&self, cell: Cell) -> bool {
		cell.row < self.size && cell.col < self.size
	}

	/// Letter at `cell`, or `None` when out of bounds.
	pub fn letter(&self, cell: Cell) -> Option<char> {
		if !self.contains(cell) {
			return None;
		}
		self.cells.get(cell.row * self.size + cell.col).copied()
	}

	/// In-bounds orthogonal neighbours of `cell`.
	pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
		DIRECTIONS.iter().filter_map(move |(dr, dc)| {
			let row = cell.row.checked_add_signed(*dr)?;
			let col = cell.col.checked_add_signed(*dc)?;
			let next = Cell::new(row, col);
			self.contains(next).then_some(next)
		})
	}

	/// All cells in row-major order.
	pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
		(0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
	}

	/// Rows as strings, top to bottom.
	pub fn rows(&self) -> Vec<String> {
		self.cells.chunks(self.size).map(|row| row.iter().collect()).collect()
	}
}

impl fmt::Display for Board {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in self.cells.chunks(self.size) {
			let line: Vec<String> = row.iter().map(|c| c.to_uppercase().to_string()).collect();
			writeln!(f, "{}", line.join(" "))?;
		}
		Ok(())
	}
}
