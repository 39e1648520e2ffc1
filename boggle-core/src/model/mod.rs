//! Word-grid search engine.
//!
//! This module provides:
//! - The letter-frequency table (`LetterFrequency`) and prefix trie (`Trie`)
//! - Their combined, loadable form (`Lexicon`)
//! - Board generation by weighted sampling (`Board`)
//! - Incremental path validation (`validate`)
//! - Exhaustive word search (`solve_all`)
//! - A single game context tying them together (`Round`)

/// Letter counts and the weighted letter table used to draw boards.
pub mod frequency;

/// Prefix trie whose leaves hold complete words.
///
/// Validator and solver branch explicitly on `Node::Subtree` / `Node::Word`.
pub mod trie;

/// Word-list loading, binary caching and parallel construction.
pub mod lexicon;

/// Square letter grid, cell coordinates and orthogonal neighbours.
pub mod board;

/// Stateless validation of a player's path.
pub mod validator;

/// Depth-first enumeration of every word on a board.
pub mod solver;

/// Board plus active path for one game.
pub mod round;
