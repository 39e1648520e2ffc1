//! Word-grid game engine.
//!
//! This crate provides:
//! - A letter-frequency model and prefix trie built from a word list
//! - Board generation by weighted random sampling
//! - Incremental validation of a path of cells as the player extends it
//! - Exhaustive, trie-pruned search for every word on a board
//!
//! Rendering and input mapping live outside this crate: callers feed cells
//! to a [`model::round::Round`] and render the returned [`model::round::Move`].

/// Core models: lexicon, board, validator, solver and round.
pub mod model;

/// Error type shared by the whole crate.
pub mod errors;

/// Word-list parsing and path helpers.
pub mod io;

pub use errors::{Error, Result};
