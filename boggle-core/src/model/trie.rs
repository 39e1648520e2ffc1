use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A trie slot: either more trie, or the finished word ending at that letter.
///
/// The two are mutually exclusive. A word is never a nested single-char node:
/// its last letter's slot holds the whole word directly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Node {
	Subtree(Subtree),
	Word(String),
}

impl Node {
	/// Returns the subtree if this slot continues the prefix.
	pub fn as_subtree(&self) -> Option<&Subtree> {
		match self {
			Node::Subtree(subtree) => Some(subtree),
			Node::Word(_) => None,
		}
	}

	/// Returns the finished word if this slot terminates one.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Node::Word(word) => Some(word),
			Node::Subtree(_) => None,
		}
	}
}

/// An internal trie node mapping the next letter to its slot.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Subtree {
	children: HashMap<char, Node>,
}

impl Subtree {
	/// Looks up the slot for `letter`.
	pub fn get(&self, letter: char) -> Option<&Node> {
		self.children.get(&letter)
	}

	pub fn contains(&self, letter: char) -> bool {
		self.children.contains_key(&letter)
	}

	/// Letters that continue from this node, in no particular order.
	pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
		self.children.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.children.len()
	}

	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Merges `other` into this node, returning how many words were shadowed.
	fn merge(&mut self, other: Subtree) -> usize {
		let mut shadowed = 0;
		for (letter, node) in other.children {
			match self.children.remove(&letter) {
				None => {
					self.children.insert(letter, node);
				}
				Some(existing) => {
					let (merged, lost) = Self::merge_slot(existing, node);
					shadowed += lost;
					self.children.insert(letter, merged);
				}
			}
		}
		shadowed
	}

	/// Resolves two values for the same slot.
	///
	/// A subtree always wins over a word: the word is a strict prefix of every
	/// word below the subtree and cannot be represented next to it.
	fn merge_slot(existing: Node, incoming: Node) -> (Node, usize) {
		match (existing, incoming) {
			(Node::Subtree(mut left), Node::Subtree(right)) => {
				let lost = left.merge(right);
				(Node::Subtree(left), lost)
			}
			(Node::Word(word), Node::Subtree(subtree)) | (Node::Subtree(subtree), Node::Word(word)) => {
				log::debug!("Word '{}' is a prefix of longer words and is shadowed", word);
				(Node::Subtree(subtree), 1)
			}
			// Same path, same characters: both words are identical.
			(Node::Word(word), Node::Word(_)) => (Node::Word(word), 0),
		}
	}
}

/// Prefix tree over the word list.
///
/// # Invariants
/// - The word stored at the end of a path equals the concatenation of the
///   letters along that path, exactly as it appeared in the word list.
/// - Built once, read-only afterward.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Trie {
	root: Subtree,
	/// Words dropped because a longer word continues past them.
	shadowed: usize,
}

impl Trie {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a trie from a list of words.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		let mut trie = Self::new();
		for word in words {
			trie.insert(word.as_ref());
		}
		trie
	}

	/// Inserts a word. Empty words are ignored.
	///
	/// Walks or creates a subtree for every letter but the last, whose slot then
	/// receives the whole word.
	pub fn insert(&mut self, word: &str) {
		let mut letters: Vec<char> = word.chars().collect();
		let Some(last) = letters.pop() else {
			return;
		};

		let mut current = &mut self.root;
		for letter in letters {
			let slot = current
				.children
				.entry(letter)
				.or_insert_with(|| Node::Subtree(Subtree::default()));
			if let Node::Word(shadowed) = slot {
				log::debug!("Word '{}' is a prefix of '{}' and is shadowed", shadowed, word);
				*slot = Node::Subtree(Subtree::default());
				self.shadowed += 1;
			}
			let Node::Subtree(subtree) = slot else {
				return;
			};
			current = subtree;
		}

		match current.children.get(&last) {
			Some(Node::Subtree(_)) => {
				log::debug!("Word '{}' is a prefix of longer words and is shadowed", word);
				self.shadowed += 1;
			}
			// Re-inserting the same word
			Some(Node::Word(_)) => (),
			None => {
				current.children.insert(last, Node::Word(word.to_owned()));
			}
		}
	}

	/// The root node. Every path starts here.
	pub fn root(&self) -> &Subtree {
		&self.root
	}

	/// Number of words dropped because another word extends them.
	pub fn shadowed(&self) -> usize {
		self.shadowed
	}

	/// Follows `prefix` letter by letter from the root.
	///
	/// Returns `None` if a letter is missing or the prefix runs past a finished word.
	pub fn lookup(&self, prefix: &str) -> Option<&Node> {
		let mut letters = prefix.chars();
		let mut node = self.root.get(letters.next()?)?;
		for letter in letters {
			node = node.as_subtree()?.get(letter)?;
		}
		Some(node)
	}

	/// Merges a trie built from another chunk of the same word list.
	pub fn merge(&mut self, other: Trie) {
		self.shadowed += other.shadowed;
		self.shadowed += self.root.merge(other.root);
	}

	/// Collects every word stored in the trie, sorted.
	pub fn words(&self) -> Vec<String> {
		fn collect(subtree: &Subtree, out: &mut Vec<String>) {
			for node in subtree.children.values() {
				match node {
					Node::Word(word) => out.push(word.clone()),
					Node::Subtree(child) => collect(child, out),
				}
			}
		}

		let mut words = Vec::new();
		collect(&self.root, &mut words);
		words.sort();
		words
	}
}
