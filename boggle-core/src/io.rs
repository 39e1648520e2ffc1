use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::io;

/// Splits raw word-list text into whitespace-delimited tokens.
///
/// Tokens are kept verbatim: no case folding, no trimming beyond the split.
pub fn parse_words(contents: &str) -> Vec<String> {
	contents.split_whitespace().map(str::to_owned).collect()
}

/// Reads a word-list file and returns its whitespace-delimited tokens.
pub(crate) fn read_words<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(parse_words(&contents))
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/words.dat` + `"bin"` → `data/words.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_words_splits_on_any_whitespace() {
		let words = parse_words("cat\tCar \n dog\r\nEel\n\n");
		assert_eq!(words, vec!["cat", "Car", "dog", "Eel"]);
	}

	#[test]
	fn parse_words_empty_input() {
		assert!(parse_words("  \n\t ").is_empty());
	}

	#[test]
	fn output_path_replaces_extension() {
		let path = build_output_path("data/words.dat", "bin").unwrap();
		assert_eq!(path, PathBuf::from("data/words.bin"));
	}

	#[test]
	fn output_path_without_parent() {
		let path = build_output_path("words.dat", "bin").unwrap();
		assert_eq!(path, PathBuf::from("words.bin"));
	}
}
