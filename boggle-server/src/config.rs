use std::fs::File;
use std::path::Path;

use serde::Deserialize;

/// Server settings read from `config.yaml`.
///
/// Every field is optional in the file; missing ones fall back to the defaults
/// below.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
	/// Whitespace-separated word list the lexicon is built from.
	pub word_file: String,
	/// Board size used at startup and when `/v1/new_board` gets no size.
	pub board_size: usize,
	/// Largest board a client may request.
	pub max_board_size: usize,
	pub host: String,
	pub port: u16,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			word_file: "./data/words.dat".to_owned(),
			board_size: 5,
			max_board_size: 10,
			host: "127.0.0.1".to_owned(),
			port: 5000,
		}
	}
}

/// Reads the configuration file, or returns defaults if it does not exist.
pub fn read<P: AsRef<Path>>(path: P) -> Result<ServerConfig, Box<dyn std::error::Error>> {
	let path = path.as_ref();
	if !path.exists() {
		log::info!("No {} found, using default configuration", path.display());
		return Ok(ServerConfig::default());
	}

	let config: ServerConfig = serde_yaml::from_reader(File::open(path)?)?;
	if config.board_size == 0 || config.board_size > config.max_board_size {
		return Err(format!(
			"board_size must be between 1 and max_board_size ({}), got {}",
			config.max_board_size, config.board_size
		)
		.into());
	}
	Ok(config)
}
