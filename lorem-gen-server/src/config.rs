use std::path::PathBuf;

use clap::Parser;

/// Configuration for the placeholder text HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "lorem-gen-server")]
#[command(about = "HTTP server generating lorem ipsum placeholder text")]
pub struct Config {
	/// Address to bind
	#[arg(long, env = "LOREM_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to listen on
	#[arg(short, long, env = "LOREM_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Directory with nouns.dat, verbs.dat, adjectives.dat, conjunctions.dat and prepositions.dat
	#[arg(long, env = "LOREM_VOCABULARY")]
	pub vocabulary: Option<PathBuf>,

	/// Largest accepted count or range bound in a request
	#[arg(long, env = "LOREM_MAX_COUNT", default_value_t = 1000)]
	pub max_count: i32,

	/// Largest number of words a single request may produce
	#[arg(long, env = "LOREM_MAX_WORDS", default_value_t = 100_000)]
	pub max_words: u64,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info")]
	pub log_level: String,
}
