use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::warn;
use lorem_gen_core::{GenerationInput, Mode, Range};

/// Command-line configuration for the placeholder text generator
#[derive(Debug, Clone, Parser)]
#[command(name = "lorem-gen")]
#[command(about = "Generate lorem ipsum placeholder text")]
pub struct Config {
	/// Mode: paragraphs, sentences, or words
	#[arg(short, long, default_value = "paragraphs")]
	pub mode: String,

	/// Number of paragraphs, sentences, or words
	#[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
	pub count: i32,

	/// Start with 'Lorem ipsum dolor sit amet'
	#[arg(long, default_value_t = true, action = ArgAction::Set)]
	pub starts_with_lorem: bool,

	/// Format output as HTML (only for paragraphs)
	#[arg(long)]
	pub as_html: bool,

	/// Sentence range per paragraph (e.g., 3-5)
	#[arg(long)]
	pub sentence_range: Option<String>,

	/// Word range per sentence (e.g., 8-12)
	#[arg(long)]
	pub word_range: Option<String>,

	/// Directory with nouns.dat, verbs.dat, adjectives.dat, conjunctions.dat and prepositions.dat
	#[arg(long, env = "LOREM_VOCABULARY")]
	pub vocabulary: Option<PathBuf>,

	/// Seed for the random number generator (for deterministic output)
	#[arg(long)]
	pub seed: Option<u64>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "warn")]
	pub log_level: String,
}

impl Config {
	/// Builds the generation request for an already validated `mode`.
	///
	/// Malformed ranges are logged and treated as absent.
	pub fn generation_input(&self, mode: Mode) -> GenerationInput {
		GenerationInput {
			mode,
			count: self.count,
			starts_with_lorem: self.starts_with_lorem,
			as_html: self.as_html,
			sentence_range: parse_range("sentence-range", self.sentence_range.as_deref()),
			word_range: parse_range("word-range", self.word_range.as_deref()),
		}
	}
}

fn parse_range(flag: &str, value: Option<&str>) -> Option<Range> {
	let value = value.filter(|v| !v.is_empty())?;
	let range = Range::parse(value);
	if range.is_none() {
		warn!("ignoring invalid --{flag} '{value}', using defaults");
	}
	range
}
