use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::model::range::Range;

/// Granularity of the generated text.
///
/// Parsed case-insensitively from `"paragraphs"`, `"sentences"` or `"words"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	#[default]
	Paragraphs,
	Sentences,
	Words,
}

impl FromStr for Mode {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"paragraphs" => Ok(Mode::Paragraphs),
			"sentences" => Ok(Mode::Sentences),
			"words" => Ok(Mode::Words),
			_ => Err(Error::UnknownMode(s.to_owned())),
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Mode::Paragraphs => "paragraphs",
			Mode::Sentences => "sentences",
			Mode::Words => "words",
		})
	}
}

/// Parameters of one generation request.
///
/// Front-ends fill this from their own inputs (command-line flags, query
/// strings) and hand it to `Generator::generate`.
///
/// Fields a mode does not use are ignored: `as_html` and `sentence_range`
/// only apply to paragraphs, `word_range` does not apply to words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// What to generate.
	pub mode: Mode,

	/// Number of paragraphs, sentences or words. Non-positive values are normalized.
	pub count: i32,

	/// Start the text with "Lorem ipsum dolor sit amet".
	pub starts_with_lorem: bool,

	/// Wrap paragraphs in `<p>` tags.
	pub as_html: bool,

	/// Sentences per paragraph.
	pub sentence_range: Option<Range>,

	/// Words per sentence.
	pub word_range: Option<Range>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			mode: Mode::Paragraphs,
			count: 1,
			starts_with_lorem: true,
			as_html: false,
			sentence_range: None,
			word_range: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mode_parsing_is_case_insensitive() {
		assert_eq!("paragraphs".parse::<Mode>().unwrap(), Mode::Paragraphs);
		assert_eq!("Sentences".parse::<Mode>().unwrap(), Mode::Sentences);
		assert_eq!("WORDS".parse::<Mode>().unwrap(), Mode::Words);
	}

	#[test]
	fn mode_parsing_rejects_unknown() {
		let err = "lines".parse::<Mode>().unwrap_err();
		assert!(matches!(err, Error::UnknownMode(ref m) if m == "lines"));
		assert_eq!(err.to_string(), "invalid mode: lines");
	}

	#[test]
	fn mode_display_round_trips() {
		for mode in [Mode::Paragraphs, Mode::Sentences, Mode::Words] {
			assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
		}
	}

	#[test]
	fn default_input() {
		let input = GenerationInput::default();
		assert_eq!(input.mode, Mode::Paragraphs);
		assert_eq!(input.count, 1);
		assert!(input.starts_with_lorem);
		assert!(!input.as_html);
		assert_eq!(input.sentence_range, None);
	}
}
