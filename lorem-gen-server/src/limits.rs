use lorem_gen_core::model::generator::{DEFAULT_SENTENCES, DEFAULT_WORDS, DEFAULT_WORD_COUNT};
use lorem_gen_core::{GenerationInput, Mode, Range};

/// Upper bounds applied to every request before any text is generated.
///
/// # Invariants
/// - `max_count` caps `count` and the upper bound of each range used by the mode
/// - `max_words` caps the worst-case number of words a request can produce
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
	pub max_count: i32,
	pub max_words: u64,
}

impl Default for Limits {
	fn default() -> Self {
		Self { max_count: 1000, max_words: 100_000 }
	}
}

impl Limits {
	/// Rejects requests whose count, range bounds or worst-case size exceed the limits.
	///
	/// Only the fields used by `input.mode` are checked.
	pub fn check(&self, input: &GenerationInput) -> Result<(), String> {
		self.check_value("count", input.count)?;

		let words_per_sentence = match input.mode {
			Mode::Words => None,
			_ => Some(self.upper_bound("word_range", input.word_range, DEFAULT_WORDS)?.max(2)),
		};

		// Non-positive counts are normalized by the generator
		let count = input.count.max(1) as u64;
		let worst_case = match input.mode {
			Mode::Words => {
				if input.count <= 0 { DEFAULT_WORD_COUNT as u64 } else { count }
			}
			Mode::Sentences => count * words_per_sentence.unwrap_or(0),
			Mode::Paragraphs => {
				let sentences = self.upper_bound("sentence_range", input.sentence_range, DEFAULT_SENTENCES)?;
				count * sentences * words_per_sentence.unwrap_or(0)
			}
		};

		if worst_case > self.max_words {
			return Err(format!(
				"request may produce {worst_case} words, the limit is {}",
				self.max_words
			));
		}
		Ok(())
	}

	fn check_value(&self, name: &str, value: i32) -> Result<(), String> {
		if value > self.max_count {
			return Err(format!("{name} {value} exceeds the limit of {}", self.max_count));
		}
		Ok(())
	}

	/// Largest value a range can resolve to, its defaults when absent.
	fn upper_bound(&self, name: &str, range: Option<Range>, defaults: Range) -> Result<u64, String> {
		match range {
			Some(r) if r.is_valid() => {
				self.check_value(name, r.max)?;
				Ok(r.max as u64)
			}
			_ => Ok(defaults.min.max(defaults.max) as u64),
		}
	}
}
