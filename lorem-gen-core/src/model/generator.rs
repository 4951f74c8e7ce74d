use rand::Rng;

use crate::model::generation_input::{GenerationInput, Mode};
use crate::model::range::Range;
use crate::model::word_bank::{Category, WordBank};

/// Canonical opening words, injected when a request starts with lorem.
pub const LOREM_PREFIX: [&str; 5] = ["Lorem", "ipsum", "dolor", "sit", "amet"];

/// Sentences per paragraph when no valid range is given.
pub const DEFAULT_SENTENCES: Range = Range::new(3, 6);

/// Words per sentence when no valid range is given.
pub const DEFAULT_WORDS: Range = Range::new(8, 15);

/// Word count used by [`Generator::words`] for non-positive counts.
pub const DEFAULT_WORD_COUNT: i32 = 5;

/// Categories filling a sentence after its noun and verb.
const SENTENCE_FILLERS: [Category; 4] =
	[Category::Adjective, Category::Noun, Category::Preposition, Category::Conjunction];

/// Categories filling a phrase after its noun and verb.
const PHRASE_FILLERS: [Category; 3] = [Category::Adjective, Category::Noun, Category::Preposition];

/// High-level placeholder text generator.
///
/// # Responsibilities
/// - Own the vocabulary (`WordBank`) used for every draw
/// - Build single sentences and unpunctuated phrases
/// - Compose paragraphs, sentence runs and word lists, with the optional
///   lorem prefix and HTML wrapping
///
/// The random number generator is passed to each call and never stored,
/// so one `Generator` can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct Generator {
	bank: WordBank,
}

impl Generator {
	/// Creates a generator drawing from `bank`.
	pub fn new(bank: WordBank) -> Self {
		Self { bank }
	}

	/// Returns the vocabulary in use.
	pub fn word_bank(&self) -> &WordBank {
		&self.bank
	}

	/// Generates text for a complete request, dispatching on its mode.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, input: &GenerationInput) -> String {
		match input.mode {
			Mode::Paragraphs => self.paragraphs(
				rng,
				input.count,
				input.starts_with_lorem,
				input.as_html,
				input.sentence_range,
				input.word_range,
			),
			Mode::Sentences => self.sentences(rng, input.count, input.starts_with_lorem, input.word_range),
			Mode::Words => self.words(rng, input.count, input.starts_with_lorem),
		}
	}

	/// Builds one sentence of roughly `word_count` words.
	///
	/// # Behavior
	/// - Always starts with a capitalized noun followed by a verb, so the
	///   result has at least two words even when `word_count < 2`.
	/// - Each further slot holds an adjective, noun, preposition or
	///   conjunction, chosen uniformly.
	/// - A period is appended to the last word.
	pub fn sentence<R: Rng + ?Sized>(&self, rng: &mut R, word_count: i32) -> String {
		let extra = usize::try_from(word_count.saturating_sub(2)).unwrap_or(0);
		let mut words: Vec<String> = Vec::with_capacity(extra + 2);

		words.push(capitalize(self.bank.pick(rng, Category::Noun)));
		words.push(self.bank.pick(rng, Category::Verb).to_owned());

		for _ in 0..extra {
			let category = SENTENCE_FILLERS[rng.random_range(0..SENTENCE_FILLERS.len())];
			words.push(self.bank.pick(rng, category).to_owned());
		}

		match words.last_mut() {
			Some(last) => last.push('.'),
			None => return ".".to_owned(),
		}

		words.join(" ")
	}

	/// Builds exactly `word_count` unpunctuated words.
	///
	/// Position 0 is a capitalized noun, position 1 a verb, and every later
	/// position an adjective, noun or preposition. Non-positive counts
	/// produce an empty list.
	pub fn phrase<R: Rng + ?Sized>(&self, rng: &mut R, word_count: i32) -> Vec<String> {
		let count = usize::try_from(word_count).unwrap_or(0);
		let mut words = Vec::with_capacity(count);

		for i in 0..count {
			let word = match i {
				0 => capitalize(self.bank.pick(rng, Category::Noun)),
				1 => self.bank.pick(rng, Category::Verb).to_owned(),
				_ => {
					let category = PHRASE_FILLERS[rng.random_range(0..PHRASE_FILLERS.len())];
					self.bank.pick(rng, category).to_owned()
				}
			};
			words.push(word);
		}

		words
	}

	/// Generates `count` paragraphs.
	///
	/// # Parameters
	/// - `count`: number of paragraphs, values `<= 0` mean 1.
	/// - `starts_with_lorem`: prepend "Lorem ipsum dolor sit amet." to the first paragraph.
	/// - `as_html`: wrap each paragraph in `<p>`...`</p>` and separate them with
	///   a newline instead of a blank line.
	/// - `sentence_range`: sentences per paragraph, defaults to 3-6.
	/// - `word_range`: words per sentence, defaults to 8-15.
	///
	/// Sentence and word counts are drawn independently for every
	/// paragraph and every sentence.
	pub fn paragraphs<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		count: i32,
		starts_with_lorem: bool,
		as_html: bool,
		sentence_range: Option<Range>,
		word_range: Option<Range>,
	) -> String {
		let count = count.max(1);

		let mut paragraphs: Vec<String> = (0..count)
			.map(|_| {
				let sentence_count = Range::resolve(rng, sentence_range, DEFAULT_SENTENCES);
				self.sentence_run(rng, sentence_count, word_range)
			})
			.collect();

		if starts_with_lorem {
			if let Some(first) = paragraphs.first_mut() {
				*first = prepend_lorem(first);
			}
		}

		if as_html {
			paragraphs
				.iter()
				.map(|p| format!("<p>{p}</p>"))
				.collect::<Vec<_>>()
				.join("\n")
		} else {
			paragraphs.join("\n\n")
		}
	}

	/// Generates `count` sentences separated by single spaces.
	///
	/// Values of `count <= 0` mean 1. Each sentence draws its own word
	/// count from `word_range` (defaults to 8-15).
	pub fn sentences<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		count: i32,
		starts_with_lorem: bool,
		word_range: Option<Range>,
	) -> String {
		let text = self.sentence_run(rng, count.max(1), word_range);
		if starts_with_lorem { prepend_lorem(&text) } else { text }
	}

	/// Generates `count` words separated by single spaces.
	///
	/// Values of `count <= 0` mean [`DEFAULT_WORD_COUNT`]. When
	/// `starts_with_lorem` is set and at least five words are requested,
	/// the first five are replaced by "Lorem ipsum dolor sit amet".
	pub fn words<R: Rng + ?Sized>(&self, rng: &mut R, count: i32, starts_with_lorem: bool) -> String {
		let count = if count <= 0 { DEFAULT_WORD_COUNT } else { count };
		let mut words = self.phrase(rng, count);

		if starts_with_lorem && words.len() >= LOREM_PREFIX.len() {
			for (word, prefix) in words.iter_mut().zip(LOREM_PREFIX) {
				*word = prefix.to_owned();
			}
		}

		words.join(" ")
	}

	/// Builds `sentence_count` sentences joined by single spaces.
	fn sentence_run<R: Rng + ?Sized>(&self, rng: &mut R, sentence_count: i32, word_range: Option<Range>) -> String {
		(0..sentence_count)
			.map(|_| {
				let word_count = Range::resolve(rng, word_range, DEFAULT_WORDS);
				self.sentence(rng, word_count)
			})
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// Upper-cases the first character of `word`.
///
/// Unicode aware (`"ñame"` → `"Ñame"`); words starting with a
/// non-letter and empty strings are returned unchanged.
pub fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Prepends the canonical "Lorem ipsum dolor sit amet." sentence.
fn prepend_lorem(text: &str) -> String {
	format!("{}. {}", LOREM_PREFIX.join(" "), text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const PREFIX_SENTENCE: &str = "Lorem ipsum dolor sit amet. ";

	fn setup() -> (Generator, StdRng) {
		(Generator::default(), StdRng::seed_from_u64(0x10_2e_4d))
	}

	fn assert_sentence_shape(sentence: &str) {
		let first = sentence.chars().next().expect("empty sentence");
		assert!(first.is_uppercase(), "sentence should start uppercase: {sentence:?}");
		assert!(sentence.ends_with('.'), "sentence should end with a period: {sentence:?}");
		assert!(!sentence.ends_with(".."), "sentence has more than one period: {sentence:?}");
		assert_eq!(sentence.matches('.').count(), 1, "stray period in {sentence:?}");
	}

	fn is_in(bank: &WordBank, category: Category, word: &str) -> bool {
		bank.words(category).iter().any(|w| w == word)
	}

	#[test]
	fn capitalize_cases() {
		assert_eq!(capitalize("test"), "Test");
		assert_eq!(capitalize("TEST"), "TEST");
		assert_eq!(capitalize("123test"), "123test");
		assert_eq!(capitalize(""), "");
		assert_eq!(capitalize("ñame"), "Ñame");
	}

	#[test]
	fn sentence_has_requested_length_and_shape() {
		let (generator, mut rng) = setup();
		for word_count in [4, 5, 10, 20] {
			let sentence = generator.sentence(&mut rng, word_count);
			assert_eq!(sentence.split(' ').count(), word_count as usize, "{sentence:?}");
			assert_sentence_shape(&sentence);
		}
	}

	#[test]
	fn sentence_starts_with_noun_then_verb() {
		let (generator, mut rng) = setup();
		let bank = generator.word_bank();

		for _ in 0..50 {
			let sentence = generator.sentence(&mut rng, 6);
			let words: Vec<&str> = sentence.split(' ').collect();
			assert!(is_in(bank, Category::Noun, &words[0].to_lowercase()), "{sentence:?}");
			assert!(is_in(bank, Category::Verb, words[1]), "{sentence:?}");
		}
	}

	#[test]
	fn sentence_keeps_noun_verb_floor_for_small_counts() {
		let (generator, mut rng) = setup();
		for word_count in [-3, 0, 1, 2] {
			let sentence = generator.sentence(&mut rng, word_count);
			assert_eq!(sentence.split(' ').count(), 2, "{sentence:?}");
			assert_sentence_shape(&sentence);
		}
	}

	#[test]
	fn phrase_has_exact_length_without_punctuation() {
		let (generator, mut rng) = setup();
		let bank = generator.word_bank();

		assert!(generator.phrase(&mut rng, 0).is_empty());
		assert!(generator.phrase(&mut rng, -4).is_empty());

		let single = generator.phrase(&mut rng, 1);
		assert_eq!(single.len(), 1);
		assert!(is_in(bank, Category::Noun, &single[0].to_lowercase()));

		let phrase = generator.phrase(&mut rng, 12);
		assert_eq!(phrase.len(), 12);
		assert!(phrase[0].chars().next().unwrap().is_uppercase());
		assert!(is_in(bank, Category::Verb, &phrase[1]));
		for word in &phrase[2..] {
			assert!(
				PHRASE_FILLERS.iter().any(|c| is_in(bank, *c, word)),
				"{word} is not an adjective, noun or preposition"
			);
		}
		assert!(phrase.iter().all(|w| !w.contains('.')));
	}

	#[test]
	fn words_count() {
		let (generator, mut rng) = setup();
		for count in [1, 2, 5, 10, 33] {
			let text = generator.words(&mut rng, count, false);
			assert_eq!(text.split(' ').count(), count as usize, "{text:?}");
		}
	}

	#[test]
	fn words_non_positive_count_uses_default() {
		let (generator, mut rng) = setup();
		for count in [0, -1, -50] {
			let text = generator.words(&mut rng, count, false);
			assert_eq!(text.split(' ').count(), DEFAULT_WORD_COUNT as usize);
		}
	}

	#[test]
	fn words_with_lorem_prefix() {
		let (generator, mut rng) = setup();
		assert_eq!(generator.words(&mut rng, 5, true), "Lorem ipsum dolor sit amet");

		let text = generator.words(&mut rng, 10, true);
		let words: Vec<&str> = text.split(' ').collect();
		assert_eq!(words.len(), 10);
		assert_eq!(words[..5], LOREM_PREFIX);
	}

	#[test]
	fn words_too_short_for_prefix_are_left_alone() {
		let (generator, mut rng) = setup();
		for _ in 0..20 {
			let text = generator.words(&mut rng, 3, true);
			assert_eq!(text.split(' ').count(), 3);
			assert!(!text.starts_with("Lorem ipsum dolor"));
		}
	}

	#[test]
	fn sentences_single_fixed_length() {
		let (generator, mut rng) = setup();
		let text = generator.sentences(&mut rng, 1, false, Some(Range::new(4, 4)));
		assert_eq!(text.split(' ').count(), 4);
		assert_sentence_shape(&text);
	}

	#[test]
	fn sentences_count_and_shape() {
		let (generator, mut rng) = setup();
		let text = generator.sentences(&mut rng, 3, false, Some(Range::new(5, 8)));

		let sentences: Vec<&str> = text.split_inclusive(". ").map(str::trim_end).collect();
		assert_eq!(sentences.len(), 3, "{text:?}");
		for sentence in sentences {
			assert_sentence_shape(sentence);
			assert!((5..=8).contains(&sentence.split(' ').count()));
		}
	}

	#[test]
	fn sentences_non_positive_count_yields_one() {
		let (generator, mut rng) = setup();
		let text = generator.sentences(&mut rng, 0, false, None);
		assert_sentence_shape(&text);
		assert!((8..=15).contains(&text.split(' ').count()));
	}

	#[test]
	fn sentences_with_lorem_prefix() {
		let (generator, mut rng) = setup();
		let text = generator.sentences(&mut rng, 2, true, Some(Range::new(4, 4)));
		assert!(text.starts_with(PREFIX_SENTENCE), "{text:?}");
		// prefix (5) + two sentences of 4 words
		assert_eq!(text.split(' ').count(), 13);
	}

	#[test]
	fn paragraphs_plain_are_blank_line_separated() {
		let (generator, mut rng) = setup();
		let text = generator.paragraphs(&mut rng, 3, false, false, Some(Range::new(2, 4)), None);

		let paragraphs: Vec<&str> = text.split("\n\n").collect();
		assert_eq!(paragraphs.len(), 3);
		for paragraph in paragraphs {
			assert!(!paragraph.contains('\n'));
			let sentences = paragraph.matches('.').count();
			assert!((2..=4).contains(&sentences), "{sentences} sentences in {paragraph:?}");
		}
	}

	#[test]
	fn paragraphs_default_ranges() {
		let (generator, mut rng) = setup();
		let text = generator.paragraphs(&mut rng, 1, false, false, None, Some(Range::new(0, 3)));

		let sentences = text.matches('.').count();
		assert!((3..=6).contains(&sentences), "{text:?}");
		for sentence in text.split_inclusive(". ").map(str::trim_end) {
			assert!((8..=15).contains(&sentence.split(' ').count()), "{sentence:?}");
		}
	}

	#[test]
	fn paragraphs_non_positive_count_yields_one() {
		let (generator, mut rng) = setup();
		let text = generator.paragraphs(&mut rng, -2, false, true, None, None);
		assert_eq!(text.matches("<p>").count(), 1);
	}

	#[test]
	fn paragraphs_html() {
		let (generator, mut rng) = setup();
		let text = generator.paragraphs(&mut rng, 2, false, true, Some(Range::new(1, 1)), Some(Range::new(4, 4)));

		assert_eq!(text.matches("<p>").count(), 2);
		assert!(!text.contains("\n\n"));

		let lines: Vec<&str> = text.split('\n').collect();
		assert_eq!(lines.len(), 2);
		for line in lines {
			let inner = line
				.strip_prefix("<p>")
				.and_then(|l| l.strip_suffix("</p>"))
				.unwrap_or_else(|| panic!("not wrapped: {line:?}"));
			assert_eq!(inner.split(' ').count(), 4);
			assert_sentence_shape(inner);
		}
	}

	#[test]
	fn paragraphs_with_lorem_prefix() {
		let (generator, mut rng) = setup();

		let text = generator.paragraphs(&mut rng, 2, true, false, Some(Range::new(1, 1)), Some(Range::new(4, 4)));
		assert!(text.starts_with(PREFIX_SENTENCE), "{text:?}");
		let paragraphs: Vec<&str> = text.split("\n\n").collect();
		assert_eq!(paragraphs[0].split(' ').count(), 9);
		assert!(!paragraphs[1].starts_with("Lorem ipsum dolor sit amet."));

		let html = generator.paragraphs(&mut rng, 1, true, true, None, None);
		assert!(html.starts_with("<p>Lorem ipsum dolor sit amet. "), "{html:?}");
	}

	#[test]
	fn custom_vocabulary_is_used() {
		let one = |w: &str| vec![w.to_owned()];
		let bank = WordBank::new(one("cat"), one("sits"), one("lazy"), one("and"), one("on")).unwrap();
		let generator = Generator::new(bank);
		let mut rng = StdRng::seed_from_u64(5);

		assert_eq!(generator.sentence(&mut rng, 2), "Cat sits.");
		assert_eq!(generator.words(&mut rng, 2, false), "Cat sits");

		let text = generator.sentence(&mut rng, 30);
		assert!(text.split(' ').skip(2).all(|w| ["lazy", "cat", "on", "and", "lazy.", "cat.", "on.", "and."].contains(&w)));
	}

	#[test]
	fn generate_dispatches_on_mode() {
		let (generator, mut rng) = setup();

		let mut input = GenerationInput { mode: Mode::Words, count: 7, ..Default::default() };
		let words = generator.generate(&mut rng, &input);
		assert_eq!(words.split(' ').count(), 7);
		assert!(words.starts_with("Lorem ipsum dolor sit amet "));

		input.mode = Mode::Sentences;
		input.count = 2;
		input.starts_with_lorem = false;
		input.word_range = Some(Range::new(3, 3));
		let sentences = generator.generate(&mut rng, &input);
		assert_eq!(sentences.matches('.').count(), 2);
		assert_eq!(sentences.split(' ').count(), 6);

		input.mode = Mode::Paragraphs;
		input.as_html = true;
		let html = generator.generate(&mut rng, &input);
		assert_eq!(html.matches("<p>").count(), 2);
	}

	#[test]
	fn seeded_generation_is_reproducible() {
		let generator = Generator::default();
		let a = generator.paragraphs(&mut StdRng::seed_from_u64(11), 2, true, false, None, None);
		let b = generator.paragraphs(&mut StdRng::seed_from_u64(11), 2, true, false, None, None);
		assert_eq!(a, b);
	}
}
