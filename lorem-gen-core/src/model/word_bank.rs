use std::fmt;
use std::path::Path;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::io;

/// Grammatical role of a word in the vocabulary.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Noun,
	Verb,
	Adjective,
	Conjunction,
	Preposition,
}

impl Category {
	/// Every category, in vocabulary file order.
	pub const ALL: [Category; 5] = [
		Category::Noun,
		Category::Verb,
		Category::Adjective,
		Category::Conjunction,
		Category::Preposition,
	];

	/// File name (without extension) holding this category in a vocabulary folder.
	pub fn file_stem(self) -> &'static str {
		match self {
			Category::Noun => "nouns",
			Category::Verb => "verbs",
			Category::Adjective => "adjectives",
			Category::Conjunction => "conjunctions",
			Category::Preposition => "prepositions",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Category::Noun => "noun",
			Category::Verb => "verb",
			Category::Adjective => "adjective",
			Category::Conjunction => "conjunction",
			Category::Preposition => "preposition",
		};
		f.write_str(name)
	}
}

const NOUNS: &[&str] = &[
	"adipisicing", "amet", "anim", "aute", "cillum", "commodo", "consectetur",
	"consequat", "culpa", "cupidatat", "deserunt", "dolor", "dolore", "elit",
	"enim", "esse", "est", "eu", "ex", "excepteur", "exercitation", "fugiat",
	"id", "in", "incididunt", "ipsum", "irure", "labore", "laboris", "laborum",
	"lorem", "magna", "minim", "mollit", "nisi", "non", "nostrud", "nulla",
	"occaecat", "officia", "pariatur", "proident", "qui", "quis", "reprehenderit",
	"sint", "sit", "sunt", "tempor", "ullamco", "ut", "velit", "veniam", "voluptate",
];

const VERBS: &[&str] = &[
	"ad", "adipiscing", "aliqua", "aliquip", "beatae", "cred", "debitis",
	"delectus", "deleniti", "do", "duis", "ea", "eiusmod", "epicuri", "et",
	"facere", "fuga", "graeco", "habeo", "iisque", "interpretaris", "ius",
	"latine", "liberavisse", "mentitum", "pertinax", "philosophia", "placerat",
	"ponderum", "populo", "pri", "quando", "referrentur", "reformidans", "regione",
	"scaevola", "scripta", "sed", "suspendisse", "tacimates", "tantas", "tation",
	"te", "theophrastus", "tibique", "timeam", "vim", "vivendo", "vituperata",
];

const ADJECTIVES: &[&str] = &[
	"accusamus", "accusantium", "adipisci", "alias", "aliquid", "asperiores",
	"aspernatur", "atque", "aut", "autem", "blanditiis", "corporis", "corrupti",
	"dexter", "distinctio", "dolorem", "doloremque", "dolores", "ducimus",
	"eaque", "earum", "eos", "error", "eveniet", "expedita", "explicabo",
	"facilis", "harum", "hic", "illo", "impedit", "inventore", "iusto",
	"laboriosam", "laudantium", "libero", "maiores", "maxime", "modi",
	"molestiae", "molestias", "nam", "natus", "necessitatibus", "nemo",
	"neque", "nesciunt", "nobis", "odio", "odit", "omnis", "optio",
	"perspiciatis", "placeat", "porro", "possimus", "praesentium", "quae",
	"quam", "quas", "quasi", "quibusdam", "quidem", "quisquam", "quo",
	"quod", "recusandae", "repellat", "repellendus", "repudiandae", "rerum",
	"saepe", "sapiente", "sequi", "similique", "soluta", "tempora",
	"tenetur", "totam", "ullam", "unde", "veritatis", "vitae", "voluptas",
	"voluptatem", "voluptates", "voluptatibus", "voluptatum",
];

const CONJUNCTIONS: &[&str] = &[
	"ac", "at", "cum", "de", "ergo", "etiam", "ex", "haec", "hic", "iam",
	"igitur", "interdum", "ita", "item", "mox", "nec", "neque", "per",
	"post", "quamquam", "quoniam", "sed", "semper", "si", "sic", "sub",
	"sui", "tam", "tamen", "trans", "tu", "tum", "ubi", "ultro", "unde",
	"utrum", "vero",
];

const PREPOSITIONS: &[&str] = &[
	"ad", "ante", "apud", "circum", "contra", "inter", "intra", "ob",
	"per", "post", "prae", "prope", "propter", "sub", "super", "trans",
];

/// Vocabulary used by the generator, one word list per grammatical category.
///
/// # Responsibilities
/// - Hold the five word lists (nouns, verbs, adjectives, conjunctions, prepositions)
/// - Draw a uniformly random word from a category
/// - Load alternative vocabularies from a folder of `.dat` files
///
/// # Invariants
/// - Every list is non-empty
/// - Lists are never mutated after construction
#[derive(Serialize, Clone, Debug)]
pub struct WordBank {
	nouns: Vec<String>,
	verbs: Vec<String>,
	adjectives: Vec<String>,
	conjunctions: Vec<String>,
	prepositions: Vec<String>,
}

impl WordBank {
	/// Creates a word bank from explicit lists.
	///
	/// # Errors
	/// Returns [`Error::EmptyCategory`] for the first list without any word.
	pub fn new(
		nouns: Vec<String>,
		verbs: Vec<String>,
		adjectives: Vec<String>,
		conjunctions: Vec<String>,
		prepositions: Vec<String>,
	) -> Result<Self> {
		let bank = Self { nouns, verbs, adjectives, conjunctions, prepositions };
		for category in Category::ALL {
			if bank.words(category).is_empty() {
				return Err(Error::EmptyCategory { category });
			}
		}
		Ok(bank)
	}

	/// Loads a vocabulary from a directory.
	///
	/// The directory must contain one file per category:
	/// `nouns.dat`, `verbs.dat`, `adjectives.dat`, `conjunctions.dat`
	/// and `prepositions.dat`, with one word per line.
	///
	/// # Errors
	/// - [`Error::Io`] if a file is missing or unreadable.
	/// - [`Error::EmptyCategory`] if a file holds no words.
	pub fn from_folder<P: AsRef<Path>>(folder: P) -> Result<Self> {
		let folder = io::normalize_folder(folder.as_ref());

		let load = |category: Category| -> Result<Vec<String>> {
			let path = io::build_input_path(&folder, category.file_stem(), "dat");
			let words = io::read_words(&path).map_err(|source| Error::Io { path: path.clone(), source })?;
			debug!("loaded {} {} words from {}", words.len(), category, path.display());
			Ok(words)
		};

		Self::new(
			load(Category::Noun)?,
			load(Category::Verb)?,
			load(Category::Adjective)?,
			load(Category::Conjunction)?,
			load(Category::Preposition)?,
		)
	}

	/// Returns the read-only word list of a category.
	pub fn words(&self, category: Category) -> &[String] {
		match category {
			Category::Noun => &self.nouns,
			Category::Verb => &self.verbs,
			Category::Adjective => &self.adjectives,
			Category::Conjunction => &self.conjunctions,
			Category::Preposition => &self.prepositions,
		}
	}

	/// Draws one word of `category` uniformly at random.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R, category: Category) -> &str {
		// Lists are non-empty by construction
		self.words(category).choose(rng).map_or("", String::as_str)
	}
}

impl Default for WordBank {
	/// The built-in Latin vocabulary.
	fn default() -> Self {
		let owned = |list: &[&str]| list.iter().map(|w| (*w).to_owned()).collect::<Vec<_>>();
		Self {
			nouns: owned(NOUNS),
			verbs: owned(VERBS),
			adjectives: owned(ADJECTIVES),
			conjunctions: owned(CONJUNCTIONS),
			prepositions: owned(PREPOSITIONS),
		}
	}
}
