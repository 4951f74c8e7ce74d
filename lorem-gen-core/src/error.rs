use std::path::PathBuf;

use thiserror::Error;

use crate::model::word_bank::Category;

/// Errors raised while preparing a generator, never while generating.
#[derive(Debug, Error)]
pub enum Error {
	/// A vocabulary file could not be read.
	#[error("failed to read vocabulary file {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A category ended up without a single word.
	#[error("vocabulary category '{category}' is empty")]
	EmptyCategory { category: Category },

	/// A mode name other than `paragraphs`, `sentences` or `words`.
	#[error("invalid mode: {0}")]
	UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
