//! Placeholder text ("lorem ipsum") generation library.
//!
//! This crate provides a small grammar-flavoured text generator including:
//! - A vocabulary partitioned by grammatical category (`WordBank`)
//! - Inclusive count ranges with silent fallback to defaults (`Range`)
//! - Sentence, phrase, paragraph and word-list assembly (`Generator`)
//! - Request descriptions shared by the binaries (`GenerationInput`)
//!
//! Generation never fails: invalid counts and ranges are normalized.
//! Only vocabulary loading and mode parsing return [`Error`].

/// Vocabulary, ranges and text assembly.
///
/// The random number generator is always supplied by the caller.
pub mod model;

/// Error type for the fallible, non-generating operations.
pub mod error;

/// I/O utilities (vocabulary files, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::Error;
pub use model::generation_input::{GenerationInput, Mode};
pub use model::generator::{Generator, LOREM_PREFIX};
pub use model::range::Range;
pub use model::word_bank::{Category, WordBank};
