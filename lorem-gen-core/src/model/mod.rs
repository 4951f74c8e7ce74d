//! Top-level module for the placeholder text generator.
//!
//! This module groups:
//! - The vocabulary partitioned by grammatical role (`WordBank`)
//! - Inclusive count ranges and their resolution (`Range`)
//! - Request parameters and mode dispatch (`GenerationInput`)
//! - The high-level generation interface (`Generator`)

/// High-level interface assembling words, sentences and paragraphs.
///
/// Every operation takes the random number generator as a parameter,
/// so callers decide between thread-local and seeded generators.
pub mod generator;

/// Vocabulary split into nouns, verbs, adjectives, conjunctions and prepositions.
///
/// Built once (built-in lists or a vocabulary folder) and read-only afterwards.
pub mod word_bank;

/// Inclusive `(min, max)` ranges used to randomize counts.
pub mod range;

/// Generation request configuration.
///
/// Stores the mode and every parameter of a single generation call.
/// Shared by the command-line and HTTP front-ends.
pub mod generation_input;
