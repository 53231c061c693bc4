//! Recursian word generation library.
//!
//! This crate enumerates the words of Recursian, a small invented language
//! whose syllables are either a consonant-vowel pair or a bare vowel. It
//! provides:
//! - The alphabet and syllable rules
//! - Exhaustive, recursive word generation
//! - Word counting, random sampling and a memoizing cache
//! - Binary and text persistence of word lists

/// Alphabet, syllables and word generation.
pub mod model;

/// Word list persistence (postcard binaries and plain text).
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{RecursianError, Result};
pub use model::alphabet::{CONSONANTS, Syllable, VOWELS, is_valid_word, syllabify};
pub use model::generation_input::GenerationInput;
pub use model::generator::{WordCache, all_words, random_word, word_count};
