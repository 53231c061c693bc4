//! Top-level module for Recursian word generation.
//!
//! - The fixed alphabet and syllable rules (`alphabet`)
//! - Exhaustive and random generation plus caching (`generator`)
//! - Request parameters with validated bounds (`generation_input`)

/// Consonants, vowels, syllables and syllabification.
pub mod alphabet;

/// Recursive enumeration of every word of a given syllable count.
///
/// Also hosts counting, random sampling and the `WordCache` memoizer.
pub mod generator;

/// Validated parameters for listing words.
pub mod generation_input;
