use crate::error::{RecursianError, Result};
use crate::model::generator::WordCache;

/// Default upper bound on the syllable count accepted by `GenerationInput`.
///
/// Five syllables already yield more than two million words.
pub const DEFAULT_MAX_SYLLABLES: i64 = 5;

/// Input parameters for a word listing request.
///
/// `GenerationInput` bundles the requested syllable count with the options
/// that shape the output, and enforces a configurable upper bound so that a
/// caller cannot request an unreasonably large enumeration.
///
/// # Invariants
/// - `max_syllables` is never negative
/// - `syllables` is within `0..=max_syllables` once validated
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationInput {
	/// Number of syllables of every generated word.
	pub syllables: i64,

	/// Whether to return words in lexicographic order.
	pub sorted: bool,

	/// Largest accepted syllable count.
	max_syllables: i64,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { syllables: 0, sorted: false, max_syllables: DEFAULT_MAX_SYLLABLES }
	}
}

impl GenerationInput {
	/// Creates an input for `syllables` syllables with default options.
	pub fn new(syllables: i64) -> Self {
		Self { syllables, ..Self::default() }
	}

	/// Returns the current syllable limit.
	pub fn max_syllables(&self) -> i64 {
		self.max_syllables
	}

	/// Sets the syllable limit.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `max_syllables` is negative.
	pub fn set_max_syllables(&mut self, max_syllables: i64) -> Result<()> {
		if max_syllables < 0 {
			return Err(RecursianError::InvalidArgument(max_syllables));
		}
		self.max_syllables = max_syllables;
		Ok(())
	}

	/// Checks the syllable count against the configured bounds.
	///
	/// # Errors
	/// - `InvalidArgument` if `syllables` is negative.
	/// - `TooManySyllables` if `syllables` exceeds `max_syllables`.
	pub fn validate(&self) -> Result<()> {
		if self.syllables < 0 {
			return Err(RecursianError::InvalidArgument(self.syllables));
		}
		if self.syllables > self.max_syllables {
			return Err(RecursianError::TooManySyllables {
				requested: self.syllables,
				max: self.max_syllables,
			});
		}
		Ok(())
	}

	/// Validates the input and lists the matching words from `cache`.
	///
	/// The words are borrowed from the cache; only the list of references is allocated.
	pub fn generate<'a>(&self, cache: &'a mut WordCache) -> Result<Vec<&'a str>> {
		self.validate()?;
		let mut words: Vec<&str> = cache.words(self.syllables)?.iter().map(String::as_str).collect();
		if self.sorted {
			words.sort_unstable();
		}
		Ok(words)
	}
}
