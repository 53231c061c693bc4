use log::{debug, trace};
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::error::{RecursianError, Result};
use crate::model::alphabet::{CONSONANTS, Syllable, VOWELS, ends_in_vowel};

/// Number of syllables that may follow a word not ending in a vowel.
const OPEN_BRANCHING: u128 = (CONSONANTS.len() * VOWELS.len() + VOWELS.len()) as u128;

/// Number of syllables that may follow a word ending in a vowel.
const CLOSED_BRANCHING: u128 = (CONSONANTS.len() * VOWELS.len()) as u128;

/// Returns every Recursian word made of exactly `syllables` syllables.
///
/// The result is unordered and free of duplicates.
///
/// # Errors
/// Returns `InvalidArgument` if `syllables` is negative.
pub fn all_words(syllables: i64) -> Result<Vec<String>> {
	if syllables < 0 {
		return Err(RecursianError::InvalidArgument(syllables));
	}
	if syllables == 0 {
		return Ok(vec![String::new()]);
	}

	let shorter = all_words(syllables - 1)?;
	let words = extend_words(&shorter);
	debug!("generated {} words of {} syllables", words.len(), syllables);
	Ok(words)
}

/// Extends each word by every syllable allowed to follow it.
fn extend_words(shorter: &[String]) -> Vec<String> {
	let mut result = Vec::with_capacity(shorter.len() * OPEN_BRANCHING as usize);

	for word in shorter {
		let last_was_single_vowel = ends_in_vowel(word);

		// Consonant-vowel syllables may follow anything
		for &consonant in CONSONANTS {
			for &vowel in VOWELS {
				let mut extended = String::with_capacity(word.len() + 2);
				extended.push_str(word);
				extended.push(consonant);
				extended.push(vowel);
				result.push(extended);
			}
		}

		// Bare vowels never follow a vowel
		if !last_was_single_vowel {
			for &vowel in VOWELS {
				let mut extended = String::with_capacity(word.len() + 1);
				extended.push_str(word);
				extended.push(vowel);
				result.push(extended);
			}
		}
	}

	result
}

/// Returns how many words `all_words(syllables)` yields, without building them.
///
/// Only the empty word does not end in a vowel, so the count is
/// 1 for zero syllables and `21 * 18^(n-1)` otherwise.
///
/// # Errors
/// - `InvalidArgument` if `syllables` is negative.
/// - `TooManySyllables` if the count does not fit in a `u128`.
pub fn word_count(syllables: i64) -> Result<u128> {
	if syllables < 0 {
		return Err(RecursianError::InvalidArgument(syllables));
	}
	if syllables == 0 {
		return Ok(1);
	}

	let overflow = || RecursianError::TooManySyllables { requested: syllables, max: max_countable() };
	let exponent = u32::try_from(syllables - 1).map_err(|_| overflow())?;
	CLOSED_BRANCHING
		.checked_pow(exponent)
		.and_then(|n| n.checked_mul(OPEN_BRANCHING))
		.ok_or_else(overflow)
}

/// Largest syllable count whose word count fits in a `u128`.
fn max_countable() -> i64 {
	let mut count = OPEN_BRANCHING;
	let mut syllables = 1;
	while let Some(next) = count.checked_mul(CLOSED_BRANCHING) {
		count = next;
		syllables += 1;
	}
	syllables
}

/// Draws a uniformly random Recursian word of `syllables` syllables.
///
/// Each step picks uniformly among the syllables allowed to follow the
/// word built so far. Every word has the same number of options at a given
/// step, so the drawn word is uniform over `all_words(syllables)`.
///
/// # Errors
/// Returns `InvalidArgument` if `syllables` is negative.
pub fn random_word<R: Rng + ?Sized>(syllables: i64, rng: &mut R) -> Result<String> {
	if syllables < 0 {
		return Err(RecursianError::InvalidArgument(syllables));
	}

	let mut word = String::new();
	for _ in 0..syllables {
		// Never empty: consonant-vowel syllables always qualify
		if let Some(syllable) = Syllable::all().filter(|s| s.can_follow(&word)).choose(rng) {
			syllable.push_to(&mut word);
		}
	}
	Ok(word)
}

/// Memoizing front end to `all_words`.
///
/// Each level is built from the cached level below it, so repeated requests
/// for the same or growing syllable counts only pay for the new levels.
///
/// # Invariants
/// - `levels[n]` holds exactly the words of `n` syllables.
#[derive(Debug, Default)]
pub struct WordCache {
	levels: Vec<Vec<String>>,
}

impl WordCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the words of `syllables` syllables, generating missing levels.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `syllables` is negative.
	pub fn words(&mut self, syllables: i64) -> Result<&[String]> {
		if syllables < 0 {
			return Err(RecursianError::InvalidArgument(syllables));
		}
		let target = usize::try_from(syllables).map_err(|_| RecursianError::TooManySyllables {
			requested: syllables,
			max: i64::MAX,
		})?;

		if target < self.levels.len() {
			trace!("cache hit for {} syllables", target);
		} else {
			if self.levels.is_empty() {
				self.levels.push(vec![String::new()]);
			}
			while self.levels.len() <= target {
				let words = extend_words(&self.levels[self.levels.len() - 1]);
				debug!("cached {} words of {} syllables", words.len(), self.levels.len());
				self.levels.push(words);
			}
		}

		Ok(self.levels[target].as_slice())
	}

	/// Number of cached levels.
	pub fn len(&self) -> usize {
		self.levels.len()
	}

	pub fn is_empty(&self) -> bool {
		self.levels.is_empty()
	}

	/// Drops every cached level.
	pub fn clear(&mut self) {
		self.levels.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use crate::model::alphabet::syllable_count;

	#[test]
	fn counts_match_generation() {
		for n in 0..=3 {
			assert_eq!(word_count(n).unwrap(), all_words(n).unwrap().len() as u128);
		}
		assert_eq!(word_count(4).unwrap(), 122_472);
	}

	#[test]
	fn count_rejects_negative_and_huge() {
		assert!(matches!(word_count(-3), Err(RecursianError::InvalidArgument(-3))));
		let max = max_countable();
		assert!(word_count(max).is_ok());
		assert!(matches!(word_count(max + 1), Err(RecursianError::TooManySyllables { .. })));
		assert!(matches!(word_count(i64::MAX), Err(RecursianError::TooManySyllables { .. })));
	}

	#[test]
	fn random_words_are_valid() {
		let mut rng = StdRng::seed_from_u64(42);
		for n in 0..8 {
			let word = random_word(n, &mut rng).unwrap();
			assert_eq!(syllable_count(&word).unwrap(), n as usize);
		}
		assert!(random_word(-1, &mut rng).is_err());
	}

	#[test]
	fn random_words_cover_first_level() {
		let mut rng = StdRng::seed_from_u64(7);
		let expected = all_words(1).unwrap();
		let mut seen = std::collections::HashSet::new();
		for _ in 0..2000 {
			let word = random_word(1, &mut rng).unwrap();
			assert!(expected.contains(&word));
			seen.insert(word);
		}
		assert_eq!(seen.len(), expected.len());
	}

	#[test]
	fn random_words_are_uniform() {
		let mut rng = StdRng::seed_from_u64(11);
		let words = all_words(2).unwrap();
		let draws_per_word = 200;
		let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
		for _ in 0..words.len() * draws_per_word {
			*counts.entry(random_word(2, &mut rng).unwrap()).or_insert(0) += 1;
		}
		assert_eq!(counts.len(), words.len());
		for word in &words {
			let count = counts[word];
			assert!((120..=280).contains(&count), "{word} drawn {count} times");
		}
	}

	#[test]
	fn cache_matches_free_function() {
		let mut cache = WordCache::new();
		assert!(cache.is_empty());
		assert_eq!(cache.words(3).unwrap(), all_words(3).unwrap().as_slice());
		assert_eq!(cache.len(), 4);
		assert_eq!(cache.words(1).unwrap(), all_words(1).unwrap().as_slice());
		assert_eq!(cache.len(), 4);
		assert!(matches!(cache.words(-137), Err(RecursianError::InvalidArgument(-137))));
		cache.clear();
		assert!(cache.is_empty());
	}
}
