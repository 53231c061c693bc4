use std::fmt;

use crate::error::{RecursianError, Result};

/// Recursian consonants. The apostrophe is the glottal stop.
pub const CONSONANTS: &[char] = &['b', 'k', 'n', 'r', 's', '\''];

/// Recursian vowels.
pub const VOWELS: &[char] = &['e', 'i', 'u'];

/// Returns true if `c` is a Recursian consonant.
pub fn is_consonant(c: char) -> bool {
	CONSONANTS.contains(&c)
}

/// Returns true if `c` is a Recursian vowel.
pub fn is_vowel(c: char) -> bool {
	VOWELS.contains(&c)
}

/// A single Recursian syllable.
///
/// # Variants
/// - `ConsonantVowel(c, v)`: a two character syllable, legal anywhere.
/// - `Vowel(v)`: a bare vowel, legal only when the word so far does not
///   end in a vowel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syllable {
	ConsonantVowel(char, char),
	Vowel(char),
}

impl Syllable {
	/// Enumerates every syllable of the alphabet, consonant-vowel pairs first.
	pub fn all() -> impl Iterator<Item = Syllable> {
		CONSONANTS
			.iter()
			.flat_map(|&c| VOWELS.iter().map(move |&v| Syllable::ConsonantVowel(c, v)))
			.chain(VOWELS.iter().map(|&v| Syllable::Vowel(v)))
	}

	/// Whether this syllable may follow `word`.
	///
	/// Any word ending in a vowel blocks a bare vowel, whichever syllable
	/// produced that vowel.
	pub fn can_follow(&self, word: &str) -> bool {
		match self {
			Syllable::ConsonantVowel(..) => true,
			Syllable::Vowel(_) => !ends_in_vowel(word),
		}
	}

	/// Appends the syllable's characters to `word`.
	pub fn push_to(&self, word: &mut String) {
		match *self {
			Syllable::ConsonantVowel(c, v) => {
				word.push(c);
				word.push(v);
			}
			Syllable::Vowel(v) => word.push(v),
		}
	}
}

impl fmt::Display for Syllable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Syllable::ConsonantVowel(c, v) => write!(f, "{c}{v}"),
			Syllable::Vowel(v) => write!(f, "{v}"),
		}
	}
}

/// Returns true if the last character of `word` is a vowel.
///
/// Empty words never end in a vowel.
pub fn ends_in_vowel(word: &str) -> bool {
	word.chars().next_back().is_some_and(is_vowel)
}

/// Splits a word into its syllables.
///
/// The split is unique: a consonant always opens a two character syllable,
/// and a vowel that does not follow a consonant is a bare syllable.
///
/// # Errors
/// Returns `InvalidWord` if the word contains a character outside the
/// alphabet, a consonant not followed by a vowel, or a bare vowel placed
/// right after another vowel.
pub fn syllabify(word: &str) -> Result<Vec<Syllable>> {
	let invalid = || RecursianError::InvalidWord(word.to_owned());

	let mut syllables = Vec::new();
	let mut chars = word.chars();
	let mut previous: Option<char> = None;

	while let Some(c) = chars.next() {
		if is_consonant(c) {
			match chars.next() {
				Some(v) if is_vowel(v) => {
					syllables.push(Syllable::ConsonantVowel(c, v));
					previous = Some(v);
				}
				_ => return Err(invalid()),
			}
		} else if is_vowel(c) {
			if previous.is_some_and(is_vowel) {
				return Err(invalid());
			}
			syllables.push(Syllable::Vowel(c));
			previous = Some(c);
		} else {
			return Err(invalid());
		}
	}

	Ok(syllables)
}

/// Returns true if `word` is a well-formed Recursian word.
pub fn is_valid_word(word: &str) -> bool {
	syllabify(word).is_ok()
}

/// Returns the number of syllables in `word`.
///
/// # Errors
/// Returns `InvalidWord` if the word cannot be syllabified.
pub fn syllable_count(word: &str) -> Result<usize> {
	Ok(syllabify(word)?.len())
}
