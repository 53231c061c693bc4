use std::collections::BTreeSet;

use recursian_core::model::alphabet::{is_consonant, is_vowel};
use recursian_core::{RecursianError, all_words, syllabify};

#[test]
fn simple_cases() {
	assert_eq!(all_words(0).unwrap(), vec![String::new()]);
	assert!(matches!(all_words(-1), Err(RecursianError::InvalidArgument(-1))));
	assert!(matches!(all_words(-137), Err(RecursianError::InvalidArgument(-137))));
	assert!(all_words(i64::MIN).is_err());
}

#[test]
fn one_syllable_words() {
	let unsorted = all_words(1).unwrap();
	for word in &unsorted {
		assert!(word.len() == 1 || word.len() == 2, "{word}");
	}

	let words: BTreeSet<&str> = unsorted.iter().map(String::as_str).collect();
	assert_eq!(words.len(), unsorted.len());

	let expected: BTreeSet<&str> = [
		"'e", "'i", "'u", "be", "bi", "bu", "e", "i", "ke", "ki", "ku", "ne", "ni", "nu", "re",
		"ri", "ru", "se", "si", "su", "u",
	]
	.into_iter()
	.collect();
	assert_eq!(words, expected);
}

#[test]
fn quantities() {
	let expected = [1, 21, 378, 6804, 122_472];
	for (n, count) in expected.into_iter().enumerate() {
		assert_eq!(all_words(n as i64).unwrap().len(), count, "{n} syllables");
	}
}

#[test]
fn only_alphabet_characters() {
	let words = all_words(4).unwrap();
	assert!(!words.is_empty());
	for word in &words {
		assert!(word.chars().all(|c| is_consonant(c) || is_vowel(c)), "{word}");
	}
}

#[test]
fn no_duplicates() {
	for n in 0..=4 {
		let words = all_words(n).unwrap();
		let unique: BTreeSet<&String> = words.iter().collect();
		assert_eq!(unique.len(), words.len(), "{n} syllables");
	}
}

#[test]
fn bare_vowels_never_adjacent() {
	for n in 2..=4 {
		for word in all_words(n).unwrap() {
			let chars: Vec<char> = word.chars().collect();
			let bare: Vec<bool> = chars
				.iter()
				.enumerate()
				.map(|(i, &c)| is_vowel(c) && (i == 0 || !is_consonant(chars[i - 1])))
				.collect();
			assert!(!bare.windows(2).any(|w| w[0] && w[1]), "{word}");
		}
	}
}

#[test]
fn bare_vowel_only_opens_a_word() {
	// Any trailing vowel blocks a bare vowel, so one can only appear first.
	for word in all_words(3).unwrap() {
		let chars: Vec<char> = word.chars().collect();
		for i in 1..chars.len() {
			if is_vowel(chars[i]) {
				assert!(is_consonant(chars[i - 1]), "{word}");
			}
		}
	}
}

#[test]
fn generated_words_syllabify_to_their_length() {
	for n in 0..=3 {
		for word in all_words(n).unwrap() {
			assert_eq!(syllabify(&word).unwrap().len(), n as usize, "{word}");
		}
	}
}
