use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// On-disk representation of a generated word list.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct WordList {
	words: Vec<String>,
}

/// Writes `words` to `path` as a compact `postcard` binary.
pub fn save_words<P: AsRef<Path>>(path: P, words: &[String]) -> Result<()> {
	let list = WordList { words: words.to_vec() };
	let bytes = postcard::to_stdvec(&list)?;
	std::fs::write(&path, &bytes)?;
	debug!("saved {} words ({} bytes) to {}", words.len(), bytes.len(), path.as_ref().display());
	Ok(())
}

/// Reads a word list previously written by `save_words`.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	let bytes = std::fs::read(&path)?;
	let list: WordList = postcard::from_bytes(&bytes)?;
	debug!("loaded {} words from {}", list.words.len(), path.as_ref().display());
	Ok(list.words)
}

/// Writes `words` to `path`, one word per line.
pub fn write_text<P: AsRef<Path>>(path: P, words: &[String]) -> Result<()> {
	let mut writer = BufWriter::new(File::create(path)?);
	for word in words {
		writeln!(writer, "{word}")?;
	}
	writer.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RecursianError;
	use crate::model::generator::all_words;

	#[test]
	fn binary_word_list() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("two.bin");
		let words = all_words(2).unwrap();
		save_words(&path, &words).unwrap();
		assert_eq!(load_words(&path).unwrap(), words);
	}

	#[test]
	fn text_word_list() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("one.txt");
		let words = all_words(1).unwrap();
		write_text(&path, &words).unwrap();
		let contents = std::fs::read_to_string(&path).unwrap();
		assert_eq!(contents.lines().collect::<Vec<_>>(), words);
	}

	#[test]
	fn load_errors() {
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(load_words(dir.path().join("missing.bin")), Err(RecursianError::Io(_))));

		let garbage = dir.path().join("garbage.bin");
		std::fs::write(&garbage, [0xff, 0xff, 0xff]).unwrap();
		assert!(matches!(load_words(&garbage), Err(RecursianError::Serialization(_))));
	}
}
