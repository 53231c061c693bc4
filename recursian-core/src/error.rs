use std::io;

use thiserror::Error;

/// Errors returned by the Recursian word generator.
#[derive(Error, Debug)]
pub enum RecursianError {
	/// A syllable count was negative.
	#[error("number of syllables must be non-negative, got {0}")]
	InvalidArgument(i64),

	/// A syllable count exceeds the configured (or representable) limit.
	#[error("{requested} syllables requested, limit is {max}")]
	TooManySyllables { requested: i64, max: i64 },

	/// A string that cannot be split into Recursian syllables.
	#[error("not a Recursian word: {0:?}")]
	InvalidWord(String),

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] postcard::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecursianError>;

impl RecursianError {
	/// Whether the error was caused by the caller's input rather than the environment.
	pub fn is_client_error(&self) -> bool {
		matches!(
			self,
			RecursianError::InvalidArgument(_)
				| RecursianError::TooManySyllables { .. }
				| RecursianError::InvalidWord(_)
		)
	}
}
