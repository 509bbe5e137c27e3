use std::fmt;

/// What was observed right after a state in the corpus.
///
/// `End` marks the position where the corpus ran out of tokens. It is
/// recorded like any other successor, so a state seen both mid-text and at
/// the very end carries both kinds of entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Successor {
	Word(String),
	End,
}

impl Successor {
	/// Returns the word, or `None` for the end-of-text sentinel.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Successor::Word(word) => Some(word),
			Successor::End => None,
		}
	}
}

impl From<&str> for Successor {
	fn from(word: &str) -> Self {
		Successor::Word(word.to_owned())
	}
}

impl fmt::Display for Successor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Successor::Word(word) => f.write_str(word),
			Successor::End => f.write_str("<END>"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn words_and_end_are_distinct() {
		let word = Successor::from("hat");
		assert_eq!(word.as_word(), Some("hat"));
		assert_eq!(Successor::End.as_word(), None);
		assert_ne!(word, Successor::End);
	}

	#[test]
	fn end_displays_as_a_marker() {
		assert_eq!(Successor::End.to_string(), "<END>");
		assert_eq!(Successor::from("cat").to_string(), "cat");
	}
}
