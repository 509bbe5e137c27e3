use std::fmt;
use std::hash::Hash;

/// A lookup key of a chain: the last `ORDER` tokens of the walk.
///
/// Each order supplies its own transition function. A state knows how to
/// build itself from a window of the corpus, which token it contributes to
/// the generated output, and which state follows once a successor word has
/// been sampled.
pub trait State: Clone + Eq + Hash + fmt::Debug {
	/// Number of tokens composing the state.
	const ORDER: usize;

	/// Builds a state from a window of exactly `ORDER` consecutive tokens.
	fn from_window(window: &[String]) -> Self;

	/// The token this state adds to the output when the walk visits it.
	fn head(&self) -> &str;

	/// The state reached after sampling `next` from this state.
	fn advance(&self, next: &str) -> Self;
}

/// Order-1 state: a single token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Unigram(String);

impl Unigram {
	pub fn new(token: &str) -> Self {
		Self(token.to_owned())
	}
}

impl State for Unigram {
	const ORDER: usize = 1;

	fn from_window(window: &[String]) -> Self {
		Self(window[0].clone())
	}

	fn head(&self) -> &str {
		&self.0
	}

	fn advance(&self, next: &str) -> Self {
		Self::new(next)
	}
}

impl fmt::Display for Unigram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Order-2 state: two consecutive tokens, compared as one composite key.
///
/// Consecutive bigram states overlap by one token, so the next key is
/// rebuilt from the trailing token of the current one and the sampled word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bigram {
	first: String,
	second: String,
}

impl Bigram {
	pub fn new(first: &str, second: &str) -> Self {
		Self { first: first.to_owned(), second: second.to_owned() }
	}

	/// Trailing token, shared with the following state.
	pub fn tail(&self) -> &str {
		&self.second
	}
}

impl State for Bigram {
	const ORDER: usize = 2;

	fn from_window(window: &[String]) -> Self {
		Self { first: window[0].clone(), second: window[1].clone() }
	}

	fn head(&self) -> &str {
		&self.first
	}

	fn advance(&self, next: &str) -> Self {
		Self::new(self.tail(), next)
	}
}

impl fmt::Display for Bigram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.first, self.second)
	}
}
