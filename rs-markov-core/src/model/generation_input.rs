use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// Default bound on the number of generated words.
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Number of tokens composing a chain state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum ChainOrder {
	/// One-word states.
	Unigram,
	/// Two-word states.
	#[default]
	Bigram,
}

impl ChainOrder {
	/// Numeric order (1 or 2).
	pub fn value(self) -> usize {
		match self {
			ChainOrder::Unigram => 1,
			ChainOrder::Bigram => 2,
		}
	}
}

impl TryFrom<usize> for ChainOrder {
	type Error = ChainError;

	fn try_from(order: usize) -> Result<Self, Self::Error> {
		match order {
			1 => Ok(ChainOrder::Unigram),
			2 => Ok(ChainOrder::Bigram),
			other => Err(ChainError::UnsupportedOrder(other)),
		}
	}
}

impl From<ChainOrder> for usize {
	fn from(order: ChainOrder) -> Self {
		order.value()
	}
}

impl FromStr for ChainOrder {
	type Err = ChainError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let order: usize = s
			.trim()
			.parse()
			.map_err(|_| ChainError::InvalidOrder(s.to_owned()))?;
		ChainOrder::try_from(order)
	}
}

impl fmt::Display for ChainOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.value())
	}
}

/// Parameters controlling how a `Generator` is built and walked.
///
/// # Fields
/// - `order`: chain order used when building the table
/// - `max_words`: inclusive bound on the number of generated words
/// - `seed`: when set, every generation replays the same seeded walk
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationInput {
	pub order: ChainOrder,
	pub max_words: usize,
	pub seed: Option<u64>,
}

impl GenerationInput {
	/// Creates an input for `order` with the default bound and no seed.
	pub fn new(order: ChainOrder) -> Self {
		Self { order, ..Self::default() }
	}
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			order: ChainOrder::default(),
			max_words: DEFAULT_MAX_WORDS,
			seed: None,
		}
	}
}
