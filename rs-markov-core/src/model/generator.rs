use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::chain::Chain;
use super::generation_input::{ChainOrder, GenerationInput};
use super::state::{Bigram, Unigram};
use super::walk;
use crate::tokenizer::tokenize;

/// Chain of either supported order, chosen at runtime.
#[derive(Clone, Debug)]
enum Model {
	Unigram(Chain<Unigram>),
	Bigram(Chain<Bigram>),
}

/// High-level text generator built from a corpus.
///
/// # Responsibilities
/// - Tokenize the corpus and build a chain of the configured order
/// - Generate bounded text by random walks over that chain
///
/// The chain is immutable once built, so a `Generator` can serve any number
/// of generations, including concurrent ones through a shared reference.
#[derive(Clone, Debug)]
pub struct Generator {
	model: Model,
	max_words: usize,
	seed: Option<u64>,
}

impl Generator {
	/// Builds a generator from raw corpus text.
	pub fn new(text: &str, input: &GenerationInput) -> Self {
		Self::from_tokens(&tokenize(text), input)
	}

	/// Builds a generator from an already tokenized corpus.
	pub fn from_tokens(tokens: &[String], input: &GenerationInput) -> Self {
		let model = match input.order {
			ChainOrder::Unigram => Model::Unigram(Chain::build(tokens)),
			ChainOrder::Bigram => Model::Bigram(Chain::build(tokens)),
		};
		Self { model, max_words: input.max_words, seed: input.seed }
	}

	pub fn order(&self) -> ChainOrder {
		match self.model {
			Model::Unigram(_) => ChainOrder::Unigram,
			Model::Bigram(_) => ChainOrder::Bigram,
		}
	}

	pub fn max_words(&self) -> usize {
		self.max_words
	}

	/// Returns `true` if the corpus was too short to record any state.
	pub fn is_empty(&self) -> bool {
		self.states() == 0
	}

	/// Number of distinct states in the chain.
	pub fn states(&self) -> usize {
		match &self.model {
			Model::Unigram(chain) => chain.len(),
			Model::Bigram(chain) => chain.len(),
		}
	}

	/// Total number of successor entries in the chain.
	pub fn transitions(&self) -> usize {
		match &self.model {
			Model::Unigram(chain) => chain.transition_count(),
			Model::Bigram(chain) => chain.transition_count(),
		}
	}

	/// Generates text with the configured bound.
	///
	/// # Notes
	/// - Without a seed, each call uses the thread RNG and may differ.
	/// - With a seed, each call replays the same walk.
	pub fn generate(&self) -> String {
		match self.seed {
			Some(seed) => self.generate_with(&mut StdRng::seed_from_u64(seed)),
			None => self.generate_with(&mut rand::rng()),
		}
	}

	/// Generates text with the configured bound, drawing from `rng`.
	pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		self.generate_bounded(self.max_words, rng)
	}

	/// Generates at most `max_words` words, drawing from `rng`.
	///
	/// Returns an empty string if the chain is empty.
	pub fn generate_bounded<R: Rng + ?Sized>(&self, max_words: usize, rng: &mut R) -> String {
		match &self.model {
			Model::Unigram(chain) => walk::generate(chain, max_words, rng),
			Model::Bigram(chain) => walk::generate(chain, max_words, rng),
		}
	}
}
