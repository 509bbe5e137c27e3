use std::collections::HashMap;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::State;
use super::successor::Successor;
use super::transitions::Transitions;
use crate::tokenizer::tokenize;

/// Markov chain table over word states of a fixed order.
///
/// The `Chain` maps every state observed in a corpus to the sequence of
/// successors that followed it, including the end-of-text sentinel.
///
/// # Responsibilities
/// - Build the table once from a token sequence
/// - Give read-only access to the successors of a state
/// - Pick a uniformly random starting state
///
/// # Invariants
/// - Every state maps to a non-empty `Transitions`
/// - The total number of entries equals the number of windows of `ORDER`
///   tokens in the corpus
/// - States are kept in first-occurrence order, so a seeded RNG gives
///   reproducible walks
/// - The table is never mutated after `build`
#[derive(Clone, Debug)]
pub struct Chain<S: State> {
	/// Position of each state in `entries`
	index: HashMap<S, usize>,

	/// States with their successors, in first-occurrence order
	entries: Vec<(S, Transitions)>,
}

impl<S: State> Default for Chain<S> {
	fn default() -> Self {
		Self { index: HashMap::new(), entries: Vec::new() }
	}
}

impl<S: State> Chain<S> {
	/// Builds a chain from an ordered token sequence.
	///
	/// For each window of `ORDER` consecutive tokens, the token right after
	/// the window (or `Successor::End` past the last token) is appended to the
	/// window's successors.
	///
	/// # Notes
	/// - Fewer than `ORDER` tokens give an empty chain. This is not an error.
	pub fn build(tokens: &[String]) -> Self {
		let mut chain = Self::default();

		for (i, window) in tokens.windows(S::ORDER).enumerate() {
			let next = match tokens.get(i + S::ORDER) {
				Some(token) => Successor::Word(token.clone()),
				None => Successor::End,
			};
			chain.record(S::from_window(window), next);
		}

		debug!(
			"Built order-{} chain: {} states, {} transitions from {} tokens",
			S::ORDER,
			chain.len(),
			chain.transition_count(),
			tokens.len()
		);
		chain
	}

	/// Tokenizes `text` and builds a chain from the resulting tokens.
	pub fn from_text(text: &str) -> Self {
		Self::build(&tokenize(text))
	}

	fn record(&mut self, state: S, next: Successor) {
		match self.index.get(&state) {
			Some(&position) => self.entries[position].1.push(next),
			None => {
				self.index.insert(state.clone(), self.entries.len());
				self.entries.push((state, Transitions::from(next)));
			}
		}
	}

	/// Returns `true` if no state was recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of distinct states.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Total number of successor entries across all states.
	pub fn transition_count(&self) -> usize {
		self.entries.iter().map(|(_, transitions)| transitions.len()).sum()
	}

	/// Successors recorded for `state`, or `None` if the state is unknown.
	pub fn successors(&self, state: &S) -> Option<&Transitions> {
		let position = self.index.get(state)?;
		Some(&self.entries[*position].1)
	}

	pub fn contains(&self, state: &S) -> bool {
		self.index.contains_key(state)
	}

	/// Iterates over states in first-occurrence order.
	pub fn states(&self) -> impl Iterator<Item = &S> {
		self.entries.iter().map(|(state, _)| state)
	}

	/// Iterates over states with their successors, in first-occurrence order.
	pub fn iter(&self) -> impl Iterator<Item = (&S, &Transitions)> {
		self.entries.iter().map(|(state, transitions)| (state, transitions))
	}

	/// Picks a starting state uniformly among all distinct states.
	///
	/// Returns `None` if the chain is empty.
	pub fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&S> {
		self.entries.choose(rng).map(|(state, _)| state)
	}
}
