use rand::Rng;
use rand::seq::IndexedRandom;

use super::successor::Successor;

/// Successors observed after one state of a chain.
///
/// Conceptually, this is the set of outgoing edges of a node in the Markov
/// chain. Each occurrence of the state in the corpus contributes exactly one
/// entry, so frequency is encoded by repetition rather than by a counter.
///
/// ## Invariants
/// - Entries keep the order in which they were observed
/// - Duplicates are retained
/// - A `Transitions` stored in a chain is never empty
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
	successors: Vec<Successor>,
}

impl Transitions {
	/// Creates an empty successor sequence.
	pub fn new() -> Self {
		Self { successors: Vec::new() }
	}

	/// Records one more occurrence of `successor`.
	pub fn push(&mut self, successor: Successor) {
		self.successors.push(successor);
	}

	/// Picks a successor uniformly among all recorded entries.
	///
	/// Because duplicates are kept, a successor seen `k` times is `k` times as
	/// likely as one seen once.
	///
	/// Returns `None` if nothing was recorded.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Successor> {
		self.successors.choose(rng)
	}

	/// Number of recorded entries, duplicates included.
	pub fn len(&self) -> usize {
		self.successors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}

	/// How many times `successor` was observed.
	pub fn count(&self, successor: &Successor) -> usize {
		self.successors.iter().filter(|s| *s == successor).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Successor> {
		self.successors.iter()
	}

	pub fn as_slice(&self) -> &[Successor] {
		&self.successors
	}
}

impl From<Successor> for Transitions {
	fn from(successor: Successor) -> Self {
		Self { successors: vec![successor] }
	}
}
