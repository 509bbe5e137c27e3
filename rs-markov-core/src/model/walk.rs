use log::trace;
use rand::Rng;

use super::chain::Chain;
use super::state::State;
use super::successor::Successor;

/// Generates text by a random walk starting from a uniformly chosen state.
///
/// Returns an empty string if the chain is empty.
pub fn generate<S, R>(chain: &Chain<S>, max_words: usize, rng: &mut R) -> String
where
	S: State,
	R: Rng + ?Sized,
{
	match chain.random_state(rng) {
		Some(start) => generate_from(chain, start, max_words, rng),
		None => String::new(),
	}
}

/// Generates text by a random walk starting from `start`.
///
/// Each step emits the head token of the current state, then samples a
/// successor uniformly among the recorded entries:
/// - `Successor::End` stops the walk
/// - a word moves the walk to `state.advance(word)`
///
/// The bound is inclusive: the output holds at most `max_words` tokens, and
/// the walk stops as soon as it reaches that many. An unknown `start` or a
/// `max_words` of zero yields an empty string.
pub fn generate_from<S, R>(chain: &Chain<S>, start: &S, max_words: usize, rng: &mut R) -> String
where
	S: State,
	R: Rng + ?Sized,
{
	if max_words == 0 || !chain.contains(start) {
		return String::new();
	}

	let mut words: Vec<String> = Vec::new();
	let mut state = start.clone();
	loop {
		words.push(state.head().to_owned());
		if words.len() >= max_words {
			trace!("Walk reached the {max_words} word bound");
			break;
		}

		// Every word successor is itself a recorded state, so the lookup only
		// fails for a chain built by hand around a foreign start.
		let Some(transitions) = chain.successors(&state) else {
			break;
		};
		match transitions.sample(rng).and_then(Successor::as_word) {
			Some(next) => state = state.advance(next),
			None => {
				trace!("Walk reached the end of text after {} words", words.len());
				break;
			}
		}
	}

	words.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::state::{Bigram, Unigram};
	use crate::tokenizer::tokenize;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::collections::HashSet;

	const CORPUS: &str = "the quick brown fox jumps over the lazy dog and the quick \
		red fox runs past the lazy cat while the brown dog sleeps";

	#[test]
	fn unigram_walk_from_terminal_state_stops_immediately() {
		let chain: Chain<Unigram> = Chain::from_text("the cat in the hat");
		let mut rng = StdRng::seed_from_u64(0);
		let text = generate_from(&chain, &Unigram::new("hat"), 100, &mut rng);
		assert_eq!(text, "hat");
	}

	#[test]
	fn bigram_walk_from_terminal_state_emits_leading_token() {
		let chain: Chain<Bigram> = Chain::from_text("the cat in the hat");
		let mut rng = StdRng::seed_from_u64(0);
		let text = generate_from(&chain, &Bigram::new("the", "hat"), 100, &mut rng);
		assert_eq!(text, "the");
	}

	#[test]
	fn bigram_walk_follows_a_linear_chain() {
		let chain: Chain<Bigram> = Chain::from_text("the cat in the hat");
		let mut rng = StdRng::seed_from_u64(0);
		let text = generate_from(&chain, &Bigram::new("the", "cat"), 100, &mut rng);
		assert_eq!(text, "the cat in the");
	}

	#[test]
	fn single_word_corpus_generates_that_word() {
		let chain: Chain<Unigram> = Chain::from_text("hello");
		for seed in 0..10 {
			let mut rng = StdRng::seed_from_u64(seed);
			assert_eq!(generate(&chain, 100, &mut rng), "hello");
		}
	}

	#[test]
	fn empty_chains_generate_nothing() {
		let mut rng = StdRng::seed_from_u64(0);
		let unigram: Chain<Unigram> = Chain::from_text("");
		let bigram: Chain<Bigram> = Chain::from_text("lonely");
		assert_eq!(generate(&unigram, 100, &mut rng), "");
		assert_eq!(generate(&bigram, 100, &mut rng), "");
	}

	#[test]
	fn zero_bound_and_unknown_start_generate_nothing() {
		let chain: Chain<Unigram> = Chain::from_text("a b c");
		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(generate(&chain, 0, &mut rng), "");
		assert_eq!(generate_from(&chain, &Unigram::new("z"), 10, &mut rng), "");
	}

	#[test]
	fn bound_is_inclusive_for_both_orders() {
		let unigram: Chain<Unigram> = Chain::from_text("a b a b a b a b");
		let bigram: Chain<Bigram> = Chain::from_text("a b a b a b a b");
		let mut rng = StdRng::seed_from_u64(9);

		for bound in 1..=6 {
			let text = generate_from(&unigram, &Unigram::new("a"), bound, &mut rng);
			assert!(text.split(' ').count() <= bound);
			let text = generate_from(&bigram, &Bigram::new("a", "b"), bound, &mut rng);
			assert!(text.split(' ').count() <= bound);
		}

		let endless: Chain<Unigram> = Chain::from_text("x x");
		let text = generate_from(&endless, &Unigram::new("x"), 1, &mut rng);
		assert_eq!(text, "x");
	}

	#[test]
	fn walk_that_never_ends_emits_exactly_the_bound() {
		let corpus: Vec<String> = (0..20).map(|i| format!("w{i}")).collect();
		let unigram: Chain<Unigram> = Chain::build(&corpus);
		let bigram: Chain<Bigram> = Chain::build(&corpus);
		let mut rng = StdRng::seed_from_u64(5);

		for bound in [1, 2, 5, 19] {
			let expected = corpus[..bound].join(" ");
			let text = generate_from(&unigram, &Unigram::new("w0"), bound, &mut rng);
			assert_eq!(text, expected);
			let text = generate_from(&bigram, &Bigram::new("w0", "w1"), bound, &mut rng);
			assert_eq!(text, expected);
		}
	}

	#[test]
	fn repetitive_corpus_fills_the_bound() {
		let unigram: Chain<Unigram> = Chain::from_text(&"x ".repeat(1000));
		let bigram: Chain<Bigram> = Chain::from_text(&"x ".repeat(1000));
		let mut rng = StdRng::seed_from_u64(5);

		let text = generate_from(&unigram, &Unigram::new("x"), 5, &mut rng);
		assert_eq!(text.split(' ').count(), 5);
		let text = generate_from(&bigram, &Bigram::new("x", "x"), 5, &mut rng);
		assert_eq!(text.split(' ').count(), 5);
	}

	#[test]
	fn walks_terminate_within_bound() {
		let unigram: Chain<Unigram> = Chain::from_text(CORPUS);
		let bigram: Chain<Bigram> = Chain::from_text(CORPUS);

		for seed in 0..50 {
			let mut rng = StdRng::seed_from_u64(seed);
			let text = generate(&unigram, 7, &mut rng);
			assert!(!text.is_empty());
			assert!(tokenize(&text).len() <= 7);

			let text = generate(&bigram, 7, &mut rng);
			assert!(!text.is_empty());
			assert!(tokenize(&text).len() <= 7);
		}
	}

	#[test]
	fn generated_words_come_from_the_corpus() {
		let vocabulary: HashSet<String> = tokenize(CORPUS).into_iter().collect();
		let unigram: Chain<Unigram> = Chain::from_text(CORPUS);
		let bigram: Chain<Bigram> = Chain::from_text(CORPUS);

		for seed in 0..50 {
			let mut rng = StdRng::seed_from_u64(seed);
			for text in [generate(&unigram, 40, &mut rng), generate(&bigram, 40, &mut rng)] {
				for word in tokenize(&text) {
					assert!(vocabulary.contains(&word), "{word} not in corpus");
				}
			}
		}
	}

	#[test]
	fn consecutive_unigram_words_are_observed_transitions() {
		let chain: Chain<Unigram> = Chain::from_text(CORPUS);
		for seed in 0..50 {
			let mut rng = StdRng::seed_from_u64(seed);
			let words = tokenize(&generate(&chain, 30, &mut rng));
			for pair in words.windows(2) {
				let transitions = chain.successors(&Unigram::new(&pair[0])).unwrap();
				assert!(transitions.count(&pair[1].as_str().into()) > 0);
			}
		}
	}

	#[test]
	fn same_seed_gives_same_walk() {
		let chain: Chain<Bigram> = Chain::from_text(CORPUS);
		let first = generate(&chain, 20, &mut StdRng::seed_from_u64(1234));
		let second = generate(&chain, 20, &mut StdRng::seed_from_u64(1234));
		assert_eq!(first, second);
	}
}
