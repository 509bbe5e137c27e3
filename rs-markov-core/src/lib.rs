//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - A whitespace tokenizer producing exact word tokens
//! - Order-1 and order-2 chain tables built from a corpus
//! - Bounded random-walk generation with an injectable RNG
//!
//! The crate performs no I/O: callers hand it corpus text and get text back.
//!
//! ```
//! use rs_markov_core::{GenerationInput, Generator};
//!
//! let generator = Generator::new("the cat in the hat", &GenerationInput::default());
//! let text = generator.generate();
//! assert!(text.split(' ').count() <= 100);
//! ```

/// Error type for configuration values.
pub mod error;

/// Markov chains, states, and generation.
pub mod model;

/// Splitting raw text into word tokens.
pub mod tokenizer;

pub use error::{ChainError, Result};
pub use model::chain::Chain;
pub use model::generation_input::{ChainOrder, DEFAULT_MAX_WORDS, GenerationInput};
pub use model::generator::Generator;
pub use model::state::{Bigram, State, Unigram};
pub use model::successor::Successor;
pub use model::transitions::Transitions;
pub use model::walk::{generate, generate_from};
pub use tokenizer::tokenize;
