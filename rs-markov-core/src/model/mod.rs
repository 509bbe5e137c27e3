//! Word-level Markov chains and text generation.
//!
//! This module provides:
//! - State types for order-1 (`Unigram`) and order-2 (`Bigram`) chains
//! - The chain table (`Chain`) and its per-state successors (`Transitions`)
//! - The random walk producing bounded text (`walk`)
//! - A high-level generator choosing the order at runtime (`Generator`)

/// Chain table mapping each state to its observed successors.
pub mod chain;

/// High-level generator owning a chain of the configured order.
pub mod generator;

/// Generation parameters (chain order, word bound, optional seed).
pub mod generation_input;

/// Lookup keys of the chain and their per-order transition function.
pub mod state;

/// A word or the end-of-text sentinel.
pub mod successor;

/// Successor multiset of a single state.
pub mod transitions;

/// Random walk over a chain.
pub mod walk;
