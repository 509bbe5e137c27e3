//! Error type shared by the chain configuration layer.
//!
//! Building a chain and walking it never fail: the only errors come from
//! turning user input into a valid configuration.

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = ChainError> = std::result::Result<T, E>;

/// Failure to interpret a chain configuration value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
	/// The requested order is a number, but not one of the supported orders.
	#[error("unsupported chain order {0}, expected 1 or 2")]
	UnsupportedOrder(usize),
	/// The requested order could not be read as a number at all.
	#[error("invalid chain order '{0}', expected 1 or 2")]
	InvalidOrder(String),
}
