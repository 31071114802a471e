use std::io;
use thiserror::Error;

/// Errors reported by the engine, the controller, and the terminal front-end.
#[derive(Debug, Error)]
pub enum Error {
	/// There is nothing to sort.
	#[error("sequence is empty")]
	EmptySequence,
	/// More values were asked for than fit into `u32`.
	#[error("sequence of {0} values exceeds u32")]
	TooLong(usize),
	/// The algorithm selector names no known algorithm.
	#[error("unknown algorithm `{0}` (expected one of insertion, bubble, selection, merge, quick)")]
	UnknownAlgorithm(String),
	/// Drawing to or reading from the terminal failed.
	#[error("terminal error: {0}")]
	Terminal(#[from] io::Error),
}

/// Result type with [`Error`] as its error.
pub type Result<T> = core::result::Result<T, Error>;
