use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type MarkovResult<T> = Result<T, MarkovError>;

/// Errors raised by the Markov models and their I/O helpers.
///
/// Querying an unknown state is never an error (it yields an empty
/// distribution). Only sampling requires a state with outgoing mass.
#[derive(Debug, thiserror::Error)]
pub enum MarkovError {
	/// Sampling was requested from a state with no recorded transitions.
	/// Holds the `Debug` rendering of the state.
	#[error("no transitions available from state {0}")]
	NoTransitionsAvailable(String),

	#[error("expected a directory, got: {}", .0.display())]
	NotADirectory(PathBuf),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] postcard::Error),
}
