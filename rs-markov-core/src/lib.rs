//! Generic first-order Markov chain library.
//!
//! This crate provides:
//! - Transition probability matrices built from observed sequences
//! - A `MarkovModel` trait exposing query, sampling and printing helpers
//! - A generic `MarkovChain<T>` model over any hashable state type
//! - A character-level model trained directly from strings
//! - Corpus loading and binary persistence helpers
//!
//! Models are plain owned values: there is no global registry and no
//! internal synchronization.

/// Transition matrices, the model trait and its implementations.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (corpus loading, path helpers, model persistence).
pub mod io;

pub use error::{MarkovError, MarkovResult};
