//! Top-level module for the Markov models.
//!
//! This module provides:
//! - The transition probability matrix and its free functions (`matrix`)
//! - The `MarkovModel` trait and the generic `MarkovChain<T>` (`markov_model`)
//! - A character-level model trained from strings (`character_model`)

/// Probability matrix construction, queries, sampling and printing.
///
/// Pure functions over `ProbabilityMatrix<T>`; the models delegate here.
pub mod matrix;

/// Object-oriented facade over `matrix`.
///
/// Defines the `MarkovModel` trait and its generic implementor.
pub mod markov_model;

/// Markov model over the characters of words.
pub mod character_model;

/// Per-state transition counting used while building a matrix.
///
/// Not exposed publicly.
mod state;

pub use character_model::CharacterMarkovModel;
pub use markov_model::{MarkovChain, MarkovModel};
pub use matrix::ProbabilityMatrix;
