use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::io::{self, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::matrix::{self, ProbabilityMatrix};
use crate::error::MarkovResult;

/// Common interface of first-order Markov models.
///
/// Implementors only own a `ProbabilityMatrix` and expose it through
/// `get_matrix` / `get_matrix_mut`; every other operation is provided and
/// delegates to the free functions of [`matrix`].
///
/// A model is either untrained (empty matrix, the state right after
/// construction) or trained by its most recent `train` call. Training
/// never merges: it recomputes the whole matrix from the given sequences.
pub trait MarkovModel {
	/// Type of a single state (character, token, custom symbol...).
	type State: Clone + Eq + Hash;

	/// Read-only view of the transition matrix, without copying it.
	fn get_matrix(&self) -> &ProbabilityMatrix<Self::State>;

	/// Mutable access for implementors. Prefer `train` and `clear`.
	fn get_matrix_mut(&mut self) -> &mut ProbabilityMatrix<Self::State>;

	/// Trains the model, replacing any previously learned matrix.
	fn train<I, S>(&mut self, sequences: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<[Self::State]>,
	{
		*self.get_matrix_mut() = matrix::generate_probability_matrix(sequences);
	}

	/// Returns `true` if `state` was observed as a "from" state.
	fn has_state(&self, state: &Self::State) -> bool {
		matrix::has_state(self.get_matrix(), state)
	}

	/// Successor distribution of `state`, empty if unknown.
	fn get_transition(&self, state: &Self::State) -> Cow<'_, HashMap<Self::State, f64>> {
		matrix::get_transitions(self.get_matrix(), state)
	}

	/// Probability of the transition `from -> to`, 0.0 if never observed.
	fn get_probability(&self, from: &Self::State, to: &Self::State) -> f64 {
		matrix::get_probability(self.get_matrix(), from, to)
	}

	/// Every "from" state of the model, in no particular order.
	fn get_all_states(&self) -> Vec<Self::State> {
		matrix::get_states(self.get_matrix())
	}

	/// Samples the next state with the thread-local random generator.
	///
	/// # Errors
	/// Returns `MarkovError::NoTransitionsAvailable` if `state` has no
	/// recorded successor.
	fn sample_next_state(&self, state: &Self::State) -> MarkovResult<Self::State>
	where
		Self::State: Debug,
	{
		self.sample_next_state_with(state, &mut rand::rng())
	}

	/// Samples the next state with a caller-supplied random generator.
	fn sample_next_state_with<R>(&self, state: &Self::State, rng: &mut R) -> MarkovResult<Self::State>
	where
		Self::State: Debug,
		R: Rng + ?Sized,
	{
		matrix::sample_next_state(self.get_matrix(), state, rng)
	}

	/// Prints the whole transition matrix.
	fn print<W: Write + ?Sized>(&self, os: &mut W) -> io::Result<()>
	where
		Self::State: Display,
	{
		matrix::print_probability_matrix(self.get_matrix(), os)
	}

	/// Prints the successors of a single state.
	///
	/// Unknown states are reported as `State <x> not found in model.`
	/// rather than as an error.
	fn print_transition<W: Write + ?Sized>(&self, state: &Self::State, os: &mut W) -> io::Result<()>
	where
		Self::State: Display,
	{
		match self.get_matrix().get(state) {
			Some(transitions) => matrix::print_transition(state, transitions, os),
			None => writeln!(os, "State {state} not found in model."),
		}
	}

	/// Forgets everything learned; the model becomes untrained.
	fn clear(&mut self) {
		matrix::clear_matrix(self.get_matrix_mut());
	}

	/// Returns `true` once a training call produced at least one transition.
	fn is_trained(&self) -> bool {
		!self.get_matrix().is_empty()
	}

	/// Number of "from" states.
	fn len(&self) -> usize {
		self.get_matrix().len()
	}
}

/// First-order Markov model over an arbitrary hashable state type.
///
/// # Example
/// ```
/// use rs_markov_core::model::markov_model::{MarkovChain, MarkovModel};
///
/// let chain = MarkovChain::from_sequences(vec![vec!["go", "stop"], vec!["go", "wait"]]);
/// assert!(chain.has_state(&"go"));
/// assert!((chain.get_probability(&"go", &"stop") - 0.5).abs() < 1e-9);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(bound(
	serialize = "T: Serialize + Eq + Hash",
	deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct MarkovChain<T> {
	matrix: ProbabilityMatrix<T>,
}

impl<T> Default for MarkovChain<T> {
	fn default() -> Self {
		Self { matrix: HashMap::new() }
	}
}

impl<T: Eq + Hash> PartialEq for MarkovChain<T> {
	fn eq(&self, other: &Self) -> bool {
		self.matrix == other.matrix
	}
}

impl<T: Clone + Eq + Hash> MarkovChain<T> {
	/// Creates an untrained model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a model and trains it on `sequences`.
	pub fn from_sequences<I, S>(sequences: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<[T]>,
	{
		let mut model = Self::new();
		model.train(sequences);
		model
	}
}

impl<T: Clone + Eq + Hash> MarkovModel for MarkovChain<T> {
	type State = T;

	fn get_matrix(&self) -> &ProbabilityMatrix<T> {
		&self.matrix
	}

	fn get_matrix_mut(&mut self) -> &mut ProbabilityMatrix<T> {
		&mut self.matrix
	}
}

impl<T: Clone + Eq + Hash + Display> Display for MarkovChain<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut buffer = Vec::new();
		self.print(&mut buffer).map_err(|_| fmt::Error)?;
		f.write_str(&String::from_utf8_lossy(&buffer))
	}
}
