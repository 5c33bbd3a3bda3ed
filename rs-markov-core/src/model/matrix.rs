use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::{self, Write};

use log::{debug, trace};
use rand::Rng;

use super::state::StateCounts;
use crate::error::{MarkovError, MarkovResult};

/// Transition probability matrix.
///
/// Maps a "from" state to the distribution of its observed successors.
/// Every row sums to 1.0 (within floating point tolerance). A state that was
/// only ever observed as the last element of a sequence has no row.
pub type ProbabilityMatrix<T> = HashMap<T, HashMap<T, f64>>;

/// Builds a probability matrix from a batch of sequences.
///
/// Every adjacent pair `(seq[i], seq[i + 1])` counts as one observed
/// transition. Counts are then normalized per "from" state.
///
/// # Notes
/// - Sequences with fewer than two elements contribute nothing.
/// - Sequences are independent: the last state of one sequence never
///   transitions into the first state of the next.
/// - An empty batch yields an empty matrix.
pub fn generate_probability_matrix<T, I, S>(sequences: I) -> ProbabilityMatrix<T>
where
	T: Clone + Eq + Hash,
	I: IntoIterator<Item = S>,
	S: AsRef<[T]>,
{
	let mut count_matrix: HashMap<T, StateCounts<T>> = HashMap::new();
	let mut nb_sequences = 0usize;
	let mut nb_transitions = 0usize;

	for sequence in sequences {
		nb_sequences += 1;
		for pair in sequence.as_ref().windows(2) {
			count_matrix
				.entry(pair[0].clone())
				.or_insert_with(StateCounts::new)
				.add_transition(pair[1].clone());
			nb_transitions += 1;
		}
	}

	debug!(
		"built probability matrix from {} sequences ({} transitions, {} states)",
		nb_sequences,
		nb_transitions,
		count_matrix.len()
	);

	count_matrix
		.into_iter()
		.map(|(state, counts)| (state, counts.into_probabilities()))
		.collect()
}

/// Returns the successor distribution of `state`.
///
/// An unknown state yields an empty (owned) map rather than an error:
/// callers treat it as a terminal state.
pub fn get_transitions<'a, T>(matrix: &'a ProbabilityMatrix<T>, state: &T) -> Cow<'a, HashMap<T, f64>>
where
	T: Clone + Eq + Hash,
{
	match matrix.get(state) {
		Some(transitions) => Cow::Borrowed(transitions),
		None => Cow::Owned(HashMap::new()),
	}
}

/// Probability of moving from `from` to `to`, 0.0 if never observed.
pub fn get_probability<T: Eq + Hash>(matrix: &ProbabilityMatrix<T>, from: &T, to: &T) -> f64 {
	matrix
		.get(from)
		.and_then(|transitions| transitions.get(to))
		.copied()
		.unwrap_or(0.0)
}

/// Returns `true` if `state` has a row in the matrix.
///
/// States that only appear as successors are not reported.
pub fn has_state<T: Eq + Hash>(matrix: &ProbabilityMatrix<T>, state: &T) -> bool {
	matrix.contains_key(state)
}

/// Returns every "from" state of the matrix, in no particular order.
pub fn get_states<T: Clone>(matrix: &ProbabilityMatrix<T>) -> Vec<T> {
	matrix.keys().cloned().collect()
}

/// Draws the successor of `state` using its probabilities as weights.
///
/// This method performs:
/// - an O(n) scan over the successors to compute the total mass
/// - a cumulative subtraction to select a bucket
///
/// # Errors
/// Returns `MarkovError::NoTransitionsAvailable` if `state` has no row or
/// its row carries no probability mass.
pub fn sample_next_state<T, R>(matrix: &ProbabilityMatrix<T>, state: &T, rng: &mut R) -> MarkovResult<T>
where
	T: Clone + Eq + Hash + Debug,
	R: Rng + ?Sized,
{
	let no_transitions = || MarkovError::NoTransitionsAvailable(format!("{state:?}"));

	let transitions = matrix.get(state).ok_or_else(no_transitions)?;
	let total: f64 = transitions.values().sum();
	if !total.is_finite() || total <= 0.0 {
		return Err(no_transitions());
	}

	let mut r = rng.random_range(0.0..total);

	let mut fallback: Option<&T> = None;
	for (next, probability) in transitions {
		if r < *probability {
			trace!("sampled {:?} -> {:?}", state, next);
			return Ok(next.clone());
		}
		r -= probability;
		if *probability > 0.0 {
			fallback = Some(next);
		}
	}

	// Rounding can leave `r` marginally above the last bucket
	fallback.cloned().ok_or_else(no_transitions)
}

/// Writes `"<state> -> { <to>: <p>, ... }"` followed by a newline.
///
/// Successors are sorted by their rendered text so the output is stable.
pub fn print_transition<T, W>(state: &T, transitions: &HashMap<T, f64>, os: &mut W) -> io::Result<()>
where
	T: Display,
	W: Write + ?Sized,
{
	let mut successors: Vec<(String, f64)> = transitions
		.iter()
		.map(|(next, probability)| (next.to_string(), *probability))
		.collect();
	successors.sort_by(|a, b| a.0.cmp(&b.0));

	if successors.is_empty() {
		return writeln!(os, "{state} -> {{ }}");
	}

	let body = successors
		.iter()
		.map(|(next, probability)| format!("{next}: {probability}"))
		.collect::<Vec<_>>()
		.join(", ");
	writeln!(os, "{state} -> {{ {body} }}")
}

/// Writes one line per "from" state, sorted by rendered text.
pub fn print_probability_matrix<T, W>(matrix: &ProbabilityMatrix<T>, os: &mut W) -> io::Result<()>
where
	T: Display,
	W: Write + ?Sized,
{
	let mut rows: Vec<(String, &T, &HashMap<T, f64>)> = matrix
		.iter()
		.map(|(state, transitions)| (state.to_string(), state, transitions))
		.collect();
	rows.sort_by(|a, b| a.0.cmp(&b.0));

	for (_, state, transitions) in rows {
		print_transition(state, transitions, os)?;
	}
	Ok(())
}

/// Removes every row from the matrix.
pub fn clear_matrix<T>(matrix: &mut ProbabilityMatrix<T>) {
	matrix.clear();
}
