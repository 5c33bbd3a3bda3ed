use std::collections::HashMap;
use std::hash::Hash;

/// Outgoing transition counts observed for a single "from" state.
///
/// A `StateCounts` is the counting half of a training pass: every time the
/// state is directly followed by another one in a sequence, the successor's
/// occurrence count is increased. Once all sequences have been scanned the
/// counts are normalized into probabilities and the accumulator is dropped.
///
/// ## Invariants
/// - Each recorded occurrence count is strictly positive
/// - `total` always equals the sum of all occurrence counts
#[derive(Clone, Debug)]
pub(crate) struct StateCounts<T> {
	/// Occurrences indexed by the successor state.
	/// Example: { 'b' => 2, 'c' => 1 }
	transitions: HashMap<T, usize>,
	total: usize,
}

impl<T: Eq + Hash> StateCounts<T> {
	/// Creates an empty accumulator.
	pub(crate) fn new() -> Self {
		Self {
			transitions: HashMap::new(),
			total: 0,
		}
	}

	/// Records one occurrence of a transition toward `next`.
	pub(crate) fn add_transition(&mut self, next: T) {
		*self.transitions.entry(next).or_insert(0) += 1;
		self.total += 1;
	}

	/// Total number of outgoing transitions recorded.
	pub(crate) fn total(&self) -> usize {
		self.total
	}

	/// Consumes the counts and returns each successor's share of the total.
	///
	/// Returns an empty map when nothing was recorded.
	pub(crate) fn into_probabilities(self) -> HashMap<T, f64> {
		if self.total() == 0 {
			return HashMap::new();
		}

		let total = self.total() as f64;
		self.transitions
			.into_iter()
			.map(|(next, occurrence)| (next, occurrence as f64 / total))
			.collect()
	}
}
