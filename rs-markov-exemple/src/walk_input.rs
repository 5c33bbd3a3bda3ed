/// Strategy used to select the first character of a generated word.
///
/// # Variants
/// - `Random`: pick any state known to the model.
/// - `Custom(char)`: start from the given character, which must be known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StartSeed {
	Random,
	Custom(char),
}

/// Parameters of a random walk through a character model.
///
/// # Invariants
/// - `max_length` is always >= 1
#[derive(Clone, Debug)]
pub struct WalkInput {
	/// Maximum number of characters in a generated word.
	max_length: usize,

	/// Number of attempts to avoid returning a word from the corpus.
	pub nb_try: usize,

	/// How the walk picks its first character.
	pub start_seed: StartSeed,
}

impl Default for WalkInput {
	fn default() -> Self {
		Self {
			max_length: 12,
			nb_try: 0,
			start_seed: StartSeed::Random,
		}
	}
}

impl WalkInput {
	/// Returns the current length limit.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Sets the length limit.
	///
	/// # Errors
	/// Returns an error if `max_length` is 0.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<(), String> {
		if max_length == 0 {
			return Err("max_length must be >= 1".to_owned());
		}
		self.max_length = max_length;
		Ok(())
	}
}
