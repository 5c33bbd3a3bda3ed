use std::collections::HashSet;
use std::path::Path;

use log::{debug, info};
use rand::Rng;
use rand::seq::IteratorRandom;

use rs_markov_core::MarkovError;
use rs_markov_core::io::read_corpus_folder;
use rs_markov_core::model::{CharacterMarkovModel, MarkovModel};

use crate::walk_input::{StartSeed, WalkInput};

/// Word generator walking a character model.
///
/// # Responsibilities
/// - Build a `CharacterMarkovModel` from a corpus
/// - Produce words by repeated sampling, one character at a time
/// - Avoid returning words that already exist in the corpus
#[derive(Debug)]
pub struct Generator {
	model: CharacterMarkovModel,
	/// Lowercased training words, used for duplicate detection.
	words: HashSet<String>,
}

impl Generator {
	/// Creates a generator from every `.dat` file of a directory.
	///
	/// # Errors
	/// Returns an error if the path is not a directory or a file cannot be read.
	pub fn new<P: AsRef<Path>>(folder: P) -> Result<Self, MarkovError> {
		let corpus = read_corpus_folder(&folder, "dat")?;
		info!("loaded {} words from {}", corpus.len(), folder.as_ref().display());
		Ok(Self::from_corpus(corpus))
	}

	/// Creates a generator trained on `corpus`.
	pub fn from_corpus(corpus: Vec<String>) -> Self {
		let model = CharacterMarkovModel::from_strings(&corpus);
		let words = corpus.iter().map(|word| word.to_lowercase()).collect();
		Self { model, words }
	}

	/// Read-only access to the underlying model.
	pub fn model(&self) -> &CharacterMarkovModel {
		&self.model
	}

	/// Picks the first character of a walk.
	fn start_state<R: Rng + ?Sized>(&self, seed: StartSeed, rng: &mut R) -> Result<char, String> {
		match seed {
			StartSeed::Random => self
				.model
				.get_matrix()
				.keys()
				.choose(rng)
				.copied()
				.ok_or_else(|| "No states available for generation".to_owned()),
			StartSeed::Custom(c) if self.model.has_state(&c) => Ok(c),
			StartSeed::Custom(c) => Err(format!("Seed {c:?} is not a known state")),
		}
	}

	/// Performs a single walk.
	///
	/// Stops at `max_length` characters or on a state with no successor.
	fn internal_predict<R: Rng + ?Sized>(&self, input: &WalkInput, rng: &mut R) -> Result<String, String> {
		let mut current = self.start_state(input.start_seed, rng)?;
		let mut word = String::from(current);
		let mut length = 1;

		while length < input.max_length() {
			match self.model.sample_next_state_with(&current, rng) {
				Ok(next) => {
					word.push(next);
					current = next;
					length += 1;
				}
				Err(MarkovError::NoTransitionsAvailable(_)) => break,
				Err(e) => return Err(e.to_string()),
			}
		}

		Ok(word)
	}

	/// Generates a word, retrying up to `nb_try` times on corpus duplicates.
	///
	/// Returns the last attempt if every try produced a known word.
	pub fn predict<R: Rng + ?Sized>(&self, input: &WalkInput, rng: &mut R) -> Result<String, String> {
		let mut word = self.internal_predict(input, rng)?;
		let mut nb_try = input.nb_try;

		while nb_try > 0 && self.words.contains(&word.to_lowercase()) {
			debug!("{} already in corpus, retrying", word);
			word = self.internal_predict(input, rng)?;
			nb_try -= 1;
		}

		Ok(word)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn generator() -> Generator {
		let corpus = ["hello", "fish", "sift", "tilt", "lot"];
		Generator::from_corpus(corpus.iter().map(|w| w.to_string()).collect())
	}

	#[test]
	fn walks_only_follow_learned_transitions() {
		let generator = generator();
		let mut rng = StdRng::seed_from_u64(42);
		let mut input = WalkInput::default();
		input.set_max_length(8).unwrap();

		for _ in 0..50 {
			let word = generator.predict(&input, &mut rng).unwrap();
			let chars: Vec<char> = word.chars().collect();
			assert!(!chars.is_empty() && chars.len() <= 8);
			for pair in chars.windows(2) {
				assert!(generator.model().get_probability(&pair[0], &pair[1]) > 0.0, "{word}");
			}
		}
	}

	#[test]
	fn custom_seed_starts_the_word() {
		let generator = generator();
		let mut rng = StdRng::seed_from_u64(1);
		let mut input = WalkInput::default();
		input.start_seed = StartSeed::Custom('h');

		// 'h' -> 'e' -> 'l' is forced
		let word = generator.predict(&input, &mut rng).unwrap();
		assert!(word.starts_with("hel"), "{word}");
	}

	#[test]
	fn walk_stops_at_terminal_state() {
		let generator = Generator::from_corpus(vec!["ab".to_owned()]);
		let mut rng = StdRng::seed_from_u64(0);
		let mut input = WalkInput::default();
		input.start_seed = StartSeed::Custom('a');

		assert_eq!(generator.predict(&input, &mut rng).unwrap(), "ab");
	}

	#[test]
	fn unknown_seed_is_an_error() {
		let generator = generator();
		let mut rng = StdRng::seed_from_u64(0);
		let mut input = WalkInput::default();
		input.start_seed = StartSeed::Custom('z');

		assert!(generator.predict(&input, &mut rng).is_err());
	}

	#[test]
	fn empty_corpus_cannot_generate() {
		let generator = Generator::from_corpus(Vec::new());
		let mut rng = StdRng::seed_from_u64(0);

		assert!(generator.predict(&WalkInput::default(), &mut rng).is_err());
	}
}
