use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::markov_model::MarkovModel;
use super::matrix::ProbabilityMatrix;
use crate::error::MarkovResult;
use crate::io::{build_output_path, load_model, read_file, save_model};

/// First-order Markov model over the characters of words.
///
/// Each training string is one independent sequence of `char`s: the last
/// character of a word never transitions into the first character of the
/// next one. All queries, sampling and printing come from [`MarkovModel`]
/// and work on single characters.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CharacterMarkovModel {
	matrix: ProbabilityMatrix<char>,
}

impl CharacterMarkovModel {
	/// Creates an untrained model. Call `train_from_strings` to fill it.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a model trained on `words`.
	pub fn from_strings<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut model = Self::new();
		model.train_from_strings(words);
		model
	}

	/// Loads a model for the corpus file at `filepath`.
	///
	/// - If `<stem>.bin` exists next to the corpus, it is decoded with `postcard`.
	/// - Otherwise every line of the corpus is used as a training word, and the
	///   trained model is written to `<stem>.bin` for future fast loading.
	///
	/// # Errors
	/// Returns an error if reading the corpus or the cache fails, or if the
	/// cache cannot be encoded or written.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> MarkovResult<Self> {
		let binary_data_path = build_output_path(&filepath, "bin")?;
		if binary_data_path.exists() {
			info!("loading cached model from {}", binary_data_path.display());
			return load_model(&binary_data_path);
		}

		let lines = read_file(&filepath)?;
		let model = Self::from_strings(lines.iter().map(|line| line.trim()).filter(|line| !line.is_empty()));
		save_model(&model, &binary_data_path)?;
		info!(
			"trained {} states from {}, cached to {}",
			model.len(),
			filepath.as_ref().display(),
			binary_data_path.display()
		);
		Ok(model)
	}

	/// Explodes each word into its characters and trains on the result.
	///
	/// Replaces any previously learned matrix.
	pub fn train_from_strings<I, S>(&mut self, words: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let sequences: Vec<Vec<char>> = words
			.into_iter()
			.map(|word| word.as_ref().chars().collect())
			.collect();
		self.train(sequences);
	}
}

impl MarkovModel for CharacterMarkovModel {
	type State = char;

	fn get_matrix(&self) -> &ProbabilityMatrix<char> {
		&self.matrix
	}

	fn get_matrix_mut(&mut self) -> &mut ProbabilityMatrix<char> {
		&mut self.matrix
	}
}
