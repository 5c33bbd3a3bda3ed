mod generator;
mod walk_input;

use std::env;
use std::io;

use log::info;
use rs_markov_core::io::normalize_folder;
use rs_markov_core::model::MarkovModel;

use crate::generator::Generator;
use crate::walk_input::{StartSeed, WalkInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	// Corpus folder: every .dat file inside is one word per line
	let folder = env::args().nth(1).unwrap_or_else(|| "./data".to_owned());
	let generator = Generator::new(normalize_folder(&folder))?;
	info!("model has {} states", generator.model().len());

	let mut input = WalkInput::default();

	// Number of retries if the generated word is already in the corpus
	input.nb_try = 100;

	// Start from any character the model knows
	input.start_seed = StartSeed::Random;

	input.set_max_length(10)?;
	match input.set_max_length(0) {
		Ok(_) => println!("Should not happen"),
		Err(_) => println!("max_length 0 is invalid, must be >= 1"),
	}

	// Transitions learned from 'a', or a not-found notice
	generator.model().print_transition(&'a', &mut io::stdout().lock())?;

	let mut rng = rand::rng();
	for i in 0..10 {
		println!("Generated word {}: {}", i + 1, generator.predict(&input, &mut rng)?);
	}

	// A custom seed must be a character the model has transitions for
	input.start_seed = StartSeed::Custom('s');
	match generator.predict(&input, &mut rng) {
		Ok(word) => println!("Generated word from 's': {}", word),
		Err(e) => println!("{}", e),
	}

	Ok(())
}
