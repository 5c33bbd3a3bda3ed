use std::fs;

use rs_markov_core::io::{list_files, load_model, read_corpus_folder, save_model};
use rs_markov_core::model::{CharacterMarkovModel, MarkovChain, MarkovModel};

#[test]
fn from_file_trains_then_uses_cache() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = dir.path().join("words.dat");
	fs::write(&corpus, "hello\nfish\n\nsift\ntilt\nlot\n").unwrap();

	let trained = CharacterMarkovModel::from_file(&corpus).unwrap();
	let cache = dir.path().join("words.bin");
	assert!(cache.exists());
	assert_eq!(trained, CharacterMarkovModel::from_strings(["hello", "fish", "sift", "tilt", "lot"]));

	// The cache wins over the corpus once it exists
	fs::write(&corpus, "zz\n").unwrap();
	let cached = CharacterMarkovModel::from_file(&corpus).unwrap();
	assert_eq!(cached, trained);
	assert!(!cached.has_state(&'z'));
}

#[test]
fn from_file_missing_corpus_fails() {
	let dir = tempfile::tempdir().unwrap();
	assert!(CharacterMarkovModel::from_file(dir.path().join("missing.dat")).is_err());
}

#[test]
fn generic_chain_survives_save_and_load() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tokens.bin");

	let chain = MarkovChain::from_sequences(vec![
		vec!["the".to_owned(), "cat".to_owned(), "sat".to_owned()],
		vec!["the".to_owned(), "dog".to_owned()],
	]);
	save_model(&chain, &path).unwrap();

	let loaded: MarkovChain<String> = load_model(&path).unwrap();
	assert_eq!(loaded, chain);
	assert!((loaded.get_probability(&"the".to_owned(), &"dog".to_owned()) - 0.5).abs() < 1e-9);
}

#[test]
fn corpus_folder_concatenates_matching_files() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("a.dat"), "hello\n  \nfish\n").unwrap();
	fs::write(dir.path().join("b.dat"), " lot \n").unwrap();
	fs::write(dir.path().join("notes.txt"), "ignored\n").unwrap();

	assert_eq!(list_files(dir.path(), "dat").unwrap(), vec!["a.dat", "b.dat"]);

	let corpus = read_corpus_folder(dir.path(), "dat").unwrap();
	assert_eq!(corpus, vec!["hello", "fish", "lot"]);
}

#[test]
fn from_file_skips_whitespace_lines_like_corpus_folder() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = dir.path().join("spaced.dat");
	fs::write(&corpus, "  \n ab \n\t\ncd\n").unwrap();

	let from_file = CharacterMarkovModel::from_file(&corpus).unwrap();
	assert!(!from_file.has_state(&' '));
	assert!(!from_file.has_state(&'\t'));
	assert_eq!(from_file, CharacterMarkovModel::from_strings(["ab", "cd"]));

	let folder = read_corpus_folder(dir.path(), "dat").unwrap();
	assert_eq!(from_file, CharacterMarkovModel::from_strings(&folder));
}
