use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{MarkovError, MarkovResult};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/words.dat` + `"bin"` → `data/words.bin`
pub fn build_output_path<P: AsRef<Path>>(input_path: P, output_extension: &str) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Reads every `extension` file of `dir` and returns their non-blank lines.
///
/// Lines are trimmed; files are read in name order.
///
/// # Errors
/// Returns `MarkovError::NotADirectory` if `dir` is not a directory, or an
/// I/O error if a file cannot be read.
pub fn read_corpus_folder<P: AsRef<Path>>(dir: P, extension: &str) -> MarkovResult<Vec<String>> {
	let dir = dir.as_ref();
	if !dir.is_dir() {
		return Err(MarkovError::NotADirectory(dir.to_path_buf()));
	}

	let mut corpus = Vec::new();
	for file in list_files(dir, extension)? {
		let lines = read_file(dir.join(&file))?;
		debug!("read {} lines from {}", lines.len(), file);
		corpus.extend(
			lines
				.iter()
				.map(|line| line.trim())
				.filter(|line| !line.is_empty())
				.map(str::to_owned),
		);
	}

	Ok(corpus)
}

/// Encodes a model with `postcard` and writes it to `path`.
pub fn save_model<M, P>(model: &M, path: P) -> MarkovResult<()>
where
	M: Serialize,
	P: AsRef<Path>,
{
	let bytes = postcard::to_stdvec(model)?;
	fs::write(&path, &bytes)?;
	debug!("wrote {} bytes to {}", bytes.len(), path.as_ref().display());
	Ok(())
}

/// Reads and decodes a model previously written by [`save_model`].
pub fn load_model<M, P>(path: P) -> MarkovResult<M>
where
	M: DeserializeOwned,
	P: AsRef<Path>,
{
	let bytes = fs::read(path)?;
	Ok(postcard::from_bytes(&bytes)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn output_path_swaps_extension() {
		let output = build_output_path("data/words.dat", "bin").unwrap();
		assert_eq!(output, PathBuf::from("data/words.bin"));
	}

	#[test]
	fn output_path_without_parent() {
		let output = build_output_path("words.dat", "bin").unwrap();
		assert_eq!(output, PathBuf::from("words.bin"));
	}

	#[test]
	fn normalize_keeps_other_paths() {
		assert_eq!(normalize_folder("data"), PathBuf::from("data"));
		assert!(normalize_folder(".").is_absolute());
	}

	#[test]
	fn corpus_folder_must_be_a_directory() {
		let result = read_corpus_folder("this/path/does/not/exist", "dat");
		assert!(matches!(result, Err(MarkovError::NotADirectory(_))));
	}
}
