use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, io};

/// Reads a word list file, one word per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Trims every line and drops the blank ones
pub(crate) fn read_words<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Builds the path of a file living in `folder`.
///
/// Example:
/// `data/` + `"nouns"` + `"dat"` → `data/nouns.dat`
pub(crate) fn build_input_path<P: AsRef<Path>>(folder: P, file_stem: &str, extension: &str) -> PathBuf {
	let mut path = folder.as_ref().join(file_stem);
	path.set_extension(extension);
	path
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}
