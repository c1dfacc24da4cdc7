use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a word list: one word per line.
///
/// - Reads the entire file into memory
/// - Trims surrounding whitespace of each line
/// - Skips blank lines
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let contents = fs::read_to_string(filename)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/elves.txt"` → `"elves"`
/// - `"elves.txt"` → `"elves"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
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

/// Lists the stems of all files with a given extension in a directory.
///
/// `"a.b.txt"` gives `"a.b"`: only the final extension is removed.
pub fn list_stems<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	list_files(dir, extension)?
		.iter()
		.map(get_filename)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn corpus_skips_blank_lines_and_trims() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("names.txt");
		fs::write(&path, "Anna\r\n\n  bob \n\t\ncarla").unwrap();
		assert_eq!(read_corpus(&path).unwrap(), vec!["Anna", "bob", "carla"]);
	}

	#[test]
	fn missing_corpus_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		assert!(read_corpus(dir.path().join("nope.txt")).is_err());
	}

	#[test]
	fn filename_drops_folder_and_extension() {
		assert_eq!(get_filename("./data/elves.txt").unwrap(), "elves");
		assert_eq!(get_filename("elves.txt").unwrap(), "elves");
		assert!(get_filename("/").is_err());
	}

	#[test]
	fn list_files_filters_by_extension() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "x").unwrap();
		fs::write(dir.path().join("a.txt"), "x").unwrap();
		fs::write(dir.path().join("c.toml"), "x").unwrap();
		fs::create_dir(dir.path().join("d.txt")).unwrap();
		assert_eq!(list_files(dir.path(), "txt").unwrap(), vec!["a.txt", "b.txt"]);
	}

	#[test]
	fn stems_keep_inner_dots() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("elves.txt"), "x").unwrap();
		fs::write(dir.path().join("old.txt.names.txt"), "x").unwrap();
		fs::write(dir.path().join("notes.md"), "x").unwrap();
		assert_eq!(list_stems(dir.path(), "txt").unwrap(), vec!["elves", "old.txt.names"]);
	}

	#[test]
	fn dot_folder_is_current_dir() {
		assert_eq!(normalize_folder("."), env::current_dir().unwrap());
		assert_eq!(normalize_folder("data"), PathBuf::from("data"));
	}
}
