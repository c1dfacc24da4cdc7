use std::collections::HashMap;
use std::path::Path;

use log::info;

use crate::config::ModelSettings;
use crate::error::{NamegenError, Result};
use crate::io;
use crate::model::name_generator::NameGenerator;
use crate::random::RandomSource;

/// High-level generator managing one [`NameGenerator`] per corpus.
///
/// # Responsibilities
/// - Load every `.txt` word list of a directory as a named corpus
/// - Train each corpus with the same `ModelSettings`
/// - Route name generation to a corpus by name
/// - Replace a corpus wholesale on retrain
#[derive(Debug)]
pub struct Generator {
	settings: ModelSettings,
	corpora: HashMap<String, NameGenerator>,
}

impl Generator {
	/// Creates an empty generator.
	pub fn new(settings: ModelSettings) -> Self {
		Self { settings, corpora: HashMap::new() }
	}

	/// Creates a generator by loading all `.txt` corpora from a directory.
	///
	/// Both `"folder"` and `"folder/"` are accepted; subdirectories are ignored.
	/// The corpus name is the file name without extension.
	///
	/// # Errors
	/// - The path does not exist or is not a directory
	/// - A corpus fails to load or holds no words
	pub fn from_folder<P: AsRef<Path>>(filepath: P, settings: ModelSettings) -> Result<Self> {
		let string_path = filepath
			.as_ref()
			.to_str()
			.ok_or_else(|| NamegenError::InvalidPath(filepath.as_ref().display().to_string()))?;
		let folder = io::normalize_folder(string_path);

		if !folder.is_dir() {
			return Err(NamegenError::InvalidPath(format!("expected a directory, got: {}", folder.display())));
		}

		let mut generator = Self::new(settings);
		for file in io::list_files(&folder, "txt")? {
			generator.load_corpus(folder.join(&file))?;
		}

		Ok(generator)
	}

	/// Loads a single word list; its name is the file stem.
	pub fn load_corpus<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		let name = io::get_filename(&filepath)?;
		let words = io::read_corpus(&filepath)?;
		info!("loaded corpus '{}' ({} words)", name, words.len());
		self.insert(&name, &words)
	}

	/// Trains `words` as corpus `name`, replacing any corpus of that name.
	///
	/// # Errors
	/// Returns an error if `words` is empty.
	pub fn insert<S: AsRef<str>>(&mut self, name: &str, words: &[S]) -> Result<()> {
		if words.iter().all(|w| w.as_ref().trim().is_empty()) {
			return Err(NamegenError::EmptyCorpus(name.to_owned()));
		}
		let generator = NameGenerator::from_settings(words, &self.settings);
		self.corpora.insert(name.to_owned(), generator);
		Ok(())
	}

	/// Retrains an existing corpus on new words.
	///
	/// The corpus is rebuilt from scratch and swapped in; nothing of the
	/// previous training survives.
	pub fn retrain<S: AsRef<str>>(&mut self, name: &str, words: &[S]) -> Result<()> {
		if !self.corpora.contains_key(name) {
			return Err(NamegenError::UnknownCorpus(name.to_owned()));
		}
		self.insert(name, words)
	}

	/// Returns the loaded corpus names, sorted.
	pub fn corpus_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.corpora.keys().cloned().collect();
		names.sort();
		names
	}

	pub fn settings(&self) -> &ModelSettings {
		&self.settings
	}

	pub fn get(&self, name: &str) -> Option<&NameGenerator> {
		self.corpora.get(name)
	}

	/// Generates a name from corpus `name`.
	///
	/// # Errors
	/// Returns an error if the corpus is not loaded.
	pub fn generate_name<R: RandomSource + ?Sized>(
		&self,
		name: &str,
		min_length: usize,
		max_length: usize,
		rng: &mut R,
	) -> Result<String> {
		let generator = self
			.corpora
			.get(name)
			.ok_or_else(|| NamegenError::UnknownCorpus(name.to_owned()))?;
		Ok(generator.generate_name(min_length, max_length, rng))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::testing::Fixed;
	use std::fs;

	fn degenerate() -> ModelSettings {
		ModelSettings { order: 2, prior: 0.0, backoff: false }
	}

	#[test]
	fn loads_every_txt_file_of_a_folder() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("dwarves.txt"), "Gimli\nGloin\n").unwrap();
		fs::write(dir.path().join("elves.txt"), "Legolas\nElrond\n").unwrap();
		fs::write(dir.path().join("notes.md"), "ignored").unwrap();

		let generator = Generator::from_folder(dir.path(), degenerate()).unwrap();
		assert_eq!(generator.corpus_names(), vec!["dwarves", "elves"]);
	}

	#[test]
	fn missing_folder_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let result = Generator::from_folder(dir.path().join("nope"), degenerate());
		assert!(matches!(result, Err(NamegenError::InvalidPath(_))));
	}

	#[test]
	fn empty_corpus_file_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("empty.txt"), "\n  \n").unwrap();
		let result = Generator::from_folder(dir.path(), degenerate());
		assert!(matches!(result, Err(NamegenError::EmptyCorpus(name)) if name == "empty"));
	}

	#[test]
	fn generates_from_named_corpus() {
		let mut generator = Generator::new(degenerate());
		generator.insert("ann", &["ann"]).unwrap();
		assert_eq!(generator.generate_name("ann", 1, 10, &mut Fixed(0.2)).unwrap(), "ann");
	}

	#[test]
	fn unknown_corpus_is_an_error() {
		let generator = Generator::new(degenerate());
		let result = generator.generate_name("orcs", 1, 10, &mut Fixed(0.2));
		assert!(matches!(result, Err(NamegenError::UnknownCorpus(name)) if name == "orcs"));
	}

	#[test]
	fn retrain_swaps_the_corpus() {
		let mut generator = Generator::new(degenerate());
		generator.insert("names", &["ann"]).unwrap();
		generator.retrain("names", &["bob"]).unwrap();

		assert_eq!(generator.generate_name("names", 1, 10, &mut Fixed(0.7)).unwrap(), "bob");
		let model = &generator.get("names").unwrap().ensemble().models()[0];
		assert_eq!(model.chain("#a"), None);
	}

	#[test]
	fn retrain_requires_a_loaded_corpus() {
		let mut generator = Generator::new(degenerate());
		assert!(matches!(
			generator.retrain("names", &["bob"]),
			Err(NamegenError::UnknownCorpus(_))
		));
	}
}
