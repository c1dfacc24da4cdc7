//! Alphabet derivation and code-point aware string helpers.
//!
//! Every helper here counts `char`s, never bytes, so contexts slice correctly
//! for multi-byte alphabets.

use std::collections::BTreeSet;

/// Reserved word boundary symbol, always at index 0 of an alphabet.
pub const SENTINEL: char = '#';

/// Lowercases a training word and removes any sentinel it contains.
pub fn normalize_word(word: &str) -> String {
	word.to_lowercase().chars().filter(|c| *c != SENTINEL).collect()
}

/// Builds the alphabet of a corpus.
///
/// The unique characters of all words are sorted and the sentinel is prepended
/// at index 0. Words are expected to be normalized already.
pub fn derive_alphabet<S: AsRef<str>>(words: &[S]) -> Vec<char> {
	let letters: BTreeSet<char> = words
		.iter()
		.flat_map(|word| word.as_ref().chars())
		.filter(|c| *c != SENTINEL)
		.collect();

	let mut alphabet = Vec::with_capacity(letters.len() + 1);
	alphabet.push(SENTINEL);
	alphabet.extend(letters);
	alphabet
}

/// Pads a word as `"#" * order + word + "#"`.
pub fn pad_word(word: &str, order: usize) -> String {
	let mut padded = String::with_capacity(word.len() + order + 1);
	padded.extend(std::iter::repeat_n(SENTINEL, order));
	padded.push_str(word);
	padded.push(SENTINEL);
	padded
}

/// Returns the last `n` characters of a string.
///
/// If `n` is greater than the number of characters in `s`, the entire string
/// is returned.
pub fn last_n_chars(s: &str, n: usize) -> &str {
	if n == 0 {
		return "";
	}
	match s.char_indices().rev().nth(n - 1) {
		Some((index, _)) => &s[index..],
		None => s,
	}
}

/// Drops the leftmost character.
pub fn drop_first_char(s: &str) -> &str {
	let mut chars = s.chars();
	chars.next();
	chars.as_str()
}

/// Removes every sentinel from a generated word.
pub fn strip_sentinels(s: &str) -> String {
	s.chars().filter(|c| *c != SENTINEL).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn alphabet_is_sorted_unique_with_sentinel_first() {
		let alphabet = derive_alphabet(&["ann", "bob", "nab"]);
		assert_eq!(alphabet, vec!['#', 'a', 'b', 'n', 'o']);
	}

	#[test]
	fn alphabet_of_empty_corpus_is_just_the_sentinel() {
		let words: [&str; 0] = [];
		assert_eq!(derive_alphabet(&words), vec![SENTINEL]);
		assert_eq!(derive_alphabet(&[""]), vec![SENTINEL]);
	}

	#[test]
	fn alphabet_never_repeats_the_sentinel() {
		let alphabet = derive_alphabet(&["a#b"]);
		assert_eq!(alphabet, vec!['#', 'a', 'b']);
	}

	#[test]
	fn normalize_lowercases_and_strips_sentinel() {
		assert_eq!(normalize_word("An#Na"), "anna");
		assert_eq!(normalize_word("ÉLODIE"), "élodie");
	}

	#[test]
	fn pad_word_surrounds_with_sentinels() {
		assert_eq!(pad_word("ann", 2), "##ann#");
		assert_eq!(pad_word("", 1), "##");
	}

	#[test]
	fn last_n_chars_counts_code_points() {
		assert_eq!(last_n_chars("##ann", 2), "nn");
		assert_eq!(last_n_chars("héé", 2), "éé");
		assert_eq!(last_n_chars("ab", 5), "ab");
		assert_eq!(last_n_chars("ab", 0), "");
	}

	#[test]
	fn drop_first_char_handles_multibyte() {
		assert_eq!(drop_first_char("éab"), "ab");
		assert_eq!(drop_first_char("a"), "");
		assert_eq!(drop_first_char(""), "");
	}

	#[test]
	fn strip_sentinels_removes_all_padding() {
		assert_eq!(strip_sentinels("###ann"), "ann");
		assert_eq!(strip_sentinels("##"), "");
	}
}
