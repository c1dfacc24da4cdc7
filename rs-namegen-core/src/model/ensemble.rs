use log::debug;

use super::alphabet::{SENTINEL, derive_alphabet, drop_first_char, last_n_chars, normalize_word};
use super::chain_model::{ChainModel, clamp_prior};
use crate::random::RandomSource;

/// A stack of [`ChainModel`]s of decreasing order sharing one alphabet.
///
/// Generators of order `n` look back up to `n` characters when choosing the
/// next one. With back-off enabled, models of order `n` down to `1` are kept
/// (highest first) and a lower order is consulted whenever a higher one has no
/// data for its context (simplified Katz back-off). Without back-off only the
/// order `n` model exists.
#[derive(Clone, Debug)]
pub struct Ensemble {
	order: usize,
	prior: f64,
	backoff: bool,
	alphabet: Vec<char>,
	/// Highest order first.
	models: Vec<ChainModel>,
}

impl Ensemble {
	/// Creates an ensemble trained on `data`.
	///
	/// Words are lowercased (and stripped of sentinel characters) before the
	/// alphabet is derived; the caller's corpus is left untouched.
	pub fn new<S: AsRef<str>>(data: &[S], order: usize, prior: f64, backoff: bool) -> Self {
		let order = order.max(1);
		let prior = clamp_prior(prior);

		let words: Vec<String> = data.iter().map(|w| normalize_word(w.as_ref())).collect();
		let alphabet = derive_alphabet(&words);

		let models = if backoff {
			(1..=order)
				.rev()
				.map(|n| ChainModel::new(&words, n, prior, alphabet.clone()))
				.collect()
		} else {
			vec![ChainModel::new(&words, order, prior, alphabet.clone())]
		};

		debug!(
			"ensemble built: order {}, prior {}, backoff {}, {} symbols, {} models",
			order,
			prior,
			backoff,
			alphabet.len(),
			models.len()
		);

		Self { order, prior, backoff, alphabet, models }
	}

	pub fn order(&self) -> usize {
		self.order
	}

	pub fn prior(&self) -> f64 {
		self.prior
	}

	pub fn backoff(&self) -> bool {
		self.backoff
	}

	/// Shared alphabet, sentinel at index 0.
	pub fn alphabet(&self) -> &[char] {
		&self.alphabet
	}

	/// Owned models, highest order first.
	pub fn models(&self) -> &[ChainModel] {
		&self.models
	}

	/// Generates a word.
	///
	/// The result keeps its leading `order` sentinels; the final end-of-word
	/// sentinel is not appended. Stripping is left to the caller.
	pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
		let mut word: String = std::iter::repeat_n(SENTINEL, self.order).collect();

		while let Some(letter) = self.get_letter(&word, rng) {
			if letter == SENTINEL {
				break;
			}
			word.push(letter);
		}

		word
	}

	/// Generates the next letter of `word`.
	///
	/// The context is the last `order` characters of `word`. Models are tried
	/// from highest to lowest order; on no prediction or on an end-of-word
	/// prediction the context loses its leftmost character and the next model
	/// is tried. The last outcome is returned when every model is exhausted.
	pub fn get_letter<R: RandomSource + ?Sized>(&self, word: &str, rng: &mut R) -> Option<char> {
		let mut context = last_n_chars(word, self.order);
		let mut letter = None;

		for model in &self.models {
			letter = model.generate(context, rng);
			match letter {
				Some(c) if c != SENTINEL => break,
				_ => context = drop_first_char(context),
			}
		}

		letter
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::RngSource;
	use crate::random::testing::{Fixed, Scripted};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn alphabet_is_lowercased_and_shared() {
		let ensemble = Ensemble::new(&["Ann", "BOB"], 2, 0.0, true);
		assert_eq!(ensemble.alphabet(), &['#', 'a', 'b', 'n', 'o']);
		for model in ensemble.models() {
			assert_eq!(model.alphabet(), ensemble.alphabet());
		}
	}

	#[test]
	fn backoff_builds_every_order_highest_first() {
		let ensemble = Ensemble::new(&["anna"], 3, 0.0, true);
		let orders: Vec<usize> = ensemble.models().iter().map(ChainModel::order).collect();
		assert_eq!(orders, vec![3, 2, 1]);
	}

	#[test]
	fn without_backoff_only_the_highest_order_exists() {
		let ensemble = Ensemble::new(&["anna"], 3, 0.0, false);
		let orders: Vec<usize> = ensemble.models().iter().map(ChainModel::order).collect();
		assert_eq!(orders, vec![3]);
	}

	#[test]
	fn parameters_are_clamped() {
		let ensemble = Ensemble::new(&["anna"], 0, 3.0, true);
		assert_eq!(ensemble.order(), 1);
		assert_eq!(ensemble.prior(), 0.1);
		assert_eq!(ensemble.models().len(), 1);
		assert_eq!(ensemble.models()[0].prior(), 0.1);
	}

	#[test]
	fn degenerate_corpus_is_reproduced_exactly() {
		let ensemble = Ensemble::new(&["ann"], 2, 0.0, false);
		assert_eq!(ensemble.alphabet(), &['#', 'a', 'n']);
		for r in [0.0, 0.3, 0.6, 0.999] {
			assert_eq!(ensemble.generate(&mut Fixed(r)), "##ann");
		}
	}

	#[test]
	fn each_letter_draws_once_per_consulted_model() {
		let ensemble = Ensemble::new(&["ann"], 2, 0.0, false);
		let mut rng = Scripted::new(&[0.5]);
		ensemble.generate(&mut rng);
		// ## -> a, #a -> n, an -> n, nn -> #
		assert_eq!(rng.draws, 4);
	}

	#[test]
	fn backoff_falls_through_to_lower_orders() {
		let ensemble = Ensemble::new(&["ab", "ac", "ad"], 3, 0.0, true);

		// "zab" is unseen at order 3, "ab" ends the word at order 2, "b" ends at order 1
		assert_eq!(ensemble.models()[0].chain("zab"), None);
		assert_eq!(ensemble.get_letter("zab", &mut Fixed(0.0)), Some(SENTINEL));

		// "zza" is unseen at order 3 and "za" at order 2, order 1 knows "a"
		let letter = ensemble.get_letter("zza", &mut Fixed(0.0));
		assert!(matches!(letter, Some('b' | 'c' | 'd')), "got {letter:?}");
	}

	#[test]
	fn no_prediction_when_no_order_has_data() {
		let ensemble = Ensemble::new(&["ab"], 2, 0.0, true);
		assert_eq!(ensemble.get_letter("zz", &mut Fixed(0.0)), None);
	}

	#[test]
	fn without_backoff_unseen_context_gives_no_prediction() {
		let ensemble = Ensemble::new(&["ab", "ac"], 3, 0.0, false);
		assert_eq!(ensemble.get_letter("zab", &mut Fixed(0.0)), None);
	}

	#[test]
	fn end_of_word_at_high_order_defers_to_lower_orders() {
		// order 2 sees "ab" -> #, order 1 sees "b" -> # or "b" -> a
		let ensemble = Ensemble::new(&["ab", "bab"], 2, 0.0, true);
		// order 1 chain for "b" over # a b: [2, 1, 0], 0.9 * 3 = 2.7 -> 'a'
		assert_eq!(ensemble.get_letter("#ab", &mut Fixed(0.9)), Some('a'));
	}

	#[test]
	fn generated_words_only_use_the_alphabet() {
		let data = ["Aragorn", "Boromir", "Celeborn", "Denethor", "Elrond", "Faramir"];
		let ensemble = Ensemble::new(&data, 3, 0.01, true);
		let mut rng = RngSource(StdRng::seed_from_u64(99));
		for _ in 0..200 {
			let word = ensemble.generate(&mut rng);
			assert!(word.starts_with("###"));
			assert!(word.chars().all(|c| ensemble.alphabet().contains(&c)));
		}
	}
}
