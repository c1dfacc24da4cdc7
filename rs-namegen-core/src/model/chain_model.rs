use std::collections::HashMap;

use log::debug;

use super::alphabet::pad_word;
use crate::random::RandomSource;

/// Upper bound of the Dirichlet prior.
pub const MAX_PRIOR: f64 = 0.1;

/// Clamps a prior into `[0, MAX_PRIOR]`. `NaN` becomes `0`.
pub(crate) fn clamp_prior(prior: f64) -> f64 {
	if prior.is_nan() { 0.0 } else { prior.clamp(0.0, MAX_PRIOR) }
}

/// Character-level Markov chain of a single, fixed order.
///
/// The model looks back `order` characters (sentinel padding included) and
/// learns which characters follow each context in the training corpus.
///
/// # Responsibilities
/// - Record every successor of every context seen in the padded corpus
/// - Turn those observations into smoothed weight vectors (one per context)
/// - Sample the next character of a context by weighted random selection
///
/// # Invariants
/// - `order >= 1` and `0 <= prior <= MAX_PRIOR`
/// - Every context key is exactly `order` characters long
/// - Every chain has exactly `alphabet.len()` weights, each `>= prior`
/// - A context that was never observed has no chain at all
#[derive(Clone, Debug)]
pub struct ChainModel {
	/// How many characters this model looks back.
	order: usize,

	/// Additive smoothing, added to every raw count.
	prior: f64,

	/// Symbols the model can predict, sentinel at index 0.
	alphabet: Vec<char>,

	/// Every successor seen after a context, in corpus order.
	observations: HashMap<String, Vec<char>>,

	/// Smoothed weights per context, aligned with `alphabet`.
	chains: HashMap<String, Vec<f64>>,
}

impl ChainModel {
	/// Creates and trains a model.
	///
	/// `order` is clamped to at least 1 and `prior` to `[0, MAX_PRIOR]`;
	/// invalid values are never rejected.
	pub fn new<S: AsRef<str>>(data: &[S], order: usize, prior: f64, alphabet: Vec<char>) -> Self {
		let mut model = Self {
			order: order.max(1),
			prior: clamp_prior(prior),
			alphabet,
			observations: HashMap::new(),
			chains: HashMap::new(),
		};
		model.train(data);
		model.build_chains();
		model
	}

	/// Order after clamping.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Prior after clamping.
	pub fn prior(&self) -> f64 {
		self.prior
	}

	pub fn alphabet(&self) -> &[char] {
		&self.alphabet
	}

	/// Weight vector of a context, if the context was observed.
	pub fn chain(&self, context: &str) -> Option<&[f64]> {
		self.chains.get(context).map(Vec::as_slice)
	}

	/// Successors recorded for a context, if the context was observed.
	pub fn observations(&self, context: &str) -> Option<&[char]> {
		self.observations.get(context).map(Vec::as_slice)
	}

	/// Iterates over every context that has a chain.
	pub fn contexts(&self) -> impl Iterator<Item = &str> {
		self.chains.keys().map(String::as_str)
	}

	/// Records the successors of every context in `data`.
	///
	/// Previous observations are discarded first, so training twice never
	/// accumulates counts. The caller's corpus is only read.
	///
	/// Each word is padded as `"#" * order + word + "#"` and a window of
	/// `order` characters slides over it; the character right after the window
	/// is the observed successor. Empty words contribute nothing.
	pub fn train<S: AsRef<str>>(&mut self, data: &[S]) {
		self.observations.clear();

		for word in data.iter().map(AsRef::as_ref).filter(|w| !w.is_empty()) {
			let padded: Vec<char> = pad_word(word, self.order).chars().collect();
			for i in 0..padded.len() - self.order {
				let context: String = padded[i..i + self.order].iter().collect();
				self.observations
					.entry(context)
					.or_default()
					.push(padded[i + self.order]);
			}
		}

		debug!(
			"order {} model trained on {} words: {} contexts",
			self.order,
			data.len(),
			self.observations.len()
		);
	}

	/// Rebuilds every chain from the current observations.
	///
	/// `weight[i] = prior + count(alphabet[i])` for each observed context.
	pub fn build_chains(&mut self) {
		self.chains.clear();

		for (context, successors) in &self.observations {
			let weights = self
				.alphabet
				.iter()
				.map(|symbol| self.prior + successors.iter().filter(|s| *s == symbol).count() as f64)
				.collect();
			self.chains.insert(context.clone(), weights);
		}
	}

	/// Replaces everything the model learned with `data`.
	pub fn retrain<S: AsRef<str>>(&mut self, data: &[S]) {
		self.train(data);
		self.build_chains();
	}

	/// Samples the character following `context`.
	///
	/// Returns `None` when the context was never observed, which is the
	/// trigger for back-off. Draws exactly one value from `rng` otherwise.
	pub fn generate<R: RandomSource + ?Sized>(&self, context: &str, rng: &mut R) -> Option<char> {
		let chain = self.chains.get(context)?;
		let index = Self::select_index(chain, rng.next_fraction());
		self.alphabet.get(index).copied()
	}

	/// Inverse CDF selection over a weight vector.
	///
	/// `fraction` in `[0, 1)` is scaled by the total weight; the first index
	/// whose running sum exceeds it wins. Falls back to index 0 when no bucket
	/// matches (total weight of zero).
	fn select_index(chain: &[f64], fraction: f64) -> usize {
		let total: f64 = chain.iter().sum();
		let r = fraction * total;

		let mut accumulator = 0.0;
		for (index, weight) in chain.iter().enumerate() {
			accumulator += weight;
			if r < accumulator {
				return index;
			}
		}
		0
	}
}
