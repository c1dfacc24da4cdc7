use log::{debug, warn};

use super::alphabet::strip_sentinels;
use super::ensemble::Ensemble;
use crate::config::ModelSettings;
use crate::random::RandomSource;

/// Number of generations tried before a constraint is given up on.
pub const MAX_ATTEMPTS: usize = 20;

/// Outcome of a constrained generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAttempt {
	/// The accepted name, or the last candidate when nothing fit.
	pub name: String,
	/// Generations consumed, between 1 and `MAX_ATTEMPTS`.
	pub attempts: usize,
	/// Whether `name` satisfies the length constraint.
	pub satisfied: bool,
}

/// Name generator built on an [`Ensemble`].
///
/// Generation is retried until a name fits the requested length range, for at
/// most [`MAX_ATTEMPTS`] tries. It never fails: when no candidate fits, the last
/// one is returned anyway and callers needing a hard guarantee must check it.
#[derive(Clone, Debug)]
pub struct NameGenerator {
	ensemble: Ensemble,
}

impl NameGenerator {
	pub fn new<S: AsRef<str>>(data: &[S], order: usize, prior: f64, backoff: bool) -> Self {
		Self { ensemble: Ensemble::new(data, order, prior, backoff) }
	}

	/// Order 3, no smoothing, no back-off.
	pub fn with_defaults<S: AsRef<str>>(data: &[S]) -> Self {
		Self::from_settings(data, &ModelSettings::default())
	}

	pub fn from_settings<S: AsRef<str>>(data: &[S], settings: &ModelSettings) -> Self {
		Self::new(data, settings.order, settings.prior, settings.backoff)
	}

	pub fn ensemble(&self) -> &Ensemble {
		&self.ensemble
	}

	/// Generates a name whose length (in characters) lies in
	/// `[min_length, max_length]`, or the last candidate if none did.
	pub fn generate_name<R: RandomSource + ?Sized>(&self, min_length: usize, max_length: usize, rng: &mut R) -> String {
		self.try_generate_name(min_length, max_length, rng).name
	}

	/// Same as [`generate_name`](Self::generate_name), reporting how many
	/// attempts were used and whether the constraint held.
	pub fn try_generate_name<R: RandomSource + ?Sized>(
		&self,
		min_length: usize,
		max_length: usize,
		rng: &mut R,
	) -> NameAttempt {
		let mut name = String::new();

		for attempt in 1..=MAX_ATTEMPTS {
			name = strip_sentinels(&self.ensemble.generate(rng));
			let length = name.chars().count();
			if (min_length..=max_length).contains(&length) {
				return NameAttempt { name, attempts: attempt, satisfied: true };
			}
			debug!("rejected '{}' ({} chars) outside {}..={}", name, length, min_length, max_length);
		}

		warn!(
			"no name within {}..={} after {} attempts, keeping '{}'",
			min_length, max_length, MAX_ATTEMPTS, name
		);
		NameAttempt { name, attempts: MAX_ATTEMPTS, satisfied: false }
	}

	/// Generates `count` names under the same constraint.
	pub fn generate_names<R: RandomSource + ?Sized>(
		&self,
		count: usize,
		min_length: usize,
		max_length: usize,
		rng: &mut R,
	) -> Vec<String> {
		(0..count)
			.map(|_| self.generate_name(min_length, max_length, rng))
			.collect()
	}
}
