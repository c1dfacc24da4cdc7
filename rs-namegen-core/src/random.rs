use rand::Rng;

/// Source of randomness consumed by the models.
///
/// The models never own or seed a generator: the caller hands one in for each
/// generation call. This keeps sampling reproducible (seeded `StdRng`, scripted
/// sequences) and avoids any shared global state.
pub trait RandomSource {
	/// Returns a uniform value in `[0, 1)`.
	fn next_fraction(&mut self) -> f64;
}

/// Adapts any `rand` generator to [`RandomSource`].
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rs_namegen_core::random::{RandomSource, RngSource};
///
/// let mut source = RngSource(StdRng::seed_from_u64(7));
/// let r = source.next_fraction();
/// assert!((0.0..1.0).contains(&r));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
	/// Wraps the thread-local generator.
	pub fn thread() -> Self {
		Self(rand::rng())
	}
}

impl<R: Rng> RandomSource for RngSource<R> {
	fn next_fraction(&mut self) -> f64 {
		self.0.random::<f64>()
	}
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
	fn next_fraction(&mut self) -> f64 {
		(**self).next_fraction()
	}
}
