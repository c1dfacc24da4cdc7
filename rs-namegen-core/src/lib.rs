//! Markov chain name generation library.
//!
//! This crate learns character-transition statistics from a small corpus of
//! example words and synthesizes new words that sound like them:
//! - Single-order character models with Dirichlet (additive) smoothing
//! - A multi-order ensemble with simplified Katz back-off
//! - Length-constrained name generation with a bounded retry budget
//! - Corpus loading, settings and a pluggable random source
//!
//! ```
//! use rs_namegen_core::model::name_generator::NameGenerator;
//! use rs_namegen_core::random::RngSource;
//!
//! let generator = NameGenerator::new(&["ann"], 2, 0.0, false);
//! let name = generator.generate_name(1, 10, &mut RngSource::thread());
//! assert_eq!(name, "ann");
//! ```

/// Character models, the back-off ensemble and name generators.
pub mod model;

/// Source of uniform fractions consumed while sampling.
pub mod random;

/// Settings loaded from TOML (model parameters, name constraints, server).
pub mod config;

/// Error type of the I/O and corpus layers.
pub mod error;

/// Corpus files and path helpers.
pub mod io;

pub use error::{NamegenError, Result};
