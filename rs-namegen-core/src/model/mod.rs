//! Top-level module for the name generation pipeline.
//!
//! Layers, each built on the one below:
//! - Shared alphabet and string helpers (`alphabet`)
//! - Fixed-order character model (`ChainModel`)
//! - Multi-order model stack with back-off (`Ensemble`)
//! - Length-constrained generation (`NameGenerator`)
//! - Named corpora loaded from disk (`Generator`)

/// Alphabet derivation, sentinel handling and code-point aware slicing.
pub mod alphabet;

/// Fixed-order model (`order >= 1`).
///
/// Handles padded-word ingestion, smoothed chain construction and weighted
/// next-character sampling.
pub mod chain_model;

/// Models of order `n` down to `1` sharing one alphabet, with back-off.
pub mod ensemble;

/// Bounded retry generation under a length constraint.
pub mod name_generator;

/// High-level interface over several named corpora.
pub mod generator;
