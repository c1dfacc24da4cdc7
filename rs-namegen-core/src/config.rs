//! Settings configuration
//!
//! Default values are defined in `config/default.toml` and embedded in the
//! binary. A user file only needs the keys it overrides.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
	pub model: ModelSettings,
	pub name: NameSettings,
	pub server: ServerSettings,
}

/// Parameters handed to every model. Out of range values are clamped by the
/// models, not rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
	/// Highest order of model to use
	pub order: usize,
	/// Dirichlet prior (additive smoothing)
	pub prior: f64,
	/// Fall back to lower orders when the highest one has no data
	pub backoff: bool,
}

/// Length constraint and batch size for generated names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameSettings {
	pub min_length: usize,
	pub max_length: usize,
	pub count: usize,
	/// Requested counts above this are clamped to it
	pub max_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
	/// Folder holding the `.txt` word lists
	pub data_dir: String,
}

impl Default for Settings {
	fn default() -> Self {
		toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
	}
}

impl Default for ModelSettings {
	fn default() -> Self {
		Settings::default().model
	}
}

impl Default for NameSettings {
	fn default() -> Self {
		Settings::default().name
	}
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
	match (base, overlay) {
		(toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
			for (key, value) in overlay_table {
				if let Some(base_value) = base_table.get_mut(key) {
					merge_toml(base_value, value);
				} else {
					base_table.insert(key.clone(), value.clone());
				}
			}
		}
		(base, _) => {
			*base = overlay.clone();
		}
	}
}

impl Settings {
	/// Parses user TOML merged on top of the defaults.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
		let user: toml::Value = toml::from_str(content)?;
		merge_toml(&mut base, &user);
		Ok(base.try_into()?)
	}

	/// Loads a settings file. A missing file yields the defaults.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		if !path.exists() {
			debug!("no settings at {}, using defaults", path.display());
			return Ok(Self::default());
		}
		let content = fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}
}
