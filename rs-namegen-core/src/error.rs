use thiserror::Error;

/// Errors of the I/O, configuration and corpus-library layers.
///
/// Model training and generation never fail; see [`crate::model`].
#[derive(Debug, Error)]
pub enum NamegenError {
	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error("invalid configuration: {0}")]
	Config(#[from] toml::de::Error),

	#[error("invalid path: {0}")]
	InvalidPath(String),

	#[error("unknown corpus '{0}'")]
	UnknownCorpus(String),

	#[error("corpus '{0}' has no words")]
	EmptyCorpus(String),
}

pub type Result<T> = std::result::Result<T, NamegenError>;
