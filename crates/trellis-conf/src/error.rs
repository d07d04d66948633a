//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating [`Settings`](crate::Settings).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfError {
	#[error("failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid settings TOML: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid value {value:?} for {key}")]
	InvalidValue { key: String, value: String },
}

impl ConfError {
	pub(crate) fn invalid(key: &str, value: impl Into<String>) -> Self {
		Self::InvalidValue {
			key: key.to_owned(),
			value: value.into(),
		}
	}
}

pub type ConfResult<T> = Result<T, ConfError>;
