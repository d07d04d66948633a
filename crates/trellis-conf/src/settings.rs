//! Application settings

use crate::{ConfError, ConfResult};
use serde::{Deserialize, Serialize};

/// Log levels accepted by [`LoggingSettings::level`].
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level settings of a Trellis application.
///
/// Every field has a default, so an empty document is valid.
///
/// # Examples
///
/// ```
/// use trellis_conf::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.routes.prefix, "");
/// assert!(settings.routes.warn_on_collision);
/// assert_eq!(settings.logging.level, "info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub routes: RouteSettings,
	pub logging: LoggingSettings,
}

/// Route table settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSettings {
	/// Prepended to every route's full path
	pub prefix: String,
	/// Log duplicate `(method, path)` pairs at warn level
	pub warn_on_collision: bool,
}

impl Default for RouteSettings {
	fn default() -> Self {
		Self {
			prefix: String::new(),
			warn_on_collision: true,
		}
	}
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// Default filter level, overridable through the environment
	pub level: String,
	/// Emit JSON lines instead of human-readable output
	pub json: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			json: false,
		}
	}
}

impl Settings {
	/// Checks field values that deserialization alone cannot.
	///
	/// The log level must be one of [`LOG_LEVELS`]. A non-empty route prefix
	/// must start with `/` and must not end with `/`.
	pub fn validate(&self) -> ConfResult<()> {
		if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
			return Err(ConfError::invalid("logging.level", &self.logging.level));
		}
		let prefix = &self.routes.prefix;
		if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
			return Err(ConfError::invalid("routes.prefix", prefix));
		}
		Ok(())
	}
}
