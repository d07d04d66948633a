//! Layered settings loading

use crate::{ConfError, ConfResult, Settings};
use std::path::{Path, PathBuf};
use toml::{Table, Value};

enum Source {
	Inline(String),
	File(PathBuf),
	Env(String),
}

/// Builds [`Settings`] from TOML documents, files and environment variables.
///
/// Sources are applied in the order they were added; a later source
/// overrides the keys it sets and leaves the others untouched. Nothing is
/// read until [`build`](SettingsBuilder::build).
///
/// Environment overrides, for a prefix `P`:
///
/// | Variable | Setting |
/// |---|---|
/// | `P` + `ROUTES_PREFIX` | `routes.prefix` |
/// | `P` + `LOG_LEVEL` | `logging.level` |
/// | `P` + `LOG_JSON` | `logging.json` |
///
/// # Examples
///
/// ```
/// use trellis_conf::SettingsBuilder;
///
/// let settings = SettingsBuilder::new()
///     .with_toml_str("[routes]\nprefix = \"/api\"")
///     .with_toml_str("[logging]\nlevel = \"debug\"")
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.routes.prefix, "/api");
/// assert_eq!(settings.logging.level, "debug");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Source>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an inline TOML document.
	pub fn with_toml_str(mut self, document: impl Into<String>) -> Self {
		self.sources.push(Source::Inline(document.into()));
		self
	}

	/// Adds a TOML file. A missing file is an error.
	pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
		self.sources.push(Source::File(path.as_ref().to_path_buf()));
		self
	}

	/// Adds environment overrides read from variables starting with `prefix`.
	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.sources.push(Source::Env(prefix.into()));
		self
	}

	/// Merges every source, deserializes and validates the result.
	pub fn build(self) -> ConfResult<Settings> {
		let mut merged = Table::new();
		for source in self.sources {
			match source {
				Source::Inline(document) => {
					merge(&mut merged, toml::from_str::<Table>(&document)?);
				}
				Source::File(path) => {
					let document = std::fs::read_to_string(&path).map_err(|source| ConfError::Io {
						path: path.clone(),
						source,
					})?;
					tracing::debug!(path = %path.display(), "loading settings file");
					merge(&mut merged, toml::from_str::<Table>(&document)?);
				}
				Source::Env(prefix) => {
					merge(&mut merged, env_overrides(&prefix)?);
				}
			}
		}

		let settings: Settings = Value::Table(merged).try_into()?;
		settings.validate()?;
		tracing::debug!(
			prefix = %settings.routes.prefix,
			level = %settings.logging.level,
			"settings loaded"
		);
		Ok(settings)
	}
}

/// Recursively merges `overlay` into `base`; tables merge, other values replace.
fn merge(base: &mut Table, overlay: Table) {
	for (key, value) in overlay {
		if let Value::Table(incoming) = value {
			if let Some(Value::Table(existing)) = base.get_mut(&key) {
				merge(existing, incoming);
				continue;
			}
			base.insert(key, Value::Table(incoming));
		} else {
			base.insert(key, value);
		}
	}
}

fn env_overrides(prefix: &str) -> ConfResult<Table> {
	let var = |name: &str| std::env::var(format!("{prefix}{name}")).ok();
	let mut routes = Table::new();
	let mut logging = Table::new();

	if let Some(value) = var("ROUTES_PREFIX") {
		routes.insert("prefix".to_string(), Value::String(value));
	}
	if let Some(value) = var("LOG_LEVEL") {
		logging.insert(
			"level".to_string(),
			Value::String(value.trim().to_lowercase()),
		);
	}
	if let Some(value) = var("LOG_JSON") {
		let json = parse_flag(&value).ok_or_else(|| ConfError::invalid("logging.json", value))?;
		logging.insert("json".to_string(), Value::Boolean(json));
	}

	let mut overrides = Table::new();
	for (name, section) in [("routes", routes), ("logging", logging)] {
		if !section.is_empty() {
			overrides.insert(name.to_string(), Value::Table(section));
		}
	}
	Ok(overrides)
}

fn parse_flag(value: &str) -> Option<bool> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}
