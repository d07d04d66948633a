//! Log output through `tracing-subscriber`

use trellis_conf::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Environment variable whose filter directives override the configured level.
pub const LOG_ENV: &str = "TRELLIS_LOG";

/// Installs a global `fmt` subscriber configured from `settings`.
///
/// [`LOG_ENV`] takes precedence over `settings.level` when set. Returns
/// `false` when a global subscriber was already installed, in which case
/// nothing changes.
pub fn init_logging(settings: &LoggingSettings) -> bool {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&settings.level));
	let builder = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(true);

	let installed = if settings.json {
		builder.json().try_init().is_ok()
	} else {
		builder.try_init().is_ok()
	};

	if installed {
		tracing::debug!(level = %settings.level, json = settings.json, "logging initialized");
	}
	installed
}
