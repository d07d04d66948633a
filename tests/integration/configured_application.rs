//! Applications built from layered settings

use rstest::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;
use trellis::conf::{ConfError, SettingsBuilder};
use trellis::di::Injectable;
use trellis::urls::{Controller, Method};
use trellis::{Application, init_logging};

#[derive(Default)]
struct HealthController;
impl Injectable for HealthController {}

impl Controller for HealthController {
	type Output = u16;
}

#[fixture]
fn temp_dir() -> TempDir {
	TempDir::new().unwrap()
}

fn bootstrap(app: &Application) {
	app.bootstrap(|ctx| {
		ctx.registrar().provide::<HealthController>(Some("Health"));
		ctx.controller::<HealthController>()
			.root("/health")
			.get("live", "/live", |_| 200)
			.head("check", "/live", |_| 200)
			.get("ready", "/live", |_| 503);
	})
	.unwrap();
}

#[rstest]
fn configured_prefix_applies_to_every_route(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("trellis.toml");
	fs::write(&path, "[routes]\nprefix = \"/api/v1\"\nwarn_on_collision = false\n").unwrap();
	let settings = SettingsBuilder::new().with_file(&path).build().unwrap();
	let app = Application::new(settings);
	bootstrap(&app);

	// Act
	let routes = app.routes::<HealthController>("Health").unwrap();

	// Assert
	assert_eq!(
		routes.to_string(),
		"GET /api/v1/health/live\nHEAD /api/v1/health/live\nGET /api/v1/health/live"
	);
	assert_eq!(
		routes.collisions(),
		vec![(Method::GET, "/api/v1/health/live".to_string())]
	);
}

#[rstest]
fn first_duplicate_wins_lookup() {
	// Arrange
	let app = Application::default();
	bootstrap(&app);
	let controller = app.resolve_as::<HealthController>("Health").unwrap();

	// Act
	let routes = app.routes::<HealthController>("Health").unwrap();

	// Assert
	let route = routes.find(&Method::GET, "/health/live").unwrap();
	assert_eq!(route.member, "live");
	assert_eq!(route.invoke(&controller), 200);
}

#[rstest]
#[serial]
fn environment_overrides_the_settings_file(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("trellis.toml");
	fs::write(&path, "[routes]\nprefix = \"/api\"\n").unwrap();
	// SAFETY: serialized with the other environment tests.
	unsafe { std::env::set_var("TRELLIS_IT_ROUTES_PREFIX", "/edge") };

	// Act
	let settings = SettingsBuilder::new()
		.with_file(&path)
		.with_env_prefix("TRELLIS_IT_")
		.build();
	// SAFETY: as above.
	unsafe { std::env::remove_var("TRELLIS_IT_ROUTES_PREFIX") };

	// Assert
	let app = Application::new(settings.unwrap());
	bootstrap(&app);
	let routes = app.routes::<HealthController>("Health").unwrap();
	assert!(routes.iter().all(|route| route.full_path.starts_with("/edge/health")));
}

#[rstest]
fn invalid_settings_never_reach_the_application() {
	// Act
	let result = SettingsBuilder::new()
		.with_toml_str("[logging]\nlevel = \"loud\"")
		.build();

	// Assert
	assert!(matches!(result, Err(ConfError::InvalidValue { .. })));
}

#[rstest]
#[serial]
fn logging_initializes_once() {
	// Arrange
	let settings = SettingsBuilder::new().build().unwrap();
	init_logging(&settings.logging);

	// Act
	let again = init_logging(&settings.logging);

	// Assert
	assert!(!again);
}
