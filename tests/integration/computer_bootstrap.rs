//! End-to-end bootstrap of a small component graph

use rstest::*;
use std::sync::Arc;
use trellis::di::{Component, DiError, DiResult, Injectable, Injected, Instance};
use trellis::{AppError, Application};

#[derive(Default)]
struct Monitor27inch;
impl Injectable for Monitor27inch {}

impl Component for Monitor27inch {
	const PROVIDE: Option<&'static str> = Some("Monitor");
}

#[derive(Default)]
struct AppleHost;
impl Injectable for AppleHost {}

impl Component for AppleHost {
	const PROVIDE: Option<&'static str> = Some("Host");
}

#[derive(Default)]
struct Computer {
	monitor: Injected<Monitor27inch>,
	host: Injected<AppleHost>,
}

impl Computer {
	fn describe(&self) -> String {
		format!(
			"monitor: {}, host: {}",
			self.monitor.is_set(),
			self.host.is_set()
		)
	}
}

impl Injectable for Computer {
	fn inject(&self, property: &str, dependency: Instance) -> DiResult<()> {
		match property {
			"monitor" => self.monitor.set(dependency),
			"host" => self.host.set(dependency),
			_ => Err(DiError::unknown_property(self, property)),
		}
	}
}

impl Component for Computer {
	const PROVIDE: Option<&'static str> = Some("Computer");
	const INJECT: &'static [(&'static str, &'static str)] =
		&[("monitor", "Monitor"), ("host", "Host")];
}

#[fixture]
fn app() -> Application {
	let app = Application::default();
	app.bootstrap(|ctx| {
		ctx.registrar()
			.component::<Computer>()
			.component::<Monitor27inch>()
			.component::<AppleHost>();
	})
	.unwrap();
	app
}

#[rstest]
fn bootstrap_registers_without_realizing(app: Application) {
	// Assert
	assert!(app.is_bootstrapped());
	assert_eq!(app.container().keys(), vec!["Computer", "Monitor", "Host"]);
	assert!(!app.container().is_realized("Computer"));
	assert!(!app.container().is_realized("Monitor"));
}

#[rstest]
fn resolved_computer_holds_the_singleton_parts(app: Application) {
	// Act
	let computer = app.resolve_as::<Computer>("Computer").unwrap();

	// Assert
	let monitor = app.resolve_as::<Monitor27inch>("Monitor").unwrap();
	let host = app.resolve_as::<AppleHost>("Host").unwrap();
	assert!(Arc::ptr_eq(computer.monitor.get().unwrap(), &monitor));
	assert!(Arc::ptr_eq(computer.host.get().unwrap(), &host));
	assert_eq!(computer.describe(), "monitor: true, host: true");
}

#[rstest]
fn repeated_resolution_returns_the_same_computer(app: Application) {
	// Act
	let first = app.resolve_as::<Computer>("Computer").unwrap();
	let second = app.resolve_as::<Computer>("Computer").unwrap();

	// Assert
	assert!(Arc::ptr_eq(&first, &second));
}

#[rstest]
fn second_bootstrap_is_rejected(app: Application) {
	// Arrange
	let mut ran = false;

	// Act
	let result = app.bootstrap(|_| ran = true);

	// Assert
	assert!(matches!(result, Err(AppError::AlreadyBootstrapped)));
	assert!(!ran);
}

#[rstest]
fn bootstrap_reports_missing_registration() {
	// Arrange
	let app = Application::default();

	// Act
	let result = app.bootstrap(|ctx| {
		ctx.registrar()
			.component::<Computer>()
			.component::<Monitor27inch>();
	});

	// Assert
	match result {
		Err(AppError::Di(DiError::UnresolvedDependencies(missing))) => {
			assert_eq!(missing.len(), 1);
			assert_eq!(missing[0].property, "host");
			assert_eq!(missing[0].key, "Host");
		}
		other => panic!("expected unresolved dependencies, got {other:?}"),
	}
	assert!(!app.is_bootstrapped());
}

#[rstest]
fn failed_bootstrap_can_be_retried() {
	// Arrange
	let app = Application::default();
	let first = app.bootstrap(|ctx| {
		ctx.registrar().component::<Computer>();
	});

	// Act
	let second = app.bootstrap(|ctx| {
		ctx.registrar()
			.component::<Computer>()
			.component::<Monitor27inch>()
			.component::<AppleHost>();
	});

	// Assert
	assert!(matches!(
		first,
		Err(AppError::Di(DiError::UnresolvedDependencies(ref missing))) if missing.len() == 2
	));
	assert!(second.is_ok());
	assert!(app.is_bootstrapped());
	let computer = app.resolve_as::<Computer>("Computer").unwrap();
	assert_eq!(computer.describe(), "monitor: true, host: true");
}

#[rstest]
fn unknown_key_surfaces_as_not_registered(app: Application) {
	// Act
	let result = app.resolve_as::<Computer>("Laptop");

	// Assert
	assert!(matches!(
		result,
		Err(AppError::Di(DiError::NotRegistered(ref key))) if key == "Laptop"
	));
}
