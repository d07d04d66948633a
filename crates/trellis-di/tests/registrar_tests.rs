//! Integration tests for declarative registration

use rstest::*;
use std::sync::Arc;
use trellis_di::{
	Component, Container, DiError, DiResult, Injectable, Injected, Instance, PropertyDependency,
	Registrar, provide_key,
};

#[derive(Default)]
struct Monitor27inch;
impl Injectable for Monitor27inch {}

#[derive(Default)]
struct AppleHost;
impl Injectable for AppleHost {}

#[derive(Default)]
struct Computer {
	monitor: Injected<Monitor27inch>,
	host: Injected<AppleHost>,
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

impl Component for Monitor27inch {
	const PROVIDE: Option<&'static str> = Some("Monitor");
}

impl Component for AppleHost {
	const PROVIDE: Option<&'static str> = Some("Host");
}

impl Component for Computer {
	const INJECT: &'static [(&'static str, &'static str)] = &[("monitor", "Monitor"), ("host", "Host")];
}

#[fixture]
fn container() -> Container {
	Container::new()
}

#[rstest]
fn provide_uses_given_key(container: Container) {
	// Act
	Registrar::new(&container).provide::<Monitor27inch>(Some("Monitor"));

	// Assert
	assert!(container.is_registered("Monitor"));
	assert!(container.resolve_as::<Monitor27inch>("Monitor").is_ok());
}

#[rstest]
fn provide_falls_back_to_short_type_name(container: Container) {
	// Act
	Registrar::new(&container).provide::<AppleHost>(None);

	// Assert
	assert_eq!(provide_key::<AppleHost>(), "AppleHost");
	assert_eq!(container.keys(), vec!["AppleHost"]);
}

#[rstest]
fn inject_before_provide_is_order_independent(container: Container) {
	// Act
	Registrar::new(&container)
		.inject::<Computer>("monitor", "Monitor")
		.provide::<Computer>(Some("Computer"))
		.inject::<Computer>("host", "Host")
		.provide::<AppleHost>(Some("Host"))
		.provide::<Monitor27inch>(Some("Monitor"));

	// Assert
	let computer = container.resolve_as::<Computer>("Computer").unwrap();
	let monitor = container.resolve_as::<Monitor27inch>("Monitor").unwrap();
	let host = container.resolve_as::<AppleHost>("Host").unwrap();
	assert!(Arc::ptr_eq(computer.monitor.get().unwrap(), &monitor));
	assert!(Arc::ptr_eq(computer.host.get().unwrap(), &host));
}

#[rstest]
fn component_applies_carried_annotations(container: Container) {
	// Act
	Registrar::new(&container)
		.component::<Monitor27inch>()
		.component::<AppleHost>()
		.component::<Computer>();

	// Assert
	assert_eq!(container.keys(), vec!["Monitor", "Host", "Computer"]);
	let computer = container.resolve_as::<Computer>("Computer").unwrap();
	assert!(computer.monitor.is_set());
	assert!(computer.host.is_set());
}

#[rstest]
fn injection_happens_only_when_owner_is_realized(container: Container) {
	// Arrange
	Registrar::new(&container).component::<Monitor27inch>().component::<Computer>();

	// Act
	let _monitor = container.resolve("Monitor").unwrap();

	// Assert
	assert!(container.is_realized("Monitor"));
	assert!(!container.is_realized("Computer"));
}

#[rstest]
fn verify_passes_when_every_dependency_is_registered(container: Container) {
	// Arrange
	let registrar = Registrar::new(&container)
		.component::<Monitor27inch>()
		.component::<AppleHost>()
		.component::<Computer>();

	// Act
	let result = registrar.verify();

	// Assert
	assert_eq!(result, Ok(()));
	assert!(!container.is_realized("Computer"));
}

#[rstest]
fn verify_reports_unregistered_dependency(container: Container) {
	// Arrange
	let registrar = Registrar::new(&container)
		.component::<Monitor27inch>()
		.component::<Computer>();

	// Act
	let result = registrar.verify();

	// Assert
	assert_eq!(
		result,
		Err(DiError::UnresolvedDependencies(vec![PropertyDependency {
			owner: std::any::type_name::<Computer>().to_string(),
			property: "host".to_string(),
			key: "Host".to_string(),
		}]))
	);
}

#[rstest]
fn verify_reports_every_unregistered_dependency(container: Container) {
	// Arrange
	let registrar = Registrar::new(&container).component::<Computer>();

	// Act
	let result = registrar.verify();

	// Assert
	let owner = std::any::type_name::<Computer>().to_string();
	assert_eq!(
		result,
		Err(DiError::UnresolvedDependencies(vec![
			PropertyDependency {
				owner: owner.clone(),
				property: "monitor".to_string(),
				key: "Monitor".to_string(),
			},
			PropertyDependency {
				owner,
				property: "host".to_string(),
				key: "Host".to_string(),
			},
		]))
	);
	let message = result.unwrap_err().to_string();
	assert!(message.contains(".monitor` -> `Monitor`"));
	assert!(message.contains(".host` -> `Host`"));
}
