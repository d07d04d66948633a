//! Declarative registration performed during bootstrap
//!
//! [`Registrar`] turns the two container annotations into explicit calls:
//!
//! - **provide**: register a default-constructing factory for a type under a
//!   key, falling back to the type's short name;
//! - **inject**: declare that a property of a type is filled from a key.
//!
//! Both are order-independent with respect to each other, and both must run
//! before the first resolve.
//!
//! ## Example
//!
//! ```rust
//! use trellis_di::{Component, Container, DiError, DiResult, Injectable, Injected, Instance, Registrar};
//!
//! #[derive(Default)]
//! struct Monitor27inch;
//! impl Injectable for Monitor27inch {}
//!
//! #[derive(Default)]
//! struct AppleHost;
//! impl Injectable for AppleHost {}
//!
//! #[derive(Default)]
//! struct Computer {
//!     monitor: Injected<Monitor27inch>,
//!     host: Injected<AppleHost>,
//! }
//!
//! impl Injectable for Computer {
//!     fn inject(&self, property: &str, dependency: Instance) -> DiResult<()> {
//!         match property {
//!             "monitor" => self.monitor.set(dependency),
//!             "host" => self.host.set(dependency),
//!             _ => Err(DiError::unknown_property(self, property)),
//!         }
//!     }
//! }
//!
//! impl Component for Computer {
//!     const PROVIDE: Option<&'static str> = Some("Computer");
//!     const INJECT: &'static [(&'static str, &'static str)] =
//!         &[("monitor", "Monitor"), ("host", "Host")];
//! }
//!
//! let container = Container::new();
//! Registrar::new(&container)
//!     .provide::<Monitor27inch>(Some("Monitor"))
//!     .provide::<AppleHost>(Some("Host"))
//!     .component::<Computer>();
//!
//! let computer = container.resolve_as::<Computer>("Computer").unwrap();
//! assert!(computer.monitor.is_set());
//! assert!(computer.host.is_set());
//! ```

use crate::{Container, DiError, DiResult, Injectable, PropertyDependency};
use trellis_metadata::short_type_name;

/// Annotations a type carries for the registrar.
///
/// Equivalent to a provide annotation on the type plus one inject
/// annotation per `(property, key)` pair.
pub trait Component: Injectable + Default {
	/// Registration key; `None` falls back to the type's short name.
	const PROVIDE: Option<&'static str> = None;

	/// `(property, key)` pairs filled by property injection.
	const INJECT: &'static [(&'static str, &'static str)] = &[];
}

/// Bootstrap-time registration front end for a [`Container`].
#[derive(Clone, Copy)]
pub struct Registrar<'a> {
	container: &'a Container,
}

impl<'a> Registrar<'a> {
	pub fn new(container: &'a Container) -> Self {
		Self { container }
	}

	/// The container being populated.
	pub fn container(&self) -> &'a Container {
		self.container
	}

	/// Registers a factory producing `T::default()` under `key`, or under
	/// `T`'s short type name when `key` is `None`.
	pub fn provide<T: Injectable + Default>(self, key: Option<&str>) -> Self {
		let key = key
			.map(str::to_owned)
			.unwrap_or_else(|| provide_key::<T>().to_owned());
		self.container.register(key, T::default);
		self
	}

	/// Declares that `property` of `T` is filled from `key`.
	pub fn inject<T: Injectable>(self, property: &str, key: &str) -> Self {
		self.container
			.declare_dependency(std::any::type_name::<T>(), property, key);
		self
	}

	/// Applies the provide and inject annotations carried by `T`.
	pub fn component<T: Component>(self) -> Self {
		T::INJECT
			.iter()
			.fold(self.provide::<T>(T::PROVIDE), |registrar, (property, key)| {
				registrar.inject::<T>(property, key)
			})
	}

	/// Checks that every declared property dependency names a registered key.
	///
	/// Nothing is realized. Every unregistered dependency is reported, in
	/// declaration order.
	pub fn verify(&self) -> DiResult<()> {
		let unresolved: Vec<PropertyDependency> = self
			.container
			.dependencies()
			.iter()
			.filter(|dependency| !self.container.is_registered(&dependency.key))
			.inspect(|dependency| {
				tracing::warn!(
					owner = %dependency.owner,
					property = %dependency.property,
					key = %dependency.key,
					"property dependency has no registration"
				);
			})
			.collect();

		if unresolved.is_empty() {
			Ok(())
		} else {
			Err(DiError::UnresolvedDependencies(unresolved))
		}
	}
}

/// Key used by [`Registrar::provide`] when none is given.
pub fn provide_key<T: ?Sized + 'static>() -> &'static str {
	short_type_name(std::any::type_name::<T>())
}
