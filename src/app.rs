//! Explicit application bootstrap
//!
//! An [`Application`] owns the container and the metadata registry. All
//! registrations and route annotations happen in a single call to
//! [`Application::bootstrap`], which runs once, in order, before anything is
//! resolved or any route table is built.

use crate::{AppError, AppResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use trellis_conf::Settings;
use trellis_di::{Container, Injectable, Registrar};
use trellis_metadata::MetadataRegistry;
use trellis_urls::{Controller, ControllerRegistrar, RouteTable, RouteTableBuilder};

/// Handles passed to the bootstrap closure.
pub struct BootstrapContext<'a> {
	container: &'a Container,
	registry: &'a MetadataRegistry,
}

impl<'a> BootstrapContext<'a> {
	/// Provide/inject registration front end.
	pub fn registrar(&self) -> Registrar<'a> {
		Registrar::new(self.container)
	}

	/// Route annotations for controller `C`.
	pub fn controller<C: Controller>(&self) -> ControllerRegistrar<'a, C> {
		ControllerRegistrar::new(self.registry)
	}

	pub fn registry(&self) -> &'a MetadataRegistry {
		self.registry
	}

	pub fn container(&self) -> &'a Container {
		self.container
	}
}

/// A container, a metadata registry and the settings that shape them.
///
/// # Examples
///
/// ```
/// use trellis::conf::Settings;
/// use trellis::di::Injectable;
/// use trellis::urls::Controller;
/// use trellis::Application;
///
/// #[derive(Default)]
/// struct ArticleController;
/// impl Injectable for ArticleController {}
/// impl Controller for ArticleController {
///     type Output = &'static str;
/// }
///
/// let app = Application::new(Settings::default());
/// app.bootstrap(|ctx| {
///     ctx.registrar().provide::<ArticleController>(None);
///     ctx.controller::<ArticleController>()
///         .root("/article")
///         .get("get_detail", "/detail", |_| "detail");
/// })
/// .unwrap();
///
/// let routes = app.routes::<ArticleController>("ArticleController").unwrap();
/// assert_eq!(routes.to_string(), "GET /article/detail");
/// ```
#[derive(Debug)]
pub struct Application {
	settings: Settings,
	container: Container,
	registry: MetadataRegistry,
	bootstrapped: AtomicBool,
}

impl Application {
	pub fn new(settings: Settings) -> Self {
		Self {
			settings,
			container: Container::new(),
			registry: MetadataRegistry::new(),
			bootstrapped: AtomicBool::new(false),
		}
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn container(&self) -> &Container {
		&self.container
	}

	pub fn registry(&self) -> &MetadataRegistry {
		&self.registry
	}

	pub fn is_bootstrapped(&self) -> bool {
		self.bootstrapped.load(Ordering::Acquire)
	}

	/// Runs the bootstrap pass, then checks every declared property
	/// dependency against the registrations.
	///
	/// Only the first successful call runs `f`; later calls return
	/// [`AppError::AlreadyBootstrapped`]. When the dependency check fails the
	/// application stays unbootstrapped so the pass can be retried. Entries
	/// from the failed pass are kept, and a retry replaces them key by key.
	pub fn bootstrap<F>(&self, f: F) -> AppResult<()>
	where
		F: FnOnce(&BootstrapContext<'_>),
	{
		if self.bootstrapped.swap(true, Ordering::AcqRel) {
			return Err(AppError::AlreadyBootstrapped);
		}

		let ctx = BootstrapContext {
			container: &self.container,
			registry: &self.registry,
		};
		f(&ctx);
		if let Err(err) = ctx.registrar().verify() {
			self.bootstrapped.store(false, Ordering::Release);
			return Err(err.into());
		}

		tracing::debug!(
			registrations = self.container.keys().len(),
			dependencies = self.container.dependencies().len(),
			subjects = self.registry.subject_count(),
			"bootstrap complete"
		);
		Ok(())
	}

	/// Resolves `key` as `T`.
	pub fn resolve_as<T: Injectable>(&self, key: &str) -> AppResult<Arc<T>> {
		Ok(self.container.resolve_as::<T>(key)?)
	}

	/// Realizes the controller registered under `key` and builds its route
	/// table with the configured prefix and collision warnings.
	pub fn routes<C>(&self, key: &str) -> AppResult<RouteTable<C>>
	where
		C: Controller + Injectable,
	{
		let controller = self.resolve_as::<C>(key)?;
		Ok(RouteTableBuilder::new(&self.registry)
			.with_prefix(self.settings.routes.prefix.as_str())
			.warn_on_collision(self.settings.routes.warn_on_collision)
			.build_routes(controller.as_ref()))
	}
}

impl Default for Application {
	fn default() -> Self {
		Self::new(Settings::default())
	}
}
