//! Keyed singleton container

use crate::{DependencyMap, DiError, DiResult, Injectable, Instance};
use indexmap::IndexMap;
use parking_lot::{ReentrantMutex, RwLock};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

type Factory = Arc<dyn Fn(&Container) -> Instance + Send + Sync>;

/// Container of lazily realized singletons.
///
/// Factories are registered under string keys during bootstrap. The first
/// [`resolve`](Container::resolve) of a key invokes its factory once, caches
/// the raw instance, then fills the instance's declared property
/// dependencies by resolving their keys in declaration order. Every later
/// resolve returns the same instance for the lifetime of the container.
///
/// The container does not detect dependency cycles. Property cycles
/// terminate because the raw instance is cached before injection, but a
/// factory that resolves a key whose factory resolves it back recurses
/// without bound.
///
/// Realization is serialized container-wide, so first resolves of unrelated
/// keys on different threads run one at a time. Nested resolves on the
/// realizing thread re-enter the lock. A factory that blocks on another
/// thread which resolves an unrealized key deadlocks.
///
/// # Example
///
/// ```rust
/// use trellis_di::{Container, Injectable};
///
/// #[derive(Default)]
/// struct AppleHost;
///
/// impl Injectable for AppleHost {}
///
/// let container = Container::new();
/// container.register("Host", AppleHost::default);
///
/// let first = container.resolve_as::<AppleHost>("Host").unwrap();
/// let second = container.resolve_as::<AppleHost>("Host").unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert!(container.resolve("Monitor").is_none());
/// ```
pub struct Container {
	factories: RwLock<IndexMap<String, Factory>>,
	instances: RwLock<HashMap<String, Instance>>,
	dependencies: RwLock<DependencyMap>,
	/// Serializes realization across threads; re-entrant for nested resolves
	realization: ReentrantMutex<()>,
}

impl Container {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self {
			factories: RwLock::new(IndexMap::new()),
			instances: RwLock::new(HashMap::new()),
			dependencies: RwLock::new(DependencyMap::new()),
			realization: ReentrantMutex::new(()),
		}
	}

	/// Registers a zero-argument factory under `key` without invoking it.
	///
	/// Registering again before the key is realized replaces the factory.
	/// Once the key is realized, further registrations are ignored.
	pub fn register<T, F>(&self, key: impl Into<String>, factory: F)
	where
		T: Injectable,
		F: Fn() -> T + Send + Sync + 'static,
	{
		self.register_with(key, move |_: &Container| factory());
	}

	/// Registers a factory that receives the container, for factories that
	/// pull constructor dependencies with [`resolve`](Container::resolve).
	pub fn register_with<T, F>(&self, key: impl Into<String>, factory: F)
	where
		T: Injectable,
		F: Fn(&Container) -> T + Send + Sync + 'static,
	{
		let key = key.into();
		if self.is_realized(&key) {
			tracing::debug!(key = %key, "key already realized; registration ignored");
			return;
		}
		let factory: Factory = Arc::new(move |container: &Container| -> Instance {
			Arc::new(factory(container))
		});
		let replaced = self.factories.write().insert(key.clone(), factory).is_some();
		if replaced {
			tracing::debug!(key = %key, "factory replaced");
		} else {
			tracing::debug!(key = %key, "factory registered");
		}
	}

	/// Registers `factory` under `key` and realizes it immediately.
	///
	/// If `key` was already realized, the cached instance is returned and the
	/// factory is dropped unused.
	pub fn bind<T, F>(&self, key: impl Into<String>, factory: F) -> Instance
	where
		T: Injectable,
		F: Fn() -> T + Send + Sync + 'static,
	{
		let key = key.into();
		if let Some(instance) = self.cached(&key) {
			return instance;
		}
		let factory: Factory = Arc::new(move |_: &Container| -> Instance { Arc::new(factory()) });
		self.factories.write().insert(key.clone(), factory.clone());
		let _realizing = self.realization.lock();
		match self.cached(&key) {
			Some(instance) => instance,
			None => self.realize(&key, &factory),
		}
	}

	/// Records that property `property` of `owner` is filled from `key`.
	///
	/// `owner` is matched exactly against [`Injectable::runtime_type_name`] of
	/// realized instances.
	pub fn declare_dependency(
		&self,
		owner: impl Into<String>,
		property: impl Into<String>,
		key: impl Into<String>,
	) {
		let (owner, property, key) = (owner.into(), property.into(), key.into());
		tracing::debug!(owner = %owner, property = %property, key = %key, "property dependency declared");
		if let Some(previous) = self
			.dependencies
			.write()
			.insert(owner.clone(), property.clone(), key)
		{
			tracing::debug!(owner = %owner, property = %property, previous = %previous, "property dependency replaced");
		}
	}

	/// Returns the singleton for `key`, realizing it on first use.
	///
	/// Returns `None` when no factory is registered under `key`.
	pub fn resolve(&self, key: &str) -> Option<Instance> {
		if let Some(instance) = self.cached(key) {
			return Some(instance);
		}

		let _realizing = self.realization.lock();
		// Another thread may have realized the key while we waited.
		if let Some(instance) = self.cached(key) {
			return Some(instance);
		}
		let Some(factory) = self.factories.read().get(key).cloned() else {
			tracing::trace!(key, "no registration");
			return None;
		};
		Some(self.realize(key, &factory))
	}

	/// Resolves `key` and downcasts the instance to `T`.
	pub fn resolve_as<T: Injectable>(&self, key: &str) -> DiResult<Arc<T>> {
		let instance = self
			.resolve(key)
			.ok_or_else(|| DiError::NotRegistered(key.to_owned()))?;
		let actual = instance.runtime_type_name();
		instance
			.downcast_arc::<T>()
			.map_err(|_| DiError::TypeMismatch {
				expected: std::any::type_name::<T>(),
				actual,
			})
	}

	/// Returns `true` if a factory is registered under `key`.
	pub fn is_registered(&self, key: &str) -> bool {
		self.factories.read().contains_key(key)
	}

	/// Returns `true` if `key` has a cached instance.
	pub fn is_realized(&self, key: &str) -> bool {
		self.instances.read().contains_key(key)
	}

	/// Registered keys, in first registration order.
	pub fn keys(&self) -> Vec<String> {
		self.factories.read().keys().cloned().collect()
	}

	/// `(property, key)` pairs declared for exactly `owner`.
	pub fn dependencies_of(&self, owner: &str) -> Vec<(String, String)> {
		self.dependencies.read().for_owner(owner)
	}

	/// Snapshot of every declared property dependency.
	pub fn dependencies(&self) -> DependencyMap {
		self.dependencies.read().clone()
	}

	fn cached(&self, key: &str) -> Option<Instance> {
		self.instances.read().get(key).cloned()
	}

	/// Invokes `factory`, caches the raw instance and injects it.
	///
	/// Must be called with the realization lock held.
	fn realize(&self, key: &str, factory: &Factory) -> Instance {
		tracing::debug!(key, "realizing singleton");
		let instance = factory(self);

		// The factory itself may have realized this key through a nested
		// resolve; the first cached instance wins and is already injected.
		let (instance, fresh) = match self.instances.write().entry(key.to_owned()) {
			Entry::Occupied(entry) => (entry.get().clone(), false),
			Entry::Vacant(entry) => (entry.insert(instance).clone(), true),
		};
		if fresh {
			self.inject_properties(key, &instance);
		}
		instance
	}

	fn inject_properties(&self, key: &str, instance: &Instance) {
		let owner = instance.runtime_type_name();
		let wanted = self.dependencies.read().for_owner(owner);
		for (property, dependency_key) in wanted {
			let Some(dependency) = self.resolve(&dependency_key) else {
				tracing::debug!(
					key,
					owner,
					property = %property,
					dependency = %dependency_key,
					"dependency not registered; property left unset"
				);
				continue;
			};
			match instance.inject(&property, dependency) {
				Ok(()) => {
					tracing::trace!(key, owner, property = %property, dependency = %dependency_key, "property injected");
				}
				Err(err) => {
					tracing::warn!(
						key,
						owner,
						property = %property,
						error = %err,
						"property injection failed; property left unset"
					);
				}
			}
		}
	}
}

impl Default for Container {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Container {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Container")
			.field("registered", &self.keys())
			.field("realized", &self.instances.read().len())
			.field("dependencies", &self.dependencies.read().len())
			.finish()
	}
}
