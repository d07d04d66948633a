//! Property slot filled by the container after construction

use crate::{DiError, DiResult, Injectable, Instance};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A property filled by property injection.
///
/// The slot starts empty when its owner is constructed and is set at most
/// once, immediately after the owner is realized. A slot whose dependency has
/// no registration stays empty.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use trellis_di::{Injectable, Injected, Instance};
///
/// #[derive(Default)]
/// struct AppleHost;
///
/// impl Injectable for AppleHost {}
///
/// let host: Injected<AppleHost> = Injected::new();
/// assert!(host.get().is_none());
///
/// let dependency: Instance = Arc::new(AppleHost);
/// host.set(dependency).unwrap();
/// assert!(host.is_set());
/// ```
pub struct Injected<T: Injectable> {
	slot: OnceLock<Arc<T>>,
}

impl<T: Injectable> Injected<T> {
	/// Creates an empty slot.
	pub const fn new() -> Self {
		Self {
			slot: OnceLock::new(),
		}
	}

	/// Fills the slot with `dependency`.
	///
	/// Fails if the instance is not a `T` or the slot is already filled.
	pub fn set(&self, dependency: Instance) -> DiResult<()> {
		let actual = dependency.runtime_type_name();
		let dependency = dependency
			.downcast_arc::<T>()
			.map_err(|_| DiError::TypeMismatch {
				expected: std::any::type_name::<T>(),
				actual,
			})?;
		self.slot
			.set(dependency)
			.map_err(|_| DiError::AlreadyInjected(std::any::type_name::<T>()))
	}

	/// The injected instance, if any.
	pub fn get(&self) -> Option<&Arc<T>> {
		self.slot.get()
	}

	/// Returns `true` once the slot has been filled.
	pub fn is_set(&self) -> bool {
		self.slot.get().is_some()
	}
}

impl<T: Injectable> Default for Injected<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Injectable> fmt::Debug for Injected<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Injected")
			.field("type", &std::any::type_name::<T>())
			.field("set", &self.is_set())
			.finish()
	}
}
