//! Injectable trait for container-managed instances

use crate::{DiError, DiResult};
use downcast_rs::{DowncastSync, impl_downcast};
use std::sync::Arc;

/// A realized, shared instance held by the container.
pub type Instance = Arc<dyn Injectable>;

/// Trait for types the container can realize and inject into.
///
/// The container matches property dependencies against [`runtime_type_name`], which
/// defaults to the concrete type's fully qualified name. After construction
/// it calls [`inject`] once per declared dependency, in declaration order.
///
/// Types without injected properties only need an empty impl.
///
/// # Example
///
/// ```rust
/// use trellis_di::{DiError, DiResult, Injectable, Injected, Instance};
///
/// #[derive(Default)]
/// struct Monitor27inch;
///
/// impl Injectable for Monitor27inch {}
///
/// #[derive(Default)]
/// struct Computer {
///     monitor: Injected<Monitor27inch>,
/// }
///
/// impl Injectable for Computer {
///     fn inject(&self, property: &str, dependency: Instance) -> DiResult<()> {
///         match property {
///             "monitor" => self.monitor.set(dependency),
///             _ => Err(DiError::unknown_property(self, property)),
///         }
///     }
/// }
/// ```
///
/// [`runtime_type_name`]: Injectable::runtime_type_name
/// [`inject`]: Injectable::inject
pub trait Injectable: DowncastSync {
	/// Runtime type name used to look up property dependencies.
	fn runtime_type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Assigns `dependency` to the property named `property`.
	fn inject(&self, property: &str, dependency: Instance) -> DiResult<()> {
		let _ = dependency;
		Err(DiError::unknown_property(self, property))
	}
}

impl_downcast!(sync Injectable);

impl DiError {
	/// Builds an [`DiError::UnknownProperty`] for `owner`.
	pub fn unknown_property<T: Injectable + ?Sized>(owner: &T, property: &str) -> Self {
		DiError::UnknownProperty {
			owner: owner.runtime_type_name(),
			property: property.to_owned(),
		}
	}
}

/// Returns `true` if both handles point at the same realized instance.
pub fn same_instance(a: &Instance, b: &Instance) -> bool {
	std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl std::fmt::Debug for dyn Injectable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Instance").field(&self.runtime_type_name()).finish()
	}
}
