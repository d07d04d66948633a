//! Controllers and their handler callables

use std::fmt;
use std::sync::Arc;

/// A type whose members are exposed as request handlers.
///
/// `Output` is whatever the handlers of this controller return. Dispatching
/// that output over a transport is left to the caller.
pub trait Controller: Send + Sync + 'static {
	type Output: 'static;
}

/// Shared reference to a handler of controller `C`.
///
/// Cloning a handler shares the callable, so identity survives the trip
/// through the metadata registry into a route table.
pub struct Handler<C: Controller> {
	callable: Arc<dyn Fn(&C) -> C::Output + Send + Sync>,
}

impl<C: Controller> Handler<C> {
	/// Wraps a callable taking the realized controller.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_urls::{Controller, Handler};
	///
	/// struct ArticleController;
	///
	/// impl Controller for ArticleController {
	///     type Output = &'static str;
	/// }
	///
	/// let detail = Handler::new(|_: &ArticleController| "detail");
	/// assert_eq!(detail.call(&ArticleController), "detail");
	/// ```
	pub fn new<F>(callable: F) -> Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		Self {
			callable: Arc::new(callable),
		}
	}

	/// Invokes the handler against `controller`.
	pub fn call(&self, controller: &C) -> C::Output {
		(self.callable)(controller)
	}

	/// Returns `true` if both handlers share the same callable.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.callable, &other.callable)
	}
}

impl<C: Controller> Clone for Handler<C> {
	fn clone(&self) -> Self {
		Self {
			callable: Arc::clone(&self.callable),
		}
	}
}

impl<C: Controller> fmt::Debug for Handler<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Handler")
			.field("controller", &std::any::type_name::<C>())
			.field("callable", &Arc::as_ptr(&self.callable).cast::<()>())
			.finish()
	}
}
