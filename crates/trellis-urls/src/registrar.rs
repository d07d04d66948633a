//! Route annotations for a controller
//!
//! [`ControllerRegistrar`] is the explicit manifest that replaces reflective
//! member enumeration: each call records one piece of route metadata for a
//! named member of the controller type.

use crate::{Controller, Handler};
use http::Method;
use std::marker::PhantomData;
use trellis_metadata::{MetadataRegistry, Subject, keys};

/// Records route metadata for controller `C` in a [`MetadataRegistry`].
///
/// Members keep the order in which they are first mentioned.
///
/// # Examples
///
/// ```
/// use trellis_metadata::{MetadataRegistry, Subject, keys};
/// use trellis_urls::{Controller, ControllerRegistrar};
///
/// struct ArticleController;
///
/// impl Controller for ArticleController {
///     type Output = String;
/// }
///
/// let registry = MetadataRegistry::new();
/// ControllerRegistrar::<ArticleController>::new(&registry)
///     .root("/article")
///     .get("get_detail", "/detail", |_| "detail".to_string())
///     .post("add_article", "/add", |_| "added".to_string());
///
/// let subject = Subject::of::<ArticleController>();
/// assert_eq!(registry.list_members(subject), vec!["get_detail", "add_article"]);
/// assert!(registry.has(subject, None, keys::PATH));
/// ```
pub struct ControllerRegistrar<'a, C: Controller> {
	registry: &'a MetadataRegistry,
	_controller: PhantomData<fn() -> C>,
}

impl<'a, C: Controller> ControllerRegistrar<'a, C> {
	pub fn new(registry: &'a MetadataRegistry) -> Self {
		Self {
			registry,
			_controller: PhantomData,
		}
	}

	fn subject() -> Subject {
		Subject::of::<C>()
	}

	/// Sets the path every handler path of this controller is appended to.
	pub fn root(&self, path: &str) -> &Self {
		self.registry
			.define(Self::subject(), None, keys::PATH, path.to_owned());
		self
	}

	/// Attaches `handler` to `member`.
	pub fn handler(&self, member: &str, handler: Handler<C>) -> &Self {
		self.registry
			.define(Self::subject(), Some(member), keys::HANDLER, handler);
		self
	}

	/// Sets the request method of `member`.
	pub fn method(&self, member: &str, method: Method) -> &Self {
		self.registry
			.define(Self::subject(), Some(member), keys::METHOD, method);
		self
	}

	/// Sets the request path of `member`, relative to the controller root.
	pub fn path(&self, member: &str, path: &str) -> &Self {
		self.registry
			.define(Self::subject(), Some(member), keys::PATH, path.to_owned());
		self
	}

	/// Attaches a handler together with its method and path.
	pub fn route<F>(&self, method: Method, member: &str, path: &str, handler: F) -> &Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		tracing::trace!(
			controller = Self::subject().short_name(),
			member,
			method = %method,
			path,
			"annotating handler"
		);
		self.handler(member, Handler::new(handler))
			.method(member, method)
			.path(member, path)
	}

	pub fn get<F>(&self, member: &str, path: &str, handler: F) -> &Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		self.route(Method::GET, member, path, handler)
	}

	pub fn post<F>(&self, member: &str, path: &str, handler: F) -> &Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		self.route(Method::POST, member, path, handler)
	}

	pub fn put<F>(&self, member: &str, path: &str, handler: F) -> &Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		self.route(Method::PUT, member, path, handler)
	}

	pub fn delete<F>(&self, member: &str, path: &str, handler: F) -> &Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		self.route(Method::DELETE, member, path, handler)
	}

	pub fn patch<F>(&self, member: &str, path: &str, handler: F) -> &Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		self.route(Method::PATCH, member, path, handler)
	}

	pub fn head<F>(&self, member: &str, path: &str, handler: F) -> &Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		self.route(Method::HEAD, member, path, handler)
	}

	pub fn options<F>(&self, member: &str, path: &str, handler: F) -> &Self
	where
		F: Fn(&C) -> C::Output + Send + Sync + 'static,
	{
		self.route(Method::OPTIONS, member, path, handler)
	}
}
