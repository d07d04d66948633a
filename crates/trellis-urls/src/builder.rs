//! Route table assembly from controller metadata

use crate::{Controller, Handler, RouteDescriptor, RouteTable};
use http::Method;
use trellis_metadata::{MetadataRegistry, Subject, keys};

/// Builds a [`RouteTable`] for a realized controller from the metadata
/// recorded by [`ControllerRegistrar`](crate::ControllerRegistrar).
///
/// For each member, in declaration order, the builder reads the handler,
/// the request method and the request path. A member missing any of them
/// is skipped. Every other member yields one route whose full path is the
/// global prefix, the controller root path (empty when absent) and the
/// member path, concatenated.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use trellis_metadata::MetadataRegistry;
/// use trellis_urls::{Controller, ControllerRegistrar, RouteTableBuilder};
///
/// struct ArticleController;
///
/// impl Controller for ArticleController {
///     type Output = &'static str;
/// }
///
/// let registry = MetadataRegistry::new();
/// ControllerRegistrar::<ArticleController>::new(&registry)
///     .root("/article")
///     .get("get_detail", "/detail", |_| "detail")
///     .post("add_article", "/add", |_| "added");
///
/// let routes = RouteTableBuilder::new(&registry).build_routes(&ArticleController);
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes.routes()[0].full_path, "/article/detail");
/// assert_eq!(routes.routes()[1].method, Method::POST);
/// ```
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<'a> {
	registry: &'a MetadataRegistry,
	prefix: String,
	warn_on_collision: bool,
}

impl<'a> RouteTableBuilder<'a> {
	pub fn new(registry: &'a MetadataRegistry) -> Self {
		Self {
			registry,
			prefix: String::new(),
			warn_on_collision: true,
		}
	}

	/// Prepends `prefix` to every full path.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Whether duplicate `(method, full_path)` pairs are logged at warn level.
	pub fn warn_on_collision(mut self, enabled: bool) -> Self {
		self.warn_on_collision = enabled;
		self
	}

	/// Builds the route table of `controller`'s type.
	///
	/// Routes are not deduplicated.
	pub fn build_routes<C: Controller>(&self, controller: &C) -> RouteTable<C> {
		let subject = Subject::of_val(controller);
		let root = self
			.registry
			.get::<String>(subject, None, keys::PATH)
			.map(|root| root.as_str().to_owned())
			.unwrap_or_default();

		let routes: Vec<RouteDescriptor<C>> = self
			.registry
			.list_members(subject)
			.into_iter()
			.filter_map(|member| self.describe(subject, &root, member))
			.collect();

		let table = RouteTable::new(routes);
		if self.warn_on_collision {
			for (method, path) in table.collisions() {
				tracing::warn!(
					controller = subject.short_name(),
					method = %method,
					path = %path,
					"duplicate route"
				);
			}
		}
		tracing::debug!(
			controller = subject.short_name(),
			routes = table.len(),
			"route table built"
		);
		table
	}

	fn describe<C: Controller>(
		&self,
		subject: Subject,
		root: &str,
		member: String,
	) -> Option<RouteDescriptor<C>> {
		let member_ref = Some(member.as_str());
		let method = self.registry.get::<Method>(subject, member_ref, keys::METHOD);
		let path = self.registry.get::<String>(subject, member_ref, keys::PATH);
		let handler = self
			.registry
			.get::<Handler<C>>(subject, member_ref, keys::HANDLER);

		let (Some(method), Some(path), Some(handler)) = (method, path, handler) else {
			tracing::debug!(
				controller = subject.short_name(),
				member = %member,
				"skipping member without complete route metadata"
			);
			return None;
		};

		Some(RouteDescriptor {
			full_path: format!("{}{}{}", self.prefix, root, path),
			method: method.as_ref().clone(),
			handler: handler.as_ref().clone(),
			member,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ControllerRegistrar;
	use rstest::rstest;

	struct Bare;

	impl Controller for Bare {
		type Output = u8;
	}

	#[rstest]
	fn missing_root_path_defaults_to_empty() {
		// Arrange
		let registry = MetadataRegistry::new();
		ControllerRegistrar::<Bare>::new(&registry).get("ping", "/ping", |_| 1);

		// Act
		let routes = RouteTableBuilder::new(&registry).build_routes(&Bare);

		// Assert
		assert_eq!(routes.routes()[0].full_path, "/ping");
	}

	#[rstest]
	fn unannotated_controller_yields_empty_table() {
		// Arrange
		let registry = MetadataRegistry::new();

		// Act
		let routes = RouteTableBuilder::new(&registry).build_routes(&Bare);

		// Assert
		assert!(routes.is_empty());
	}

	#[rstest]
	fn handler_for_other_controller_is_not_used() {
		// Arrange
		struct Other;
		impl Controller for Other {
			type Output = u8;
		}
		let registry = MetadataRegistry::new();
		let subject = Subject::of::<Bare>();
		registry.define(subject, Some("ping"), keys::METHOD, Method::GET);
		registry.define(subject, Some("ping"), keys::PATH, "/ping".to_string());
		registry.define(
			subject,
			Some("ping"),
			keys::HANDLER,
			Handler::<Other>::new(|_: &Other| 0),
		);

		// Act
		let routes = RouteTableBuilder::new(&registry).build_routes(&Bare);

		// Assert
		assert!(routes.is_empty());
	}
}
