//! Route descriptors and ordered route tables

use crate::{Controller, Handler};
use http::Method;
use std::fmt;

/// One emitted route: full path, request method and handler.
pub struct RouteDescriptor<C: Controller> {
	/// Global prefix, controller root and handler path, concatenated
	pub full_path: String,
	pub method: Method,
	pub handler: Handler<C>,
	/// Controller member the route was built from
	pub member: String,
}

impl<C: Controller> RouteDescriptor<C> {
	/// Invokes the route's handler against `controller`.
	pub fn invoke(&self, controller: &C) -> C::Output {
		self.handler.call(controller)
	}
}

impl<C: Controller> Clone for RouteDescriptor<C> {
	fn clone(&self) -> Self {
		Self {
			full_path: self.full_path.clone(),
			method: self.method.clone(),
			handler: self.handler.clone(),
			member: self.member.clone(),
		}
	}
}

impl<C: Controller> fmt::Debug for RouteDescriptor<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteDescriptor")
			.field("full_path", &self.full_path)
			.field("method", &self.method)
			.field("member", &self.member)
			.finish_non_exhaustive()
	}
}

impl<C: Controller> fmt::Display for RouteDescriptor<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.method, self.full_path)
	}
}

/// Route descriptors in controller declaration order.
///
/// Duplicate `(method, full_path)` pairs are kept as emitted; see
/// [`RouteTable::collisions`].
pub struct RouteTable<C: Controller> {
	routes: Vec<RouteDescriptor<C>>,
}

impl<C: Controller> RouteTable<C> {
	pub(crate) fn new(routes: Vec<RouteDescriptor<C>>) -> Self {
		Self { routes }
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, RouteDescriptor<C>> {
		self.routes.iter()
	}

	pub fn routes(&self) -> &[RouteDescriptor<C>] {
		&self.routes
	}

	/// First route matching `method` and `path` exactly.
	pub fn find(&self, method: &Method, path: &str) -> Option<&RouteDescriptor<C>> {
		self.routes
			.iter()
			.find(|route| route.method == *method && route.full_path == path)
	}

	/// `(method, full_path)` pairs emitted more than once, each listed once,
	/// in order of first appearance.
	pub fn collisions(&self) -> Vec<(Method, String)> {
		let mut collisions: Vec<(Method, String)> = Vec::new();
		for (index, route) in self.routes.iter().enumerate() {
			let repeated = self.routes[..index]
				.iter()
				.any(|earlier| earlier.method == route.method && earlier.full_path == route.full_path);
			let listed = collisions
				.iter()
				.any(|(method, path)| *method == route.method && *path == route.full_path);
			if repeated && !listed {
				collisions.push((route.method.clone(), route.full_path.clone()));
			}
		}
		collisions
	}

	pub fn into_routes(self) -> Vec<RouteDescriptor<C>> {
		self.routes
	}
}

impl<C: Controller> Clone for RouteTable<C> {
	fn clone(&self) -> Self {
		Self {
			routes: self.routes.clone(),
		}
	}
}

impl<C: Controller> fmt::Debug for RouteTable<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.routes).finish()
	}
}

impl<C: Controller> fmt::Display for RouteTable<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, route) in self.routes.iter().enumerate() {
			if index > 0 {
				writeln!(f)?;
			}
			write!(f, "{route}")?;
		}
		Ok(())
	}
}

impl<C: Controller> IntoIterator for RouteTable<C> {
	type Item = RouteDescriptor<C>;
	type IntoIter = std::vec::IntoIter<RouteDescriptor<C>>;

	fn into_iter(self) -> Self::IntoIter {
		self.routes.into_iter()
	}
}

impl<'a, C: Controller> IntoIterator for &'a RouteTable<C> {
	type Item = &'a RouteDescriptor<C>;
	type IntoIter = std::slice::Iter<'a, RouteDescriptor<C>>;

	fn into_iter(self) -> Self::IntoIter {
		self.routes.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Noop;

	impl Controller for Noop {
		type Output = ();
	}

	fn descriptor(method: Method, path: &str) -> RouteDescriptor<Noop> {
		RouteDescriptor {
			full_path: path.to_string(),
			method,
			handler: Handler::new(|_: &Noop| ()),
			member: path.trim_start_matches('/').to_string(),
		}
	}

	#[rstest]
	fn collisions_list_each_duplicate_pair_once() {
		// Arrange
		let table = RouteTable::new(vec![
			descriptor(Method::GET, "/a"),
			descriptor(Method::POST, "/a"),
			descriptor(Method::GET, "/a"),
			descriptor(Method::GET, "/a"),
			descriptor(Method::GET, "/b"),
		]);

		// Act
		let collisions = table.collisions();

		// Assert
		assert_eq!(collisions, vec![(Method::GET, "/a".to_string())]);
		assert_eq!(table.len(), 5);
	}

	#[rstest]
	fn display_renders_one_line_per_route() {
		// Arrange
		let table = RouteTable::new(vec![
			descriptor(Method::GET, "/article/detail"),
			descriptor(Method::POST, "/article/add"),
		]);

		// Act
		let rendered = table.to_string();

		// Assert
		assert_eq!(rendered, "GET /article/detail\nPOST /article/add");
	}
}
