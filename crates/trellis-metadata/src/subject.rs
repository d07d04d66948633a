//! Subject identity for metadata lookups

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a type that metadata can be attached to.
///
/// A subject is derived from a type, never from a particular value, so a
/// type and any instance of it share the same metadata bucket. Metadata
/// attached to `ArticleController` during bootstrap is therefore visible
/// when a realized controller instance is inspected later.
#[derive(Clone, Copy)]
pub struct Subject {
	type_id: TypeId,
	name: &'static str,
}

impl Subject {
	/// Returns the subject for type `T`.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_metadata::Subject;
	///
	/// struct ArticleController;
	///
	/// let subject = Subject::of::<ArticleController>();
	/// assert_eq!(subject.short_name(), "ArticleController");
	/// ```
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			type_id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Returns the subject of the type of `value`.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_metadata::Subject;
	///
	/// struct ArticleController;
	///
	/// let controller = ArticleController;
	/// assert_eq!(Subject::of_val(&controller), Subject::of::<ArticleController>());
	/// ```
	pub fn of_val<T: 'static>(_value: &T) -> Self {
		Self::of::<T>()
	}

	/// Fully qualified type name of the subject.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Type name without its module path or generic arguments.
	pub fn short_name(&self) -> &'static str {
		short_type_name(self.name)
	}
}

impl PartialEq for Subject {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Eq for Subject {}

impl Hash for Subject {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.type_id.hash(state);
	}
}

impl fmt::Debug for Subject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Subject").field(&self.name).finish()
	}
}

impl fmt::Display for Subject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Strips the module path and generic arguments from a type name.
///
/// # Examples
///
/// ```
/// use trellis_metadata::short_type_name;
///
/// assert_eq!(short_type_name("app::devices::Monitor27inch"), "Monitor27inch");
/// assert_eq!(short_type_name("app::Wrapper<alloc::string::String>"), "Wrapper");
/// assert_eq!(short_type_name("Plain"), "Plain");
/// ```
pub fn short_type_name(full: &str) -> &str {
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashSet;

	struct Animal;
	struct Plant;

	#[rstest]
	fn subject_of_type_and_value_are_equal() {
		// Arrange
		let animal = Animal;

		// Act
		let from_type = Subject::of::<Animal>();
		let from_value = Subject::of_val(&animal);

		// Assert
		assert_eq!(from_type, from_value);
	}

	#[rstest]
	fn distinct_types_have_distinct_subjects() {
		// Arrange
		let mut set = HashSet::new();

		// Act
		set.insert(Subject::of::<Animal>());
		set.insert(Subject::of::<Plant>());
		set.insert(Subject::of_val(&Animal));

		// Assert
		assert_eq!(set.len(), 2);
	}

	#[rstest]
	#[case("Animal", "Animal")]
	#[case("zoo::mammals::Animal", "Animal")]
	#[case("zoo::Cage<zoo::mammals::Animal>", "Cage")]
	fn short_type_name_strips_path_and_generics(#[case] full: &str, #[case] expected: &str) {
		assert_eq!(short_type_name(full), expected);
	}
}
