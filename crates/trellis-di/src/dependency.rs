//! Property dependency map

use indexmap::IndexMap;
use std::fmt;

/// One declared property dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDependency {
	/// Runtime type name of the owner
	pub owner: String,
	/// Property assigned on the owner
	pub property: String,
	/// Registration key resolved for the property
	pub key: String,
}

impl fmt::Display for PropertyDependency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "`{}.{}` -> `{}`", self.owner, self.property, self.key)
	}
}

/// Declared `(owner type, property) -> key` entries, in declaration order.
///
/// Many owner/property pairs may point at the same key. Declaring the same
/// owner/property pair again replaces its key without moving the entry.
#[derive(Debug, Default, Clone)]
pub struct DependencyMap {
	entries: IndexMap<(String, String), String>,
}

impl DependencyMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `owner.property` is filled from `key`.
	///
	/// Returns the previously declared key, if any.
	pub fn insert(
		&mut self,
		owner: impl Into<String>,
		property: impl Into<String>,
		key: impl Into<String>,
	) -> Option<String> {
		self.entries
			.insert((owner.into(), property.into()), key.into())
	}

	/// `(property, key)` pairs declared for exactly `owner`, in declaration order.
	pub fn for_owner(&self, owner: &str) -> Vec<(String, String)> {
		self.entries
			.iter()
			.filter(|((entry_owner, _), _)| entry_owner == owner)
			.map(|((_, property), key)| (property.clone(), key.clone()))
			.collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = PropertyDependency> + '_ {
		self.entries
			.iter()
			.map(|((owner, property), key)| PropertyDependency {
				owner: owner.clone(),
				property: property.clone(),
				key: key.clone(),
			})
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
