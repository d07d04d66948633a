//! Property validation driven by metadata
//!
//! Rules are declared per type with [`PropertyRules`] and stored in a
//! [`MetadataRegistry`]. [`validate`] checks an instance against them:
//! every present property with a declared [`ValueKind`] must hold a value of
//! that kind, and every required property must be present.
//!
//! ## Example
//!
//! ```rust
//! use trellis_metadata::validation::{
//!     Inspect, PropertyRules, PropertyValue, ValidationError, ValueKind, validate,
//! };
//! use trellis_metadata::MetadataRegistry;
//!
//! #[derive(Default)]
//! struct Person {
//!     name: Option<String>,
//!     age: Option<f64>,
//! }
//!
//! impl Inspect for Person {
//!     fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
//!         let mut present = Vec::new();
//!         if let Some(name) = &self.name {
//!             present.push(("name", PropertyValue::String(name.clone())));
//!         }
//!         if let Some(age) = self.age {
//!             present.push(("age", PropertyValue::Number(age)));
//!         }
//!         present
//!     }
//! }
//!
//! let registry = MetadataRegistry::new();
//! PropertyRules::<Person>::for_type(&registry)
//!     .required("name")
//!     .required("age")
//!     .value_kind("age", ValueKind::Number);
//!
//! let person = Person { name: Some("wang".into()), age: None };
//! assert!(matches!(
//!     validate(&registry, &person),
//!     Err(ValidationError::Required(property)) if property == "age"
//! ));
//! ```

use crate::{MetadataRegistry, Subject, keys};
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

/// Kind of value a property is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	String,
	Number,
	Boolean,
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ValueKind::String => "string",
			ValueKind::Number => "number",
			ValueKind::Boolean => "boolean",
		})
	}
}

/// Value of a present property, as reported by [`Inspect`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	String(String),
	Number(f64),
	Boolean(bool),
}

impl PropertyValue {
	/// Kind of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			PropertyValue::String(_) => ValueKind::String,
			PropertyValue::Number(_) => ValueKind::Number,
			PropertyValue::Boolean(_) => ValueKind::Boolean,
		}
	}
}

/// Exposes the properties an instance currently holds.
///
/// Unset properties are simply left out of the returned list.
pub trait Inspect: 'static {
	fn properties(&self) -> Vec<(&'static str, PropertyValue)>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
	#[error("{0} is required")]
	Required(String),

	#[error("{property} expected {expected}, found {actual}")]
	TypeMismatch {
		property: String,
		expected: ValueKind,
		actual: ValueKind,
	},
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Bootstrap-time declaration of property rules for type `T`.
pub struct PropertyRules<'a, T: 'static> {
	registry: &'a MetadataRegistry,
	subject: Subject,
	_target: PhantomData<fn() -> T>,
}

impl<'a, T: 'static> PropertyRules<'a, T> {
	/// Starts declaring rules for `T` in `registry`.
	pub fn for_type(registry: &'a MetadataRegistry) -> Self {
		Self {
			registry,
			subject: Subject::of::<T>(),
			_target: PhantomData,
		}
	}

	/// Marks `property` as required.
	pub fn required(self, property: &str) -> Self {
		self.registry
			.append(self.subject, None, keys::REQUIRED, property.to_owned());
		self
	}

	/// Declares the kind of value `property` must hold when present.
	pub fn value_kind(self, property: &str, kind: ValueKind) -> Self {
		self.registry
			.define(self.subject, Some(property), keys::VALUE_KIND, kind);
		self
	}
}

/// Checks `instance` against the rules declared for its type.
///
/// Value kinds of present properties are checked first, then required
/// properties. The first violation is returned.
pub fn validate<T: Inspect>(registry: &MetadataRegistry, instance: &T) -> ValidationResult<()> {
	let subject = Subject::of_val(instance);
	let present = instance.properties();

	for (property, value) in &present {
		if let Some(expected) = registry.get::<ValueKind>(subject, Some(*property), keys::VALUE_KIND)
		{
			if value.kind() != *expected {
				return Err(ValidationError::TypeMismatch {
					property: (*property).to_owned(),
					expected: *expected,
					actual: value.kind(),
				});
			}
		}
	}

	let required = registry
		.get::<Vec<String>>(subject, None, keys::REQUIRED)
		.map(|list| list.as_ref().clone())
		.unwrap_or_default();
	for property in required {
		if !present.iter().any(|(name, _)| *name == property) {
			return Err(ValidationError::Required(property));
		}
	}

	Ok(())
}
