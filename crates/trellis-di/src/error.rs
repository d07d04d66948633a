//! Dependency injection errors

use crate::PropertyDependency;
use thiserror::Error;

/// Errors reported by the typed and checking helpers of the container.
///
/// Plain lookups never fail: an unregistered key resolves to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiError {
	#[error("No registration for key: {0}")]
	NotRegistered(String),

	#[error("Expected an instance of `{expected}`, found `{actual}`")]
	TypeMismatch {
		expected: &'static str,
		actual: &'static str,
	},

	#[error("`{owner}` has no injectable property `{property}`")]
	UnknownProperty {
		owner: &'static str,
		property: String,
	},

	#[error("Injection slot for `{0}` is already filled")]
	AlreadyInjected(&'static str),

	#[error(
		"Property dependencies on unregistered keys: {}",
		.0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
	)]
	UnresolvedDependencies(Vec<PropertyDependency>),
}

pub type DiResult<T> = Result<T, DiError>;
