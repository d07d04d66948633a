//! # Trellis Metadata
//!
//! Out-of-band metadata for types and their members.
//!
//! Metadata is attached to a [`Subject`] (a type), optionally narrowed to a
//! named member, under a string key. The registry is populated once during
//! bootstrap and then read by the container and route builder.
//!
//! ## Example
//!
//! ```rust
//! use trellis_metadata::{MetadataRegistry, Subject, keys};
//!
//! struct ArticleController;
//!
//! let registry = MetadataRegistry::new();
//! let subject = Subject::of::<ArticleController>();
//!
//! registry.define(subject, None, keys::PATH, "/article".to_string());
//! registry.define(subject, Some("get_detail"), keys::PATH, "/detail".to_string());
//!
//! let root = registry.get::<String>(subject, None, keys::PATH);
//! assert_eq!(root.as_deref().map(String::as_str), Some("/article"));
//! assert_eq!(registry.keys(subject, Some("get_detail")), vec![keys::PATH]);
//! ```
//!
//! ## Property validation
//!
//! The [`validation`] module builds on the registry to declare required
//! properties and expected value kinds, then check instances against them.

pub mod keys;
mod registry;
mod subject;
pub mod validation;

pub use registry::MetadataRegistry;
pub use subject::{Subject, short_type_name};
pub use validation::{
	Inspect, PropertyRules, PropertyValue, ValidationError, ValidationResult, ValueKind, validate,
};
