//! Metadata registry

use crate::Subject;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

type MetadataValue = Arc<dyn Any + Send + Sync>;
type Entries = IndexMap<String, MetadataValue>;

#[derive(Default)]
struct SubjectEntries {
	/// Metadata attached to the subject itself
	own: Entries,
	/// Metadata attached to members, in member declaration order
	members: IndexMap<String, Entries>,
}

impl SubjectEntries {
	fn entries(&self, member: Option<&str>) -> Option<&Entries> {
		match member {
			None => Some(&self.own),
			Some(member) => self.members.get(member),
		}
	}

	fn entries_mut(&mut self, member: Option<&str>) -> &mut Entries {
		match member {
			None => &mut self.own,
			Some(member) => self.members.entry(member.to_owned()).or_default(),
		}
	}
}

/// Store of out-of-band values keyed by `(subject, member, key)`.
///
/// Values of any `Send + Sync` type can be stored; lookups name the expected
/// type and a value of a different type reads as absent. Absence is never an
/// error: callers choose their own defaults.
///
/// The registry is populated during bootstrap and is safe to read from many
/// threads afterwards.
///
/// # Examples
///
/// ```
/// use trellis_metadata::{MetadataRegistry, Subject};
///
/// struct Animal;
///
/// let registry = MetadataRegistry::new();
/// let animal = Subject::of::<Animal>();
///
/// registry.define(animal, None, "class", "Animal metadata".to_string());
/// registry.define(animal, Some("eat"), "method", "eat metadata".to_string());
///
/// let class = registry.get::<String>(animal, None, "class").unwrap();
/// assert_eq!(class.as_str(), "Animal metadata");
/// assert!(registry.get::<String>(animal, Some("sleep"), "method").is_none());
/// ```
#[derive(Default)]
pub struct MetadataRegistry {
	subjects: RwLock<HashMap<Subject, SubjectEntries>>,
}

impl MetadataRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `value` under `(subject, member, key)`, replacing any previous value.
	///
	/// A replaced key keeps its original definition position. The first
	/// definition for a member fixes that member's declaration position.
	pub fn define<V>(&self, subject: Subject, member: Option<&str>, key: &str, value: V)
	where
		V: Any + Send + Sync,
	{
		self.define_arc(subject, member, key, Arc::new(value));
	}

	/// Stores an already shared value under `(subject, member, key)`.
	pub fn define_arc<V>(&self, subject: Subject, member: Option<&str>, key: &str, value: Arc<V>)
	where
		V: Any + Send + Sync,
	{
		tracing::trace!(subject = %subject, member = ?member, key, "defining metadata");
		let mut subjects = self.subjects.write();
		subjects
			.entry(subject)
			.or_default()
			.entries_mut(member)
			.insert(key.to_owned(), value);
	}

	/// Appends `item` to the list stored under `(subject, member, key)`.
	///
	/// A missing list, or a value that is not a `Vec<V>`, starts a new list.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_metadata::{MetadataRegistry, Subject};
	///
	/// struct Person;
	///
	/// let registry = MetadataRegistry::new();
	/// let person = Subject::of::<Person>();
	/// registry.append(person, None, "required", "name".to_string());
	/// registry.append(person, None, "required", "age".to_string());
	///
	/// let required = registry.get::<Vec<String>>(person, None, "required").unwrap();
	/// assert_eq!(*required, vec!["name".to_string(), "age".to_string()]);
	/// ```
	pub fn append<V>(&self, subject: Subject, member: Option<&str>, key: &str, item: V)
	where
		V: Any + Clone + Send + Sync,
	{
		let mut subjects = self.subjects.write();
		let entries = subjects.entry(subject).or_default().entries_mut(member);
		let mut list = entries
			.get(key)
			.and_then(|value| value.clone().downcast::<Vec<V>>().ok())
			.map(|existing| existing.as_ref().clone())
			.unwrap_or_default();
		list.push(item);
		entries.insert(key.to_owned(), Arc::new(list));
	}

	/// Returns the value stored under `(subject, member, key)`.
	///
	/// Returns `None` when nothing is stored or the stored value is not a `V`.
	pub fn get<V>(&self, subject: Subject, member: Option<&str>, key: &str) -> Option<Arc<V>>
	where
		V: Any + Send + Sync,
	{
		let value = {
			let subjects = self.subjects.read();
			subjects.get(&subject)?.entries(member)?.get(key)?.clone()
		};
		match value.downcast::<V>() {
			Ok(value) => Some(value),
			Err(_) => {
				tracing::trace!(
					subject = %subject,
					member = ?member,
					key,
					expected = std::any::type_name::<V>(),
					"metadata present with a different type"
				);
				None
			}
		}
	}

	/// Returns `true` if any value is stored under `(subject, member, key)`.
	pub fn has(&self, subject: Subject, member: Option<&str>, key: &str) -> bool {
		let subjects = self.subjects.read();
		subjects
			.get(&subject)
			.and_then(|entries| entries.entries(member))
			.is_some_and(|entries| entries.contains_key(key))
	}

	/// Keys defined for `(subject, member)`, in definition order.
	pub fn keys(&self, subject: Subject, member: Option<&str>) -> Vec<String> {
		let subjects = self.subjects.read();
		subjects
			.get(&subject)
			.and_then(|entries| entries.entries(member))
			.map(|entries| entries.keys().cloned().collect())
			.unwrap_or_default()
	}

	/// Members of `subject` that carry metadata, in declaration order.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_metadata::{MetadataRegistry, Subject};
	///
	/// struct ArticleController;
	///
	/// let registry = MetadataRegistry::new();
	/// let subject = Subject::of::<ArticleController>();
	/// registry.define(subject, Some("get_detail"), "path", "/detail".to_string());
	/// registry.define(subject, Some("add_article"), "path", "/add".to_string());
	/// registry.define(subject, Some("get_detail"), "method", "GET".to_string());
	///
	/// assert_eq!(registry.list_members(subject), vec!["get_detail", "add_article"]);
	/// ```
	pub fn list_members(&self, subject: Subject) -> Vec<String> {
		let subjects = self.subjects.read();
		subjects
			.get(&subject)
			.map(|entries| entries.members.keys().cloned().collect())
			.unwrap_or_default()
	}

	/// Number of subjects with at least one definition.
	pub fn subject_count(&self) -> usize {
		self.subjects.read().len()
	}

	/// Returns `true` if nothing has been defined yet.
	pub fn is_empty(&self) -> bool {
		self.subjects.read().is_empty()
	}
}

impl std::fmt::Debug for MetadataRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let subjects = self.subjects.read();
		f.debug_struct("MetadataRegistry")
			.field("subjects", &subjects.keys().collect::<Vec<_>>())
			.finish()
	}
}
