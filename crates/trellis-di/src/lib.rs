//! # Trellis Dependency Injection
//!
//! Keyed singleton container with post-construction property injection.
//!
//! ## Features
//!
//! - **Keyed**: factories are registered under stable string keys
//! - **Lazy singletons**: each key is realized once, on first resolve
//! - **Property injection**: declared `(owner type, property) -> key` entries
//!   are filled right after construction, in declaration order
//! - **Declarative bootstrap**: [`Registrar`] and [`Component`] express
//!   provide/inject annotations as one explicit registration pass
//!
//! ## Example
//!
//! ```rust
//! use trellis_di::{Container, DiError, DiResult, Injectable, Injected, Instance, Registrar};
//!
//! #[derive(Default)]
//! struct Monitor27inch;
//! impl Injectable for Monitor27inch {}
//!
//! #[derive(Default)]
//! struct Computer {
//!     monitor: Injected<Monitor27inch>,
//! }
//!
//! impl Injectable for Computer {
//!     fn inject(&self, property: &str, dependency: Instance) -> DiResult<()> {
//!         match property {
//!             "monitor" => self.monitor.set(dependency),
//!             _ => Err(DiError::unknown_property(self, property)),
//!         }
//!     }
//! }
//!
//! let container = Container::new();
//! Registrar::new(&container)
//!     .provide::<Monitor27inch>(Some("Monitor"))
//!     .provide::<Computer>(None)
//!     .inject::<Computer>("monitor", "Monitor");
//!
//! let computer = container.resolve_as::<Computer>("Computer").unwrap();
//! let monitor = container.resolve_as::<Monitor27inch>("Monitor").unwrap();
//! assert!(std::sync::Arc::ptr_eq(computer.monitor.get().unwrap(), &monitor));
//! ```
//!
//! ## Cycles
//!
//! There is no cycle detection. The raw instance is cached before its
//! properties are injected, so property cycles resolve with each side holding
//! the other. Factories that resolve each other's keys while constructing
//! recurse until the stack is exhausted.

mod container;
mod dependency;
mod error;
mod injectable;
mod injected;
pub mod registrar;

pub use container::Container;
pub use dependency::{DependencyMap, PropertyDependency};
pub use error::{DiError, DiResult};
pub use injectable::{Injectable, Instance, same_instance};
pub use injected::Injected;
pub use registrar::{Component, Registrar, provide_key};
