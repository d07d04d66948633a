//! # Trellis URLs
//!
//! Route tables built from controller metadata.
//!
//! Controllers are annotated during bootstrap with a [`ControllerRegistrar`],
//! which records a root path and, per member, a handler, a request method and
//! a request path in a [`MetadataRegistry`](trellis_metadata::MetadataRegistry).
//! [`RouteTableBuilder`] later reads that metadata back for a realized
//! controller and emits an ordered [`RouteTable`].
//!
//! Dispatching requests to the emitted handlers is up to the caller.

mod builder;
mod controller;
mod registrar;
mod route;

pub use builder::RouteTableBuilder;
pub use controller::{Controller, Handler};
pub use registrar::ControllerRegistrar;
pub use route::{RouteDescriptor, RouteTable};

pub use http::Method;
