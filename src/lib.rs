//! # Trellis
//!
//! Metadata-driven dependency injection and declarative route tables.
//!
//! ## Crates
//!
//! - [`metadata`]: out-of-band metadata keyed by type and member, plus
//!   property validation rules
//! - [`di`]: keyed lazy singletons with post-construction property injection
//! - [`urls`]: controller route annotations and ordered route tables
//! - [`conf`]: layered TOML and environment settings
//!
//! ## Bootstrap
//!
//! An [`Application`] replaces annotation-time side effects with one explicit
//! bootstrap pass:
//!
//! ```
//! use trellis::conf::SettingsBuilder;
//! use trellis::di::{DiError, DiResult, Injectable, Injected, Instance};
//! use trellis::urls::Controller;
//! use trellis::Application;
//!
//! #[derive(Default)]
//! struct ArticleService;
//! impl Injectable for ArticleService {}
//!
//! #[derive(Default)]
//! struct ArticleController {
//!     service: Injected<ArticleService>,
//! }
//!
//! impl Injectable for ArticleController {
//!     fn inject(&self, property: &str, dependency: Instance) -> DiResult<()> {
//!         match property {
//!             "service" => self.service.set(dependency),
//!             _ => Err(DiError::unknown_property(self, property)),
//!         }
//!     }
//! }
//!
//! impl Controller for ArticleController {
//!     type Output = bool;
//! }
//!
//! let settings = SettingsBuilder::new()
//!     .with_toml_str("[routes]\nprefix = \"/api\"")
//!     .build()
//!     .unwrap();
//! let app = Application::new(settings);
//! app.bootstrap(|ctx| {
//!     ctx.registrar()
//!         .provide::<ArticleService>(None)
//!         .provide::<ArticleController>(None)
//!         .inject::<ArticleController>("service", "ArticleService");
//!     ctx.controller::<ArticleController>()
//!         .root("/article")
//!         .get("get_detail", "/detail", |c| c.service.is_set());
//! })
//! .unwrap();
//!
//! let controller = app.resolve_as::<ArticleController>("ArticleController").unwrap();
//! let routes = app.routes::<ArticleController>("ArticleController").unwrap();
//! assert_eq!(routes.to_string(), "GET /api/article/detail");
//! assert!(routes.routes()[0].invoke(&controller));
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` (default): [`init_logging`] backed by `tracing-subscriber`

mod app;
mod error;
#[cfg(feature = "logging")]
mod logging;

pub use app::{Application, BootstrapContext};
pub use error::{AppError, AppResult};
#[cfg(feature = "logging")]
pub use logging::{LOG_ENV, init_logging};

pub use trellis_conf as conf;
pub use trellis_di as di;
pub use trellis_metadata as metadata;
pub use trellis_urls as urls;
