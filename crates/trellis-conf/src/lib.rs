//! # Trellis Configuration
//!
//! Layered application settings: inline TOML, TOML files and environment
//! overrides, merged in the order they are added and validated once.
//!
//! ```toml
//! [routes]
//! prefix = "/api"
//! warn_on_collision = true
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```

mod builder;
mod error;
mod settings;

pub use builder::SettingsBuilder;
pub use error::{ConfError, ConfResult};
pub use settings::{LOG_LEVELS, LoggingSettings, RouteSettings, Settings};
