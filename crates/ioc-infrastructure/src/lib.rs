//! # Infrastructure Layer
//!
//! Concrete collaborators of the resolution engine and the ambient
//! concerns around it.
//!
//! ## Module Categories
//!
//! ### Collaborators
//! | Module | Description |
//! |--------|-------------|
//! | [`store`] | TOML/JSON object configuration store |
//! | [`loader`] | Registry-backed type loader with search paths |
//! | [`check`] | Existence checks over loaded configuration |
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Settings loaded through figment (defaults, TOML, env) |
//! | [`bootstrap`] | Builds a ready-to-use container from settings |
//! | [`constants`] | Centralized constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod bootstrap;
pub mod check;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod loader;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use bootstrap::{IocContainer, bootstrap, bootstrap_with_registry};
pub use check::{ConfigIssue, check_config};
pub use config::{ConfigLoader, IocSettings, LoggingConfig};
pub use error_ext::ErrorContext;
pub use loader::RegistryTypeLoader;
pub use store::TomlConfigStore;
