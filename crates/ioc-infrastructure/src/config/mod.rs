//! Settings for the IoC container
//!
//! Settings are separate from object configuration: they say where
//! object files live and how to log, while object files describe the
//! objects themselves (see [`crate::store`]).

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{IocSettings, LoggingConfig};
