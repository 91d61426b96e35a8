//! Domain Port Interfaces
//!
//! Contracts between the resolution engine and the outside world.
//!
//! ## Organization
//!
//! - **managed** - `Managed` capability implemented by every constructible type,
//!   plus the `Instance` and `Arg` shapes that flow through construction
//! - **type_loader** - locating and constructing a type by qualified name
//! - **config_store** - lookup of `ObjectConfig` records by identifier

pub mod config_store;
pub mod managed;
pub mod type_loader;

pub use config_store::ConfigStore;
pub use managed::{Arg, Instance, Managed, PropertyInfo, describe_args};
pub use type_loader::TypeLoader;
