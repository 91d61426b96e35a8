//! # Domain Layer
//!
//! Core types of the IoC object builder. Everything the resolution engine
//! reasons about lives here: configuration records, literal values,
//! constructor arguments, the `Managed` capability that replaces runtime
//! reflection, and the ports implemented by the outer layers.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `ObjectConfig`, reference descriptors, literal and property values |
//! | [`ports`] | `Managed`, `TypeLoader`, `ConfigStore` contracts |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Shared constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Arg, ConfigStore, Instance, Managed, PropertyInfo, TypeLoader};
pub use value_objects::{
    ObjectConfig, PropertySetting, PropertySource, PropertyType, PropertyValue, RefParam, Value,
};
