//! Value Objects
//!
//! Immutable data carried between the configuration store and the
//! resolution engine.

pub mod object_config;
pub mod property;
pub mod value;

pub use object_config::{ObjectConfig, PropertySetting, PropertySource, RefParam};
pub use property::{PropertyType, PropertyValue};
pub use value::Value;
