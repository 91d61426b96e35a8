//! Resolution Engine
//!
//! Builds objects from configuration:
//!
//! - [`arguments`] merges literals with resolved references at their declared positions
//! - [`properties`] assigns property settings after construction
//! - [`conversion`] coerces configuration literals to declared property types
//! - [`singleton`] caches one instance per class name
//! - [`resolver`] exposes the transient and singleton entry points

pub mod arguments;
pub mod conversion;
pub mod properties;
pub mod resolver;
pub mod singleton;

pub use arguments::ArgumentBuilder;
pub use conversion::convert_value;
pub use properties::PropertyInjector;
pub use resolver::{ObjectResolver, ReferenceResolver};
pub use singleton::SingletonRegistry;
