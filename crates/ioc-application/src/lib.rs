//! Application Layer - IoC object builder
//!
//! Turns `ObjectConfig` records into fully wired objects.
//!
//! ## Architecture
//!
//! ```text
//! get_object_by_id("p2")
//!        │
//!        ▼
//! ConfigStore::get_object_config ──► ArgumentBuilder ──► (recursive by-id resolution)
//!        │                                  │
//!        ▼                                  ▼
//! TypeLoader::create_instance ◄──── Vec<Arg> (literals + references)
//!        │      ▲
//!        │      └── SingletonRegistry (singleton path only)
//!        ▼
//! PropertyInjector::apply ──► Instance
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `ioc-domain`: value objects, ports and errors
//! - Pure Rust libraries for logging, concurrent maps and registration

pub mod registry;
pub mod resolution;

pub use registry::{MANAGED_TYPES, ManagedTypeEntry, TypeDescriptor, TypeRegistry};
pub use resolution::{
    ArgumentBuilder, ObjectResolver, PropertyInjector, ReferenceResolver, SingletonRegistry,
    convert_value,
};
