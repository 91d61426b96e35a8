//! # IoC Object Builder
//!
//! Builds object graphs from declarative configuration: each configured
//! identifier names a class, literal and reference constructor arguments,
//! and properties to set after construction.
//!
//! This crate is the public facade over the layered workspace and ships
//! the `ioc` command line tool.
//!
//! ## Example
//!
//! ```ignore
//! use ioc::infrastructure::{ConfigLoader, bootstrap};
//!
//! let container = bootstrap(ConfigLoader::new().load()?)?;
//! let person = container.resolver().get_object_by_id("p1")?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, the `Managed` capability, ports and errors
//! - `application` - Type registry and the resolution engine
//! - `infrastructure` - Config store, type loader, settings, logging, bootstrap
//! - `demo` - Sample managed types registered at link time

pub mod cli;
pub mod demo;

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ioc_domain::*;
}

/// Application layer - type registry and resolution engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use ioc_application::*;
}

/// Infrastructure layer - config store, type loader, settings and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ioc_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the resolution entry points at the crate root
pub use application::{ObjectResolver, TypeRegistry};
pub use infrastructure::{IocContainer, bootstrap};
