//! Managed Type Registry
//!
//! Maps qualified class names to constructor factories. Types register
//! in two ways:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Type Registration Flow                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Crate defines:   #[linkme::distributed_slice(MANAGED_TYPES)]│
//! │                      static ENTRY: ManagedTypeEntry = ...       │
//! │                              ↓                                  │
//! │  2. Runtime adds:    registry.register("demo.Person", ..)       │
//! │                              ↓                                  │
//! │  3. Loader queries:  registry.get("demo.Person")                │
//! │                              ↓                                  │
//! │  4. Factory builds:  (descriptor.factory)(&args)                │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Runtime registrations shadow linked entries with the same name.
//!
//! ## Registering a Type
//!
//! ```ignore
//! use ioc_application::registry::{ManagedTypeEntry, MANAGED_TYPES};
//!
//! #[linkme::distributed_slice(MANAGED_TYPES)]
//! static PERSON: ManagedTypeEntry = ManagedTypeEntry {
//!     name: "demo.Person",
//!     description: "A person with a name and an age",
//!     factory: Person::construct,
//! };
//! ```

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use ioc_domain::{Arg, Instance, Result};

/// Constructor factory shared by registry entries
pub type Factory = Arc<dyn Fn(&[Arg]) -> Result<Instance> + Send + Sync>;

/// Compile-time registry entry for managed types
///
/// Each type registers itself with this entry using
/// `#[linkme::distributed_slice(MANAGED_TYPES)]`.
pub struct ManagedTypeEntry {
    /// Qualified class name (e.g., "demo.Person")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Constructor dispatch over the argument vector
    pub factory: fn(&[Arg]) -> Result<Instance>,
}

// Auto-collection via linkme distributed slices - types submit entries at compile time
#[linkme::distributed_slice]
pub static MANAGED_TYPES: [ManagedTypeEntry] = [..];

/// Resolved registry entry
#[derive(Clone)]
pub struct TypeDescriptor {
    name: String,
    description: String,
    factory: Factory,
}

impl TypeDescriptor {
    /// Qualified class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the factory against `args`
    pub fn construct(&self, args: &[Arg]) -> Result<Instance> {
        (self.factory)(args)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl From<&ManagedTypeEntry> for TypeDescriptor {
    fn from(entry: &ManagedTypeEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            factory: Arc::new(entry.factory),
        }
    }
}

/// Registry of constructible types
///
/// Combines the linked `MANAGED_TYPES` slice with runtime registrations.
pub struct TypeRegistry {
    runtime: DashMap<String, TypeDescriptor>,
    include_linked: bool,
}

impl TypeRegistry {
    /// Registry that sees linked entries plus runtime registrations
    pub fn new() -> Self {
        Self {
            runtime: DashMap::new(),
            include_linked: true,
        }
    }

    /// Registry that ignores linked entries (isolated tests, embedding)
    pub fn isolated() -> Self {
        Self {
            runtime: DashMap::new(),
            include_linked: false,
        }
    }

    /// Register a factory under `name`, replacing any earlier runtime entry
    pub fn register<F>(&self, name: impl Into<String>, description: impl Into<String>, factory: F)
    where
        F: Fn(&[Arg]) -> Result<Instance> + Send + Sync + 'static,
    {
        let name = name.into();
        let descriptor = TypeDescriptor {
            name: name.clone(),
            description: description.into(),
            factory: Arc::new(factory),
        };
        self.runtime.insert(name, descriptor);
    }

    /// Remove a runtime registration; linked entries cannot be removed
    pub fn unregister(&self, name: &str) -> bool {
        self.runtime.remove(name).is_some()
    }

    /// Look up a type by exact qualified name
    pub fn get(&self, name: &str) -> Option<TypeDescriptor> {
        if let Some(descriptor) = self.runtime.get(name) {
            return Some(descriptor.value().clone());
        }
        self.linked()
            .iter()
            .find(|entry| entry.name == name)
            .map(TypeDescriptor::from)
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.runtime.contains_key(name) || self.linked().iter().any(|entry| entry.name == name)
    }

    /// All registered types as (name, description), sorted by name
    pub fn list(&self) -> Vec<(String, String)> {
        let mut types: Vec<(String, String)> = self
            .runtime
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().description.clone()))
            .collect();

        for entry in self.linked() {
            if !self.runtime.contains_key(entry.name) {
                types.push((entry.name.to_string(), entry.description.to_string()));
            }
        }

        types.sort();
        types
    }

    fn linked(&self) -> &'static [ManagedTypeEntry] {
        if self.include_linked {
            &*MANAGED_TYPES
        } else {
            &[]
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("runtime", &self.runtime.len())
            .field("include_linked", &self.include_linked)
            .finish()
    }
}
