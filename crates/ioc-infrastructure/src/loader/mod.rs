//! Registry-backed type loader
//!
//! Resolves class names against a [`TypeRegistry`]. A name is tried as
//! given first, then prefixed with each search path (`"{path}.{name}"`)
//! in the order the paths were added.

use std::sync::{Arc, PoisonError, RwLock};

use ioc_application::{TypeDescriptor, TypeRegistry};
use ioc_domain::constants::NAMESPACE_SEPARATOR;
use ioc_domain::{Arg, Error, Instance, Result, TypeLoader};
use tracing::debug;

/// Type loader over a shared type registry
#[derive(Debug)]
pub struct RegistryTypeLoader {
    registry: Arc<TypeRegistry>,
    search_paths: RwLock<Vec<String>>,
}

impl RegistryTypeLoader {
    /// Create a loader with no search paths
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self {
            registry,
            search_paths: RwLock::new(Vec::new()),
        }
    }

    /// Add each of `paths` as a search path
    pub fn with_search_paths<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            self.add_search_path(path.as_ref());
        }
        self
    }

    /// The underlying registry
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Locate the descriptor `class_name` resolves to
    pub fn locate(&self, class_name: &str) -> Option<TypeDescriptor> {
        if let Some(descriptor) = self.registry.get(class_name) {
            return Some(descriptor);
        }
        self.search_paths
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find_map(|path| {
                let qualified = format!(
                    "{}{NAMESPACE_SEPARATOR}{class_name}",
                    path.trim_end_matches(NAMESPACE_SEPARATOR)
                );
                self.registry.get(&qualified)
            })
    }
}

impl TypeLoader for RegistryTypeLoader {
    fn add_search_path(&self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        let mut paths = self
            .search_paths
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !paths.iter().any(|existing| existing == path) {
            debug!(path, "Added search path");
            paths.push(path.to_string());
        }
    }

    fn remove_search_path(&self, path: &str) {
        let path = path.trim();
        self.search_paths
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|existing| existing != path);
    }

    fn search_paths(&self) -> Vec<String> {
        self.search_paths
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn contains(&self, class_name: &str) -> bool {
        self.locate(class_name).is_some()
    }

    fn resolve_name(&self, class_name: &str) -> Option<String> {
        self.locate(class_name)
            .map(|descriptor| descriptor.name().to_string())
    }

    fn create_instance(&self, class_name: &str, args: &[Arg]) -> Result<Instance> {
        let descriptor = self
            .locate(class_name)
            .ok_or_else(|| Error::type_not_found(class_name))?;
        debug!(
            class = class_name,
            resolved = descriptor.name(),
            args = args.len(),
            "Constructing instance"
        );
        descriptor.construct(args)
    }
}
