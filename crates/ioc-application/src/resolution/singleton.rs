//! Singleton instance cache
//!
//! One instance per class name, compared case-insensitively. Reads go
//! straight to the concurrent map; creation takes the registry-wide lock
//! and re-checks before constructing, so concurrent first requests for a
//! class construct it exactly once. The lock is reentrant: a factory may
//! request other singletons from the same registry on the same thread.
//! Failed constructions are not cached.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::ReentrantMutex;
use ioc_domain::{Instance, Result};
use tracing::{debug, info};

/// Process- or test-scoped cache of singleton instances
#[derive(Default)]
pub struct SingletonRegistry {
    instances: DashMap<String, Instance>,
    creation_lock: ReentrantMutex<()>,
}

impl SingletonRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached instance for `class_name`, creating it with `create` on first use
    ///
    /// `create` runs at most once per class name across all threads, unless
    /// it fails, in which case nothing is cached and a later call retries.
    pub fn get_or_create<F>(&self, class_name: &str, create: F) -> Result<Instance>
    where
        F: FnOnce() -> Result<Instance>,
    {
        let key = cache_key(class_name);
        if let Some(existing) = self.lookup(&key) {
            return Ok(existing);
        }

        // One lock for every class name
        let _guard = self.creation_lock.lock();

        if let Some(existing) = self.lookup(&key) {
            debug!(class = %class_name, "Singleton created by a concurrent caller");
            return Ok(existing);
        }

        let instance = create()?;
        self.instances.insert(key, Arc::clone(&instance));
        info!(class = %class_name, "Published singleton instance");
        Ok(instance)
    }

    /// Cached instance for `class_name`, if any
    pub fn get(&self, class_name: &str) -> Option<Instance> {
        self.lookup(&cache_key(class_name))
    }

    /// Whether an instance is cached for `class_name`
    pub fn contains(&self, class_name: &str) -> bool {
        self.instances.contains_key(&cache_key(class_name))
    }

    /// Number of cached instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Drop every cached instance
    pub fn clear(&self) {
        let _guard = self.creation_lock.lock();
        self.instances.clear();
    }

    fn lookup(&self, key: &str) -> Option<Instance> {
        self.instances
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
    }
}

impl fmt::Debug for SingletonRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonRegistry")
            .field("instances", &self.instances.len())
            .finish_non_exhaustive()
    }
}

fn cache_key(class_name: &str) -> String {
    class_name.to_lowercase()
}
