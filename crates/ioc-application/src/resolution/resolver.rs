//! Public resolution API
//!
//! [`ObjectResolver`] wires a [`ConfigStore`], a [`TypeLoader`] and a
//! [`SingletonRegistry`] together and exposes two strategies:
//!
//! | Strategy | By class name | By configuration id |
//! |----------|---------------|---------------------|
//! | Transient | [`ObjectResolver::get_object`] | [`ObjectResolver::get_object_by_id`] |
//! | Singleton | [`ObjectResolver::get_single_object`] | [`ObjectResolver::get_single_object_by_id`] |
//!
//! Each has a typed variant that downcasts to a concrete `Managed` type.
//!
//! ## Usage
//!
//! ```ignore
//! let resolver = ObjectResolver::new(store, loader);
//! let person: Arc<Person> = resolver.get_object_by_id_typed("p1")?;
//! ```

use std::any::type_name;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use ioc_domain::{
    Arg, ConfigStore, Error, Instance, Managed, ObjectConfig, Result, TypeLoader,
};
use tracing::debug;

use super::arguments::ArgumentBuilder;
use super::properties::PropertyInjector;
use super::singleton::SingletonRegistry;

/// Resolution of a configuration identifier to an instance
///
/// Reference descriptors are resolved through this seam. Every
/// reference produces a fresh transient object; no cycle detection is
/// performed, so a cyclic configuration recurses without bound.
pub trait ReferenceResolver {
    /// Resolve `id` to a fully built instance
    fn resolve(&self, id: &str) -> Result<Instance>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Transient,
    Singleton,
}

/// Builds configured objects
#[derive(Clone)]
pub struct ObjectResolver {
    configs: Arc<dyn ConfigStore>,
    types: Arc<dyn TypeLoader>,
    singletons: Arc<SingletonRegistry>,
}

impl ObjectResolver {
    /// Create a resolver with its own, empty singleton registry
    pub fn new(configs: Arc<dyn ConfigStore>, types: Arc<dyn TypeLoader>) -> Self {
        Self {
            configs,
            types,
            singletons: Arc::new(SingletonRegistry::new()),
        }
    }

    /// Share an existing singleton registry
    pub fn with_singletons(mut self, singletons: Arc<SingletonRegistry>) -> Self {
        self.singletons = singletons;
        self
    }

    /// Singleton registry backing the singleton strategy
    pub fn singletons(&self) -> &Arc<SingletonRegistry> {
        &self.singletons
    }

    /// Config store used for by-id resolution
    pub fn config_store(&self) -> &Arc<dyn ConfigStore> {
        &self.configs
    }

    /// Type loader used for construction
    pub fn type_loader(&self) -> &Arc<dyn TypeLoader> {
        &self.types
    }

    /// Add a type search location
    pub fn add_search_path(&self, path: &str) {
        self.types.add_search_path(path);
    }

    /// Remove a type search location
    pub fn remove_search_path(&self, path: &str) {
        self.types.remove_search_path(path);
    }

    /// Load an object configuration file into the config store
    pub fn load_config(&self, path: &Path, append: bool) -> Result<()> {
        self.configs.load_config(path, append)
    }

    /// Construct a fresh instance of `class_name`
    pub fn get_object(&self, class_name: &str, args: &[Arg]) -> Result<Instance> {
        debug!(class = %class_name, args = args.len(), "Constructing transient object");
        self.types.create_instance(class_name, args)
    }

    /// Construct a fresh instance of `class_name` as `T`
    pub fn get_object_typed<T: Managed>(&self, class_name: &str, args: &[Arg]) -> Result<Arc<T>> {
        downcast(self.get_object(class_name, args)?)
    }

    /// Shared instance of `class_name`, constructed on first use
    ///
    /// The instance is keyed by the registered name `class_name` resolves
    /// to, so a short name found through a search path shares it with the
    /// qualified name. `args` only matter for the call that constructs it.
    pub fn get_single_object(&self, class_name: &str, args: &[Arg]) -> Result<Instance> {
        let resolved = self
            .types
            .resolve_name(class_name)
            .ok_or_else(|| Error::type_not_found(class_name))?;
        self.singletons
            .get_or_create(&resolved, || self.types.create_instance(&resolved, args))
    }

    /// Shared instance of `class_name` as `T`
    pub fn get_single_object_typed<T: Managed>(
        &self,
        class_name: &str,
        args: &[Arg],
    ) -> Result<Arc<T>> {
        downcast(self.get_single_object(class_name, args)?)
    }

    /// Build the object configured under `id`
    pub fn get_object_by_id(&self, id: &str) -> Result<Instance> {
        let (config, instance) = self.construct_by_id(id, Strategy::Transient)?;
        self.inject(&config, &instance)?;
        Ok(instance)
    }

    /// Build the object configured under `id` as `T`
    pub fn get_object_by_id_typed<T: Managed>(&self, id: &str) -> Result<Arc<T>> {
        let (config, instance) = self.construct_by_id(id, Strategy::Transient)?;
        let typed = downcast::<T>(Arc::clone(&instance))?;
        self.inject(&config, &instance)?;
        Ok(typed)
    }

    /// Shared instance for the class configured under `id`
    ///
    /// The instance is keyed by resolved type name, so different ids naming the
    /// same class share it. Properties of `id` are applied on every call,
    /// including calls that reuse a cached instance.
    pub fn get_single_object_by_id(&self, id: &str) -> Result<Instance> {
        let (config, instance) = self.construct_by_id(id, Strategy::Singleton)?;
        self.inject(&config, &instance)?;
        Ok(instance)
    }

    /// Shared instance for the class configured under `id`, as `T`
    pub fn get_single_object_by_id_typed<T: Managed>(&self, id: &str) -> Result<Arc<T>> {
        let (config, instance) = self.construct_by_id(id, Strategy::Singleton)?;
        let typed = downcast::<T>(Arc::clone(&instance))?;
        self.inject(&config, &instance)?;
        Ok(typed)
    }

    /// Constructor arguments for the object configured under `id`
    pub fn build_arguments(&self, id: &str) -> Result<Vec<Arg>> {
        let config = self.object_config(id)?;
        ArgumentBuilder::new(self).build(&config)
    }

    fn object_config(&self, id: &str) -> Result<Arc<ObjectConfig>> {
        self.configs
            .get_object_config(id)
            .ok_or_else(|| Error::config_not_found(id))
    }

    fn construct_by_id(
        &self,
        id: &str,
        strategy: Strategy,
    ) -> Result<(Arc<ObjectConfig>, Instance)> {
        let config = self.object_config(id)?;
        debug!(id = %id, class = %config.class_name, ?strategy, "Resolving configured object");

        let args = ArgumentBuilder::new(self).build(&config)?;
        let instance = match strategy {
            Strategy::Transient => self.get_object(&config.class_name, &args)?,
            Strategy::Singleton => self.get_single_object(&config.class_name, &args)?,
        };
        Ok((config, instance))
    }

    fn inject(&self, config: &ObjectConfig, instance: &Instance) -> Result<()> {
        PropertyInjector::new(self).apply(config, instance)
    }
}

impl ReferenceResolver for ObjectResolver {
    fn resolve(&self, id: &str) -> Result<Instance> {
        self.get_object_by_id(id)
    }
}

impl fmt::Debug for ObjectResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectResolver")
            .field("search_paths", &self.types.search_paths())
            .field("configs", &self.configs.ids().len())
            .field("singletons", &self.singletons)
            .finish()
    }
}

fn downcast<T: Managed>(instance: Instance) -> Result<Arc<T>> {
    let actual = instance.class_name().to_string();
    instance
        .downcast_arc::<T>()
        .map_err(|_| Error::type_mismatch(type_name::<T>(), actual))
}
