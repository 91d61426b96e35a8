//! Container Bootstrap
//!
//! Composition root: builds the type registry, type loader, config store
//! and singleton registry from [`IocSettings`], loads the configured
//! object files, and hands out a ready [`ObjectResolver`].
//!
//! ```text
//! IocSettings → TypeRegistry → RegistryTypeLoader (search paths) ─┐
//!             → TomlConfigStore (object files) ──────────────────┼→ ObjectResolver
//!             → SingletonRegistry ────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let settings = ConfigLoader::new().load()?;
//! let container = bootstrap(settings)?;
//! let person = container.resolver().get_object_by_id("p1")?;
//! ```

use std::sync::Arc;

use ioc_application::{ObjectResolver, SingletonRegistry, TypeRegistry};
use ioc_domain::{ConfigStore, Result, TypeLoader};
use tracing::info;

use crate::check::{ConfigIssue, check_config};
use crate::config::IocSettings;
use crate::loader::RegistryTypeLoader;
use crate::store::TomlConfigStore;

/// Wired-up container
pub struct IocContainer {
    /// Settings the container was built from
    pub settings: Arc<IocSettings>,

    registry: Arc<TypeRegistry>,
    loader: Arc<RegistryTypeLoader>,
    store: Arc<TomlConfigStore>,
    resolver: ObjectResolver,
}

impl IocContainer {
    /// Resolver for transient and singleton lookups
    pub fn resolver(&self) -> &ObjectResolver {
        &self.resolver
    }

    /// Type registry (register runtime types here)
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Type loader with the configured search paths
    pub fn loader(&self) -> &Arc<RegistryTypeLoader> {
        &self.loader
    }

    /// Object configuration store
    pub fn store(&self) -> &Arc<TomlConfigStore> {
        &self.store
    }

    /// Singleton cache shared by every singleton lookup
    pub fn singletons(&self) -> &Arc<SingletonRegistry> {
        self.resolver.singletons()
    }

    /// Existence checks over the loaded configuration
    pub fn check(&self) -> Vec<ConfigIssue> {
        check_config(self.store.as_ref(), self.loader.as_ref())
    }
}

impl std::fmt::Debug for IocContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IocContainer")
            .field("settings", &self.settings)
            .field("registry", &self.registry)
            .field("objects", &self.store.len())
            .finish_non_exhaustive()
    }
}

/// Build a container over a registry that includes linked types
pub fn bootstrap(settings: IocSettings) -> Result<IocContainer> {
    bootstrap_with_registry(settings, Arc::new(TypeRegistry::new()))
}

/// Build a container over an existing registry
///
/// Object files are loaded in order; the first replaces the (empty) store
/// and the rest append to it.
pub fn bootstrap_with_registry(
    settings: IocSettings,
    registry: Arc<TypeRegistry>,
) -> Result<IocContainer> {
    let loader = Arc::new(
        RegistryTypeLoader::new(Arc::clone(&registry)).with_search_paths(&settings.search_paths),
    );
    let store = Arc::new(TomlConfigStore::new());

    for (position, path) in settings.object_files.iter().enumerate() {
        store.load_config(path, position > 0)?;
    }

    let singletons = Arc::new(SingletonRegistry::new());
    let resolver = ObjectResolver::new(
        Arc::clone(&store) as Arc<dyn ConfigStore>,
        Arc::clone(&loader) as Arc<dyn TypeLoader>,
    )
    .with_singletons(singletons);

    info!(
        objects = store.len(),
        search_paths = settings.search_paths.len(),
        "Container ready"
    );

    Ok(IocContainer {
        settings: Arc::new(settings),
        registry,
        loader,
        store,
        resolver,
    })
}
