//! Config store port

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::ObjectConfig;

/// Source of `ObjectConfig` records keyed by identifier
pub trait ConfigStore: Send + Sync {
    /// Parse a configuration file and merge it into the store
    ///
    /// With `append = false` every existing entry is dropped first.
    fn load_config(&self, path: &Path, append: bool) -> Result<()>;

    /// Look up the configuration for `id`
    fn get_object_config(&self, id: &str) -> Option<Arc<ObjectConfig>>;

    /// All known identifiers, sorted
    fn ids(&self) -> Vec<String>;
}
