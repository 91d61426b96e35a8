//! File-backed config store
//!
//! Parses object configuration documents and keeps the entries in memory,
//! keyed by identifier. A document is a list of `[[object]]` tables:
//!
//! ```toml
//! [[object]]
//! id = "p1"
//! class = "demo.Person"
//! args = ["Alice"]
//! properties = [{ name = "Age", value = 30 }]
//! ```
//!
//! Files with a `.json` extension use the same shape as JSON.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use ioc_domain::{ConfigStore, Error, ObjectConfig, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error_ext::ErrorContext;

/// Top-level shape of an object configuration document
#[derive(Debug, Default, Deserialize)]
struct ObjectDocument {
    #[serde(default)]
    object: Vec<ObjectConfig>,
}

/// In-memory config store fed from TOML or JSON documents
#[derive(Debug, Default)]
pub struct TomlConfigStore {
    entries: RwLock<HashMap<String, Arc<ObjectConfig>>>,
}

impl TomlConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document from memory and merge it into the store
    pub fn load_str(&self, source: &str, append: bool) -> Result<()> {
        let document: ObjectDocument =
            toml::from_str(source).config_context("Invalid object configuration")?;
        self.install(document.object, append)
    }

    /// Add or replace a single entry
    pub fn insert(&self, config: ObjectConfig) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(config.id.clone(), Arc::new(config));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn parse_file(path: &Path) -> Result<Vec<ObjectConfig>> {
        let text = fs::read_to_string(path)
            .io_context(format!("Failed to read object file {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let document: ObjectDocument = if is_json {
            serde_json::from_str(&text)
                .with_config_context(|| format!("Invalid object file {}", path.display()))?
        } else {
            toml::from_str(&text)
                .with_config_context(|| format!("Invalid object file {}", path.display()))?
        };
        Ok(document.object)
    }

    /// Validate a parsed document, then swap or merge it in under one write lock
    fn install(&self, configs: Vec<ObjectConfig>, append: bool) -> Result<()> {
        validate(&configs)?;

        let count = configs.len();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if !append {
            entries.clear();
        }
        for config in configs {
            debug!(id = %config.id, class = %config.class_name, "Registered object configuration");
            entries.insert(config.id.clone(), Arc::new(config));
        }
        info!(count, append, total = entries.len(), "Object configuration loaded");
        Ok(())
    }
}

fn validate(configs: &[ObjectConfig]) -> Result<()> {
    let mut seen = HashSet::new();
    for config in configs {
        if config.id.trim().is_empty() {
            return Err(Error::config("Object configuration with an empty id"));
        }
        if !seen.insert(config.id.as_str()) {
            return Err(Error::config(format!(
                "Duplicate object id '{}' in one document",
                config.id
            )));
        }
        if let Some(setting) = config.properties.iter().find(|p| p.source().is_none()) {
            return Err(Error::config(format!(
                "Property '{}' of '{}' has neither a value nor a ref",
                setting.name, config.id
            )));
        }
    }
    Ok(())
}

impl ConfigStore for TomlConfigStore {
    fn load_config(&self, path: &Path, append: bool) -> Result<()> {
        info!("Loading object configuration from {}", path.display());
        let configs = Self::parse_file(path)?;
        self.install(configs, append)
    }

    fn get_object_config(&self, id: &str) -> Option<Arc<ObjectConfig>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }
}
