//! Existence checks over loaded object configuration
//!
//! Reports every entry whose class cannot be located and every reference
//! to an identifier the store does not know. Nothing is constructed.

use std::fmt;

use ioc_domain::{ConfigStore, TypeLoader};

/// One problem found in the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    /// The entry's class does not resolve through the type loader
    UnknownClass {
        /// Entry identifier
        id: String,
        /// Class name as configured
        class_name: String,
    },
    /// The entry refers to an identifier with no configuration
    MissingReference {
        /// Entry identifier
        id: String,
        /// Referenced identifier
        target: String,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownClass { id, class_name } => {
                write!(f, "{id}: unknown class '{class_name}'")
            }
            Self::MissingReference { id, target } => {
                write!(f, "{id}: reference to missing id '{target}'")
            }
        }
    }
}

/// Check every entry in `store`, in identifier order
pub fn check_config(store: &dyn ConfigStore, loader: &dyn TypeLoader) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    for id in store.ids() {
        let Some(config) = store.get_object_config(&id) else {
            continue;
        };
        if !loader.contains(&config.class_name) {
            issues.push(ConfigIssue::UnknownClass {
                id: id.clone(),
                class_name: config.class_name.clone(),
            });
        }
        for target in config.referenced_ids() {
            if store.get_object_config(target).is_none() {
                issues.push(ConfigIssue::MissingReference {
                    id: id.clone(),
                    target: target.to_string(),
                });
            }
        }
    }
    issues
}
