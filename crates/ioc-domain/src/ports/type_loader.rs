//! Type loader port
//!
//! Locates a type by qualified class name and constructs an instance
//! from an argument vector. Search paths widen the set of names a short
//! class name can resolve to.

use crate::error::Result;
use crate::ports::managed::{Arg, Instance};

/// Dynamic construction of managed types by name
pub trait TypeLoader: Send + Sync {
    /// Add a search location; adding an existing path is a no-op
    fn add_search_path(&self, path: &str);

    /// Remove a search location; removing an unknown path is a no-op
    fn remove_search_path(&self, path: &str);

    /// Snapshot of the current search locations, in lookup order
    fn search_paths(&self) -> Vec<String>;

    /// Whether `class_name` resolves to a constructible type
    fn contains(&self, class_name: &str) -> bool;

    /// Registered name that `class_name` resolves to
    ///
    /// Every spelling that reaches one type (a short name through a search
    /// path, or the qualified name) yields the same result.
    fn resolve_name(&self, class_name: &str) -> Option<String> {
        self.contains(class_name).then(|| class_name.to_string())
    }

    /// Construct `class_name` from `args`
    ///
    /// Fails with `TypeNotFound` when the name cannot be located and with
    /// `Construction` when no constructor accepts the arguments.
    fn create_instance(&self, class_name: &str, args: &[Arg]) -> Result<Instance>;
}
