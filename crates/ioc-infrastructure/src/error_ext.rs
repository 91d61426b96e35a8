//! Error extension utilities
//!
//! Maps foreign errors (I/O, TOML, JSON, figment) into the domain error
//! type while keeping the underlying error as `source`.

use ioc_domain::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use ioc_infrastructure::error_ext::ErrorContext;
///
/// let text = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read {}", path.display()))?;
///
/// let document: Document = toml::from_str(&text)
///     .with_config_context(|| format!("Invalid object file {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add configuration context, converting the error to a domain `Config` error
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;

    /// Add configuration context with lazy evaluation
    fn with_config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::config_with_source(format!("{context}: {err}"), err))
    }

    fn with_config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::config_with_source(format!("{}: {err}", f()), err))
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }
}
