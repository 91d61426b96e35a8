//! Domain constants

/// Separator between a search path (namespace) and a class name
pub const NAMESPACE_SEPARATOR: char = '.';
