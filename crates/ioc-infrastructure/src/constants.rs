//! Infrastructure layer constants
//!
//! Domain-level constants live in `ioc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default settings file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ioc.toml";

/// Default settings directory name
pub const DEFAULT_CONFIG_DIR: &str = "ioc";

/// Environment variable prefix for settings (e.g. `IOC__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "IOC__";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "IOC_LOG";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "ioc";
