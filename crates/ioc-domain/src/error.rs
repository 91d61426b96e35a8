//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the IoC object builder
#[derive(Error, Debug)]
pub enum Error {
    /// Requested configuration identifier is absent from the config store
    #[error("No object configuration found for id '{id}'")]
    ConfigNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// No registered type matches the qualified class name
    #[error("Type not found: {class_name}")]
    TypeNotFound {
        /// The class name that could not be located
        class_name: String,
    },

    /// The type was found but could not be constructed from the arguments
    #[error("Failed to construct '{class_name}': {message}")]
    Construction {
        /// The class being constructed
        class_name: String,
        /// Why construction failed (usually a constructor-signature mismatch)
        message: String,
    },

    /// A literal could not be converted to the declared property type
    #[error("Cannot convert {value} to {target} for property '{property}'")]
    Conversion {
        /// Property being assigned
        property: String,
        /// Declared target type
        target: String,
        /// Offending value, rendered for diagnostics
        value: String,
    },

    /// A reference descriptor's index does not fit the argument vector
    #[error("Reference index {index} of '{id}' is out of bounds (argument count {len})")]
    InvalidReferenceIndex {
        /// Configuration identifier declaring the reference
        id: String,
        /// Declared index
        index: usize,
        /// Argument count at the time of insertion
        len: usize,
    },

    /// A typed lookup produced an instance of a different type
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Requested Rust type
        expected: String,
        /// Class name of the instance actually produced
        actual: String,
    },

    /// Configuration parsing or validation error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a configuration-not-found error
    pub fn config_not_found<S: Into<String>>(id: S) -> Self {
        Self::ConfigNotFound { id: id.into() }
    }

    /// Create a type-not-found error
    pub fn type_not_found<S: Into<String>>(class_name: S) -> Self {
        Self::TypeNotFound {
            class_name: class_name.into(),
        }
    }

    /// Create a construction error
    pub fn construction<C: Into<String>, M: Into<String>>(class_name: C, message: M) -> Self {
        Self::Construction {
            class_name: class_name.into(),
            message: message.into(),
        }
    }

    /// Create a conversion error
    pub fn conversion<P, T, V>(property: P, target: T, value: V) -> Self
    where
        P: Into<String>,
        T: Into<String>,
        V: Into<String>,
    {
        Self::Conversion {
            property: property.into(),
            target: target.into(),
            value: value.into(),
        }
    }

    /// Create an invalid reference index error
    pub fn invalid_reference_index<S: Into<String>>(id: S, index: usize, len: usize) -> Self {
        Self::InvalidReferenceIndex {
            id: id.into(),
            index,
            len,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
