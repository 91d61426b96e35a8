//! Managed object capability
//!
//! Types built by the engine implement [`Managed`] instead of relying on
//! runtime reflection: each type lists its settable properties and
//! assigns converted values by name. Instances are shared as
//! `Arc<dyn Managed>`, so setters take `&self` and implementors keep
//! their mutable state behind a lock.

use std::fmt;
use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::error::{Error, Result};
use crate::value_objects::{PropertyType, PropertyValue, Value};

/// Shared handle to a constructed object
pub type Instance = Arc<dyn Managed>;

/// Declared property of a managed type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Property name as declared by the type
    pub name: &'static str,
    /// Declared value type
    pub ty: PropertyType,
    /// Whether the property accepts assignments
    pub writable: bool,
}

impl PropertyInfo {
    /// Writable property
    pub const fn writable(name: &'static str, ty: PropertyType) -> Self {
        Self {
            name,
            ty,
            writable: true,
        }
    }

    /// Read-only property
    pub const fn read_only(name: &'static str, ty: PropertyType) -> Self {
        Self {
            name,
            ty,
            writable: false,
        }
    }
}

/// Capability implemented by every type the engine can construct
///
/// # Example
///
/// ```rust
/// use std::sync::RwLock;
/// use ioc_domain::{Managed, PropertyInfo, PropertyType, PropertyValue, Result};
///
/// #[derive(Debug, Default)]
/// struct Counter {
///     start: RwLock<i32>,
/// }
///
/// impl Managed for Counter {
///     fn class_name(&self) -> &str {
///         "demo.Counter"
///     }
///
///     fn properties(&self) -> &'static [PropertyInfo] {
///         const PROPS: &[PropertyInfo] = &[PropertyInfo::writable("Start", PropertyType::I32)];
///         PROPS
///     }
///
///     fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
///         match name {
///             "Start" => *self.start.write().unwrap() = value.try_into()?,
///             _ => return Err(ioc_domain::Error::config(format!("no property {name}"))),
///         }
///         Ok(())
///     }
/// }
///
/// let counter = Counter::default();
/// assert_eq!(counter.find_property("start").map(|p| p.name), Some("Start"));
/// ```
pub trait Managed: DowncastSync + fmt::Debug {
    /// Qualified class name of this instance's type
    fn class_name(&self) -> &str;

    /// Settable properties declared by this type
    fn properties(&self) -> &'static [PropertyInfo] {
        &[]
    }

    /// Assign an already-converted value to the property `name`
    ///
    /// `name` is the declared name returned by [`Managed::properties`].
    fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        let _ = value;
        Err(Error::config(format!(
            "'{}' does not support setting property '{name}'",
            self.class_name()
        )))
    }

    /// Case-insensitive property lookup
    fn find_property(&self, name: &str) -> Option<&'static PropertyInfo> {
        self.properties()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl_downcast!(sync Managed);

/// One constructor argument
#[derive(Debug, Clone)]
pub enum Arg {
    /// Literal from the configuration or the caller
    Literal(Value),
    /// Single referenced object
    Object(Instance),
    /// Resizable list of referenced objects
    List(Vec<Instance>),
    /// Fixed-size array of referenced objects
    Array(Arc<[Instance]>),
}

impl Arg {
    /// Literal payload
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// String literal payload
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(Value::as_str)
    }

    /// Integer literal payload
    pub fn as_i64(&self) -> Option<i64> {
        self.as_literal().and_then(Value::as_i64)
    }

    /// Boolean literal payload
    pub fn as_bool(&self) -> Option<bool> {
        self.as_literal().and_then(Value::as_bool)
    }

    /// Single referenced object
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Object(instance) => Some(instance),
            _ => None,
        }
    }

    /// Elements of a list or array argument
    pub fn as_instances(&self) -> Option<&[Instance]> {
        match self {
            Self::List(items) => Some(items),
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Downcast a single referenced object to a concrete type
    pub fn downcast<T: Managed>(&self) -> Option<Arc<T>> {
        self.as_instance()
            .and_then(|instance| Arc::clone(instance).downcast_arc::<T>().ok())
    }

    /// Short description of the argument's shape, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(value) => value.kind(),
            Self::Object(_) => "object",
            Self::List(_) => "list",
            Self::Array(_) => "array",
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<Instance> for Arg {
    fn from(instance: Instance) -> Self {
        Self::Object(instance)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Literal(Value::from(value))
    }
}

/// Render an argument vector's shape, e.g. `(string, object, list)`
pub fn describe_args(args: &[Arg]) -> String {
    let kinds: Vec<&str> = args.iter().map(Arg::kind).collect();
    format!("({})", kinds.join(", "))
}
