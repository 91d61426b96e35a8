//! Object configuration records
//!
//! One `ObjectConfig` describes how to build one configured object:
//! which class to instantiate, which literals and references to pass to
//! its constructor, and which properties to set afterwards.

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Value Object: configuration of one object identifier
///
/// ## Business Rules
///
/// - `constructor_params` holds literals only; reference slots are
///   described separately by `ref_constructor_params`
/// - The final argument count is `constructor_params.len() + ref_constructor_params.len()`
/// - Each reference descriptor's `index` is a position in the *final*
///   argument vector
///
/// ## Example
///
/// ```rust
/// use ioc_domain::{ObjectConfig, RefParam};
///
/// let config = ObjectConfig::new("team", "demo.Team")
///     .with_arg("core")
///     .with_ref(RefParam::list(1, ["p1", "p2"], false))
///     .with_value_property("Size", 2);
///
/// assert_eq!(config.arg_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    /// Unique identifier within the config store
    pub id: String,
    /// Qualified class name to instantiate
    #[serde(rename = "class")]
    pub class_name: String,
    /// Literal constructor parameters, in order, excluding reference slots
    #[serde(rename = "args", default)]
    pub constructor_params: Vec<Value>,
    /// Reference descriptors for constructor parameters
    #[serde(rename = "refs", default)]
    pub ref_constructor_params: Vec<RefParam>,
    /// Property settings applied after construction
    #[serde(default)]
    pub properties: Vec<PropertySetting>,
}

impl ObjectConfig {
    /// Create a config with no arguments or properties
    pub fn new(id: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            constructor_params: Vec::new(),
            ref_constructor_params: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Append a literal constructor parameter
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.constructor_params.push(value.into());
        self
    }

    /// Append a reference descriptor
    pub fn with_ref(mut self, reference: RefParam) -> Self {
        self.ref_constructor_params.push(reference);
        self
    }

    /// Append a literal property setting
    pub fn with_value_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push(PropertySetting::value(name, value));
        self
    }

    /// Append a reference-valued property setting
    pub fn with_ref_property(mut self, name: impl Into<String>, ref_id: impl Into<String>) -> Self {
        self.properties.push(PropertySetting::reference(name, ref_id));
        self
    }

    /// Number of constructor arguments after references are merged in
    pub fn arg_count(&self) -> usize {
        self.constructor_params.len() + self.ref_constructor_params.len()
    }

    /// Every configuration identifier this entry refers to, in declaration order
    pub fn referenced_ids(&self) -> impl Iterator<Item = &str> {
        let ctor = self
            .ref_constructor_params
            .iter()
            .flat_map(RefParam::target_ids);
        let props = self
            .properties
            .iter()
            .filter_map(|p| match p.source() {
                Some(PropertySource::Ref(id)) => Some(id),
                _ => None,
            });
        ctor.chain(props)
    }
}

/// Reference descriptor for a constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefParam {
    /// One referenced object placed at `index`
    Single {
        /// Final positional index
        index: usize,
        /// Referenced configuration identifier
        #[serde(rename = "ref")]
        target_id: String,
    },
    /// A collection of referenced objects placed as one argument at `index`
    List {
        /// Final positional index
        index: usize,
        /// Referenced configuration identifiers, in order
        #[serde(rename = "list")]
        target_ids: Vec<String>,
        /// Materialize as a fixed-size array instead of a list
        #[serde(rename = "array", default)]
        is_array: bool,
    },
}

impl RefParam {
    /// Single reference at `index`
    pub fn single(index: usize, target_id: impl Into<String>) -> Self {
        Self::Single {
            index,
            target_id: target_id.into(),
        }
    }

    /// List or array reference at `index`
    pub fn list<I, S>(index: usize, target_ids: I, is_array: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            index,
            target_ids: target_ids.into_iter().map(Into::into).collect(),
            is_array,
        }
    }

    /// Final positional index of the resolved argument
    pub fn index(&self) -> usize {
        match self {
            Self::Single { index, .. } | Self::List { index, .. } => *index,
        }
    }

    /// Referenced identifiers, in order
    pub fn target_ids(&self) -> impl Iterator<Item = &str> {
        let ids: &[String] = match self {
            Self::Single { target_id, .. } => std::slice::from_ref(target_id),
            Self::List { target_ids, .. } => target_ids,
        };
        ids.iter().map(String::as_str)
    }
}

/// One property assignment applied after construction
///
/// Exactly one of `value` and `ref_id` is expected. When both are present
/// the non-blank `ref_id` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySetting {
    /// Property name, matched case-insensitively
    pub name: String,
    /// Literal to convert to the property's declared type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Configuration identifier of an object to assign
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
}

/// Where a property setting takes its value from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertySource<'a> {
    /// Literal value
    Value(&'a Value),
    /// Referenced configuration identifier
    Ref(&'a str),
}

impl PropertySetting {
    /// Literal-valued setting
    pub fn value(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ref_id: None,
        }
    }

    /// Reference-valued setting
    pub fn reference(name: impl Into<String>, ref_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            ref_id: Some(ref_id.into()),
        }
    }

    /// Effective source of the value, or `None` if the setting carries neither
    pub fn source(&self) -> Option<PropertySource<'_>> {
        match (&self.ref_id, &self.value) {
            (Some(id), _) if !id.trim().is_empty() => Some(PropertySource::Ref(id)),
            (_, Some(value)) => Some(PropertySource::Value(value)),
            _ => None,
        }
    }
}
