//! `demo.Team`

use std::sync::Arc;

use ioc_application::{MANAGED_TYPES, ManagedTypeEntry};
use ioc_domain::{Arg, Instance, Managed, Result};

use super::no_constructor;

const CLASS_NAME: &str = "demo.Team";

/// A named group of members, built from a list or a fixed array
#[derive(Debug)]
pub struct Team {
    name: String,
    members: Arc<[Instance]>,
    fixed: bool,
}

impl Team {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Instance] {
        &self.members
    }

    /// Whether the members were supplied as a fixed-size array
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Constructors: `(name, list)`, `(name, array)`
    fn construct(args: &[Arg]) -> Result<Instance> {
        let [name, members] = args else {
            return Err(no_constructor(CLASS_NAME, args));
        };
        let (Some(name), Some(instances)) = (name.as_str(), members.as_instances()) else {
            return Err(no_constructor(CLASS_NAME, args));
        };
        Ok(Arc::new(Team {
            name: name.to_string(),
            members: Arc::from(instances),
            fixed: matches!(members, Arg::Array(_)),
        }))
    }
}

impl Managed for Team {
    fn class_name(&self) -> &str {
        CLASS_NAME
    }
}

#[linkme::distributed_slice(MANAGED_TYPES)]
static TEAM: ManagedTypeEntry = ManagedTypeEntry {
    name: CLASS_NAME,
    description: "A team: (name, list) or (name, array)",
    factory: Team::construct,
};
