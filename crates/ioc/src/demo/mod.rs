//! Sample managed types
//!
//! Registered into `MANAGED_TYPES` at link time, so every registry built
//! with [`TypeRegistry::new`](ioc_application::TypeRegistry::new) sees them.
//! `demos/objects.toml` at the workspace root wires them together.

mod person;
mod team;

pub use person::{MOODS, Person};
pub use team::Team;

use ioc_domain::ports::describe_args;
use ioc_domain::{Arg, Error};

fn no_constructor(class_name: &str, args: &[Arg]) -> Error {
    Error::construction(
        class_name,
        format!("no constructor accepts {}", describe_args(args)),
    )
}
