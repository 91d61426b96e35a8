//! `demo.Person`

use std::sync::{Arc, PoisonError, RwLock};

use ioc_application::{MANAGED_TYPES, ManagedTypeEntry};
use ioc_domain::{
    Arg, Error, Instance, Managed, PropertyInfo, PropertyType, PropertyValue, Result,
};

use super::no_constructor;

const CLASS_NAME: &str = "demo.Person";

/// Members of the `Mood` property
pub const MOODS: &[&str] = &["Calm", "Happy", "Grumpy"];

#[derive(Debug, Default)]
struct PersonState {
    age: u16,
    nickname: Option<String>,
    mood: usize,
    friend: Option<Instance>,
}

/// A named person with an age, a mood and an optional friend
#[derive(Debug)]
pub struct Person {
    name: String,
    state: RwLock<PersonState>,
}

impl Person {
    /// Person with default properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(PersonState::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u16 {
        self.read().age
    }

    pub fn nickname(&self) -> Option<String> {
        self.read().nickname.clone()
    }

    pub fn mood(&self) -> &'static str {
        MOODS[self.read().mood]
    }

    pub fn friend(&self) -> Option<Instance> {
        self.read().friend.clone()
    }

    /// Constructors: `()`, `(name)`, `(name, age)`
    fn construct(args: &[Arg]) -> Result<Instance> {
        let person = match args {
            [] => Person::new("anonymous"),
            [name] => Person::new(name.as_str().ok_or_else(|| no_constructor(CLASS_NAME, args))?),
            [name, age] => {
                let (Some(name), Some(age)) = (name.as_str(), age.as_i64()) else {
                    return Err(no_constructor(CLASS_NAME, args));
                };
                let person = Person::new(name);
                person.write().age =
                    u16::try_from(age).map_err(|_| no_constructor(CLASS_NAME, args))?;
                person
            }
            _ => return Err(no_constructor(CLASS_NAME, args)),
        };
        Ok(Arc::new(person))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, PersonState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, PersonState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Managed for Person {
    fn class_name(&self) -> &str {
        CLASS_NAME
    }

    fn properties(&self) -> &'static [PropertyInfo] {
        const PROPERTIES: &[PropertyInfo] = &[
            PropertyInfo::read_only("Name", PropertyType::String),
            PropertyInfo::writable("Age", PropertyType::U16),
            PropertyInfo::writable("Nickname", PropertyType::String),
            PropertyInfo::writable("Mood", PropertyType::Enum(MOODS)),
            PropertyInfo::writable("Friend", PropertyType::Object),
        ];
        PROPERTIES
    }

    fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        let mut state = self.write();
        match name {
            "Age" => state.age = value.try_into()?,
            "Nickname" => state.nickname = Some(value.try_into()?),
            "Mood" => state.mood = value.into_enum_index()?,
            "Friend" => state.friend = Some(value.into_instance()?),
            other => {
                return Err(Error::config(format!(
                    "{CLASS_NAME} has no writable property {other}"
                )));
            }
        }
        Ok(())
    }
}

#[linkme::distributed_slice(MANAGED_TYPES)]
static PERSON: ManagedTypeEntry = ManagedTypeEntry {
    name: CLASS_NAME,
    description: "A person: (), (name) or (name, age)",
    factory: Person::construct,
};
