//! Shared fixtures: managed test types, an in-memory config store and a
//! registry-backed type loader.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use ioc_application::TypeRegistry;
use ioc_domain::ports::describe_args;
use ioc_domain::{
    Arg, ConfigStore, Error, Instance, Managed, ObjectConfig, PropertyInfo, PropertyType,
    PropertyValue, Result, TypeLoader,
};

pub const PERSON: &str = "demo.Person";
pub const TEAM: &str = "demo.Team";

pub const MOODS: &[&str] = &["Calm", "Happy", "Grumpy"];

#[derive(Debug, Default)]
pub struct PersonState {
    pub age: i32,
    pub nickname: Option<String>,
    pub mood: usize,
    pub friend: Option<Instance>,
}

#[derive(Debug)]
pub struct Person {
    pub name: String,
    pub state: RwLock<PersonState>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(PersonState::default()),
        }
    }

    pub fn age(&self) -> i32 {
        self.state.read().unwrap().age
    }

    pub fn mood(&self) -> &'static str {
        MOODS[self.state.read().unwrap().mood]
    }

    pub fn nickname(&self) -> Option<String> {
        self.state.read().unwrap().nickname.clone()
    }

    pub fn friend(&self) -> Option<Instance> {
        self.state.read().unwrap().friend.clone()
    }

    /// `()`, `(name)`, `(name, age)`
    pub fn construct(args: &[Arg]) -> Result<Instance> {
        match args {
            [] => Ok(Arc::new(Person::new("anonymous"))),
            [name] => {
                let name = name.as_str().ok_or_else(|| mismatch(PERSON, args))?;
                Ok(Arc::new(Person::new(name)))
            }
            [name, age] => {
                let (Some(name), Some(age)) = (name.as_str(), age.as_i64()) else {
                    return Err(mismatch(PERSON, args));
                };
                let person = Person::new(name);
                person.state.write().unwrap().age =
                    i32::try_from(age).map_err(|_| mismatch(PERSON, args))?;
                Ok(Arc::new(person))
            }
            _ => Err(mismatch(PERSON, args)),
        }
    }
}

impl Managed for Person {
    fn class_name(&self) -> &str {
        PERSON
    }

    fn properties(&self) -> &'static [PropertyInfo] {
        const PROPS: &[PropertyInfo] = &[
            PropertyInfo::writable("Age", PropertyType::I32),
            PropertyInfo::writable("Nickname", PropertyType::String),
            PropertyInfo::writable("Mood", PropertyType::Enum(MOODS)),
            PropertyInfo::writable("Friend", PropertyType::Object),
            PropertyInfo::read_only("Name", PropertyType::String),
        ];
        PROPS
    }

    fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        let mut state = self.state.write().unwrap();
        match name {
            "Age" => state.age = value.try_into()?,
            "Nickname" => state.nickname = Some(value.try_into()?),
            "Mood" => state.mood = value.into_enum_index()?,
            "Friend" => state.friend = Some(value.into_instance()?),
            other => return Err(Error::config(format!("Person has no property {other}"))),
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Team {
    pub name: String,
    pub members: Vec<Instance>,
    pub fixed: bool,
}

impl Team {
    /// `(name, list)` or `(name, array)`
    pub fn construct(args: &[Arg]) -> Result<Instance> {
        match args {
            [Arg::Literal(name), members @ (Arg::List(_) | Arg::Array(_))] => {
                let name = name.as_str().ok_or_else(|| mismatch(TEAM, args))?;
                Ok(Arc::new(Team {
                    name: name.to_string(),
                    members: members.as_instances().unwrap_or_default().to_vec(),
                    fixed: matches!(members, Arg::Array(_)),
                }))
            }
            _ => Err(mismatch(TEAM, args)),
        }
    }
}

impl Managed for Team {
    fn class_name(&self) -> &str {
        TEAM
    }
}

/// Records every argument vector it is constructed with
#[derive(Debug)]
pub struct Recorder {
    pub args: Vec<Arg>,
}

impl Managed for Recorder {
    fn class_name(&self) -> &str {
        "demo.Recorder"
    }
}

pub fn mismatch(class_name: &str, args: &[Arg]) -> Error {
    Error::construction(
        class_name,
        format!("no constructor accepts {}", describe_args(args)),
    )
}

/// Registry with `demo.Person`, `demo.Team` and `demo.Recorder`
pub fn registry() -> Arc<TypeRegistry> {
    let registry = TypeRegistry::isolated();
    registry.register(PERSON, "person", Person::construct);
    registry.register(TEAM, "team", Team::construct);
    registry.register("demo.Recorder", "recorder", |args: &[Arg]| {
        Ok(Arc::new(Recorder {
            args: args.to_vec(),
        }) as Instance)
    });
    Arc::new(registry)
}

/// Register `name` with a factory that counts its invocations
pub fn counting_type(registry: &TypeRegistry, name: &'static str) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    registry.register(name, "counted", move |_: &[Arg]| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Person::new(name)) as Instance)
    });
    count
}

/// Exact-name loader over a `TypeRegistry`
pub struct TestLoader {
    pub registry: Arc<TypeRegistry>,
}

impl TypeLoader for TestLoader {
    fn add_search_path(&self, _path: &str) {}

    fn remove_search_path(&self, _path: &str) {}

    fn search_paths(&self) -> Vec<String> {
        Vec::new()
    }

    fn contains(&self, class_name: &str) -> bool {
        self.registry.contains(class_name)
    }

    fn create_instance(&self, class_name: &str, args: &[Arg]) -> Result<Instance> {
        self.registry
            .get(class_name)
            .ok_or_else(|| Error::type_not_found(class_name))?
            .construct(args)
    }
}

/// In-memory config store
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Arc<ObjectConfig>>>,
}

impl MemoryStore {
    pub fn with(configs: impl IntoIterator<Item = ObjectConfig>) -> Self {
        let store = Self::default();
        for config in configs {
            store.insert(config);
        }
        store
    }

    pub fn insert(&self, config: ObjectConfig) {
        self.entries
            .write()
            .unwrap()
            .insert(config.id.clone(), Arc::new(config));
    }
}

impl ConfigStore for MemoryStore {
    fn load_config(&self, path: &Path, _append: bool) -> Result<()> {
        Err(Error::io(format!("cannot load {}", path.display())))
    }

    fn get_object_config(&self, id: &str) -> Option<Arc<ObjectConfig>> {
        self.entries.read().unwrap().get(id).cloned()
    }

    fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.read().unwrap().keys().cloned().collect();
        ids.sort();
        ids
    }
}
