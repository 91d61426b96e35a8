//! Managed Capability Tests

use std::sync::{Arc, RwLock};

use ioc_domain::ports::describe_args;
use ioc_domain::{
    Arg, Error, Instance, Managed, PropertyInfo, PropertyType, PropertyValue, Result, Value,
};

#[derive(Debug, Default)]
struct Lamp {
    lit: RwLock<bool>,
}

impl Managed for Lamp {
    fn class_name(&self) -> &str {
        "test.Lamp"
    }

    fn properties(&self) -> &'static [PropertyInfo] {
        const PROPS: &[PropertyInfo] = &[
            PropertyInfo::writable("IsLit", PropertyType::Bool),
            PropertyInfo::read_only("Watts", PropertyType::U32),
        ];
        PROPS
    }

    fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        match name {
            "IsLit" => *self.lit.write().unwrap() = value.try_into()?,
            other => return Err(Error::config(format!("unknown property {other}"))),
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Bare;

impl Managed for Bare {
    fn class_name(&self) -> &str {
        "test.Bare"
    }
}

#[test]
fn test_find_property_ignores_case() {
    let lamp = Lamp::default();
    let prop = lamp.find_property("islit").unwrap();
    assert_eq!(prop.name, "IsLit");
    assert!(prop.writable);
    assert!(!lamp.find_property("WATTS").unwrap().writable);
    assert!(lamp.find_property("Color").is_none());
}

#[test]
fn test_set_property_through_shared_handle() {
    let lamp = Arc::new(Lamp::default());
    let shared: Instance = lamp.clone();
    shared
        .set_property("IsLit", PropertyValue::Bool(true))
        .unwrap();
    assert!(*lamp.lit.read().unwrap());
}

#[test]
fn test_default_setter_rejects() {
    assert!(Bare.properties().is_empty());
    assert!(Bare.set_property("x", PropertyValue::Bool(true)).is_err());
}

#[test]
fn test_arg_accessors_and_downcast() {
    let lamp: Instance = Arc::new(Lamp::default());
    let args = vec![
        Arg::from("name"),
        Arg::from(7_i64),
        Arg::Object(lamp.clone()),
        Arg::List(vec![lamp.clone()]),
        Arg::Array(Arc::from(vec![lamp.clone(), lamp])),
    ];

    assert_eq!(args[0].as_str(), Some("name"));
    assert_eq!(args[1].as_i64(), Some(7));
    assert_eq!(args[1].as_literal(), Some(&Value::Int(7)));
    assert!(args[2].downcast::<Lamp>().is_some());
    assert!(args[2].downcast::<Bare>().is_none());
    assert_eq!(args[3].as_instances().map(<[Instance]>::len), Some(1));
    assert_eq!(args[4].as_instances().map(<[Instance]>::len), Some(2));
    assert_eq!(
        describe_args(&args),
        "(string, integer, object, list, array)"
    );
}
