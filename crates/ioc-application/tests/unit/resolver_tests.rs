//! Object Resolver Tests

use std::sync::Arc;

use ioc_application::ObjectResolver;
use ioc_domain::{Arg, Error, ObjectConfig, RefParam};

use crate::common::{MemoryStore, Person, Team, TestLoader, registry};

fn scenario() -> ObjectResolver {
    let store = MemoryStore::with(vec![
        ObjectConfig::new("p1", "demo.Person")
            .with_arg("Alice")
            .with_value_property("Age", "30"),
        ObjectConfig::new("p2", "demo.Team")
            .with_arg("core")
            .with_ref(RefParam::list(1, ["p1", "p1"], false)),
        ObjectConfig::new("p3", "demo.Team")
            .with_ref(RefParam::list(1, ["p1"], true))
            .with_arg("fixed"),
        ObjectConfig::new("broken", "demo.Person")
            .with_arg("a")
            .with_arg("b")
            .with_arg("c"),
        ObjectConfig::new("ghost", "demo.Missing"),
    ]);
    ObjectResolver::new(
        Arc::new(store),
        Arc::new(TestLoader {
            registry: registry(),
        }),
    )
}

#[test]
fn test_resolve_person_by_id() {
    let person = scenario().get_object_by_id_typed::<Person>("p1").unwrap();
    assert_eq!(person.name, "Alice");
    assert_eq!(person.age(), 30);
}

#[test]
fn test_resolve_list_argument_by_id() {
    let resolver = scenario();

    let args = resolver.build_arguments("p2").unwrap();
    assert_eq!(args[0].as_str(), Some("core"));
    assert!(matches!(&args[1], Arg::List(items) if items.len() == 2));

    let team = resolver.get_object_by_id_typed::<Team>("p2").unwrap();
    assert_eq!(team.name, "core");
    assert!(!team.fixed);
    for member in &team.members {
        let person = Arc::clone(member).downcast_arc::<Person>().unwrap();
        assert_eq!(person.name, "Alice");
        assert_eq!(person.age(), 30);
    }
}

#[test]
fn test_resolve_array_argument_by_id() {
    let team = scenario().get_object_by_id_typed::<Team>("p3").unwrap();
    assert_eq!(team.name, "fixed");
    assert!(team.fixed);
    assert_eq!(team.members.len(), 1);
}

#[test]
fn test_missing_id_names_the_id() {
    let err = scenario().get_object_by_id("nope").unwrap_err();
    assert!(matches!(&err, Error::ConfigNotFound { id } if id == "nope"));
    assert!(err.to_string().contains("nope"));

    let err = scenario().get_single_object_by_id("nope").unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { .. }));
}

#[test]
fn test_constructor_mismatch_is_surfaced() {
    let err = scenario().get_object_by_id("broken").unwrap_err();
    assert!(matches!(err, Error::Construction { ref class_name, .. } if class_name == "demo.Person"));
}

#[test]
fn test_unknown_class_is_surfaced() {
    let err = scenario().get_object_by_id("ghost").unwrap_err();
    assert!(matches!(err, Error::TypeNotFound { ref class_name } if class_name == "demo.Missing"));
}

#[test]
fn test_transient_calls_are_independent() {
    let resolver = scenario();
    let a = resolver.get_object("demo.Person", &[Arg::from("x")]).unwrap();
    let b = resolver.get_object("demo.Person", &[Arg::from("x")]).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));

    let c = resolver.get_object_by_id("p1").unwrap();
    let d = resolver.get_object_by_id("p1").unwrap();
    assert!(!Arc::ptr_eq(&c, &d));
    assert!(resolver.singletons().is_empty());
}

#[test]
fn test_singleton_calls_are_identical() {
    let resolver = scenario();
    let a = resolver.get_single_object_by_id("p1").unwrap();
    let b = resolver.get_single_object_by_id("p1").unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let c = resolver
        .get_single_object_typed::<Person>("demo.Person", &[])
        .unwrap();
    assert_eq!(c.name, "Alice");
}

#[test]
fn test_typed_lookup_rejects_other_types() {
    let err = scenario().get_object_by_id_typed::<Team>("p1").unwrap_err();
    match err {
        Error::TypeMismatch { expected, actual } => {
            assert!(expected.ends_with("Team"));
            assert_eq!(actual, "demo.Person");
        }
        other => panic!("Expected TypeMismatch, got {other:?}"),
    }

    assert!(
        scenario()
            .get_single_object_by_id_typed::<Team>("p1")
            .is_err()
    );
    assert!(
        scenario()
            .get_object_typed::<Person>("demo.Person", &[])
            .is_ok()
    );
}
