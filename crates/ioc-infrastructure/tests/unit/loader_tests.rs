//! Type loader tests

use ioc_domain::{Arg, Error, TypeLoader};
use ioc_infrastructure::RegistryTypeLoader;

use crate::common::{GADGET, Gadget, registry};

#[test]
fn test_exact_name_lookup() {
    let loader = RegistryTypeLoader::new(registry());

    let instance = loader.create_instance(GADGET, &[Arg::from("lamp")]).unwrap();

    let gadget = instance.downcast_arc::<Gadget>().unwrap();
    assert_eq!(gadget.label, "lamp");
}

#[test]
fn test_search_path_resolves_short_name() {
    let loader = RegistryTypeLoader::new(registry());
    assert!(matches!(
        loader.create_instance("Gadget", &[]),
        Err(Error::TypeNotFound { .. })
    ));

    loader.add_search_path("shop");

    assert!(loader.contains("Gadget"));
    assert!(loader.create_instance("Gadget", &[]).is_ok());
}

#[test]
fn test_trailing_separator_in_search_path() {
    let loader = RegistryTypeLoader::new(registry()).with_search_paths(["shop."]);

    assert!(loader.contains("Gadget"));
}

#[test]
fn test_search_paths_keep_order_and_ignore_duplicates() {
    let loader = RegistryTypeLoader::new(registry());
    loader.add_search_path("b");
    loader.add_search_path("a");
    loader.add_search_path("b");

    assert_eq!(loader.search_paths(), vec!["b".to_string(), "a".to_string()]);

    loader.remove_search_path("b");
    loader.remove_search_path("unknown");
    assert_eq!(loader.search_paths(), vec!["a".to_string()]);
}

#[test]
fn test_removed_search_path_no_longer_resolves() {
    let loader = RegistryTypeLoader::new(registry()).with_search_paths(["shop"]);
    loader.remove_search_path("shop");

    assert!(!loader.contains("Gadget"));
}

#[test]
fn test_factory_rejection_is_construction_error() {
    let loader = RegistryTypeLoader::new(registry());

    let result = loader.create_instance(GADGET, &[Arg::from(1_i64), Arg::from(2_i64)]);

    match result {
        Err(Error::Construction { class_name, message }) => {
            assert_eq!(class_name, GADGET);
            assert!(message.contains("(integer, integer)"));
        }
        other => panic!("expected construction error, got {other:?}"),
    }
}

#[test]
fn test_resolve_name_returns_registered_name() {
    let loader = RegistryTypeLoader::new(registry()).with_search_paths(["shop"]);

    assert_eq!(loader.resolve_name("Gadget").as_deref(), Some(GADGET));
    assert_eq!(loader.resolve_name(GADGET).as_deref(), Some(GADGET));
    assert_eq!(loader.resolve_name("SHOP.GADGET"), None);
}
