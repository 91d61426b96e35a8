//! Singleton Tests

use std::sync::atomic::Ordering;
use std::sync::{Arc, Barrier, OnceLock, mpsc};
use std::thread;
use std::time::Duration;

use ioc_application::{ObjectResolver, SingletonRegistry, TypeRegistry};
use ioc_domain::{Arg, Error, Instance, ObjectConfig};

use crate::common::{MemoryStore, Person, TestLoader, counting_type, registry};

const THREADS: usize = 16;
const NESTED_TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn test_concurrent_first_calls_construct_once() {
    let types = TypeRegistry::isolated();
    let constructed = counting_type(&types, "demo.Shared");
    let resolver = ObjectResolver::new(
        Arc::new(MemoryStore::default()),
        Arc::new(TestLoader {
            registry: Arc::new(types),
        }),
    );

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let resolver = resolver.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                resolver.get_single_object("demo.Shared", &[]).unwrap()
            })
        })
        .collect();

    let instances: Vec<Instance> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    assert_eq!(instances.len(), THREADS);
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
}

#[test]
fn test_ids_naming_same_class_share_instance() {
    let resolver = ObjectResolver::new(
        Arc::new(MemoryStore::with(vec![
            ObjectConfig::new("first", "demo.Person")
                .with_arg("Shared")
                .with_value_property("Age", 1),
            ObjectConfig::new("second", "demo.Person")
                .with_arg("Ignored")
                .with_value_property("Age", 2),
        ])),
        Arc::new(TestLoader {
            registry: registry(),
        }),
    );

    let first = resolver.get_single_object_by_id("first").unwrap();
    let second = resolver.get_single_object_by_id("second").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    // the last applied settings win on the shared instance
    let person = first.downcast_arc::<Person>().unwrap();
    assert_eq!(person.name, "Shared");
    assert_eq!(person.age(), 2);

    resolver.get_single_object_by_id("first").unwrap();
    assert_eq!(person.age(), 1);
}

#[test]
fn test_unknown_spelling_rejected_on_cold_and_warm_cache() {
    let resolver = ObjectResolver::new(
        Arc::new(MemoryStore::default()),
        Arc::new(TestLoader {
            registry: registry(),
        }),
    );

    assert!(matches!(
        resolver.get_single_object("DEMO.PERSON", &[]),
        Err(Error::TypeNotFound { .. })
    ));

    resolver
        .get_single_object("demo.Person", &[Arg::from("x")])
        .unwrap();

    assert!(matches!(
        resolver.get_single_object("DEMO.PERSON", &[]),
        Err(Error::TypeNotFound { .. })
    ));
    assert_eq!(resolver.singletons().len(), 1);
}

#[test]
fn test_nested_creation_in_registry_does_not_block() {
    let singletons = Arc::new(SingletonRegistry::new());
    let (done, finished) = mpsc::channel();

    let worker = Arc::clone(&singletons);
    thread::spawn(move || {
        let outer = worker.get_or_create("demo.Outer", || {
            worker.get_or_create("demo.Dep", || Ok(Arc::new(Person::new("dep")) as Instance))?;
            Ok(Arc::new(Person::new("outer")) as Instance)
        });
        let _ = done.send(outer.is_ok());
    });

    assert_eq!(finished.recv_timeout(NESTED_TIMEOUT), Ok(true));
    assert!(singletons.contains("demo.Outer"));
    assert!(singletons.contains("demo.Dep"));
}

#[test]
fn test_factory_may_request_other_singletons() {
    let types = TypeRegistry::isolated();
    let resolver_slot: Arc<OnceLock<ObjectResolver>> = Arc::new(OnceLock::new());
    let slot = Arc::clone(&resolver_slot);
    types.register("demo.Dep", "dependency", |_: &[Arg]| {
        Ok(Arc::new(Person::new("dep")) as Instance)
    });
    types.register("demo.Outer", "needs demo.Dep", move |_: &[Arg]| {
        let resolver = slot
            .get()
            .ok_or_else(|| Error::construction("demo.Outer", "resolver not ready"))?;
        let dep = resolver.get_single_object("demo.Dep", &[])?;
        let outer = Person::new("outer");
        outer.state.write().unwrap().friend = Some(dep);
        Ok(Arc::new(outer) as Instance)
    });
    let resolver = ObjectResolver::new(
        Arc::new(MemoryStore::default()),
        Arc::new(TestLoader {
            registry: Arc::new(types),
        }),
    );
    resolver_slot.set(resolver.clone()).unwrap();

    let (done, finished) = mpsc::channel();
    let worker = resolver.clone();
    thread::spawn(move || {
        let _ = done.send(worker.get_single_object("demo.Outer", &[]).map(|_| ()).is_ok());
    });

    assert_eq!(finished.recv_timeout(NESTED_TIMEOUT), Ok(true));
    let outer = resolver
        .get_single_object_typed::<Person>("demo.Outer", &[])
        .unwrap();
    let dep = resolver.get_single_object("demo.Dep", &[]).unwrap();
    assert!(Arc::ptr_eq(&outer.friend().unwrap(), &dep));
}

#[test]
fn test_failed_construction_is_retried() {
    let resolver = ObjectResolver::new(
        Arc::new(MemoryStore::default()),
        Arc::new(TestLoader {
            registry: registry(),
        }),
    );

    // three literals match no Person constructor
    let args: [Arg; 3] = ["a".into(), "b".into(), "c".into()];
    assert!(resolver.get_single_object("demo.Person", &args).is_err());
    assert!(resolver.singletons().is_empty());

    assert!(resolver.get_single_object("demo.Person", &[]).is_ok());
    assert_eq!(resolver.singletons().len(), 1);
}

#[test]
fn test_registries_are_isolated() {
    let loader = Arc::new(TestLoader {
        registry: registry(),
    });
    let store = Arc::new(MemoryStore::default());
    let one = ObjectResolver::new(store.clone(), loader.clone());
    let two = ObjectResolver::new(store.clone(), loader.clone());
    let shared = Arc::new(SingletonRegistry::new());
    let three = ObjectResolver::new(store.clone(), loader.clone()).with_singletons(shared.clone());
    let four = ObjectResolver::new(store, loader).with_singletons(shared);

    let a = one.get_single_object("demo.Person", &[]).unwrap();
    let b = two.get_single_object("demo.Person", &[]).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));

    let c = three.get_single_object("demo.Person", &[]).unwrap();
    let d = four.get_single_object("demo.Person", &[]).unwrap();
    assert!(Arc::ptr_eq(&c, &d));
}
