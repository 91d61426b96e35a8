//! Property Value Tests

use ioc_domain::{Error, PropertyType, PropertyValue};

#[test]
fn test_try_from_matching_variant() {
    let age: i32 = PropertyValue::I32(30).try_into().unwrap();
    assert_eq!(age, 30);

    let name: String = PropertyValue::String("Alice".into()).try_into().unwrap();
    assert_eq!(name, "Alice");
}

#[test]
fn test_try_from_mismatched_variant() {
    let result: Result<i32, Error> = PropertyValue::I64(30).try_into();
    match result {
        Err(Error::TypeMismatch { expected, actual }) => {
            assert_eq!(expected, "i32");
            assert_eq!(actual, "i64");
        }
        other => panic!("Expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_enum_index() {
    let value = PropertyValue::Enum {
        index: 2,
        name: "Blue",
    };
    assert!(value.property_type().is_enum());
    assert_eq!(value.into_enum_index().unwrap(), 2);
    assert!(PropertyValue::Bool(true).into_enum_index().is_err());
}

#[test]
fn test_property_type_display() {
    assert_eq!(PropertyType::U16.to_string(), "u16");
    assert_eq!(PropertyType::Enum(&["A"]).to_string(), "enum");
}
