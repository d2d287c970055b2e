//! Integration tests for the arraylib facade.
//!
//! These exercise the public API the way a caller sees it: build a domain,
//! build a collection over it, then read.

use arraylib::{Arg, ArrayLib, ConstructionError, Error, Slot, Type, TypeLib, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_string_domain() {
    let domain = TypeLib::new([Type::string()]).unwrap();
    let array = ArrayLib::new(domain, ["a", "b"]).unwrap();

    assert_eq!(array.element_at(-1), Ok(&Value::from("b")));
    assert_eq!(array.first(), Ok(&Value::from("a")));
    assert_eq!(array.count(), 2);
    assert!(!array.any_where(|e| e.as_str() == Some("c")));
}

#[test]
fn test_string_or_undefined_domain() {
    let array = ArrayLib::with_providers(
        [Type::string(), Type::undefined()],
        [Value::Undefined, Value::from("b")],
    )
    .unwrap();

    assert_eq!(array.element_at(0), Ok(&Value::Undefined));
    assert_eq!(array.first(), Ok(&Value::Undefined));
}

#[test]
fn test_empty_string_domain() {
    let array = ArrayLib::with_providers([Type::string()], Vec::<Slot>::new()).unwrap();
    assert_eq!(array.first(), Err(Error::Empty));
    assert_eq!(array.first_where(|_| true), Err(Error::Empty));
    assert_eq!(array.count(), 0);
    assert!(!array.any());
}

#[test]
fn test_hole_after_construction_is_disambiguated() {
    // A hole is not a value: it only reads as undefined when the domain
    // says undefined is a legitimate element.
    let slots = vec![Slot::from("a"), Slot::Hole, Slot::from("c")];

    let strict = ArrayLib::with_providers([Type::string()], slots.clone()).unwrap();
    assert_eq!(
        strict.element_at(1),
        Err(Error::OutOfBounds { index: 1, len: 3 })
    );
    assert_eq!(strict.count(), 3);

    let optional = ArrayLib::with_providers([Type::string(), Type::undefined()], slots).unwrap();
    assert_eq!(optional.element_at(1), Ok(&Value::Undefined));
    assert_eq!(optional.element_at(-2), Ok(&Value::Undefined));
}

#[test]
fn test_construction_cites_first_offender() {
    let err = ArrayLib::with_providers(
        [Type::string(), Type::null()],
        [Value::from("a"), Value::Null, Value::from(true), Value::Int(3)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::Construction(ConstructionError::NoMatch {
            value: "true".to_string(),
            expected: "String | Null".to_string(),
        })
    );
}

#[test]
fn test_argument_list_construction() {
    let array = ArrayLib::from_args([
        Arg::from(Type::int()),
        Arg::from(Type::undefined()),
        Arg::elements([Value::Int(1), Value::Int(2)]),
    ])
    .unwrap();
    assert_eq!(array.element_at(2), Ok(&Value::Undefined));

    let err = ArrayLib::from_args([Arg::from(Type::int())]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected at least 2 arguments, but received 1"
    );
}

#[test]
fn test_providers_are_shared_across_domains() {
    let string = Type::string();
    let a = TypeLib::new([string.clone()]).unwrap();
    let b = TypeLib::new([string.clone(), Type::undefined()]).unwrap();

    let first = ArrayLib::new(a, ["x"]).unwrap();
    let second = ArrayLib::new(b, ["y"]).unwrap();

    assert!(std::sync::Arc::ptr_eq(
        &first.domain().providers()[0],
        &second.domain().providers()[0]
    ));
}

#[test]
fn test_collections_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArrayLib>();
    assert_send_sync::<TypeLib>();
    assert_send_sync::<Error>();
}

#[test]
fn test_render_error() {
    let array = ArrayLib::with_providers([Type::string()], ["a"]).unwrap();
    let err = array.element_at(3).unwrap_err();
    let rendered = arraylib::render_error_to_string_no_color(&err);
    assert!(rendered.contains("no element at index 3 in a collection of length 1"));
}
