use pretty_assertions::assert_eq;

use crate::{
    array::{Arg, ArrayLib, args::MIN_ARGS},
    errors::{ConstructionError, Error},
    options::Options,
    types::{Type, TypeLib},
    values::{Slot, Value},
};

fn construction_error(result: Result<ArrayLib, Error>) -> ConstructionError {
    match result {
        Err(Error::Construction(err)) => err,
        other => panic!("expected a construction error, got {:?}", other),
    }
}

#[test]
fn test_providers_then_elements() {
    let array = ArrayLib::from_args([
        Arg::from(Type::string()),
        Arg::elements(["a", "b"]),
    ])
    .unwrap();
    assert_eq!(array.element_at(-1), Ok(&Value::from("b")));
    assert_eq!(array.domain().to_string(), "String");
}

#[test]
fn test_domain_then_elements() {
    let domain = TypeLib::new([Type::string(), Type::undefined()]).unwrap();
    let array = ArrayLib::from_args([
        Arg::from(domain),
        Arg::from(vec![Slot::Hole, Slot::from("b")]),
    ])
    .unwrap();
    assert_eq!(array.element_at(0), Ok(&Value::Undefined));
}

#[test]
fn test_too_few_arguments() {
    let err = construction_error(ArrayLib::from_args([]));
    assert_eq!(
        err,
        ConstructionError::MissingArguments {
            expected: MIN_ARGS,
            received: 0
        }
    );

    let err = construction_error(ArrayLib::from_args([Arg::elements(["a"])]));
    assert_eq!(
        err,
        ConstructionError::MissingArguments {
            expected: 2,
            received: 1
        }
    );
    assert_eq!(err.to_string(), "expected at least 2 arguments, but received 1");
}

#[test]
fn test_last_argument_must_be_a_sequence() {
    let err = construction_error(ArrayLib::from_args([
        Arg::from(Type::string()),
        Arg::from(Value::from("a")),
    ]));
    assert_eq!(
        err.to_string(),
        "expected the last argument to be a sequence, but received a value of type 'string'"
    );

    let err = construction_error(ArrayLib::from_args([
        Arg::elements(["a"]),
        Arg::from(Type::string()),
    ]));
    assert_eq!(
        err,
        ConstructionError::NotASequence {
            found: "type provider 'String'".to_string()
        }
    );
}

#[test]
fn test_leading_arguments_must_be_providers() {
    let err = construction_error(ArrayLib::from_args([
        Arg::from(Type::string()),
        Arg::from(Value::Int(3)),
        Arg::elements(["a"]),
    ]));
    assert_eq!(
        err,
        ConstructionError::NotAProvider {
            position: 1,
            found: "a value of type 'number'".to_string()
        }
    );
}

#[test]
fn test_domain_must_stand_alone() {
    let domain = TypeLib::new([Type::string()]).unwrap();
    let err = construction_error(ArrayLib::from_args([
        Arg::from(Type::undefined()),
        Arg::from(domain),
        Arg::elements(["a"]),
    ]));
    assert_eq!(
        err,
        ConstructionError::NotAProvider {
            position: 1,
            found: "type domain 'String'".to_string()
        }
    );
}

#[test]
fn test_elements_are_validated() {
    let err = construction_error(ArrayLib::from_args([
        Arg::from(Type::string()),
        Arg::elements([Value::from("a"), Value::Null]),
    ]));
    assert_eq!(
        err.to_string(),
        "null does not match any of the provided types (String)"
    );
}

#[test]
fn test_many_providers() {
    let array = ArrayLib::from_args([
        Arg::from(Type::string()),
        Arg::from(Type::int()),
        Arg::from(Type::null()),
        Arg::elements([Value::from("a"), Value::Int(1), Value::Null]),
    ])
    .unwrap();
    assert_eq!(array.count(), 3);
    assert_eq!(array.domain().providers().len(), 3);
}

#[test]
fn test_array_value_as_elements() {
    let array = ArrayLib::from_args([
        Arg::from(Type::string()),
        Arg::from(Value::Array(vec![Value::from("a"), Value::from("b")])),
    ])
    .unwrap();
    assert_eq!(array.count(), 2);
    assert_eq!(array.element_at(-1), Ok(&Value::from("b")));

    let err = construction_error(ArrayLib::from_args([
        Arg::from(Type::string()),
        Arg::from(Value::Array(vec![Value::from("a"), Value::Int(1)])),
    ]));
    assert_eq!(
        err.to_string(),
        "1 does not match any of the provided types (String)"
    );
}

#[test]
fn test_from_args_with_options() {
    let options = Options {
        allow_holes: false,
        value_preview_limit: Some(3),
    };

    let err = construction_error(ArrayLib::from_args_with_options(
        [
            Arg::from(Type::string()),
            Arg::from(vec![Slot::from("a"), Slot::Hole]),
        ],
        &options,
    ));
    assert_eq!(
        err,
        ConstructionError::NoMatch {
            value: "und...".to_string(),
            expected: "String".to_string(),
        }
    );

    let array = ArrayLib::from_args_with_options(
        [
            Arg::from(Type::string()),
            Arg::from(Type::undefined()),
            Arg::from(vec![Slot::from("a"), Slot::Hole]),
        ],
        &options,
    )
    .unwrap();
    assert_eq!(array.element_at(1), Ok(&Value::Undefined));
}
