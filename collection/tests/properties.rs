use collection_utils::{dynamic, Error, Function, StrictEq, Value};

fn number(value: &Value) -> f64 {
    value.as_number().unwrap_or(f64::NAN)
}

fn binary(f: fn(f64, f64) -> f64) -> Value {
    Value::function(move |_, args| {
        Value::from(f(
            number(&Function::arg(args, 0)),
            number(&Function::arg(args, 1)),
        ))
    })
}

fn unary(f: fn(f64) -> Value) -> Value {
    Value::function(move |_, args| f(number(&Function::arg(args, 0))))
}

#[test]
fn sequence_keys_are_ascending_indices() {
    for len in [0usize, 1, 2, 11] {
        let sequence = Value::array(0..len);
        let expected: Vec<String> = (0..len).map(|i| i.to_string()).collect();
        assert_eq!(dynamic::keys(&sequence).unwrap(), expected);
    }
}

#[test]
fn map_values_identity_copies() {
    let identity = Value::function(|_, args| Function::arg(args, 0));
    for collection in [
        Value::array(["a", "b"]),
        Value::object([("k", Value::Null), ("j", Value::from(1))]),
    ] {
        let copy = dynamic::map_values(&collection, &identity).unwrap();
        assert_eq!(copy, collection);
        assert!(!copy.strict_eq(&collection));
        assert_eq!(
            dynamic::keys(&copy).unwrap(),
            dynamic::keys(&collection).unwrap()
        );
    }
}

#[test]
fn reduce_initial_value_semantics() {
    let add = binary(|a, b| a + b);
    let numbers = Value::array([1, 2, 3]);
    let empty = Value::array(Vec::<Value>::new());

    assert_eq!(dynamic::reduce(&numbers, &add, None), Ok(Value::from(6)));
    assert_eq!(
        dynamic::reduce(&numbers, &add, Some(Value::from(10))),
        Ok(Value::from(16))
    );
    assert_eq!(
        dynamic::reduce(&empty, &add, None),
        Err(Error::EmptyCollection)
    );
    assert_eq!(
        dynamic::reduce(&empty, &add, Some(Value::from(0))),
        Ok(Value::from(0))
    );
}

#[test]
fn includes_matches_nan() {
    let nan = Value::from(f64::NAN);
    assert_eq!(dynamic::includes(&Value::array([f64::NAN]), &nan), Ok(true));
    assert_eq!(
        dynamic::includes(&Value::array([1, 2, 3]), &Value::from(2)),
        Ok(true)
    );
    assert_eq!(
        dynamic::includes(&Value::array([1, 2, 3]), &Value::from(4)),
        Ok(false)
    );
}

#[test]
fn predicates() {
    let numbers = Value::array([1, 2, 3]);
    let above_two = unary(|x| Value::from(x > 2.0));
    assert_eq!(dynamic::some(&numbers, &above_two, None), Ok(true));
    assert_eq!(dynamic::every(&numbers, &above_two, None), Ok(false));

    let anything = unary(|_| Value::Null);
    let empty = Value::array(Vec::<Value>::new());
    assert_eq!(dynamic::every(&empty, &anything, None), Ok(true));
}

#[test]
fn zip_pads_with_undefined() {
    let rows = dynamic::zip(&[Value::array([1, 2, 3]), Value::array(["a", "b"])]).unwrap();
    assert_eq!(
        rows,
        Value::array([
            Value::array([Value::from(1), Value::from("a")]),
            Value::array([Value::from(2), Value::from("b")]),
            Value::array([Value::from(3), Value::Undefined]),
        ])
    );
}

#[test]
fn flow_composes_left_to_right() {
    let composed = dynamic::flow(&[
        unary(|x| Value::from(x + 1.0)),
        unary(|x| Value::from(x * 2.0)),
    ])
    .unwrap();
    let composed = composed.as_function().unwrap();
    assert_eq!(
        composed.call(&Value::Undefined, &[Value::from(3)]),
        Value::from(8)
    );
}

#[test]
fn non_callable_iteratees_are_rejected() {
    let numbers = Value::array([1]);
    let not_callable = Value::from("not a function");
    assert_eq!(
        dynamic::some(&numbers, &not_callable, None),
        Err(Error::InvalidIteratee)
    );
    assert_eq!(
        dynamic::every(&numbers, &not_callable, None),
        Err(Error::InvalidIteratee)
    );
    assert_eq!(
        dynamic::reduce(&numbers, &not_callable, None),
        Err(Error::InvalidIteratee)
    );
}

#[test]
fn variadic_arguments_are_checked() {
    let f = unary(Value::from);
    assert_eq!(
        dynamic::zip(&[Value::array([1]), Value::Null]),
        Err(Error::InvalidArraylike(1))
    );
    assert_eq!(
        dynamic::flow(&[f.clone(), f, Value::array([1])]),
        Err(Error::InvalidCallable(2))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::InvalidCollectionType.to_string(),
        "collection must be an object"
    );
    assert_eq!(Error::InvalidIteratee.to_string(), "iteratee must be a function");
    assert_eq!(
        Error::InvalidArraylike(2).to_string(),
        "argument 2 must be an array"
    );
    assert_eq!(
        Error::InvalidCallable(0).to_string(),
        "argument 0 must be a function"
    );
    assert_eq!(
        Error::EmptyCollection.to_string(),
        "collection must have at least one element"
    );
}
