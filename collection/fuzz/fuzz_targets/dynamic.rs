#![no_main]

use arbitrary::Arbitrary;
use collection_utils::{dynamic, guards, Error, Function, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Node {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Array(Vec<u8>),
    Object(Vec<(String, u8)>),
    Function,
}

impl Node {
    fn build(self) -> Value {
        match self {
            Node::Undefined => Value::Undefined,
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(b),
            Node::Number(n) => Value::Number(n),
            Node::Text(s) => Value::Text(s),
            Node::Array(items) => Value::array(items.into_iter().map(u32::from)),
            Node::Object(entries) => {
                Value::object(entries.into_iter().map(|(key, value)| (key, u32::from(value))))
            }
            Node::Function => Value::function(|_, args| Function::arg(args, 0)),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    collection: Node,
    target: Node,
    sequences: Vec<Node>,
}

fn fuzz(input: FuzzInput) {
    let collection = input.collection.build();
    let target = input.target.build();
    let truthy = Value::function(|_, args| Function::arg(args, 0));

    // Key enumeration decides validity for every operation
    let keys = dynamic::keys(&collection);
    let valid = guards::is_object_like(&collection) || guards::is_function(&collection);
    assert_eq!(keys.is_ok(), valid);
    let Ok(keys) = keys else {
        assert_eq!(
            dynamic::includes(&collection, &target),
            Err(Error::InvalidCollectionType)
        );
        return;
    };

    let identity = Value::function(|_, args| Function::arg(args, 0));
    let mapped = dynamic::map_values(&collection, &identity).unwrap();
    assert_eq!(dynamic::keys(&mapped).unwrap(), keys);
    assert_eq!(guards::is_array(&mapped), guards::is_array(&collection));

    let some = dynamic::some(&collection, &truthy, None).unwrap();
    let every = dynamic::every(&collection, &truthy, None).unwrap();
    if keys.is_empty() {
        assert!(!some);
        assert!(every);
        assert_eq!(
            dynamic::reduce(&collection, &truthy, None),
            Err(Error::EmptyCollection)
        );
    } else if every {
        assert!(some);
    }
    let _ = dynamic::includes(&collection, &target).unwrap();

    // Zip validates every argument
    let sequences: Vec<Value> = input.sequences.into_iter().map(Node::build).collect();
    match dynamic::zip(&sequences) {
        Ok(rows) => {
            let longest = sequences
                .iter()
                .filter_map(Value::as_array)
                .map(<[Value]>::len)
                .max()
                .unwrap_or(0);
            assert_eq!(rows.as_array().map(<[Value]>::len), Some(longest));
        }
        Err(Error::InvalidArraylike(position)) => {
            assert!(!guards::is_array(&sequences[position]));
        }
        Err(Error::EmptyCollection) => assert!(sequences.is_empty()),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
