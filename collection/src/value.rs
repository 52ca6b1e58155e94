//! Dynamically typed values that can be traversed as collections.
//!
//! [Value] mirrors the value model of a duck-typed host: primitives compare by value, while
//! arrays, objects, functions, and patterns are references. Cloning a reference [Value] shares
//! its referent, so two clones remain strictly equal (see [crate::StrictEq]) whereas two
//! separately built arrays with the same elements do not.

use indexmap::IndexMap;
use regex::Regex;
use std::{fmt, sync::Arc};

/// Insertion-ordered map backing [Value::Object].
pub type Map = IndexMap<String, Value>;

type Callable = dyn Fn(&Value, &[Value]) -> Value + Send + Sync;

/// A callable [Value].
///
/// The wrapped closure receives the call context (`this`) and the positional arguments. Callers
/// may pass fewer arguments than the closure reads; use [Function::arg] to read a missing
/// trailing argument as [Value::Undefined].
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    /// Wraps a closure as a [Function].
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the function with the given context and arguments.
    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        (self.0)(this, args)
    }

    /// Returns the argument at `index`, or [Value::Undefined] if it was not passed.
    pub fn arg(args: &[Value], index: usize) -> Value {
        args.get(index).cloned().unwrap_or_default()
    }

    /// Returns `true` if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function")
    }
}

/// A dynamically typed value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Array(Arc<Vec<Value>>),
    Object(Arc<Map>),
    Function(Function),
    Pattern(Arc<Regex>),
}

impl Value {
    /// Creates a new array from the given items.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Creates a new object from the given entries, keeping their order.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object(Arc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Creates a new function value.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Function(Function::new(f))
    }

    /// Returns `true` unless the value is `undefined`, `null`, `false`, `0`, `-0`, `NaN`, or
    /// empty text.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => !(*n == 0.0 || n.is_nan()),
            Self::Text(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) | Self::Pattern(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }
}

/// Structural equality: arrays and objects compare by contents, functions by identity, and
/// patterns by source. Numbers follow IEEE semantics, so `NaN` never equals itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        // Rounds above 2^53; indices and lengths never get there.
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(Arc::new(items))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Object(Arc::new(map))
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Self::Pattern(Arc::new(re))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        // Test case 0: falsy primitives
        for value in [
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(-0.0),
            Value::Number(f64::NAN),
            Value::from(""),
        ] {
            assert!(!value.is_truthy(), "{value:?} should be falsy");
        }

        // Test case 1: truthy primitives
        for value in [
            Value::Bool(true),
            Value::Number(-1.5),
            Value::Number(f64::INFINITY),
            Value::from("0"),
        ] {
            assert!(value.is_truthy(), "{value:?} should be truthy");
        }

        // Test case 2: references are truthy even when empty
        assert!(Value::array(Vec::<Value>::new()).is_truthy());
        assert!(Value::object(Vec::<(String, Value)>::new()).is_truthy());
        assert!(Value::function(|_, _| Value::Undefined).is_truthy());
    }

    #[test]
    fn test_structural_equality() {
        let a = Value::array([1, 2, 3]);
        let b = Value::array([1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, Value::array([1, 2]));

        let a = Value::object([("x", 1), ("y", 2)]);
        let b = Value::object([("y", 2), ("x", 1)]);
        assert_eq!(a, b);

        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_eq!(
            Value::from(Regex::new("a+").unwrap()),
            Value::from(Regex::new("a+").unwrap())
        );
    }

    #[test]
    fn test_function_identity() {
        let f = Function::new(|_, args| Function::arg(args, 0));
        let g = Function::new(|_, args| Function::arg(args, 0));
        assert!(f.ptr_eq(&f.clone()));
        assert!(!f.ptr_eq(&g));
        assert_eq!(Value::from(f.clone()), Value::from(f));
    }

    #[test]
    fn test_function_call() {
        let f = Function::new(|this, args| {
            Value::array([this.clone(), Function::arg(args, 0), Function::arg(args, 3)])
        });
        let result = f.call(&Value::from("ctx"), &[Value::from(1)]);
        assert_eq!(
            result,
            Value::array([Value::from("ctx"), Value::from(1), Value::Undefined])
        );
    }

    #[test]
    fn test_accessors() {
        let object = Value::object([("k", "v")]);
        assert_eq!(object.as_object().map(Map::len), Some(1));
        assert!(object.as_array().is_none());
        assert_eq!(Value::from(2).as_number(), Some(2.0));
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert!(Value::Null.as_function().is_none());
    }
}
