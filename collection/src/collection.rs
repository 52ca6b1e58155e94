//! Uniform keyed access over sequences and maps.
//!
//! A [Collection] exposes its own keys as strings, in a canonical order, and can produce an
//! empty container of the same kind. Ordered sequences use their ascending indices (`"0"`,
//! `"1"`, ...) as keys; maps use their string keys in iteration order.
//!
//! Dynamic [Value]s are accessed through a borrowed [View], which builds [Shape]s as results.

use crate::{
    guards::{is_function, is_object_like},
    Error, Value,
};
use indexmap::IndexMap;
use std::{collections::BTreeMap, hash::BuildHasher};

/// A container into which entries can be written by key.
pub trait Insert<U> {
    /// Stores `value` under `key`.
    ///
    /// Sequences receive keys in ascending index order and append.
    fn put(&mut self, key: &str, value: U);
}

/// A read-only container with enumerable string keys.
pub trait Collection {
    /// Type of the values stored under each key.
    type Item;

    /// Container of the same kind holding `U`s.
    type Like<U>: Insert<U>;

    /// Returns the own enumerable keys, in canonical order.
    fn keys(&self) -> Vec<String>;

    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&Self::Item>;

    /// Returns an empty container of the same kind.
    fn new_empty_like<U>(&self) -> Self::Like<U>;
}

/// Parses a canonical sequence index.
///
/// Only the form produced by [Collection::keys] is accepted: `"01"` or `"+1"` do not name an
/// element.
fn index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

fn indices(len: usize) -> Vec<String> {
    (0..len).map(|i| i.to_string()).collect()
}

impl<U> Insert<U> for Vec<U> {
    fn put(&mut self, _: &str, value: U) {
        self.push(value);
    }
}

impl<U, S: BuildHasher> Insert<U> for IndexMap<String, U, S> {
    fn put(&mut self, key: &str, value: U) {
        self.insert(key.to_owned(), value);
    }
}

impl<U> Insert<U> for BTreeMap<String, U> {
    fn put(&mut self, key: &str, value: U) {
        self.insert(key.to_owned(), value);
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Like<U> = Vec<U>;

    fn keys(&self) -> Vec<String> {
        indices(self.len())
    }

    fn get(&self, key: &str) -> Option<&T> {
        index(key).and_then(|i| <[T]>::get(self, i))
    }

    fn new_empty_like<U>(&self) -> Vec<U> {
        Vec::with_capacity(self.len())
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Like<U> = Vec<U>;

    fn keys(&self) -> Vec<String> {
        self.as_slice().keys()
    }

    fn get(&self, key: &str) -> Option<&T> {
        Collection::get(self.as_slice(), key)
    }

    fn new_empty_like<U>(&self) -> Vec<U> {
        self.as_slice().new_empty_like()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Like<U> = Vec<U>;

    fn keys(&self) -> Vec<String> {
        indices(N)
    }

    fn get(&self, key: &str) -> Option<&T> {
        Collection::get(self.as_slice(), key)
    }

    fn new_empty_like<U>(&self) -> Vec<U> {
        Vec::with_capacity(N)
    }
}

impl<T, S: BuildHasher + Default> Collection for IndexMap<String, T, S> {
    type Item = T;
    type Like<U> = IndexMap<String, U, S>;

    fn keys(&self) -> Vec<String> {
        IndexMap::keys(self).cloned().collect()
    }

    fn get(&self, key: &str) -> Option<&T> {
        IndexMap::get(self, key)
    }

    fn new_empty_like<U>(&self) -> IndexMap<String, U, S> {
        IndexMap::with_capacity_and_hasher(self.len(), S::default())
    }
}

impl<T> Collection for BTreeMap<String, T> {
    type Item = T;
    type Like<U> = BTreeMap<String, U>;

    fn keys(&self) -> Vec<String> {
        BTreeMap::keys(self).cloned().collect()
    }

    fn get(&self, key: &str) -> Option<&T> {
        BTreeMap::get(self, key)
    }

    fn new_empty_like<U>(&self) -> BTreeMap<String, U> {
        BTreeMap::new()
    }
}

/// A borrowed, validated view of a [Value] as a [Collection].
#[derive(Clone, Copy, Debug)]
pub enum View<'a> {
    /// An array, keyed by index.
    Sequence(&'a [Value]),
    /// An object, keyed by its entries.
    Keyed(&'a crate::value::Map),
    /// A function or pattern: object-like, but without own enumerable keys.
    Opaque,
}

impl<'a> View<'a> {
    /// Creates a view over `value`.
    ///
    /// Returns [Error::InvalidCollectionType] if `value` is neither object-like nor callable.
    pub fn new(value: &'a Value) -> Result<Self, Error> {
        match value {
            Value::Array(items) => Ok(Self::Sequence(items)),
            Value::Object(map) => Ok(Self::Keyed(map)),
            _ if is_object_like(value) || is_function(value) => Ok(Self::Opaque),
            _ => Err(Error::InvalidCollectionType),
        }
    }
}

impl Collection for View<'_> {
    type Item = Value;
    type Like<U> = Shape<U>;

    fn keys(&self) -> Vec<String> {
        match self {
            Self::Sequence(items) => items.keys(),
            Self::Keyed(map) => Collection::keys(*map),
            Self::Opaque => Vec::new(),
        }
    }

    fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Sequence(items) => Collection::get(*items, key),
            Self::Keyed(map) => Collection::get(*map, key),
            Self::Opaque => None,
        }
    }

    fn new_empty_like<U>(&self) -> Shape<U> {
        match self {
            Self::Sequence(items) => Shape::Sequence(Vec::with_capacity(items.len())),
            Self::Keyed(map) => Shape::Keyed(IndexMap::with_capacity(map.len())),
            Self::Opaque => Shape::Keyed(IndexMap::new()),
        }
    }
}

/// A container built from a [View]: a sequence if the view was one, otherwise a keyed map.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape<U> {
    Sequence(Vec<U>),
    Keyed(IndexMap<String, U>),
}

impl<U> Insert<U> for Shape<U> {
    fn put(&mut self, key: &str, value: U) {
        match self {
            Self::Sequence(items) => items.put(key, value),
            Self::Keyed(map) => map.put(key, value),
        }
    }
}

impl From<Shape<Value>> for Value {
    fn from(shape: Shape<Value>) -> Self {
        match shape {
            Shape::Sequence(items) => items.into(),
            Shape::Keyed(map) => map.into(),
        }
    }
}
