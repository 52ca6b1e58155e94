//! Iterate, transform, and combine sequences and keyed collections.
//!
//! # Overview
//!
//! A small set of functional helpers that behave the same whether given an ordered sequence or
//! a map with string keys:
//!
//! - [keys]: enumerate own keys in canonical order
//! - [map_values]: build a container of the same kind with transformed values
//! - [reduce] and [fold]: fold values in key order
//! - [includes]: search with strict, `NaN`-aware equality
//! - [some] and [every]: short-circuiting predicates
//! - [zip]: group the `i`-th elements of several sequences
//! - [flow]: compose functions left to right
//!
//! Sequences (`Vec<T>`, `[T]`, `[T; N]`) are keyed by their ascending indices (`"0"`, `"1"`,
//! ...). Maps (`IndexMap<String, T>`, `BTreeMap<String, T>`) are keyed by their own keys in
//! iteration order. Any other container can participate by implementing [Collection].
//!
//! The [dynamic] module offers the same operations over duck-typed [Value]s, validating at
//! runtime what the type system guarantees here. [guards] classifies such values.
//!
//! # Example
//!
//! ```
//! use collection_utils::{flow, includes, map_values, reduce, zip, Error, Stage};
//! use indexmap::IndexMap;
//!
//! // Sequences map to sequences
//! let doubled: Vec<i32> = map_values(&vec![1, 2, 3], |value, _| value * 2);
//! assert_eq!(doubled, [2, 4, 6]);
//!
//! // Maps map to maps with the same keys
//! let prices = IndexMap::from([("tea".to_string(), 3), ("cake".to_string(), 5)]);
//! let labels: IndexMap<String, String> =
//!     map_values(&prices, |price, item| format!("{item}: {price}"));
//! assert_eq!(labels["cake"], "cake: 5");
//!
//! // Reductions are seeded by their first value unless told otherwise
//! assert_eq!(reduce(&vec![1, 2, 3], |a, b, _, _| a + b, None), Ok(6));
//! assert_eq!(reduce(&vec![1, 2, 3], |a, b, _, _| a + b, Some(10)), Ok(16));
//! assert_eq!(reduce(&Vec::<i32>::new(), |a, b, _, _| a + b, None), Err(Error::EmptyCollection));
//!
//! // NaN is found
//! assert!(includes(&vec![f64::NAN], &f64::NAN));
//!
//! // Shorter sequences leave gaps
//! assert_eq!(zip(&[vec![1, 2], vec![3]]), [[Some(1), Some(3)], [Some(2), None]]);
//!
//! // Functions compose left to right
//! let f = flow([
//!     Box::new(|x: i32| x + 1) as Stage<i32>,
//!     Box::new(|x: i32| x * 2) as Stage<i32>,
//! ]);
//! assert_eq!(f.call(3), 8);
//! ```

mod collection;
pub use collection::{Collection, Insert, Shape, View};
pub mod dynamic;
mod error;
pub use error::Error;
pub mod guards;
mod identity;
pub use identity::StrictEq;
#[cfg(feature = "serde")]
mod json;
mod ops;
pub use ops::{every, flow, fold, includes, keys, map_values, reduce, some, zip, Flow, Stage};
pub mod value;
pub use value::{Function, Value};
