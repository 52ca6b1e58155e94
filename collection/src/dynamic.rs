//! Collection operations over dynamically typed [Value]s.
//!
//! These mirror the functions at the crate root but accept any [Value], checking at runtime
//! that collections are object-like or callable, that iteratees are callable, and that
//! variadic arguments have the expected kind. All checks run before the first iteratee
//! invocation.
//!
//! Iteratees are invoked with `undefined` as their context unless a context is supplied, and
//! receive the same positional arguments in every operation:
//!
//! | Operation    | Arguments                                     |
//! |--------------|-----------------------------------------------|
//! | `map_values` | `(value, key)`                                |
//! | `reduce`     | `(accumulator, value, index, collection)`     |
//! | `some`       | `(value, index, collection)`                  |
//! | `every`      | `(value, index, collection)`                  |
//!
//! # Example
//!
//! ```
//! use collection_utils::{dynamic, Function, Value};
//!
//! let add = Value::function(|_, args| {
//!     let a = Function::arg(args, 0).as_number().unwrap_or(f64::NAN);
//!     let b = Function::arg(args, 1).as_number().unwrap_or(f64::NAN);
//!     Value::from(a + b)
//! });
//! let numbers = Value::array([1, 2, 3]);
//!
//! assert_eq!(dynamic::reduce(&numbers, &add, None).unwrap(), Value::from(6));
//! assert_eq!(dynamic::reduce(&numbers, &add, Some(Value::from(10))).unwrap(), Value::from(16));
//! ```

use crate::{
    guards::{is_array, is_function},
    ops, Error, Function, Value, View,
};
use tracing::trace;

fn as_iteratee(value: &Value) -> Result<&Function, Error> {
    value.as_function().ok_or(Error::InvalidIteratee)
}

/// Returns the own enumerable keys of `collection`, in canonical order.
///
/// Arrays yield their indices, objects their keys, and functions or patterns nothing.
pub fn keys(collection: &Value) -> Result<Vec<String>, Error> {
    Ok(ops::keys(&View::new(collection)?))
}

/// Builds a value of the same kind as `collection` (an array for arrays, an object otherwise)
/// holding `iteratee(value, key)` under every key.
pub fn map_values(collection: &Value, iteratee: &Value) -> Result<Value, Error> {
    let view = View::new(collection)?;
    let iteratee = as_iteratee(iteratee)?;
    let shape = ops::map_values(&view, |value, key| {
        iteratee.call(&Value::Undefined, &[value.clone(), Value::from(key)])
    });
    Ok(shape.into())
}

/// Reduces `collection` with `iteratee(accumulator, value, index, collection)`.
///
/// `Some(initial)` is a supplied initial value even when it is [Value::Undefined]. With `None`,
/// the first value seeds the accumulator and an empty collection yields
/// [Error::EmptyCollection].
pub fn reduce(
    collection: &Value,
    iteratee: &Value,
    initial: Option<Value>,
) -> Result<Value, Error> {
    let iteratee = as_iteratee(iteratee)?;
    let view = View::new(collection)?;
    ops::reduce(
        &view,
        |accumulator, value, index, _| {
            iteratee.call(
                &Value::Undefined,
                &[accumulator, value.clone(), index.into(), collection.clone()],
            )
        },
        initial,
    )
}

/// Returns `true` if any value in `collection` is strictly equal to `target`, treating `NaN`
/// as equal to `NaN`.
pub fn includes(collection: &Value, target: &Value) -> Result<bool, Error> {
    Ok(ops::includes(&View::new(collection)?, target))
}

/// Returns `true` at the first value for which `iteratee(value, index, collection)` is truthy.
///
/// `iteratee` is called with `this` as its context when supplied.
pub fn some(collection: &Value, iteratee: &Value, this: Option<Value>) -> Result<bool, Error> {
    let view = View::new(collection)?;
    let iteratee = as_iteratee(iteratee)?;
    let context = this.unwrap_or_default();
    Ok(ops::some(&view, |value, index, _| {
        iteratee
            .call(&context, &[value.clone(), index.into(), collection.clone()])
            .is_truthy()
    }))
}

/// Returns `false` at the first value for which `iteratee(value, index, collection)` is falsy.
///
/// `iteratee` is called with `this` as its context when supplied. An empty collection yields
/// `true`.
pub fn every(collection: &Value, iteratee: &Value, this: Option<Value>) -> Result<bool, Error> {
    let view = View::new(collection)?;
    let iteratee = as_iteratee(iteratee)?;
    let context = this.unwrap_or_default();
    Ok(ops::every(&view, |value, index, _| {
        iteratee
            .call(&context, &[value.clone(), index.into(), collection.clone()])
            .is_truthy()
    }))
}

/// Groups the `i`-th elements of every array into a new array.
///
/// The result has one row per index of the longest array; shorter arrays contribute
/// `undefined`. Every argument must be an array, and at least one must be given.
pub fn zip(sequences: &[Value]) -> Result<Value, Error> {
    if let Some(position) = sequences.iter().position(|sequence| !is_array(sequence)) {
        return Err(Error::InvalidArraylike(position));
    }
    let arrays: Vec<&[Value]> = sequences.iter().filter_map(Value::as_array).collect();

    // The longest array is found by an unseeded reduction, so no arrays means no rows to size.
    let longest = ops::reduce(
        &arrays,
        |longest, current, _, _| {
            if current.len() > longest.len() {
                *current
            } else {
                longest
            }
        },
        None,
    )?;
    trace!(longest = longest.len(), "zipping arrays");

    let rows = ops::zip(&arrays)
        .into_iter()
        .map(|row| Value::array(row.into_iter().map(Option::unwrap_or_default)));
    Ok(Value::array(rows))
}

/// Composes `fns` left to right into a new function.
///
/// The returned function passes its first argument through every function in order and
/// returns the last result. Without functions it returns its argument.
pub fn flow(fns: &[Value]) -> Result<Value, Error> {
    if let Some(position) = fns.iter().position(|f| !is_function(f)) {
        return Err(Error::InvalidCallable(position));
    }
    let stages: Vec<Function> = fns.iter().filter_map(Value::as_function).cloned().collect();
    trace!(stages = stages.len(), "composed flow");
    Ok(Value::function(move |_, args| {
        ops::fold(&stages, Function::arg(args, 0), |result, stage, _, _| {
            stage.call(&Value::Undefined, &[result])
        })
    }))
}
