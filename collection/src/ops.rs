//! Traverse any [Collection] in canonical key order.
//!
//! Each operation enumerates the collection's keys once, up front, and then visits them in
//! order. No operation mutates its input.

use crate::{Collection, Error, Insert, StrictEq};
use tracing::trace;

/// A single stage of a [Flow].
pub type Stage<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Returns the own enumerable keys of `collection`, in canonical order.
pub fn keys<C: Collection + ?Sized>(collection: &C) -> Vec<String> {
    collection.keys()
}

/// Builds a container of the same kind as `collection` by applying `iteratee` to every
/// `(value, key)` pair.
pub fn map_values<C, U, F>(collection: &C, mut iteratee: F) -> C::Like<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, &str) -> U,
{
    let keys = collection.keys();
    let mut result = collection.new_empty_like::<U>();
    for key in &keys {
        if let Some(value) = collection.get(key) {
            result.put(key, iteratee(value, key));
        }
    }
    result
}

/// Folds `iteratee(accumulator, value, index, collection)` over the keys from `start` onwards.
fn fold_from<C, A, F>(
    collection: &C,
    keys: &[String],
    start: usize,
    initial: A,
    mut iteratee: F,
) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item, usize, &C) -> A,
{
    let mut accumulator = initial;
    for (index, key) in keys.iter().enumerate().skip(start) {
        if let Some(value) = collection.get(key) {
            accumulator = iteratee(accumulator, value, index, collection);
        }
    }
    accumulator
}

/// Folds `iteratee(accumulator, value, index, collection)` over every key, starting from
/// `initial`.
pub fn fold<C, A, F>(collection: &C, initial: A, iteratee: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item, usize, &C) -> A,
{
    let keys = collection.keys();
    fold_from(collection, &keys, 0, initial, iteratee)
}

/// Reduces `collection` to a single value.
///
/// If `initial` is supplied, folding starts from it at the first key. Otherwise the value of
/// the first key seeds the accumulator and folding starts at the second key, in which case an
/// empty collection yields [Error::EmptyCollection].
pub fn reduce<C, F>(
    collection: &C,
    iteratee: F,
    initial: Option<C::Item>,
) -> Result<C::Item, Error>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item, usize, &C) -> C::Item,
{
    let keys = collection.keys();
    match initial {
        Some(initial) => {
            trace!(keys = keys.len(), "reducing from supplied initial value");
            Ok(fold_from(collection, &keys, 0, initial, iteratee))
        }
        None => {
            let first = keys
                .first()
                .and_then(|key| collection.get(key))
                .ok_or(Error::EmptyCollection)?;
            trace!(keys = keys.len(), "reducing from first value");
            Ok(fold_from(collection, &keys, 1, first.clone(), iteratee))
        }
    }
}

/// Returns `true` if any value in `collection` is strictly equal to `target`, treating two
/// self-unequal values (`NaN`) as a match.
pub fn includes<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: StrictEq,
{
    let target_is_nan = target.is_self_unequal();
    collection
        .keys()
        .iter()
        .filter_map(|key| collection.get(key))
        .any(|current| {
            current.strict_eq(target) || (target_is_nan && current.is_self_unequal())
        })
}

/// Returns `true` at the first value for which `iteratee(value, index, collection)` holds.
pub fn some<C, F>(collection: &C, mut iteratee: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, usize, &C) -> bool,
{
    let keys = collection.keys();
    for (index, key) in keys.iter().enumerate() {
        if let Some(value) = collection.get(key) {
            if iteratee(value, index, collection) {
                return true;
            }
        }
    }
    false
}

/// Returns `false` at the first value for which `iteratee(value, index, collection)` fails.
///
/// An empty collection satisfies any predicate.
pub fn every<C, F>(collection: &C, mut iteratee: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, usize, &C) -> bool,
{
    !some(collection, |value, index, collection| {
        !iteratee(value, index, collection)
    })
}

/// Groups the `i`-th elements of every sequence.
///
/// The result has one row per index of the longest sequence. Each row has one slot per input
/// sequence, `None` where that sequence is too short.
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let len = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);
    trace!(width = sequences.len(), len, "zipping sequences");
    (0..len)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}

/// Composes `stages` left to right.
pub fn flow<T, I>(stages: I) -> Flow<T>
where
    I: IntoIterator<Item = Stage<T>>,
{
    let flow = Flow {
        stages: stages.into_iter().collect(),
    };
    trace!(stages = flow.len(), "composed flow");
    flow
}

/// A left-to-right composition of functions.
///
/// Calling a [Flow] threads its argument through every stage in order. A [Flow] without stages
/// returns its argument unchanged.
pub struct Flow<T> {
    stages: Vec<Stage<T>>,
}

impl<T> Default for Flow<T> {
    fn default() -> Self {
        Self { stages: Vec::new() }
    }
}

impl<T> Flow<T> {
    /// Creates a [Flow] without stages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage.
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the flow has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Threads `arg` through every stage.
    pub fn call(&self, arg: T) -> T {
        fold(&self.stages, arg, |result, stage, _, _| stage(result))
    }
}
