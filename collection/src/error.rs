//! Error types for collection operations

use thiserror::Error;

/// Errors that can occur when traversing a collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value has no enumerable keys (it is neither object-like nor callable).
    #[error("collection must be an object")]
    InvalidCollectionType,
    /// The iteratee cannot be called.
    #[error("iteratee must be a function")]
    InvalidIteratee,
    /// A variadic argument that must be an ordered sequence is not one.
    #[error("argument {0} must be an array")]
    InvalidArraylike(usize), // position
    /// A variadic argument that must be callable is not.
    #[error("argument {0} must be a function")]
    InvalidCallable(usize), // position
    /// A reduction without an initial value was asked of a collection with no keys.
    #[error("collection must have at least one element")]
    EmptyCollection,
    /// A value has no JSON counterpart.
    #[cfg(feature = "serde")]
    #[error("{0} has no JSON representation")]
    Unrepresentable(&'static str),
}
