//! Strict identity used by [crate::includes].

use crate::Value;
use std::sync::Arc;

/// Strict (identity) equality.
///
/// Primitives are identical when they hold the same value. References are identical only when
/// they share a referent.
pub trait StrictEq {
    /// Returns `true` if `self` and `other` are identical.
    fn strict_eq(&self, other: &Self) -> bool;

    /// Returns `true` if the value is not identical to itself (`NaN`).
    fn is_self_unequal(&self) -> bool {
        false
    }
}

macro_rules! impl_strict_eq {
    ($($t:ty),*) => {
        $(
            impl StrictEq for $t {
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_strict_eq!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, str, String
);

macro_rules! impl_strict_eq_float {
    ($($t:ty),*) => {
        $(
            impl StrictEq for $t {
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[allow(clippy::eq_op)]
                fn is_self_unequal(&self) -> bool {
                    self != self
                }
            }
        )*
    };
}

impl_strict_eq_float!(f32, f64);

impl<T: StrictEq + ?Sized> StrictEq for &T {
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }

    fn is_self_unequal(&self) -> bool {
        (**self).is_self_unequal()
    }
}

impl StrictEq for Value {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.strict_eq(b),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Pattern(a), Self::Pattern(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn is_self_unequal(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_self_unequal())
    }
}
