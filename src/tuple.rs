//! The ordered immutable container kind, in both enforcement tiers.
//!
//! No operation mutates the receiver; the tiers differ only in what the
//! derivational operations hand back. [`TypedTupleLight`] falls through to
//! plain `Box<[Value]>` results, [`TypedTuple`] re-wraps into the typed
//! class.

use std::fmt;
use std::ops::RangeBounds;
use std::slice::Iter;

use crate::convert::{Sealed, TypedIterable};
use crate::error::FenceError;
use crate::restrict::{self, IterInput};
use crate::value::{resolve_range, write_seq, TypedIter, Value, ValueKind};

macro_rules! tuple_core {
    ($name:ident) => {
        impl $name {
            /// Creates an empty tuple restricted to `item_type`.
            ///
            /// # Errors
            ///
            /// Cannot fail today; the `Result` keeps construction uniform
            /// across all container kinds.
            pub fn new(item_type: ValueKind) -> Result<Self, FenceError> {
                restrict::validate_item_type(item_type, false)?;
                Ok(Self {
                    items: Vec::new(),
                    item_type,
                })
            }

            /// Creates a tuple from an iterable, checking every element.
            ///
            /// # Errors
            ///
            /// - [`FenceError::IterableExpected`] if `initial` is not
            ///   iterable.
            /// - [`FenceError::IncompatibleElement`] on the first element
            ///   that is not an instance of `item_type`.
            pub fn from_iterable(
                initial: impl Into<IterInput>,
                item_type: ValueKind,
            ) -> Result<Self, FenceError> {
                restrict::validate_item_type(item_type, false)?;
                let items = restrict::check_iterable(initial, item_type)?;
                Ok(Self { items, item_type })
            }

            /// Wraps items already known to satisfy the restriction.
            pub(crate) fn from_checked_items(items: Vec<Value>, item_type: ValueKind) -> Self {
                Self { items, item_type }
            }

            /// The item-type restriction.
            pub fn item_type(&self) -> ValueKind {
                self.item_type
            }

            pub fn len(&self) -> usize {
                self.items.len()
            }

            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            /// Positional read of a single raw item.
            pub fn get(&self, index: usize) -> Option<&Value> {
                self.items.get(index)
            }

            pub fn iter(&self) -> Iter<'_, Value> {
                self.items.iter()
            }

            pub fn contains(&self, value: &Value) -> bool {
                self.items.contains(value)
            }

            /// The backing items, in order.
            pub fn items(&self) -> &[Value] {
                &self.items
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.items == other.items
            }
        }

        impl Eq for $name {}
    };
}

/// Ordered immutable container, light tier.
#[derive(Debug, Clone)]
pub struct TypedTupleLight {
    items: Vec<Value>,
    item_type: ValueKind,
}

tuple_core!(TypedTupleLight);

impl TypedTupleLight {
    /// Concatenation, plain result. The argument may hold incompatible
    /// elements.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] only.
    pub fn concat(&self, other: impl Into<IterInput>) -> Result<Box<[Value]>, FenceError> {
        let extra = restrict::materialize(other.into())?;
        let mut items = self.items.clone();
        items.extend(extra);
        Ok(items.into_boxed_slice())
    }

    /// Repetition, plain result.
    pub fn repeat(&self, count: usize) -> Box<[Value]> {
        repeat_items(&self.items, count).into_boxed_slice()
    }

    /// Sub-sequence read, plain result. The range is clamped.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Box<[Value]> {
        let (start, end) = resolve_range(range, self.items.len());
        self.items[start..end].to_vec().into_boxed_slice()
    }
}

impl fmt::Display for TypedTupleLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple_lt[{}]:", self.item_type)?;
        write_seq(f, &self.items, "(", ")")
    }
}

/// Ordered immutable container, complete tier.
#[derive(Debug, Clone)]
pub struct TypedTuple {
    items: Vec<Value>,
    item_type: ValueKind,
}

tuple_core!(TypedTuple);

impl TypedTuple {
    /// Concatenation, typed result; every element of the argument is
    /// checked before the delegation.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] or
    /// [`FenceError::IncompatibleElement`]; no instance is produced on
    /// failure.
    pub fn concat(&self, other: impl Into<IterInput>) -> Result<TypedTuple, FenceError> {
        let extra = restrict::check_iterable(other, self.item_type)?;
        let mut items = self.items.clone();
        items.extend(extra);
        Ok(TypedTuple::from_checked_items(items, self.item_type))
    }

    /// Repetition, typed result. Only existing items recur: no re-check.
    pub fn repeat(&self, count: usize) -> TypedTuple {
        TypedTuple::from_checked_items(repeat_items(&self.items, count), self.item_type)
    }

    /// Sub-sequence read, typed result, no re-check. The range is clamped.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> TypedTuple {
        let (start, end) = resolve_range(range, self.items.len());
        TypedTuple::from_checked_items(self.items[start..end].to_vec(), self.item_type)
    }
}

impl fmt::Display for TypedTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple[{}]:", self.item_type)?;
        write_seq(f, &self.items, "(", ")")
    }
}

fn repeat_items(items: &[Value], count: usize) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len() * count);
    for _ in 0..count {
        out.extend_from_slice(items);
    }
    out
}

impl Sealed for TypedTupleLight {}

impl TypedIterable for TypedTupleLight {
    fn class_kind() -> ValueKind {
        ValueKind::TypedTupleLight
    }

    fn plain_kind() -> ValueKind {
        ValueKind::Tuple
    }

    fn requires_hashable() -> bool {
        false
    }

    fn restricted_from(input: IterInput, item_type: ValueKind) -> Result<Self, FenceError> {
        Self::from_iterable(input, item_type)
    }

    fn item_type(&self) -> ValueKind {
        self.item_type
    }

    fn into_value(self) -> Value {
        Value::Typed(Box::new(TypedIter::TupleLight(self)))
    }
}

impl Sealed for TypedTuple {}

impl TypedIterable for TypedTuple {
    fn class_kind() -> ValueKind {
        ValueKind::TypedTuple
    }

    fn plain_kind() -> ValueKind {
        ValueKind::Tuple
    }

    fn requires_hashable() -> bool {
        false
    }

    fn restricted_from(input: IterInput, item_type: ValueKind) -> Result<Self, FenceError> {
        Self::from_iterable(input, item_type)
    }

    fn item_type(&self) -> ValueKind {
        self.item_type
    }

    fn into_value(self) -> Value {
        Value::Typed(Box::new(TypedIter::Tuple(self)))
    }
}

impl From<TypedTupleLight> for Value {
    fn from(tuple: TypedTupleLight) -> Value {
        tuple.into_value()
    }
}

impl From<TypedTuple> for Value {
    fn from(tuple: TypedTuple) -> Value {
        tuple.into_value()
    }
}

impl From<&TypedTupleLight> for IterInput {
    fn from(tuple: &TypedTupleLight) -> IterInput {
        IterInput::Value(tuple.clone().into_value())
    }
}

impl From<&TypedTuple> for IterInput {
    fn from(tuple: &TypedTuple) -> IterInput {
        IterInput::Value(tuple.clone().into_value())
    }
}
