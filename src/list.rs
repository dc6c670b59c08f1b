//! The ordered mutable container kind, in both enforcement tiers.
//!
//! [`TypedListLight`] guards construction and every operation that inserts
//! into the receiver; derivations fall through to plain `Vec<Value>`
//! results. [`TypedList`] additionally wraps every derivational result back
//! into the typed class.

use std::fmt;
use std::ops::RangeBounds;
use std::slice::Iter;

use crate::convert::{Sealed, TypedIterable};
use crate::error::FenceError;
use crate::restrict::{self, IterInput};
use crate::value::{resolve_range, write_seq, TypedIter, Value, ValueKind};

macro_rules! list_core {
    ($name:ident) => {
        impl $name {
            /// Creates an empty list restricted to `item_type`.
            ///
            /// # Errors
            ///
            /// Cannot fail for the ordered kinds today (no hashability
            /// requirement); the `Result` keeps construction uniform across
            /// all container kinds.
            pub fn new(item_type: ValueKind) -> Result<Self, FenceError> {
                restrict::validate_item_type(item_type, false)?;
                Ok(Self {
                    items: Vec::new(),
                    item_type,
                })
            }

            /// Creates a list from an iterable, checking every element.
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

            /// Appends one checked item.
            ///
            /// # Errors
            ///
            /// [`FenceError::IncompatibleItem`]; the receiver is unchanged
            /// on failure.
            pub fn push(&mut self, value: Value) -> Result<(), FenceError> {
                restrict::check_item(&value, self.item_type)?;
                self.items.push(value);
                Ok(())
            }

            /// Inserts one checked item at `index`.
            ///
            /// # Errors
            ///
            /// [`FenceError::IncompatibleItem`]; the receiver is unchanged
            /// on failure.
            ///
            /// # Panics
            ///
            /// Like `Vec::insert`, if `index > len`.
            pub fn insert(&mut self, index: usize, value: Value) -> Result<(), FenceError> {
                restrict::check_item(&value, self.item_type)?;
                self.items.insert(index, value);
                Ok(())
            }

            /// Replaces the item at `index` (index assignment).
            ///
            /// # Errors
            ///
            /// [`FenceError::IncompatibleItem`]; the receiver is unchanged
            /// on failure.
            ///
            /// # Panics
            ///
            /// Like `Vec` indexing, if `index >= len`.
            pub fn set(&mut self, index: usize, value: Value) -> Result<(), FenceError> {
                restrict::check_item(&value, self.item_type)?;
                self.items[index] = value;
                Ok(())
            }

            /// Appends every element of a checked iterable. This is also
            /// the `+=` spelling of the original surface.
            ///
            /// # Errors
            ///
            /// [`FenceError::IterableExpected`] or
            /// [`FenceError::IncompatibleElement`]; the receiver is
            /// unchanged on failure.
            pub fn extend(&mut self, values: impl Into<IterInput>) -> Result<(), FenceError> {
                let values = restrict::check_iterable(values, self.item_type)?;
                self.items.extend(values);
                Ok(())
            }

            /// Replaces the items in `range` with a checked iterable
            /// (slice assignment). The range is clamped to the current
            /// length, so it never panics.
            ///
            /// # Errors
            ///
            /// [`FenceError::IterableExpected`] or
            /// [`FenceError::IncompatibleElement`]; the receiver is
            /// unchanged on failure.
            pub fn splice(
                &mut self,
                range: impl RangeBounds<usize>,
                values: impl Into<IterInput>,
            ) -> Result<(), FenceError> {
                let values = restrict::check_iterable(values, self.item_type)?;
                let (start, end) = resolve_range(range, self.items.len());
                let _ = self.items.splice(start..end, values);
                Ok(())
            }

            /// Removes and returns the last item. Cannot break the
            /// invariant, so no check.
            pub fn pop(&mut self) -> Option<Value> {
                self.items.pop()
            }

            pub fn clear(&mut self) {
                self.items.clear();
            }
        }

        impl PartialEq for $name {
            // Contents only: the restriction does not take part in
            // equality, matching the plain-sequence contract.
            fn eq(&self, other: &Self) -> bool {
                self.items == other.items
            }
        }

        impl Eq for $name {}
    };
}

/// Ordered mutable container, light tier.
///
/// Input is guarded at construction and at every operation inserting into
/// the receiver. Operations that produce a *new* collection are handled by
/// the plain backing type: they return `Vec<Value>` and never type-check
/// their argument (iterability is still required where the operation
/// consumes an iterable).
#[derive(Debug, Clone)]
pub struct TypedListLight {
    items: Vec<Value>,
    item_type: ValueKind,
}

list_core!(TypedListLight);

impl TypedListLight {
    /// Concatenation, plain result. The argument may hold incompatible
    /// elements; nothing is inserted into the receiver.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] only.
    pub fn concat(&self, other: impl Into<IterInput>) -> Result<Vec<Value>, FenceError> {
        let extra = restrict::materialize(other.into())?;
        let mut items = self.items.clone();
        items.extend(extra);
        Ok(items)
    }

    /// Repetition, plain result.
    pub fn repeat(&self, count: usize) -> Vec<Value> {
        repeat_items(&self.items, count)
    }

    /// Sub-sequence read, plain result. The range is clamped.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Vec<Value> {
        let (start, end) = resolve_range(range, self.items.len());
        self.items[start..end].to_vec()
    }
}

impl fmt::Display for TypedListLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List_lt[{}]:", self.item_type)?;
        write_seq(f, &self.items, "[", "]")
    }
}

/// Ordered mutable container, complete tier.
///
/// Everything [`TypedListLight`] enforces, plus: every derivational
/// operation returns a new `TypedList` carrying the same restriction.
/// Derivations whose result is drawn only from the receiver's own items
/// skip the compatibility re-check: those items are provably valid.
#[derive(Debug, Clone)]
pub struct TypedList {
    items: Vec<Value>,
    item_type: ValueKind,
}

list_core!(TypedList);

impl TypedList {
    /// Concatenation, typed result. The argument can introduce new items,
    /// so every element is checked before the delegation.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] or
    /// [`FenceError::IncompatibleElement`]; no instance is produced on
    /// failure.
    pub fn concat(&self, other: impl Into<IterInput>) -> Result<TypedList, FenceError> {
        let extra = restrict::check_iterable(other, self.item_type)?;
        let mut items = self.items.clone();
        items.extend(extra);
        Ok(TypedList::from_checked_items(items, self.item_type))
    }

    /// Repetition, typed result. Only existing items recur: no re-check.
    pub fn repeat(&self, count: usize) -> TypedList {
        TypedList::from_checked_items(repeat_items(&self.items, count), self.item_type)
    }

    /// Sub-sequence read, typed result, no re-check. The range is clamped.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> TypedList {
        let (start, end) = resolve_range(range, self.items.len());
        TypedList::from_checked_items(self.items[start..end].to_vec(), self.item_type)
    }
}

impl fmt::Display for TypedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List[{}]:", self.item_type)?;
        write_seq(f, &self.items, "[", "]")
    }
}

fn repeat_items(items: &[Value], count: usize) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len() * count);
    for _ in 0..count {
        out.extend_from_slice(items);
    }
    out
}

impl Sealed for TypedListLight {}

impl TypedIterable for TypedListLight {
    fn class_kind() -> ValueKind {
        ValueKind::TypedListLight
    }

    fn plain_kind() -> ValueKind {
        ValueKind::List
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
        Value::Typed(Box::new(TypedIter::ListLight(self)))
    }
}

impl Sealed for TypedList {}

impl TypedIterable for TypedList {
    fn class_kind() -> ValueKind {
        ValueKind::TypedList
    }

    fn plain_kind() -> ValueKind {
        ValueKind::List
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
        Value::Typed(Box::new(TypedIter::List(self)))
    }
}

impl From<TypedListLight> for Value {
    fn from(list: TypedListLight) -> Value {
        list.into_value()
    }
}

impl From<TypedList> for Value {
    fn from(list: TypedList) -> Value {
        list.into_value()
    }
}

impl From<&TypedListLight> for IterInput {
    fn from(list: &TypedListLight) -> IterInput {
        IterInput::Value(list.clone().into_value())
    }
}

impl From<&TypedList> for IterInput {
    fn from(list: &TypedList) -> IterInput {
        IterInput::Value(list.clone().into_value())
    }
}
