//! The unique-item immutable container kind, in both enforcement tiers.
//!
//! The frozen counterpart of [`crate::TypedSet`]: same construction rules
//! (hashable restriction), same derivational policy, no mutating surface
//! at all.

use std::collections::hash_set::Iter;
use std::collections::HashSet;
use std::fmt;

use crate::convert::{Sealed, TypedIterable};
use crate::error::FenceError;
use crate::restrict::{self, IterInput};
use crate::setops::{self, subset_ops};
use crate::value::{write_seq, TypedIter, Value, ValueKind};

macro_rules! frozenset_core {
    ($name:ident) => {
        impl $name {
            /// Creates an empty frozen set restricted to `item_type`.
            ///
            /// # Errors
            ///
            /// [`FenceError::UnhashableRestriction`] if instances of
            /// `item_type` cannot be set members.
            pub fn new(item_type: ValueKind) -> Result<Self, FenceError> {
                restrict::validate_item_type(item_type, true)?;
                Ok(Self {
                    items: HashSet::new(),
                    item_type,
                })
            }

            /// Creates a frozen set from an iterable, checking every
            /// element. Duplicates collapse.
            ///
            /// # Errors
            ///
            /// - [`FenceError::UnhashableRestriction`] for an unusable
            ///   restriction, checked strictly before the data.
            /// - [`FenceError::IterableExpected`] if `initial` is not
            ///   iterable.
            /// - [`FenceError::IncompatibleElement`] on the first element
            ///   that is not an instance of `item_type`.
            pub fn from_iterable(
                initial: impl Into<IterInput>,
                item_type: ValueKind,
            ) -> Result<Self, FenceError> {
                restrict::validate_item_type(item_type, true)?;
                let items = restrict::check_iterable(initial, item_type)?
                    .into_iter()
                    .collect();
                Ok(Self { items, item_type })
            }

            /// Wraps items already known to satisfy the restriction.
            pub(crate) fn from_checked_items(
                items: HashSet<Value>,
                item_type: ValueKind,
            ) -> Self {
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

            pub fn contains(&self, value: &Value) -> bool {
                self.items.contains(value)
            }

            pub fn iter(&self) -> Iter<'_, Value> {
                self.items.iter()
            }

            /// The backing items.
            pub fn items(&self) -> &HashSet<Value> {
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

/// Unique-item immutable container, light tier.
#[derive(Debug, Clone)]
pub struct TypedFrozenSetLight {
    items: HashSet<Value>,
    item_type: ValueKind,
}

frozenset_core!(TypedFrozenSetLight);
subset_ops!(TypedFrozenSetLight, HashSet<Value>, |items, _| items);

impl TypedFrozenSetLight {
    /// Union, plain result, argument elements not type-checked.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] only.
    pub fn union(&self, other: impl Into<IterInput>) -> Result<HashSet<Value>, FenceError> {
        let extra = restrict::materialize(other.into())?;
        Ok(setops::union_items(&self.items, extra))
    }

    /// `union` over several arguments at once.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] only.
    pub fn union_all<I, T>(&self, others: I) -> Result<HashSet<Value>, FenceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<IterInput>,
    {
        let mut items = self.items.clone();
        for other in others {
            items.extend(restrict::materialize(other.into())?);
        }
        Ok(items)
    }

    /// Symmetric difference, plain result, argument elements not
    /// type-checked.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] only.
    pub fn symmetric_difference(
        &self,
        other: impl Into<IterInput>,
    ) -> Result<HashSet<Value>, FenceError> {
        let other = restrict::materialize(other.into())?;
        Ok(setops::symmetric_difference_items(&self.items, other))
    }
}

impl fmt::Display for TypedFrozenSetLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frozenset_lt[{}]:", self.item_type)?;
        write_seq(f, &self.items, "{", "}")
    }
}

/// Unique-item immutable container, complete tier.
#[derive(Debug, Clone)]
pub struct TypedFrozenSet {
    items: HashSet<Value>,
    item_type: ValueKind,
}

frozenset_core!(TypedFrozenSet);
subset_ops!(TypedFrozenSet, TypedFrozenSet, TypedFrozenSet::from_checked_items);

impl TypedFrozenSet {
    /// Union, typed result; every element of the argument is checked
    /// before the delegation.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] or
    /// [`FenceError::IncompatibleElement`]; no instance is produced on
    /// failure.
    pub fn union(&self, other: impl Into<IterInput>) -> Result<TypedFrozenSet, FenceError> {
        let extra = restrict::check_iterable(other, self.item_type)?;
        Ok(TypedFrozenSet::from_checked_items(
            setops::union_items(&self.items, extra),
            self.item_type,
        ))
    }

    /// `union` over several arguments; all of them are checked before any
    /// is merged.
    ///
    /// # Errors
    ///
    /// As [`TypedFrozenSet::union`].
    pub fn union_all<I, T>(&self, others: I) -> Result<TypedFrozenSet, FenceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<IterInput>,
    {
        let mut checked = Vec::new();
        for other in others {
            checked.push(restrict::check_iterable(other, self.item_type)?);
        }
        let mut items = self.items.clone();
        for extra in checked {
            items.extend(extra);
        }
        Ok(TypedFrozenSet::from_checked_items(items, self.item_type))
    }

    /// Symmetric difference, typed result, argument checked first.
    ///
    /// # Errors
    ///
    /// As [`TypedFrozenSet::union`].
    pub fn symmetric_difference(
        &self,
        other: impl Into<IterInput>,
    ) -> Result<TypedFrozenSet, FenceError> {
        let other = restrict::check_iterable(other, self.item_type)?;
        Ok(TypedFrozenSet::from_checked_items(
            setops::symmetric_difference_items(&self.items, other),
            self.item_type,
        ))
    }
}

impl fmt::Display for TypedFrozenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frozenset[{}]:", self.item_type)?;
        write_seq(f, &self.items, "{", "}")
    }
}

impl Sealed for TypedFrozenSetLight {}

impl TypedIterable for TypedFrozenSetLight {
    fn class_kind() -> ValueKind {
        ValueKind::TypedFrozenSetLight
    }

    fn plain_kind() -> ValueKind {
        ValueKind::Frozenset
    }

    fn requires_hashable() -> bool {
        true
    }

    fn restricted_from(input: IterInput, item_type: ValueKind) -> Result<Self, FenceError> {
        Self::from_iterable(input, item_type)
    }

    fn item_type(&self) -> ValueKind {
        self.item_type
    }

    fn into_value(self) -> Value {
        Value::Typed(Box::new(TypedIter::FrozensetLight(self)))
    }
}

impl Sealed for TypedFrozenSet {}

impl TypedIterable for TypedFrozenSet {
    fn class_kind() -> ValueKind {
        ValueKind::TypedFrozenSet
    }

    fn plain_kind() -> ValueKind {
        ValueKind::Frozenset
    }

    fn requires_hashable() -> bool {
        true
    }

    fn restricted_from(input: IterInput, item_type: ValueKind) -> Result<Self, FenceError> {
        Self::from_iterable(input, item_type)
    }

    fn item_type(&self) -> ValueKind {
        self.item_type
    }

    fn into_value(self) -> Value {
        Value::Typed(Box::new(TypedIter::Frozenset(self)))
    }
}

impl From<TypedFrozenSetLight> for Value {
    fn from(set: TypedFrozenSetLight) -> Value {
        set.into_value()
    }
}

impl From<TypedFrozenSet> for Value {
    fn from(set: TypedFrozenSet) -> Value {
        set.into_value()
    }
}

impl From<&TypedFrozenSetLight> for IterInput {
    fn from(set: &TypedFrozenSetLight) -> IterInput {
        IterInput::Value(set.clone().into_value())
    }
}

impl From<&TypedFrozenSet> for IterInput {
    fn from(set: &TypedFrozenSet) -> IterInput {
        IterInput::Value(set.clone().into_value())
    }
}
