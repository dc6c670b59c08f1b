//! The unique-item mutable container kind, in both enforcement tiers.
//!
//! Construction additionally requires a hashable restriction: items must be
//! usable as set members. Mutations are checked identically in both tiers;
//! the tiers part ways on derivational results, and within those, on
//! whether the operation can introduce items at all. Difference and
//! intersection provably cannot, so their arguments are never type-checked
//! in either tier.

use std::collections::hash_set::Iter;
use std::collections::HashSet;
use std::fmt;

use crate::convert::{Sealed, TypedIterable};
use crate::error::FenceError;
use crate::restrict::{self, IterInput};
use crate::setops::{self, subset_ops};
use crate::value::{write_seq, TypedIter, Value, ValueKind};

macro_rules! set_core {
    ($name:ident) => {
        impl $name {
            /// Creates an empty set restricted to `item_type`.
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

            /// Creates a set from an iterable, checking every element.
            /// Duplicates collapse, as in the plain backing collection.
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
            // Contents only, matching the plain-set contract.
            fn eq(&self, other: &Self) -> bool {
                self.items == other.items
            }
        }

        impl Eq for $name {}
    };
}

/// Unique-item mutable container, light tier.
///
/// Derivations return the plain backing collection. Item-introducing
/// derivations (`union`, `symmetric_difference`) still demand an iterable
/// argument but accept foreign-typed elements: nothing is inserted into
/// the receiver, and the plain result carries no restriction to honor.
#[derive(Debug, Clone)]
pub struct TypedSetLight {
    items: HashSet<Value>,
    item_type: ValueKind,
}

set_core!(TypedSetLight);
subset_ops!(TypedSetLight, HashSet<Value>, |items, _| items);

impl TypedSetLight {
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

impl fmt::Display for TypedSetLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set_lt[{}]:", self.item_type)?;
        write_seq(f, &self.items, "{", "}")
    }
}

/// Unique-item mutable container, complete tier.
#[derive(Debug, Clone)]
pub struct TypedSet {
    items: HashSet<Value>,
    item_type: ValueKind,
}

set_core!(TypedSet);
subset_ops!(TypedSet, TypedSet, TypedSet::from_checked_items);

impl TypedSet {
    /// Union, typed result; every element of the argument is checked
    /// before the delegation.
    ///
    /// # Errors
    ///
    /// [`FenceError::IterableExpected`] or
    /// [`FenceError::IncompatibleElement`]; no instance is produced on
    /// failure.
    pub fn union(&self, other: impl Into<IterInput>) -> Result<TypedSet, FenceError> {
        let extra = restrict::check_iterable(other, self.item_type)?;
        Ok(TypedSet::from_checked_items(
            setops::union_items(&self.items, extra),
            self.item_type,
        ))
    }

    /// `union` over several arguments; all of them are checked before any
    /// is merged.
    ///
    /// # Errors
    ///
    /// As [`TypedSet::union`].
    pub fn union_all<I, T>(&self, others: I) -> Result<TypedSet, FenceError>
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
        Ok(TypedSet::from_checked_items(items, self.item_type))
    }

    /// Symmetric difference, typed result, argument checked first.
    ///
    /// # Errors
    ///
    /// As [`TypedSet::union`].
    pub fn symmetric_difference(
        &self,
        other: impl Into<IterInput>,
    ) -> Result<TypedSet, FenceError> {
        let other = restrict::check_iterable(other, self.item_type)?;
        Ok(TypedSet::from_checked_items(
            setops::symmetric_difference_items(&self.items, other),
            self.item_type,
        ))
    }
}

// Mutations, identical in both tiers: the receiver's own invariant is at
// stake, so the check never depends on the tier.
macro_rules! set_mutations {
    ($name:ident) => {
        impl $name {
            /// Adds one checked item. Returns whether it was newly
            /// inserted, like the plain backing collection.
            ///
            /// # Errors
            ///
            /// [`FenceError::IncompatibleItem`]; the receiver is unchanged
            /// on failure.
            pub fn insert(&mut self, value: Value) -> Result<bool, FenceError> {
                restrict::check_item(&value, self.item_type)?;
                Ok(self.items.insert(value))
            }

            /// Merges every element of a checked iterable. This is also
            /// the `|=` spelling of the original surface.
            ///
            /// # Errors
            ///
            /// [`FenceError::IterableExpected`] or
            /// [`FenceError::IncompatibleElement`]; the receiver is
            /// unchanged on failure.
            pub fn update(&mut self, values: impl Into<IterInput>) -> Result<(), FenceError> {
                let values = restrict::check_iterable(values, self.item_type)?;
                self.items.extend(values);
                Ok(())
            }

            /// `update` over several arguments; all of them are checked
            /// before any is merged, so a failure leaves the receiver
            /// untouched.
            ///
            /// # Errors
            ///
            /// As [`Self::update`].
            pub fn update_all<I, T>(&mut self, others: I) -> Result<(), FenceError>
            where
                I: IntoIterator<Item = T>,
                T: Into<IterInput>,
            {
                let mut checked = Vec::new();
                for other in others {
                    checked.push(restrict::check_iterable(other, self.item_type)?);
                }
                for values in checked {
                    self.items.extend(values);
                }
                Ok(())
            }

            /// Toggles membership of every element of a checked iterable.
            /// This is also the `^=` spelling of the original surface.
            ///
            /// # Errors
            ///
            /// As [`Self::update`]; the receiver is unchanged on failure.
            pub fn symmetric_difference_update(
                &mut self,
                values: impl Into<IterInput>,
            ) -> Result<(), FenceError> {
                let values = restrict::check_iterable(values, self.item_type)?;
                let values: HashSet<Value> = values.into_iter().collect();
                for value in values {
                    if !self.items.remove(&value) {
                        self.items.insert(value);
                    }
                }
                Ok(())
            }

            /// Removes a value if present. Cannot break the invariant, so
            /// no check.
            pub fn remove(&mut self, value: &Value) -> bool {
                self.items.remove(value)
            }

            pub fn clear(&mut self) {
                self.items.clear();
            }
        }
    };
}

set_mutations!(TypedSetLight);
set_mutations!(TypedSet);

impl fmt::Display for TypedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set[{}]:", self.item_type)?;
        write_seq(f, &self.items, "{", "}")
    }
}

impl Sealed for TypedSetLight {}

impl TypedIterable for TypedSetLight {
    fn class_kind() -> ValueKind {
        ValueKind::TypedSetLight
    }

    fn plain_kind() -> ValueKind {
        ValueKind::Set
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
        Value::Typed(Box::new(TypedIter::SetLight(self)))
    }
}

impl Sealed for TypedSet {}

impl TypedIterable for TypedSet {
    fn class_kind() -> ValueKind {
        ValueKind::TypedSet
    }

    fn plain_kind() -> ValueKind {
        ValueKind::Set
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
        Value::Typed(Box::new(TypedIter::Set(self)))
    }
}

impl From<TypedSetLight> for Value {
    fn from(set: TypedSetLight) -> Value {
        set.into_value()
    }
}

impl From<TypedSet> for Value {
    fn from(set: TypedSet) -> Value {
        set.into_value()
    }
}

impl From<&TypedSetLight> for IterInput {
    fn from(set: &TypedSetLight) -> IterInput {
        IterInput::Value(set.clone().into_value())
    }
}

impl From<&TypedSet> for IterInput {
    fn from(set: &TypedSet) -> IterInput {
        IterInput::Value(set.clone().into_value())
    }
}
