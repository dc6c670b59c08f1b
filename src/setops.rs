//! Derivation logic shared by the two unique-item kinds.
//!
//! Set and frozenset differ only in mutability; their derivational policy
//! is identical. The subset-producing operations live in one macro here,
//! and the raw element merging for the item-introducing ones in two
//! helpers, so the policy is written once.

use std::collections::HashSet;

use crate::value::Value;

pub(crate) fn union_items(base: &HashSet<Value>, extra: Vec<Value>) -> HashSet<Value> {
    let mut items = base.clone();
    items.extend(extra);
    items
}

pub(crate) fn symmetric_difference_items(
    base: &HashSet<Value>,
    other: Vec<Value>,
) -> HashSet<Value> {
    let other: HashSet<Value> = other.into_iter().collect();
    let mut items = base.clone();
    for value in other {
        if !items.remove(&value) {
            items.insert(value);
        }
    }
    items
}

// Subset-producing derivations for a unique-item kind. `$result` is what
// the tier hands back, `$wrap` turns checked items into that result.
macro_rules! subset_ops {
    ($name:ident, $result:ty, $wrap:expr) => {
        impl $name {
            /// Elements of `self` absent from the argument. The result is
            /// a subset of already-validated items, so the argument's
            /// elements are never type-checked in either tier.
            ///
            /// # Errors
            ///
            /// [`FenceError::IterableExpected`] only.
            pub fn difference(
                &self,
                other: impl Into<$crate::restrict::IterInput>,
            ) -> Result<$result, $crate::error::FenceError> {
                let other = $crate::restrict::materialize(other.into())?;
                let mut items = self.items.clone();
                for value in &other {
                    items.remove(value);
                }
                Ok($wrap(items, self.item_type))
            }

            /// `difference` over several arguments at once.
            ///
            /// # Errors
            ///
            /// [`FenceError::IterableExpected`] only.
            pub fn difference_all<I, T>(
                &self,
                others: I,
            ) -> Result<$result, $crate::error::FenceError>
            where
                I: IntoIterator<Item = T>,
                T: Into<$crate::restrict::IterInput>,
            {
                let mut items = self.items.clone();
                for other in others {
                    for value in &$crate::restrict::materialize(other.into())? {
                        items.remove(value);
                    }
                }
                Ok($wrap(items, self.item_type))
            }

            /// Elements common to `self` and the argument. Never
            /// type-checked, same reasoning as `difference`.
            ///
            /// # Errors
            ///
            /// [`FenceError::IterableExpected`] only.
            pub fn intersection(
                &self,
                other: impl Into<$crate::restrict::IterInput>,
            ) -> Result<$result, $crate::error::FenceError> {
                let other: std::collections::HashSet<$crate::value::Value> =
                    $crate::restrict::materialize(other.into())?
                        .into_iter()
                        .collect();
                let mut items = self.items.clone();
                items.retain(|value| other.contains(value));
                Ok($wrap(items, self.item_type))
            }

            /// `intersection` over several arguments at once.
            ///
            /// # Errors
            ///
            /// [`FenceError::IterableExpected`] only.
            pub fn intersection_all<I, T>(
                &self,
                others: I,
            ) -> Result<$result, $crate::error::FenceError>
            where
                I: IntoIterator<Item = T>,
                T: Into<$crate::restrict::IterInput>,
            {
                let mut items = self.items.clone();
                for other in others {
                    let other: std::collections::HashSet<$crate::value::Value> =
                        $crate::restrict::materialize(other.into())?
                            .into_iter()
                            .collect();
                    items.retain(|value| other.contains(value));
                }
                Ok($wrap(items, self.item_type))
            }
        }
    };
}

pub(crate) use subset_ops;
