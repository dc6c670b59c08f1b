use crate::value::ValueKind;
use thiserror::Error;

/// Errors raised by the type-enforcement layer.
///
/// The variants fall into three categories, so callers can match narrowly
/// (a single variant) or broadly (a whole category via the helper
/// predicates):
///
/// - invalid restriction: [`FenceError::NotAType`],
///   [`FenceError::UnhashableRestriction`]
/// - iterable expected: [`FenceError::IterableExpected`]
/// - type restriction broken: [`FenceError::IncompatibleItem`],
///   [`FenceError::IncompatibleElement`]
///
/// Failures native to the backing collection (an out-of-range positional
/// write, for example) are not translated into `FenceError`; they keep the
/// behavior of the underlying `Vec` or `HashSet` operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenceError {
    /// A value that is not a type was supplied as an item-type restriction.
    #[error("invalid type restriction: a {found} value is not a type")]
    NotAType {
        /// Kind of the value that was supplied instead of a type.
        found: ValueKind,
    },

    /// The restriction is a real type, but the container requires its items
    /// to be usable as set members and instances of this type are not.
    #[error("invalid type restriction: {restriction} is not a hashable type")]
    UnhashableRestriction {
        /// The rejected restriction.
        restriction: ValueKind,
    },

    /// An operation required an iterable argument and received a scalar.
    #[error("expected an iterable value, found {found}")]
    IterableExpected {
        /// Kind of the non-iterable value.
        found: ValueKind,
    },

    /// A single item given to an inserting operation broke the restriction.
    #[error("incompatible item: expected {expected}, found {found}")]
    IncompatibleItem {
        /// The receiver's item-type restriction.
        expected: ValueKind,
        /// Kind of the rejected item.
        found: ValueKind,
    },

    /// An element inside an iterable argument broke the restriction.
    #[error("incompatible element at index {index}: expected {expected}, found {found}")]
    IncompatibleElement {
        /// Position of the first offending element, in iteration order.
        index: usize,
        /// The receiver's item-type restriction.
        expected: ValueKind,
        /// Kind of the rejected element.
        found: ValueKind,
    },
}

impl FenceError {
    /// True for failures of the restriction itself (not a type, or not
    /// hashable where hashability is required).
    pub fn is_invalid_restriction(&self) -> bool {
        matches!(
            self,
            FenceError::NotAType { .. } | FenceError::UnhashableRestriction { .. }
        )
    }

    /// True for failures of concrete data against a valid restriction.
    pub fn is_type_restriction(&self) -> bool {
        matches!(
            self,
            FenceError::IncompatibleItem { .. } | FenceError::IncompatibleElement { .. }
        )
    }
}
