//! The shared enforcement core: restriction validation, single-item and
//! iterable compatibility checks, and the operation-input type every
//! container operation funnels its arguments through.
//!
//! Every container variant calls into this module instead of carrying its
//! own checking logic, so the policy (what is validated, and when) lives in
//! exactly one place.

use std::fmt;

use crate::error::FenceError;
use crate::value::{Value, ValueKind};

/// An argument to a container operation: either a dynamic value, whose
/// iterability is decided from its kind, or a one-shot stream of values.
///
/// The category is fixed the moment the argument is built. A `Value` is
/// reusable and can be inspected as often as needed; a `Stream` can be
/// iterated exactly once, so [`materialize`] drains it into a concrete
/// sequence up front and that sequence serves both validation and the
/// operation itself.
pub enum IterInput {
    /// A reusable dynamic value.
    Value(Value),
    /// A single-pass producer of values.
    Stream(Box<dyn Iterator<Item = Value>>),
}

impl IterInput {
    /// Wraps a single-pass producer.
    pub fn stream<I>(iter: I) -> IterInput
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        IterInput::Stream(Box::new(iter.into_iter()))
    }
}

impl fmt::Debug for IterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterInput::Value(v) => f.debug_tuple("Value").field(v).finish(),
            IterInput::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<Value> for IterInput {
    fn from(value: Value) -> IterInput {
        IterInput::Value(value)
    }
}

impl From<&Value> for IterInput {
    fn from(value: &Value) -> IterInput {
        IterInput::Value(value.clone())
    }
}

impl From<Vec<Value>> for IterInput {
    fn from(items: Vec<Value>) -> IterInput {
        IterInput::Value(Value::List(items))
    }
}

/// Validates a kind used as an item-type restriction.
///
/// A `ValueKind` is a type by construction, so the only way it can be
/// unusable is failing the hashability requirement of the unique-item
/// container kinds.
///
/// # Errors
///
/// Returns [`FenceError::UnhashableRestriction`] when `requires_hashable`
/// is set and instances of `item_type` cannot be set members.
pub fn validate_item_type(
    item_type: ValueKind,
    requires_hashable: bool,
) -> Result<(), FenceError> {
    if requires_hashable && !item_type.is_hashable() {
        return Err(FenceError::UnhashableRestriction {
            restriction: item_type,
        });
    }
    Ok(())
}

/// Resolves a dynamic value used *as* an item-type restriction.
///
/// This is the path where "the candidate is not a type at all" can happen:
/// anything but a `Value::Type` fails, strictly before any data the caller
/// holds is inspected.
///
/// # Errors
///
/// - [`FenceError::NotAType`] if `candidate` is not a type value.
/// - [`FenceError::UnhashableRestriction`] per [`validate_item_type`].
pub fn item_type_from_value(
    candidate: &Value,
    requires_hashable: bool,
) -> Result<ValueKind, FenceError> {
    match candidate {
        Value::Type(kind) => {
            validate_item_type(*kind, requires_hashable)?;
            Ok(*kind)
        }
        other => Err(FenceError::NotAType {
            found: other.kind(),
        }),
    }
}

/// Checks one value against a restriction.
///
/// # Errors
///
/// Returns [`FenceError::IncompatibleItem`] if `value` is not an instance
/// of `item_type`.
pub fn check_item(value: &Value, item_type: ValueKind) -> Result<(), FenceError> {
    if value.is_instance_of(item_type) {
        Ok(())
    } else {
        Err(FenceError::IncompatibleItem {
            expected: item_type,
            found: value.kind(),
        })
    }
}

/// Turns an operation argument into a concrete ordered sequence.
///
/// Strings yield their characters as one-character `Str` values, containers
/// (plain or typed) yield clones of their items, streams are drained once.
///
/// # Errors
///
/// Returns [`FenceError::IterableExpected`] for a non-iterable value.
pub fn materialize(input: IterInput) -> Result<Vec<Value>, FenceError> {
    match input {
        IterInput::Stream(iter) => Ok(iter.collect()),
        IterInput::Value(value) => match value {
            Value::Str(s) => Ok(s.chars().map(|c| Value::Str(c.to_string())).collect()),
            Value::List(items) | Value::Tuple(items) => Ok(items),
            Value::Set(items) | Value::Frozenset(items) => Ok(items.into_iter().collect()),
            Value::Typed(t) => Ok(t.items_vec()),
            other => Err(FenceError::IterableExpected {
                found: other.kind(),
            }),
        },
    }
}

/// Materializes an argument and checks every element against a restriction,
/// in order, failing on the first incompatible one.
///
/// On success the returned sequence is the materialized argument, ready to
/// be consumed by the operation; single-pass inputs are never touched
/// twice.
///
/// # Errors
///
/// - [`FenceError::IterableExpected`] per [`materialize`].
/// - [`FenceError::IncompatibleElement`] naming the index and kind of the
///   first element that is not an instance of `item_type`.
pub fn check_iterable(
    input: impl Into<IterInput>,
    item_type: ValueKind,
) -> Result<Vec<Value>, FenceError> {
    let items = materialize(input.into())?;
    for (index, item) in items.iter().enumerate() {
        if !item.is_instance_of(item_type) {
            return Err(FenceError::IncompatibleElement {
                index,
                expected: item_type,
                found: item.kind(),
            });
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_input_is_not_iterable() {
        let err = materialize(IterInput::from(Value::Int(3))).unwrap_err();
        assert_eq!(
            err,
            FenceError::IterableExpected {
                found: ValueKind::Int
            }
        );
    }

    #[test]
    fn string_materializes_to_characters() {
        let chars = materialize(IterInput::from(Value::from("abc"))).unwrap();
        assert_eq!(chars, vec!["a".into(), "b".into(), "c".into()]);
    }

    #[test]
    fn string_is_a_valid_iterable_of_str() {
        // Dual role: a str value is itself iterable over str values.
        let items = check_iterable(Value::from("hi"), ValueKind::Str).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn string_elements_fail_a_non_str_restriction() {
        let err = check_iterable(Value::from("hi"), ValueKind::Int).unwrap_err();
        assert_eq!(
            err,
            FenceError::IncompatibleElement {
                index: 0,
                expected: ValueKind::Int,
                found: ValueKind::Str,
            }
        );
    }

    #[test]
    fn stream_is_drained_exactly_once() {
        let input = IterInput::stream(vec![Value::from("a"), Value::from("b")]);
        let items = check_iterable(input, ValueKind::Str).unwrap();
        assert_eq!(items, vec!["a".into(), "b".into()]);
    }

    #[test]
    fn first_bad_element_is_reported_with_its_index() {
        let err = check_iterable(Value::list(["a", "b"]), ValueKind::Int).unwrap_err();
        assert_eq!(
            err,
            FenceError::IncompatibleElement {
                index: 0,
                expected: ValueKind::Int,
                found: ValueKind::Str,
            }
        );

        let mixed = Value::List(vec![Value::Int(1), Value::from("x"), Value::Int(2)]);
        let err = check_iterable(mixed, ValueKind::Int).unwrap_err();
        assert_eq!(
            err,
            FenceError::IncompatibleElement {
                index: 1,
                expected: ValueKind::Int,
                found: ValueKind::Str,
            }
        );
    }

    #[test]
    fn non_type_value_fails_before_hashability() {
        let err = item_type_from_value(&Value::from("str"), true).unwrap_err();
        assert!(matches!(err, FenceError::NotAType { found: ValueKind::Str }));
    }

    #[test]
    fn unhashable_restriction_rejected_when_required() {
        assert!(validate_item_type(ValueKind::List, false).is_ok());
        let err = validate_item_type(ValueKind::List, true).unwrap_err();
        assert_eq!(
            err,
            FenceError::UnhashableRestriction {
                restriction: ValueKind::List
            }
        );
    }
}
