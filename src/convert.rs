//! Filtering and conversion utilities built on top of the enforcement
//! core, plus the introspection predicates callers use to tell enforced
//! containers apart from plain ones.

use std::collections::HashSet;

use crate::error::FenceError;
use crate::restrict::{self, IterInput};
use crate::value::{Value, ValueKind};

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// The seam shared by all eight enforced container variants.
///
/// Implemented only inside this crate; it exists so the converter builders
/// (and generic callers) can construct and inspect any variant through one
/// interface.
pub trait TypedIterable: sealed::Sealed + Sized {
    /// This container's own class kind.
    fn class_kind() -> ValueKind;

    /// The plain kind this container substitutes for.
    fn plain_kind() -> ValueKind;

    /// Whether the item-type restriction must be hashable.
    fn requires_hashable() -> bool;

    /// Builds a container from an operation input, running the full
    /// restriction validation and compatibility check.
    fn restricted_from(input: IterInput, item_type: ValueKind) -> Result<Self, FenceError>;

    /// The item-type restriction of this instance.
    fn item_type(&self) -> ValueKind;

    /// Wraps this container into a [`Value`].
    fn into_value(self) -> Value;
}

/// Keeps only the elements of `input` that are instances of `item_type`,
/// preserving their relative order. Incompatible elements are silently
/// dropped, never reported.
///
/// # Errors
///
/// Returns [`FenceError::IterableExpected`] if `input` is not iterable.
pub fn filter_items(
    input: impl Into<IterInput>,
    item_type: ValueKind,
) -> Result<Vec<Value>, FenceError> {
    let items = restrict::materialize(input.into())?;
    Ok(items
        .into_iter()
        .filter(|item| item.is_instance_of(item_type))
        .collect())
}

/// Builds a conversion closure producing instances of the enforced
/// container `C` restricted to `item_type`.
///
/// The restriction is validated eagerly, here; the returned closure only
/// fails on incompatible data.
///
/// # Errors
///
/// Returns [`FenceError::UnhashableRestriction`] when `C` requires a
/// hashable restriction and `item_type` is not one.
///
/// # Examples
///
/// ```
/// use typefence::{get_converter, TypedList, Value, ValueKind};
///
/// let to_str_list = get_converter::<TypedList>(ValueKind::Str).unwrap();
/// let list = to_str_list(Value::tuple(["a", "b"]).into()).unwrap();
/// assert_eq!(list.len(), 2);
/// assert!(to_str_list(Value::list([1, 2]).into()).is_err());
/// ```
pub fn get_converter<C: TypedIterable>(
    item_type: ValueKind,
) -> Result<impl Fn(IterInput) -> Result<C, FenceError>, FenceError> {
    restrict::validate_item_type(item_type, C::requires_hashable())?;
    Ok(move |input: IterInput| C::restricted_from(input, item_type))
}

/// Builds a conversion closure producing a plain ordered-immutable
/// sequence, for callers who want the type check without the enforcement
/// wrapper.
///
/// # Errors
///
/// Never fails at build time: an ordered sequence has no hashability
/// requirement. The closure fails per [`crate::check_iterable`].
pub fn typesafe_tuple_converter(
    item_type: ValueKind,
) -> Result<impl Fn(IterInput) -> Result<Box<[Value]>, FenceError>, FenceError> {
    restrict::validate_item_type(item_type, false)?;
    Ok(move |input: IterInput| {
        Ok(restrict::check_iterable(input, item_type)?.into_boxed_slice())
    })
}

/// Builds a conversion closure producing a plain unique-immutable
/// collection.
///
/// # Errors
///
/// Returns [`FenceError::UnhashableRestriction`] for an unhashable
/// `item_type` (the result is a set; its members must hash).
pub fn typesafe_frozenset_converter(
    item_type: ValueKind,
) -> Result<impl Fn(IterInput) -> Result<HashSet<Value>, FenceError>, FenceError> {
    restrict::validate_item_type(item_type, true)?;
    Ok(move |input: IterInput| {
        Ok(restrict::check_iterable(input, item_type)?.into_iter().collect())
    })
}

/// Whether a value is an instance of one of the enforced container
/// variants. Pure predicate, performs no type checks itself.
pub fn is_typed_instance(value: &Value) -> bool {
    matches!(value, Value::Typed(_))
}

/// Whether a value is a *type* naming one of the enforced container
/// classes. Pure predicate.
pub fn is_typed_class(value: &Value) -> bool {
    matches!(value, Value::Type(kind) if kind.is_typed_container())
}
