//! # typefence
//!
//! Runtime type-restricted containers for dynamic values.
//!
//! `typefence` wraps four container kinds, ordered mutable
//! ([`TypedList`]), ordered immutable ([`TypedTuple`]), unique-item
//! mutable ([`TypedSet`]) and unique-item immutable ([`TypedFrozenSet`]),
//! in a runtime enforcement layer: every container declares a single
//! item type at construction, and every operation that could insert an
//! item checks it first. A container whose invariant would be broken by
//! an operation rejects the operation instead, atomically.
//!
//! ## Key features
//!
//! - **Type-safe**: items are checked at runtime against the declared
//!   restriction, at construction and at every inserting operation
//! - **Two enforcement tiers**: a *light* tier that only guards
//!   insertion and lets derivations fall through to plain collections,
//!   and a *complete* tier that re-wraps every derivational result into
//!   the typed class
//! - **Drop-in shape**: aside from the added checks, operations keep the
//!   contract of the plain backing collection they delegate to
//! - **No macros, no unsafe**: a pure runtime solution over a dynamic
//!   [`Value`] model
//!
//! ## Usage examples
//!
//! ### Basic usage
//!
//! ```rust
//! use typefence::{FenceError, TypedList, Value, ValueKind};
//!
//! fn main() -> Result<(), FenceError> {
//!     // Construction checks the initial items against the restriction.
//!     let mut names = TypedList::from_iterable(Value::list(["ada", "grace"]), ValueKind::Str)?;
//!
//!     // Compatible items go in; incompatible ones are rejected before
//!     // the receiver is touched.
//!     names.push(Value::from("edsger"))?;
//!     let err = names.push(Value::from(3)).unwrap_err();
//!     assert!(err.is_type_restriction());
//!     assert_eq!(names.len(), 3);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### The two tiers
//!
//! ```rust
//! use typefence::{TypedFrozenSet, TypedFrozenSetLight, Value, ValueKind};
//!
//! let light =
//!     TypedFrozenSetLight::from_iterable(Value::set(["A", "B"]), ValueKind::Str).unwrap();
//! let complete =
//!     TypedFrozenSet::from_iterable(Value::set(["A", "B"]), ValueKind::Str).unwrap();
//!
//! // A subset-producing derivation returns a plain collection on the
//! // light tier...
//! let plain = light.intersection(Value::set(["B", "Z"])).unwrap();
//! assert!(plain.contains(&Value::from("B")));
//!
//! // ...and a typed container on the complete tier, carrying the same
//! // restriction. No re-check happens: the result is a subset of items
//! // that were already validated.
//! let typed = complete.intersection(Value::set(["B", "Z"])).unwrap();
//! assert_eq!(typed.item_type(), ValueKind::Str);
//! assert!(typed.contains(&Value::from("B")));
//! ```
//!
//! ### Error handling
//!
//! ```rust
//! use typefence::{FenceError, TypedSet, Value, ValueKind};
//!
//! // Unique-item kinds demand a hashable restriction, validated before
//! // any data is looked at.
//! match TypedSet::new(ValueKind::List) {
//!     Err(FenceError::UnhashableRestriction { restriction }) => {
//!         assert_eq!(restriction, ValueKind::List);
//!     }
//!     other => panic!("expected an invalid restriction, got {other:?}"),
//! }
//!
//! // Inserting operations demand iterable arguments.
//! let mut set = TypedSet::new(ValueKind::Str).unwrap();
//! match set.update(Value::Int(7)) {
//!     Err(FenceError::IterableExpected { found }) => {
//!         assert_eq!(found, ValueKind::Int);
//!     }
//!     other => panic!("expected a non-iterable failure, got {other:?}"),
//! }
//! ```
//!
//! ### Converters
//!
//! ```rust
//! use typefence::{get_converter, typesafe_tuple_converter, TypedFrozenSet, Value, ValueKind};
//!
//! // A conversion closure validates its restriction eagerly and checks
//! // data only when invoked.
//! let to_frozen = get_converter::<TypedFrozenSet>(ValueKind::Str).unwrap();
//! let frozen = to_frozen(Value::list(["x", "y"]).into()).unwrap();
//! assert_eq!(frozen.len(), 2);
//!
//! // Plain-result converters give the type check without the wrapper.
//! let to_tuple = typesafe_tuple_converter(ValueKind::Int).unwrap();
//! assert!(to_tuple(Value::list(["not an int"]).into()).is_err());
//! ```
//!
//! ## Concurrency
//!
//! Containers are plain owned values: one logical owner at a time, no
//! interior locking. Callers who share an instance across threads must
//! add their own synchronization around it.

mod convert;
mod error;
mod frozenset;
mod list;
mod restrict;
mod set;
mod setops;
mod tuple;
mod value;

pub use convert::{
    filter_items, get_converter, is_typed_class, is_typed_instance, typesafe_frozenset_converter,
    typesafe_tuple_converter, TypedIterable,
};
pub use error::FenceError;
pub use frozenset::{TypedFrozenSet, TypedFrozenSetLight};
pub use list::{TypedList, TypedListLight};
pub use restrict::{
    check_item, check_iterable, item_type_from_value, materialize, validate_item_type, IterInput,
};
pub use set::{TypedSet, TypedSetLight};
pub use tuple::{TypedTuple, TypedTupleLight};
pub use value::{TypedIter, Value, ValueKind};
