use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Bound, RangeBounds};

use crate::frozenset::{TypedFrozenSet, TypedFrozenSetLight};
use crate::list::{TypedList, TypedListLight};
use crate::set::{TypedSet, TypedSetLight};
use crate::tuple::{TypedTuple, TypedTupleLight};

/// The runtime type of a [`Value`], and the representation of an item-type
/// restriction.
///
/// Every value shape has a kind, including the eight enforced container
/// classes, so a restriction to a typed class is expressible just like a
/// restriction to a plain kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Tuple,
    Set,
    Frozenset,
    /// The kind of type values themselves.
    Type,
    TypedListLight,
    TypedList,
    TypedTupleLight,
    TypedTuple,
    TypedSetLight,
    TypedSet,
    TypedFrozenSetLight,
    TypedFrozenSet,
}

impl ValueKind {
    /// Whether instances of this kind can be used as set members.
    ///
    /// Mutable containers (plain or typed) are not hashable; everything
    /// else is. The [`Hash`] impl on [`Value`] is total regardless, because
    /// `HashSet` demands it; this predicate is what the Type Validator
    /// enforces instead.
    pub fn is_hashable(self) -> bool {
        !matches!(
            self,
            ValueKind::List
                | ValueKind::Set
                | ValueKind::TypedListLight
                | ValueKind::TypedList
                | ValueKind::TypedSetLight
                | ValueKind::TypedSet
        )
    }

    /// Whether instances of this kind can be iterated over.
    ///
    /// Strings count: a `Str` value iterates over its characters, each a
    /// one-character `Str`.
    pub fn is_iterable(self) -> bool {
        !matches!(
            self,
            ValueKind::Null
                | ValueKind::Bool
                | ValueKind::Int
                | ValueKind::Float
                | ValueKind::Type
        )
    }

    /// Whether this kind is one of the eight enforced container classes.
    pub fn is_typed_container(self) -> bool {
        matches!(
            self,
            ValueKind::TypedListLight
                | ValueKind::TypedList
                | ValueKind::TypedTupleLight
                | ValueKind::TypedTuple
                | ValueKind::TypedSetLight
                | ValueKind::TypedSet
                | ValueKind::TypedFrozenSetLight
                | ValueKind::TypedFrozenSet
        )
    }

    fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
            ValueKind::List => "list",
            ValueKind::Tuple => "tuple",
            ValueKind::Set => "set",
            ValueKind::Frozenset => "frozenset",
            ValueKind::Type => "type",
            ValueKind::TypedListLight => "TypedListLight",
            ValueKind::TypedList => "TypedList",
            ValueKind::TypedTupleLight => "TypedTupleLight",
            ValueKind::TypedTuple => "TypedTuple",
            ValueKind::TypedSetLight => "TypedSetLight",
            ValueKind::TypedSet => "TypedSet",
            ValueKind::TypedFrozenSetLight => "TypedFrozenSetLight",
            ValueKind::TypedFrozenSet => "TypedFrozenSet",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed value: the item type of every container in this
/// crate, and the argument type of every container operation.
///
/// Enforced containers are themselves values (the `Typed` variant), which
/// is what lets them be passed as operation arguments, nested inside plain
/// containers, and inspected by [`crate::is_typed_instance`].
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(HashSet<Value>),
    Frozenset(HashSet<Value>),
    /// A first-class type, usable as an item-type restriction.
    Type(ValueKind),
    /// An enforced container.
    Typed(Box<TypedIter>),
}

impl Value {
    /// The precise runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::Set(_) => ValueKind::Set,
            Value::Frozenset(_) => ValueKind::Frozenset,
            Value::Type(_) => ValueKind::Type,
            Value::Typed(t) => t.class_kind(),
        }
    }

    /// Instance check against a restriction.
    ///
    /// Enforced containers are instances of their own class, of the light
    /// class they extend, and of the plain kind they substitute for; every
    /// other value is an instance of exactly its own kind.
    pub fn is_instance_of(&self, kind: ValueKind) -> bool {
        match self {
            Value::Typed(t) => t.matches(kind),
            other => other.kind() == kind,
        }
    }

    /// Builds a `List` value from anything convertible to items.
    pub fn list<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a `Tuple` value.
    pub fn tuple<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Builds a `Set` value. Duplicates collapse.
    pub fn set<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Set(items.into_iter().map(Into::into).collect())
    }

    /// Builds a `Frozenset` value. Duplicates collapse.
    pub fn frozenset<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Frozenset(items.into_iter().map(Into::into).collect())
    }

    fn eq_view(&self) -> EqView<'_> {
        match self {
            Value::Null => EqView::Null,
            Value::Bool(b) => EqView::Bool(*b),
            Value::Int(i) => EqView::Int(*i),
            Value::Float(x) => EqView::FloatBits(x.to_bits()),
            Value::Str(s) => EqView::Str(s),
            Value::List(items) => EqView::ListSeq(items),
            Value::Tuple(items) => EqView::TupleSeq(items),
            Value::Set(items) | Value::Frozenset(items) => EqView::SetLike(items),
            Value::Type(kind) => EqView::Type(*kind),
            Value::Typed(t) => t.eq_view(),
        }
    }
}

/// Structural comparison view.
///
/// Set-likes compare across kinds (a plain set equals a typed frozenset
/// with the same elements), ordered containers compare within the
/// list family or the tuple family, floats compare by bit pattern.
/// Cross-kind numeric equality (`1 == 1.0`) is deliberately not supported;
/// every scalar kind is distinct.
#[derive(PartialEq)]
enum EqView<'a> {
    Null,
    Bool(bool),
    Int(i64),
    FloatBits(u64),
    Str(&'a str),
    ListSeq(&'a [Value]),
    TupleSeq(&'a [Value]),
    SetLike(&'a HashSet<Value>),
    Type(ValueKind),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.eq_view() == other.eq_view()
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.eq_view() {
            EqView::Null => state.write_u8(0),
            EqView::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            EqView::Int(i) => {
                state.write_u8(2);
                i.hash(state);
            }
            EqView::FloatBits(bits) => {
                state.write_u8(3);
                bits.hash(state);
            }
            EqView::Str(s) => {
                state.write_u8(4);
                s.hash(state);
            }
            EqView::ListSeq(items) => {
                state.write_u8(5);
                items.len().hash(state);
                for item in items {
                    item.hash(state);
                }
            }
            EqView::TupleSeq(items) => {
                state.write_u8(6);
                items.len().hash(state);
                for item in items {
                    item.hash(state);
                }
            }
            EqView::SetLike(items) => {
                // Order-independent: combine per-element hashes with XOR,
                // each computed by a deterministic standalone hasher.
                state.write_u8(7);
                items.len().hash(state);
                let mut acc = 0u64;
                for item in items {
                    let mut h = DefaultHasher::new();
                    item.hash(&mut h);
                    acc ^= h.finish();
                }
                state.write_u64(acc);
            }
            EqView::Type(kind) => {
                state.write_u8(8);
                kind.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => write_seq(f, items, "[", "]"),
            Value::Tuple(items) => write_seq(f, items, "(", ")"),
            Value::Set(items) | Value::Frozenset(items) => {
                let items: Vec<&Value> = items.iter().collect();
                write_seq(f, items, "{", "}")
            }
            Value::Type(kind) => write!(f, "{kind}"),
            Value::Typed(t) => write!(f, "{t}"),
        }
    }
}

pub(crate) fn write_seq<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
    open: &str,
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<ValueKind> for Value {
    fn from(kind: ValueKind) -> Value {
        Value::Type(kind)
    }
}

/// One of the eight enforced container variants, as a value.
#[derive(Debug, Clone)]
pub enum TypedIter {
    ListLight(TypedListLight),
    List(TypedList),
    TupleLight(TypedTupleLight),
    Tuple(TypedTuple),
    SetLight(TypedSetLight),
    Set(TypedSet),
    FrozensetLight(TypedFrozenSetLight),
    Frozenset(TypedFrozenSet),
}

impl TypedIter {
    /// The class kind of the wrapped container.
    pub fn class_kind(&self) -> ValueKind {
        match self {
            TypedIter::ListLight(_) => ValueKind::TypedListLight,
            TypedIter::List(_) => ValueKind::TypedList,
            TypedIter::TupleLight(_) => ValueKind::TypedTupleLight,
            TypedIter::Tuple(_) => ValueKind::TypedTuple,
            TypedIter::SetLight(_) => ValueKind::TypedSetLight,
            TypedIter::Set(_) => ValueKind::TypedSet,
            TypedIter::FrozensetLight(_) => ValueKind::TypedFrozenSetLight,
            TypedIter::Frozenset(_) => ValueKind::TypedFrozenSet,
        }
    }

    /// The plain kind this container substitutes for.
    pub fn plain_kind(&self) -> ValueKind {
        match self {
            TypedIter::ListLight(_) | TypedIter::List(_) => ValueKind::List,
            TypedIter::TupleLight(_) | TypedIter::Tuple(_) => ValueKind::Tuple,
            TypedIter::SetLight(_) | TypedIter::Set(_) => ValueKind::Set,
            TypedIter::FrozensetLight(_) | TypedIter::Frozenset(_) => ValueKind::Frozenset,
        }
    }

    /// The item-type restriction of the wrapped container.
    pub fn item_type(&self) -> ValueKind {
        match self {
            TypedIter::ListLight(c) => c.item_type(),
            TypedIter::List(c) => c.item_type(),
            TypedIter::TupleLight(c) => c.item_type(),
            TypedIter::Tuple(c) => c.item_type(),
            TypedIter::SetLight(c) => c.item_type(),
            TypedIter::Set(c) => c.item_type(),
            TypedIter::FrozensetLight(c) => c.item_type(),
            TypedIter::Frozenset(c) => c.item_type(),
        }
    }

    /// Instance check: own class, extended light class, plain base kind.
    pub(crate) fn matches(&self, kind: ValueKind) -> bool {
        use ValueKind as K;
        match self {
            TypedIter::ListLight(_) => matches!(kind, K::TypedListLight | K::List),
            TypedIter::List(_) => matches!(kind, K::TypedList | K::TypedListLight | K::List),
            TypedIter::TupleLight(_) => matches!(kind, K::TypedTupleLight | K::Tuple),
            TypedIter::Tuple(_) => matches!(kind, K::TypedTuple | K::TypedTupleLight | K::Tuple),
            TypedIter::SetLight(_) => matches!(kind, K::TypedSetLight | K::Set),
            TypedIter::Set(_) => matches!(kind, K::TypedSet | K::TypedSetLight | K::Set),
            TypedIter::FrozensetLight(_) => {
                matches!(kind, K::TypedFrozenSetLight | K::Frozenset)
            }
            TypedIter::Frozenset(_) => {
                matches!(kind, K::TypedFrozenSet | K::TypedFrozenSetLight | K::Frozenset)
            }
        }
    }

    /// Clones the contained items into an ordered sequence.
    pub(crate) fn items_vec(&self) -> Vec<Value> {
        match self {
            TypedIter::ListLight(c) => c.items().to_vec(),
            TypedIter::List(c) => c.items().to_vec(),
            TypedIter::TupleLight(c) => c.items().to_vec(),
            TypedIter::Tuple(c) => c.items().to_vec(),
            TypedIter::SetLight(c) => c.items().iter().cloned().collect(),
            TypedIter::Set(c) => c.items().iter().cloned().collect(),
            TypedIter::FrozensetLight(c) => c.items().iter().cloned().collect(),
            TypedIter::Frozenset(c) => c.items().iter().cloned().collect(),
        }
    }

    fn eq_view(&self) -> EqView<'_> {
        match self {
            TypedIter::ListLight(c) => EqView::ListSeq(c.items()),
            TypedIter::List(c) => EqView::ListSeq(c.items()),
            TypedIter::TupleLight(c) => EqView::TupleSeq(c.items()),
            TypedIter::Tuple(c) => EqView::TupleSeq(c.items()),
            TypedIter::SetLight(c) => EqView::SetLike(c.items()),
            TypedIter::Set(c) => EqView::SetLike(c.items()),
            TypedIter::FrozensetLight(c) => EqView::SetLike(c.items()),
            TypedIter::Frozenset(c) => EqView::SetLike(c.items()),
        }
    }
}

impl fmt::Display for TypedIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedIter::ListLight(c) => write!(f, "{c}"),
            TypedIter::List(c) => write!(f, "{c}"),
            TypedIter::TupleLight(c) => write!(f, "{c}"),
            TypedIter::Tuple(c) => write!(f, "{c}"),
            TypedIter::SetLight(c) => write!(f, "{c}"),
            TypedIter::Set(c) => write!(f, "{c}"),
            TypedIter::FrozensetLight(c) => write!(f, "{c}"),
            TypedIter::Frozenset(c) => write!(f, "{c}"),
        }
    }
}

/// Resolves any range-bounds expression against a sequence length, clamping
/// both ends the way slice assignment in the original clamps slices: no
/// out-of-range panic, an inverted range collapses to empty.
pub(crate) fn resolve_range(range: impl RangeBounds<usize>, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    let start = start.min(len);
    let end = end.min(len).max(start);
    (start, end)
}
