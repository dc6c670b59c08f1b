use typefence::{FenceError, IterInput, TypedTuple, TypedTupleLight, Value, ValueKind};

fn light() -> TypedTupleLight {
    TypedTupleLight::from_iterable(Value::tuple(["a", "b"]), ValueKind::Str).unwrap()
}

fn complete() -> TypedTuple {
    TypedTuple::from_iterable(Value::tuple(["a", "b"]), ValueKind::Str).unwrap()
}

#[test]
fn construction_checks_initial_items() {
    let tuple = complete();
    assert_eq!(tuple.len(), 2);
    assert_eq!(tuple.item_type(), ValueKind::Str);

    let err = TypedTuple::from_iterable(
        Value::Tuple(vec!["a".into(), Value::Null]),
        ValueKind::Str,
    )
    .unwrap_err();
    assert_eq!(
        err,
        FenceError::IncompatibleElement {
            index: 1,
            expected: ValueKind::Str,
            found: ValueKind::Null,
        }
    );

    let err = TypedTuple::from_iterable(Value::Float(1.5), ValueKind::Str).unwrap_err();
    assert!(matches!(err, FenceError::IterableExpected { .. }));
}

#[test]
fn construction_accepts_any_iterable_shape() {
    let from_list = TypedTuple::from_iterable(Value::list([1, 2]), ValueKind::Int).unwrap();
    let from_set = TypedTuple::from_iterable(Value::set([1, 2]), ValueKind::Int).unwrap();
    assert_eq!(from_list.len(), 2);
    assert_eq!(from_set.len(), 2);

    let from_stream = TypedTuple::from_iterable(
        IterInput::stream(vec![Value::Int(1), Value::Int(2)]),
        ValueKind::Int,
    )
    .unwrap();
    assert_eq!(from_stream.items(), &[Value::Int(1), Value::Int(2)][..]);
}

#[test]
fn light_concat_returns_plain_and_accepts_foreign_elements() {
    let tuple = light();
    let out = tuple.concat(Value::tuple(["c", "d"])).unwrap();
    assert_eq!(
        &out[..],
        &[
            Value::from("a"),
            Value::from("b"),
            Value::from("c"),
            Value::from("d"),
        ][..]
    );

    // Foreign elements pass: nothing is inserted into a typed container.
    let mixed = tuple.concat(Value::tuple([1, 2])).unwrap();
    assert_eq!(mixed.len(), 4);
    assert_eq!(mixed[2], Value::Int(1));

    assert!(matches!(
        tuple.concat(Value::Int(1)).unwrap_err(),
        FenceError::IterableExpected { .. }
    ));
}

#[test]
fn complete_concat_returns_typed_and_checks_elements() {
    let tuple = complete();
    let out = tuple.concat(Value::list(["c"])).unwrap();
    assert_eq!(out.item_type(), ValueKind::Str);
    assert_eq!(out.len(), 3);

    let err = tuple.concat(Value::list([Value::from("c"), Value::from(4)])).unwrap_err();
    assert_eq!(
        err,
        FenceError::IncompatibleElement {
            index: 1,
            expected: ValueKind::Str,
            found: ValueKind::Int,
        }
    );
}

#[test]
fn repeat_follows_the_tier_result_type() {
    let plain = light().repeat(3);
    assert_eq!(plain.len(), 6);

    let typed = complete().repeat(3);
    assert_eq!(typed.len(), 6);
    assert_eq!(typed.item_type(), ValueKind::Str);

    assert!(light().repeat(0).is_empty());
    assert!(complete().repeat(0).is_empty());
}

#[test]
fn slice_follows_the_tier_result_type() {
    let plain = light().slice(1..);
    assert_eq!(&plain[..], &[Value::from("b")][..]);

    let typed = complete().slice(..1);
    assert_eq!(typed.items(), &[Value::from("a")][..]);
    assert_eq!(typed.item_type(), ValueKind::Str);

    // Out-of-range bounds clamp.
    assert!(complete().slice(5..9).is_empty());
}

#[test]
fn positional_reads_return_raw_items() {
    assert_eq!(light().get(0), Some(&Value::from("a")));
    assert_eq!(complete().get(1), Some(&Value::from("b")));
    assert_eq!(complete().get(9), None);
}

#[test]
fn copy_stays_typed_in_both_tiers() {
    let t = light();
    let c = t.clone();
    assert_eq!(c.item_type(), ValueKind::Str);
    assert_eq!(c, t);

    let t = complete();
    let c = t.clone();
    assert_eq!(c.item_type(), ValueKind::Str);
    assert_eq!(c, t);
}

#[test]
fn typed_tuples_are_hashable_items() {
    // An immutable typed container can itself live in a set.
    let inner = complete();
    let set = typefence::TypedSet::from_iterable(
        Value::list([Value::from(inner)]),
        ValueKind::TypedTuple,
    )
    .unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn instance_of_light_class_and_plain_kind() {
    let as_value = Value::from(complete());
    assert!(as_value.is_instance_of(ValueKind::TypedTuple));
    assert!(as_value.is_instance_of(ValueKind::TypedTupleLight));
    assert!(as_value.is_instance_of(ValueKind::Tuple));
    assert!(!as_value.is_instance_of(ValueKind::List));

    let as_value = Value::from(light());
    assert!(as_value.is_instance_of(ValueKind::TypedTupleLight));
    assert!(!as_value.is_instance_of(ValueKind::TypedTuple));
}
