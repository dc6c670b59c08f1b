use typefence::{FenceError, IterInput, TypedList, TypedListLight, Value, ValueKind};

fn str_items() -> Value {
    Value::list(["a", "b", "c"])
}

fn light() -> TypedListLight {
    TypedListLight::from_iterable(str_items(), ValueKind::Str).unwrap()
}

fn complete() -> TypedList {
    TypedList::from_iterable(str_items(), ValueKind::Str).unwrap()
}

#[test]
fn construction_checks_initial_items() {
    let list = complete();
    assert_eq!(list.len(), 3);
    assert_eq!(list.item_type(), ValueKind::Str);

    // Mixed input fails, reporting the offending element.
    let err = TypedList::from_iterable(
        Value::List(vec!["a".into(), 1.into(), "c".into()]),
        ValueKind::Str,
    )
    .unwrap_err();
    assert_eq!(
        err,
        FenceError::IncompatibleElement {
            index: 1,
            expected: ValueKind::Str,
            found: ValueKind::Int,
        }
    );

    // Non-iterable input fails before anything else.
    let err = TypedList::from_iterable(Value::Int(3), ValueKind::Str).unwrap_err();
    assert!(matches!(err, FenceError::IterableExpected { .. }));

    // A string is a valid iterable of one-character strings.
    let chars = TypedList::from_iterable(Value::from("hi"), ValueKind::Str).unwrap();
    assert_eq!(chars.items(), &[Value::from("h"), Value::from("i")][..]);
}

#[test]
fn empty_construction() {
    let list = TypedList::new(ValueKind::Int).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.item_type(), ValueKind::Int);
}

#[test]
fn push_rejects_incompatible_item_and_leaves_receiver_unchanged() {
    for err in [
        {
            let mut list = light();
            let before = list.clone();
            let e = list.push(Value::Int(1)).unwrap_err();
            assert_eq!(list, before);
            e
        },
        {
            let mut list = complete();
            let before = list.clone();
            let e = list.push(Value::Int(1)).unwrap_err();
            assert_eq!(list, before);
            e
        },
    ] {
        assert!(err.is_type_restriction());
    }
}

#[test]
fn insert_checks_in_both_tiers() {
    let mut list = light();
    list.insert(1, Value::from("x")).unwrap();
    assert_eq!(list.get(1), Some(&Value::from("x")));
    assert!(list.insert(0, Value::Bool(true)).unwrap_err().is_type_restriction());

    let mut list = complete();
    list.insert(1, Value::from("x")).unwrap();
    assert!(list.insert(0, Value::Null).unwrap_err().is_type_restriction());
}

#[test]
fn set_replaces_one_item_after_checking() {
    let mut list = complete();
    list.set(0, Value::from("z")).unwrap();
    assert_eq!(list.get(0), Some(&Value::from("z")));

    let before = list.clone();
    assert!(list.set(0, Value::Float(1.5)).unwrap_err().is_type_restriction());
    assert_eq!(list, before);
}

#[test]
fn extend_accepts_any_compatible_iterable() {
    let mut list = complete();
    list.extend(Value::tuple(["d"])).unwrap();
    list.extend(Value::set(["e"])).unwrap();
    list.extend(&light()).unwrap();
    list.extend(Value::from("f")).unwrap();
    assert_eq!(list.len(), 9);
}

#[test]
fn extend_failure_is_atomic() {
    let mut list = complete();
    let before = list.clone();
    let err = list
        .extend(Value::List(vec!["ok".into(), 9.into()]))
        .unwrap_err();
    assert!(err.is_type_restriction());
    assert_eq!(list, before);
}

#[test]
fn extend_drains_a_single_pass_input_once() {
    let mut list = complete();
    let stream = IterInput::stream(vec![Value::from("d"), Value::from("e")]);
    list.extend(stream).unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list.get(4), Some(&Value::from("e")));
}

#[test]
fn splice_replaces_a_clamped_range() {
    let mut list = complete();
    list.splice(0..2, Value::list(["x"])).unwrap();
    assert_eq!(list.items(), &[Value::from("x"), Value::from("c")][..]);

    // Out-of-range ends clamp instead of panicking.
    list.splice(1..99, Value::list(["y", "z"])).unwrap();
    assert_eq!(
        list.items(),
        &[Value::from("x"), Value::from("y"), Value::from("z")][..]
    );
}

#[test]
fn splice_requires_an_iterable() {
    let mut list = light();
    let before = list.clone();
    let err = list.splice(0..2, Value::Int(1)).unwrap_err();
    assert_eq!(
        err,
        FenceError::IterableExpected {
            found: ValueKind::Int
        }
    );
    assert_eq!(list, before);

    // A string is iterable, so it is valid here for a str restriction.
    list.splice(0..2, Value::from("xy")).unwrap();
    assert_eq!(list.len(), 3);
}

#[test]
fn light_concat_returns_plain_and_accepts_foreign_elements() {
    let list = light();
    let out = list.concat(Value::list([1, 2])).unwrap();
    assert_eq!(out.len(), 5);
    assert_eq!(out[3], Value::Int(1));

    // The receiver itself is untouched and still type-safe.
    assert_eq!(list.len(), 3);

    // Non-iterable arguments are still rejected.
    assert!(matches!(
        list.concat(Value::Bool(true)).unwrap_err(),
        FenceError::IterableExpected { .. }
    ));
}

#[test]
fn complete_concat_returns_typed_and_checks_elements() {
    let list = complete();
    let out = list.concat(Value::list(["d"])).unwrap();
    assert_eq!(out.item_type(), ValueKind::Str);
    assert_eq!(out.len(), 4);

    let err = list.concat(Value::list([1])).unwrap_err();
    assert!(err.is_type_restriction());
}

#[test]
fn repeat_follows_the_tier_result_type() {
    let plain = light().repeat(2);
    assert_eq!(plain.len(), 6);

    let typed = complete().repeat(2);
    assert_eq!(typed.len(), 6);
    assert_eq!(typed.item_type(), ValueKind::Str);

    assert!(light().repeat(0).is_empty());
    assert!(complete().repeat(0).is_empty());
}

#[test]
fn slice_follows_the_tier_result_type() {
    let plain = light().slice(0..2);
    assert_eq!(plain, vec![Value::from("a"), Value::from("b")]);

    let typed = complete().slice(0..2);
    assert_eq!(typed.items(), &[Value::from("a"), Value::from("b")][..]);
    assert_eq!(typed.item_type(), ValueKind::Str);

    // Positional reads return the raw item in both tiers.
    assert_eq!(light().get(1), Some(&Value::from("b")));
    assert_eq!(complete().get(1), Some(&Value::from("b")));
}

#[test]
fn copy_stays_typed_in_both_tiers() {
    let l = light();
    let c = l.clone();
    assert_eq!(c.item_type(), ValueKind::Str);
    assert_eq!(c, l);

    let l = complete();
    let c = l.clone();
    assert_eq!(c.item_type(), ValueKind::Str);
    assert_eq!(c, l);
}

#[test]
fn unchecked_native_mutations() {
    let mut list = complete();
    assert_eq!(list.pop(), Some(Value::from("c")));
    list.clear();
    assert!(list.is_empty());
}

#[test]
fn invariant_holds_after_every_successful_operation() {
    let mut list = TypedList::new(ValueKind::Str).unwrap();
    list.push(Value::from("a")).unwrap();
    list.extend(Value::list(["b", "c"])).unwrap();
    list.insert(0, Value::from("z")).unwrap();
    list.splice(1..2, Value::from("qr")).unwrap();
    let _ = list.push(Value::Int(1));
    let _ = list.extend(Value::list([1, 2]));
    for item in list.iter() {
        assert!(item.is_instance_of(ValueKind::Str));
    }
}
