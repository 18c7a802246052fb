//! Assertion-library contract tests: batteries of assertions expected to
//! pass and to fail, checked against the classification they produce.

use pariksha::prelude::*;
use pariksha::ASSERTION_ERROR;

/// The assertion should have passed.
fn good(result: TestResult) {
    if let Err(e) = result {
        panic!("expected assertion to pass, got: {}", e);
    }
}

/// The assertion should have failed with an `AssertionError`.
fn bad(result: TestResult) {
    match result {
        Err(e) if e.kind() == ASSERTION_ERROR => {}
        Err(e) => panic!("expected an AssertionError, got kind `{}`", e.kind()),
        Ok(()) => panic!("expected the assertion to fail"),
    }
}

#[test]
fn assert_true_follows_truthiness() {
    let trues: Vec<Value> = vec![
        true.into(),
        1.into(),
        "foo".into(),
        Value::List(vec![]),
        Value::map([("k", 1)]),
    ];
    let falses: Vec<Value> = vec![
        false.into(),
        Value::Undefined,
        Value::Null,
        0.into(),
        "".into(),
    ];
    for v in trues {
        good(assert_true(v.clone(), None));
        bad(assert_false(v, None));
    }
    for v in falses {
        bad(assert_true(v.clone(), None));
        good(assert_false(v, None));
    }
}

#[test]
fn equal_is_loose() {
    let equal_pairs: Vec<(Value, Value)> = vec![
        (0.into(), "".into()),
        (0.into(), "0".into()),
        (0.into(), 0.into()),
        (Value::Null, Value::Undefined),
    ];
    for (e, a) in &equal_pairs {
        good(assert_equal(e.clone(), a.clone(), None));
        bad(assert_not_equal(e.clone(), a.clone(), None));
    }
    good(assert_not_equal(1, 2, None));
    bad(assert_equal(1, 2, None));
}

#[test]
fn identical_is_strict() {
    good(assert_identical(0, 0, None));
    good(assert_identical("foo", "foo", None));
    bad(assert_identical(0, "", None));
    bad(assert_identical(Value::Null, Value::Undefined, None));
    good(assert_not_identical(Value::Null, Value::Undefined, None));
    bad(assert_not_identical("foo", "foo", None));
}

#[test]
fn null_checks_are_strict() {
    let not_nulls: Vec<Value> = vec![Value::Undefined, false.into(), 0.into(), "".into()];

    good(assert_null(Value::Null, None));
    bad(assert_not_null(Value::Null, None));

    for v in not_nulls {
        good(assert_not_null(v.clone(), None));
        bad(assert_null(v, None));
    }
}

#[test]
fn undefined_checks_are_strict() {
    good(assert_undefined(Value::Undefined, None));
    bad(assert_not_undefined(Value::Undefined, None));

    bad(assert_undefined(Value::Null, None));
    bad(assert_undefined(false, None));
    good(assert_not_undefined(Value::Null, None));
    good(assert_not_undefined(false, None));
}

#[test]
fn arrays_compare_loosely_in_order() {
    good(assert_arrays_equal(
        vec![1, 2, 3],
        Value::List(vec![1.into(), "2".into(), 3.into()]),
        None,
    ));
    bad(assert_arrays_equal(vec![1, 3, 2], vec![1, 2, 3], None));
    bad(assert_arrays_equal(vec![1, 2], vec![1, 2, 3], None));
    // Non-lists never compare equal as arrays.
    bad(assert_arrays_equal(1, vec![1], None));
}

#[test]
fn array_length_mismatch_keeps_the_generated_message() {
    let err = assert_arrays_equal(vec![1], vec![1, 2], Some("custom")).unwrap_err();
    assert_eq!(err.message(), "[1] != [1,2]");

    let err = assert_arrays_equal(vec![1, 9], vec![1, 2], Some("custom")).unwrap_err();
    assert_eq!(err.message(), "custom");
}

#[test]
fn members_compare_key_sets_and_values() {
    good(assert_members_equal(
        Value::map([("a", Value::from(1)), ("b", Value::from(2))]),
        Value::map([("a", Value::from("1")), ("b", Value::from(2))]),
        None,
    ));
    bad(assert_members_equal(
        Value::map([("a", 1)]),
        Value::map([("a", 1), ("b", 2)]),
        None,
    ));
    bad(assert_members_equal(
        Value::map([("a", 1)]),
        Value::map([("b", 1)]),
        None,
    ));
    bad(assert_members_equal(
        Value::map([("a", 1)]),
        Value::map([("a", 2)]),
        None,
    ));
    bad(assert_members_equal(Value::map([("a", 1)]), 1, None));
}

#[test]
fn doubles_compare_within_delta() {
    good(assert_doubles_equal(1.0, 1.05, 0.1, None));
    good(assert_doubles_equal(-1.0, -1.0, 0.0, None));
    bad(assert_doubles_equal(1.0, 1.2, 0.1, None));
    bad(assert_doubles_equal(f64::NAN, f64::NAN, 0.1, None));
}

#[test]
fn throws_matches_on_kind_tag() {
    good(assert_throws(|| fail(Some("oops")), "AssertionError", None));
    good(assert_throws(
        || -> Result<(), TestError> { Err("oops".into()) },
        "Error",
        None,
    ));
    // Wrong kind fails.
    bad(assert_throws(
        || -> Result<(), TestError> { Err("oops".into()) },
        "AssertionError",
        None,
    ));
    // Not throwing at all fails.
    bad(assert_throws(|| -> Result<(), TestError> { Ok(()) }, "Error", None));
}

#[test]
fn fail_always_raises() {
    bad(fail(None));
    bad(fail(Some("oops")));
    assert_eq!(fail(None).unwrap_err().message(), "");
    assert_eq!(fail(Some("oops")).unwrap_err().message(), "oops");
}

#[test]
fn custom_messages_replace_generated_ones() {
    let err = assert_true(false, Some("custom")).unwrap_err();
    assert_eq!(err.message(), "custom");

    let err = assert_equal(0, "x", None).unwrap_err();
    assert_eq!(err.message(), "`0` != `x`");

    let err = assert_identical(Value::Null, Value::Undefined, None).unwrap_err();
    assert_eq!(err.message(), "`null` !== `undefined`");

    let err = assert_throws(|| -> Result<(), TestError> { Ok(()) }, "TypeError", None).unwrap_err();
    assert_eq!(err.message(), "Expecting error TypeError");
}

#[test]
fn fixture_methods_mirror_the_free_functions() {
    let def = CaseDef::new().field("answer", 42);
    let mut fx = def.instantiate();
    good(fx.assert_equal(42, fx.get("answer"), None));
    bad(fx.assert_identical("42", fx.get("answer"), None));
    good(fx.assert_throws(|fx| fx.fail(Some("boom")), "AssertionError", None));
    bad(fx.assert_throws(|fx| fx.assert_true(true, None), "AssertionError", None));
}
