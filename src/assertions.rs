//! The assertion library: stateless functions, each failing by returning
//! a [`TestError::Assertion`] when its condition does not hold.
//!
//! Every function accepts an optional trailing message that replaces the
//! generated one. The same set is available as methods on
//! [`Fixture`](crate::case::Fixture), so test bodies can call assertions
//! on their receiver or as free functions interchangeably.

use crate::errors::{TestError, TestResult};
use crate::format::fmt;
use crate::value::Value;
use crate::values;

fn failure(msg: Option<&str>, generated: String) -> TestError {
    TestError::assertion(msg.map(str::to_owned).unwrap_or(generated))
}

/// Succeeds iff `value` is truthy. The generated message is the value's
/// own display text, e.g. `false` or `undefined`.
pub fn assert_true(value: impl Into<Value>, msg: Option<&str>) -> TestResult {
    let value = value.into();
    if value.truthy() {
        Ok(())
    } else {
        Err(failure(msg, fmt("{}", &[value])))
    }
}

/// Succeeds iff `value` is falsy.
pub fn assert_false(value: impl Into<Value>, msg: Option<&str>) -> TestResult {
    let value = value.into();
    if value.truthy() {
        Err(failure(msg, fmt("`{}` is truthy", &[value])))
    } else {
        Ok(())
    }
}

/// Succeeds iff the values are loosely (type-coercingly) equal.
pub fn assert_equal(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    msg: Option<&str>,
) -> TestResult {
    let expected = expected.into();
    let actual = actual.into();
    if expected.loose_eq(&actual) {
        Ok(())
    } else {
        Err(failure(msg, fmt("`{}` != `{}`", &[expected, actual])))
    }
}

/// Succeeds iff the values are not loosely equal.
pub fn assert_not_equal(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    msg: Option<&str>,
) -> TestResult {
    let expected = expected.into();
    let actual = actual.into();
    if expected.loose_eq(&actual) {
        Err(failure(msg, fmt("`{}` == `{}`", &[expected, actual])))
    } else {
        Ok(())
    }
}

/// Succeeds iff the values are strictly equal: same type, no coercion.
pub fn assert_identical(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    msg: Option<&str>,
) -> TestResult {
    let expected = expected.into();
    let actual = actual.into();
    if expected == actual {
        Ok(())
    } else {
        Err(failure(msg, fmt("`{}` !== `{}`", &[expected, actual])))
    }
}

/// Succeeds iff the values are not strictly equal.
pub fn assert_not_identical(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    msg: Option<&str>,
) -> TestResult {
    let expected = expected.into();
    let actual = actual.into();
    if expected == actual {
        Err(failure(msg, fmt("`{}` === `{}`", &[expected, actual])))
    } else {
        Ok(())
    }
}

/// Succeeds iff `value` is strictly `Null`.
pub fn assert_null(value: impl Into<Value>, msg: Option<&str>) -> TestResult {
    assert_identical(Value::Null, value, msg)
}

/// Succeeds iff `value` is anything but `Null`.
pub fn assert_not_null(value: impl Into<Value>, msg: Option<&str>) -> TestResult {
    assert_not_identical(Value::Null, value, msg)
}

/// Succeeds iff `value` is strictly `Undefined`.
pub fn assert_undefined(value: impl Into<Value>, msg: Option<&str>) -> TestResult {
    assert_identical(Value::Undefined, value, msg)
}

/// Succeeds iff `value` is anything but `Undefined`.
pub fn assert_not_undefined(value: impl Into<Value>, msg: Option<&str>) -> TestResult {
    assert_not_identical(Value::Undefined, value, msg)
}

/// Succeeds iff both values are lists of the same length whose elements
/// are pairwise loosely equal, in order.
///
/// The length check runs first and reports with the generated
/// `[..] != [..]` message even when a custom `msg` is supplied; only an
/// element mismatch uses `msg`.
pub fn assert_arrays_equal(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    msg: Option<&str>,
) -> TestResult {
    let expected = expected.into();
    let actual = actual.into();
    let err_msg = fmt("[{}] != [{}]", &[expected.clone(), actual.clone()]);
    let (Some(expected_items), Some(actual_items)) = (expected.as_list(), actual.as_list()) else {
        return Err(failure(msg, err_msg));
    };
    if expected_items.len() != actual_items.len() {
        return Err(TestError::assertion(err_msg));
    }
    for (e, a) in expected_items.iter().zip(actual_items) {
        if !e.loose_eq(a) {
            return Err(failure(msg, err_msg));
        }
    }
    Ok(())
}

/// Succeeds iff both values are maps with the same key set and pairwise
/// loosely equal values.
pub fn assert_members_equal(
    expected: impl Into<Value>,
    actual: impl Into<Value>,
    msg: Option<&str>,
) -> TestResult {
    let expected = expected.into();
    let actual = actual.into();
    let err_msg = fmt("`{}` != `{}`", &[expected.clone(), actual.clone()]);
    let (Value::Map(e), Value::Map(a)) = (&expected, &actual) else {
        return Err(failure(msg, err_msg));
    };
    let same_members =
        e.len() == a.len() && e.iter().all(|(k, v)| a.get(k).map_or(false, |w| v.loose_eq(w)));
    if same_members {
        Ok(())
    } else {
        Err(failure(msg, err_msg))
    }
}

/// Succeeds iff `abs(expected - actual) <= delta`.
pub fn assert_doubles_equal(
    expected: f64,
    actual: f64,
    delta: f64,
    msg: Option<&str>,
) -> TestResult {
    if (expected - actual).abs() <= delta {
        Ok(())
    } else {
        Err(failure(
            msg,
            fmt("`{}` != `{}` within `{}`", &values![expected, actual, delta]),
        ))
    }
}

/// Succeeds iff `f` returns an error whose kind tag equals `error_kind`.
/// Returning `Ok`, or an error of a different kind, both fail.
pub fn assert_throws<T>(
    f: impl FnOnce() -> Result<T, TestError>,
    error_kind: &str,
    msg: Option<&str>,
) -> TestResult {
    match f() {
        Err(e) if e.kind() == error_kind => Ok(()),
        Err(e) => Err(TestError::assertion(fmt(
            "Expecting error {}, got {}",
            &values![error_kind, e.kind()],
        ))),
        Ok(_) => Err(failure(msg, fmt("Expecting error {}", &values![error_kind]))),
    }
}

/// Always fails, with `msg` as the message (empty when absent).
pub fn fail(msg: Option<&str>) -> TestResult {
    Err(TestError::assertion(msg.unwrap_or("")))
}
