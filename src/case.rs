//! Test-case definitions and the fixture factory behind per-test
//! isolation.
//!
//! A [`CaseDef`] declares what a case *is*: initial field values, named
//! helpers, at most one `set_up` and one `tear_down` hook, and an ordered
//! list of named test functions. The runner never executes a definition
//! directly; for every test method it asks the definition for a fresh
//! [`Fixture`], so no test can observe mutable state left behind by a
//! sibling.

use std::sync::Arc;

use im::HashMap;

use crate::assertions;
use crate::errors::{TestError, TestResult};
use crate::format::fmt;
use crate::value::Value;
use crate::values;

/// A test body or lifecycle hook: runs against the method's own fixture.
pub type TestFn = Arc<dyn Fn(&mut Fixture) -> TestResult + Send + Sync>;

/// A named helper callable from within tests via [`Fixture::call`].
pub type HelperFn = Arc<dyn Fn(&mut Fixture, &[Value]) -> Result<Value, TestError> + Send + Sync>;

/// Declares a test case: fields, helpers, hooks, and test methods, in
/// declaration order.
///
/// Test methods are registered explicitly with [`CaseDef::test`]; only
/// those run. Helpers and fields are copied onto every fresh fixture but
/// are never invoked by the runner. Calling `set_up` or `tear_down` again
/// replaces the previous hook, keeping at most one of each.
///
/// ```rust
/// use pariksha::{CaseDef, Tally, output::Logger};
///
/// let case = CaseDef::new()
///     .field("count", 0)
///     .set_up(|fx| {
///         fx.set("count", 41);
///         Ok(())
///     })
///     .test("testCounts", |fx| {
///         let count = fx.get("count").as_number().unwrap_or(0.0);
///         fx.set("count", count + 1.0);
///         fx.assert_equal(42, fx.get("count"), None)
///     });
/// let tally = case.into_runner().run(&mut Logger::unconfigured());
/// assert_eq!(tally, Tally::new(1, 0, 0));
/// ```
#[derive(Clone, Default)]
pub struct CaseDef {
    fields: HashMap<String, Value>,
    helpers: HashMap<String, HelperFn>,
    set_up: Option<TestFn>,
    tear_down: Option<TestFn>,
    tests: Vec<(String, TestFn)>,
}

impl CaseDef {
    pub fn new() -> Self {
        CaseDef::default()
    }

    /// Declares an initial field value, seeded onto every fresh fixture.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Declares a named helper, reachable from tests via [`Fixture::call`].
    pub fn helper<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Fixture, &[Value]) -> Result<Value, TestError> + Send + Sync + 'static,
    {
        self.helpers.insert(name.into(), Arc::new(f));
        self
    }

    /// Declares the per-test `set_up` hook, replacing any previous one.
    pub fn set_up<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Fixture) -> TestResult + Send + Sync + 'static,
    {
        self.set_up = Some(Arc::new(f));
        self
    }

    /// Declares the per-test `tear_down` hook, replacing any previous one.
    pub fn tear_down<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Fixture) -> TestResult + Send + Sync + 'static,
    {
        self.tear_down = Some(Arc::new(f));
        self
    }

    /// Registers a test method. Methods run in registration order.
    pub fn test<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Fixture) -> TestResult + Send + Sync + 'static,
    {
        self.tests.push((name.into(), Arc::new(f)));
        self
    }

    /// The registered test-method names, in declaration order.
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn hooks(&self) -> (Option<&TestFn>, Option<&TestFn>) {
        (self.set_up.as_ref(), self.tear_down.as_ref())
    }

    pub(crate) fn tests(&self) -> &[(String, TestFn)] {
        &self.tests
    }

    /// The factory: one fresh, isolated fixture seeded from the declared
    /// initial fields and helpers. The runner calls this once per test
    /// method; hosts can call it directly for a standalone instance.
    pub fn instantiate(&self) -> Fixture {
        Fixture {
            fields: self.fields.clone(),
            helpers: self.helpers.clone(),
        }
    }

    /// Wraps this definition in a runner, ready to register or compose
    /// into a suite.
    pub fn into_runner(self) -> crate::runner::CaseRunner {
        crate::runner::CaseRunner::new(self)
    }
}

/// One freshly constructed case instance, owned by a single
/// setUp → test → tearDown triple.
///
/// Fields set during one test method are gone by the next: the runner
/// instantiates a new fixture for every method. The full assertion
/// namespace is available as methods, so test bodies read as
/// implicit-receiver calls.
pub struct Fixture {
    fields: HashMap<String, Value>,
    helpers: HashMap<String, HelperFn>,
}

impl Fixture {
    /// Reads a field; a missing field reads as `Undefined`.
    pub fn get(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Writes a field on this instance only.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Invokes a declared helper by name.
    pub fn call(&mut self, helper: &str, args: &[Value]) -> Result<Value, TestError> {
        let Some(f) = self.helpers.get(helper).cloned() else {
            return Err(TestError::error(
                "TypeError",
                fmt("`{}` is not a function", &values![helper]),
            ));
        };
        f(self, args)
    }

    pub fn assert_true(&self, value: impl Into<Value>, msg: Option<&str>) -> TestResult {
        assertions::assert_true(value, msg)
    }

    pub fn assert_false(&self, value: impl Into<Value>, msg: Option<&str>) -> TestResult {
        assertions::assert_false(value, msg)
    }

    pub fn assert_equal(
        &self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        msg: Option<&str>,
    ) -> TestResult {
        assertions::assert_equal(expected, actual, msg)
    }

    pub fn assert_not_equal(
        &self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        msg: Option<&str>,
    ) -> TestResult {
        assertions::assert_not_equal(expected, actual, msg)
    }

    pub fn assert_identical(
        &self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        msg: Option<&str>,
    ) -> TestResult {
        assertions::assert_identical(expected, actual, msg)
    }

    pub fn assert_not_identical(
        &self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        msg: Option<&str>,
    ) -> TestResult {
        assertions::assert_not_identical(expected, actual, msg)
    }

    pub fn assert_null(&self, value: impl Into<Value>, msg: Option<&str>) -> TestResult {
        assertions::assert_null(value, msg)
    }

    pub fn assert_not_null(&self, value: impl Into<Value>, msg: Option<&str>) -> TestResult {
        assertions::assert_not_null(value, msg)
    }

    pub fn assert_undefined(&self, value: impl Into<Value>, msg: Option<&str>) -> TestResult {
        assertions::assert_undefined(value, msg)
    }

    pub fn assert_not_undefined(&self, value: impl Into<Value>, msg: Option<&str>) -> TestResult {
        assertions::assert_not_undefined(value, msg)
    }

    pub fn assert_arrays_equal(
        &self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        msg: Option<&str>,
    ) -> TestResult {
        assertions::assert_arrays_equal(expected, actual, msg)
    }

    pub fn assert_members_equal(
        &self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        msg: Option<&str>,
    ) -> TestResult {
        assertions::assert_members_equal(expected, actual, msg)
    }

    pub fn assert_doubles_equal(
        &self,
        expected: f64,
        actual: f64,
        delta: f64,
        msg: Option<&str>,
    ) -> TestResult {
        assertions::assert_doubles_equal(expected, actual, delta, msg)
    }

    /// Like the free [`assert_throws`](assertions::assert_throws), but
    /// hands this fixture to the closure so it can exercise
    /// receiver-style assertions and helpers.
    pub fn assert_throws<T>(
        &mut self,
        f: impl FnOnce(&mut Fixture) -> Result<T, TestError>,
        error_kind: &str,
        msg: Option<&str>,
    ) -> TestResult {
        match f(self) {
            Err(e) if e.kind() == error_kind => Ok(()),
            Err(e) => Err(TestError::assertion(fmt(
                "Expecting error {}, got {}",
                &values![error_kind, e.kind()],
            ))),
            Ok(_) => Err(TestError::assertion(
                msg.map(str::to_owned)
                    .unwrap_or_else(|| fmt("Expecting error {}", &values![error_kind])),
            )),
        }
    }

    pub fn fail(&self, msg: Option<&str>) -> TestResult {
        assertions::fail(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_as_undefined() {
        let def = CaseDef::new().field("present", 1);
        let fx = def.instantiate();
        assert_eq!(fx.get("present"), Value::from(1));
        assert!(fx.get("absent").is_undefined());
    }

    #[test]
    fn instances_do_not_share_fields() {
        let def = CaseDef::new().field("n", 0);
        let mut first = def.instantiate();
        first.set("n", 99);
        let second = def.instantiate();
        assert_eq!(second.get("n"), Value::from(0));
    }

    #[test]
    fn helpers_dispatch_by_name() {
        let def = CaseDef::new().helper("double", |_fx, args| {
            let n = args.first().and_then(Value::as_number).unwrap_or(0.0);
            Ok(Value::from(n * 2.0))
        });
        let mut fx = def.instantiate();
        assert_eq!(fx.call("double", &values![21]).unwrap(), Value::from(42));

        let err = fx.call("nonesuch", &[]).unwrap_err();
        assert_eq!(err.kind(), "TypeError");
    }

    #[test]
    fn later_hooks_replace_earlier_ones() {
        let def = CaseDef::new()
            .set_up(|fx| {
                fx.set("who", "first");
                Ok(())
            })
            .set_up(|fx| {
                fx.set("who", "second");
                Ok(())
            });
        let (set_up, tear_down) = def.hooks();
        let mut fx = def.instantiate();
        set_up.unwrap()(&mut fx).unwrap();
        assert_eq!(fx.get("who"), Value::from("second"));
        assert!(tear_down.is_none());
    }
}
