//! Suites: ordered, nestable groups of runnables sharing one outer
//! setUp/tearDown pair.

use std::sync::Arc;

use crate::case::CaseDef;
use crate::errors::{TestError, TestResult};
use crate::output::Logger;
use crate::runner::Runnable;
use crate::tally::Tally;

/// A suite-level lifecycle hook. Suites have no fixture of their own;
/// whatever state `set_up` and `tear_down` share, they share through what
/// the closures capture.
pub type SuiteHookFn = Arc<dyn Fn() -> TestResult + Send + Sync>;

/// An ordered group of named runnables — cases, or further suites —
/// wrapped by an optional setUp/tearDown pair that runs once around the
/// *entire* child walk, regardless of nesting depth.
///
/// ```rust
/// use pariksha::{CaseDef, Suite};
///
/// let suite = Suite::new()
///     .case("addition", CaseDef::new().test("testSum", |fx| {
///         fx.assert_equal(4, 2 + 2, None)
///     }))
///     .suite("nested", Suite::new());
/// ```
#[derive(Default)]
pub struct Suite {
    set_up: Option<SuiteHookFn>,
    tear_down: Option<SuiteHookFn>,
    members: Vec<(String, Runnable)>,
}

impl Suite {
    pub fn new() -> Self {
        Suite::default()
    }

    /// Declares the suite `set_up` hook, replacing any previous one.
    pub fn set_up<F>(mut self, f: F) -> Self
    where
        F: Fn() -> TestResult + Send + Sync + 'static,
    {
        self.set_up = Some(Arc::new(f));
        self
    }

    /// Declares the suite `tear_down` hook, replacing any previous one.
    pub fn tear_down<F>(mut self, f: F) -> Self
    where
        F: Fn() -> TestResult + Send + Sync + 'static,
    {
        self.tear_down = Some(Arc::new(f));
        self
    }

    /// Appends a member runnable. Members run in declaration order.
    pub fn member(mut self, name: impl Into<String>, runnable: impl Into<Runnable>) -> Self {
        self.members.push((name.into(), runnable.into()));
        self
    }

    /// Appends a case definition as a member.
    pub fn case(self, name: impl Into<String>, def: CaseDef) -> Self {
        self.member(name, def.into_runner())
    }

    /// Appends a nested suite as a member.
    pub fn suite(self, name: impl Into<String>, suite: Suite) -> Self {
        self.member(name, suite)
    }

    /// The member names, in declaration order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(name, _)| name.as_str())
    }

    /// Runs `set_up`, every member's `run()` in declaration order merging
    /// the tallies, then `tear_down`.
    ///
    /// A suite hook error propagates and aborts the remaining run,
    /// skipping this suite's `tear_down` — unlike case-level tearDown,
    /// which the engine folds into the counts.
    pub fn run(&self, log: &mut Logger) -> Result<Tally, TestError> {
        if let Some(hook) = &self.set_up {
            hook()?;
        }
        let mut tally = Tally::default();
        for (_name, member) in &self.members {
            tally = tally.merge(member.run(log)?);
        }
        if let Some(hook) = &self.tear_down {
            hook()?;
        }
        Ok(tally)
    }
}
