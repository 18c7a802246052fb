//! The execution engine: turns declared cases into fresh per-method
//! executions, classifies outcomes, and drives the recursive suite walk.

use crate::case::{CaseDef, Fixture, TestFn};
use crate::errors::TestError;
use crate::output::Logger;
use crate::suite::Suite;
use crate::tally::Tally;
use crate::values;

/// Anything the registry can hold and run. Exactly two shapes exist:
/// a case behind its runner, and a suite of further runnables.
pub enum Runnable {
    Case(CaseRunner),
    Suite(Suite),
}

impl Runnable {
    /// Runs this unit, folding every outcome into one tally.
    ///
    /// Only a suite-level hook error produces `Err`; case execution is
    /// total and always returns counts.
    pub fn run(&self, log: &mut Logger) -> Result<Tally, TestError> {
        match self {
            Runnable::Case(runner) => Ok(runner.run(log)),
            Runnable::Suite(suite) => suite.run(log),
        }
    }
}

impl From<CaseRunner> for Runnable {
    fn from(runner: CaseRunner) -> Self {
        Runnable::Case(runner)
    }
}

impl From<CaseDef> for Runnable {
    fn from(def: CaseDef) -> Self {
        Runnable::Case(def.into_runner())
    }
}

impl From<Suite> for Runnable {
    fn from(suite: Suite) -> Self {
        Runnable::Suite(suite)
    }
}

/// Creates and runs fresh case instances, one per test method.
pub struct CaseRunner {
    def: CaseDef,
}

impl CaseRunner {
    pub fn new(def: CaseDef) -> Self {
        CaseRunner { def }
    }

    /// Runs every registered test method in declaration order.
    ///
    /// Each method gets its own fresh fixture: `set_up`, the method, then
    /// `tear_down` — the latter unconditionally, on the same instance.
    /// An error from `tear_down` is folded into the counts rather than
    /// aborting the run: it becomes the method's outcome if the method had
    /// passed, and is logged without double-counting otherwise, so every
    /// method contributes exactly one to the total.
    pub fn run(&self, log: &mut Logger) -> Tally {
        let (set_up, tear_down) = self.def.hooks();
        let mut tally = Tally::default();
        for (name, test_fn) in self.def.tests() {
            // Fresh instance so tests can't interfere with each other.
            let mut fixture = self.def.instantiate();
            let body = run_body(set_up, test_fn, &mut fixture);
            if let Err(e) = &body {
                log_non_pass(log, name, e);
            }
            let cleanup = match tear_down {
                Some(hook) => hook(&mut fixture),
                None => Ok(()),
            };
            tally = tally.merge(match (body, cleanup) {
                (Ok(()), Ok(())) => Tally::pass(),
                (Ok(()), Err(td)) => {
                    log_non_pass(log, name, &td);
                    Tally::error()
                }
                (Err(e), cleanup) => {
                    if let Err(td) = cleanup {
                        log_non_pass(log, name, &td);
                    }
                    if e.is_assertion() {
                        Tally::failure()
                    } else {
                        Tally::error()
                    }
                }
            });
        }
        tally
    }
}

/// `set_up` then the test body; a `set_up` error skips the body and is
/// classified exactly like a body error.
fn run_body(
    set_up: Option<&TestFn>,
    test_fn: &TestFn,
    fixture: &mut Fixture,
) -> Result<(), TestError> {
    if let Some(hook) = set_up {
        hook(fixture)?;
    }
    test_fn(fixture)
}

fn log_non_pass(log: &mut Logger, name: &str, e: &TestError) {
    if e.is_assertion() {
        log.log("[Failure] {}: {}", &values![name, e.message()]);
    } else {
        log.log("[Error] {}: {}", &values![name, e.to_string()]);
    }
    log.log("---", &[]);
}
