//! The registry of runnables and the host-facing configuration surface.
//!
//! A [`Harness`] is an explicitly owned registry: a host (or the
//! framework's own tests) constructs one, injects its print and load
//! hooks, registers cases and suites, and runs everything. A process-wide
//! default instance is offered for the common embedding pattern where
//! test-definition scripts register themselves as a side effect of being
//! loaded; the free functions at the bottom of this module operate on it.

use std::sync::Mutex;

use lazy_static::lazy_static;

use crate::case::CaseDef;
use crate::errors::TestError;
use crate::output::{Logger, OutputSink};
use crate::runner::Runnable;
use crate::suite::Suite;
use crate::tally::Tally;
use crate::value::Value;

/// The script-load hook a bootstrapping host supplies. Stored and
/// forwarded by [`Harness::load`]; the core's own execution logic never
/// consults it.
///
/// Any `FnMut(&str)` closure is a loader.
pub trait ScriptLoader {
    fn load(&mut self, path: &str);
}

impl<F: FnMut(&str)> ScriptLoader for F {
    fn load(&mut self, path: &str) {
        self(path)
    }
}

/// An ordered registry of runnables plus the two host hooks.
///
/// The registry is append-only and never cleared automatically: calling
/// [`Harness::run_all`] again replays the same registrants.
#[derive(Default)]
pub struct Harness {
    runnables: Vec<Runnable>,
    logger: Logger,
    loader: Option<Box<dyn ScriptLoader + Send>>,
}

impl Harness {
    /// A fresh harness: empty registry, no hooks configured.
    pub fn new() -> Self {
        Harness::default()
    }

    /// Injects the print hook as a bare line-printing function.
    pub fn set_print_fn<F>(&mut self, f: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.logger.set_sink(Box::new(f));
    }

    /// Injects the print hook as a boxed sink.
    pub fn set_sink(&mut self, sink: Box<dyn OutputSink + Send>) {
        self.logger.set_sink(sink);
    }

    /// Injects the script-load hook as a bare function.
    pub fn set_load_fn<F>(&mut self, f: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.loader = Some(Box::new(f));
    }

    /// Injects the script-load hook as a boxed loader.
    pub fn set_loader(&mut self, loader: Box<dyn ScriptLoader + Send>) {
        self.loader = Some(loader);
    }

    /// Appends a runnable to the registry.
    pub fn add(&mut self, runnable: impl Into<Runnable>) {
        self.runnables.push(runnable.into());
    }

    /// Builds a runner from the definition and appends it.
    pub fn add_case(&mut self, def: CaseDef) {
        self.add(def.into_runner());
    }

    /// Appends a suite.
    pub fn add_suite(&mut self, suite: Suite) {
        self.add(suite);
    }

    /// Number of registered top-level runnables.
    pub fn len(&self) -> usize {
        self.runnables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runnables.is_empty()
    }

    /// Forwards to the injected script loader.
    ///
    /// # Panics
    ///
    /// Panics if no load hook has been injected.
    pub fn load(&mut self, path: &str) {
        match self.loader.as_mut() {
            Some(loader) => loader.load(path),
            None => panic!("no load hook configured: call set_load_fn before loading"),
        }
    }

    /// Formats `template` with `args` and emits one line through the print
    /// hook. Fatal if no print hook is configured.
    pub fn log(&mut self, template: &str, args: &[Value]) {
        self.logger.log(template, args);
    }

    /// Runs every registered runnable in registration order, folding all
    /// outcomes from the zero tally.
    ///
    /// `Err` only surfaces a propagated suite-hook error; per-test
    /// failures and errors are counted, not returned.
    pub fn run_all(&mut self) -> Result<Tally, TestError> {
        let mut tally = Tally::default();
        for runnable in &self.runnables {
            tally = tally.merge(runnable.run(&mut self.logger)?);
        }
        Ok(tally)
    }
}

lazy_static! {
    static ref DEFAULT_HARNESS: Mutex<Harness> = Mutex::new(Harness::new());
}

/// Runs `f` against the process-wide default harness.
///
/// A poisoned lock is recovered rather than propagated: the registry is
/// plain data, and a panicking host test must not wedge later runs.
pub fn with_default_harness<T>(f: impl FnOnce(&mut Harness) -> T) -> T {
    let mut guard = DEFAULT_HARNESS
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

/// Registers a case definition on the default harness.
pub fn register_case(def: CaseDef) {
    with_default_harness(|h| h.add_case(def));
}

/// Registers a suite on the default harness.
pub fn register_suite(suite: Suite) {
    with_default_harness(|h| h.add_suite(suite));
}

/// Injects the default harness's print hook.
pub fn set_print_fn<F>(f: F)
where
    F: FnMut(&str) + Send + 'static,
{
    with_default_harness(|h| h.set_print_fn(f));
}

/// Injects the default harness's script-load hook.
pub fn set_load_fn<F>(f: F)
where
    F: FnMut(&str) + Send + 'static,
{
    with_default_harness(|h| h.set_load_fn(f));
}

/// Logs one formatted line through the default harness.
pub fn log(template: &str, args: &[Value]) {
    with_default_harness(|h| h.log(template, args));
}

/// Runs everything registered on the default harness.
pub fn run_all() -> Result<Tally, TestError> {
    with_default_harness(|h| h.run_all())
}
