//! Pariksha: a minimal, embeddable xUnit-style unit-testing core.
//!
//! Declare test cases with [`CaseDef`], group them into nestable
//! [`Suite`]s, register everything on a [`Harness`] (or the process-wide
//! default one), and run. Each test method executes against its own
//! freshly constructed [`case::Fixture`]; outcomes fold into a single
//! [`Tally`] of passes, failures, and errors. The framework performs no
//! I/O of its own — a host injects a print hook and, for bootstrapping
//! code, a script-load hook.

pub use crate::case::CaseDef;
pub use crate::errors::{TestError, TestResult, ASSERTION_ERROR, GENERIC_ERROR};
pub use crate::format::fmt;
pub use crate::harness::{
    log, register_case, register_suite, run_all, set_load_fn, set_print_fn, with_default_harness,
    Harness,
};
pub use crate::runner::{CaseRunner, Runnable};
pub use crate::suite::Suite;
pub use crate::tally::Tally;
pub use crate::value::Value;

pub use crate::assertions::{
    assert_arrays_equal, assert_doubles_equal, assert_equal, assert_false, assert_identical,
    assert_members_equal, assert_not_equal, assert_not_identical, assert_not_null,
    assert_not_undefined, assert_null, assert_throws, assert_true, assert_undefined, fail,
};

pub mod assertions;
pub mod case;
pub mod errors;
pub mod format;
pub mod harness;
pub mod output;
pub mod runner;
pub mod suite;
pub mod tally;
pub mod value;

/// The common imports for embedding hosts and test definitions.
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::case::{CaseDef, Fixture};
    pub use crate::errors::{TestError, TestResult};
    pub use crate::harness::Harness;
    pub use crate::output::{NullSink, OutputBuffer, OutputSink, StdoutSink};
    pub use crate::suite::Suite;
    pub use crate::tally::Tally;
    pub use crate::value::Value;
    pub use crate::values;
}
