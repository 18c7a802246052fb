//! The two error kinds a test run distinguishes.
//!
//! Classification is by kind tag, not by type hierarchy: an assertion
//! failure carries the reserved tag `AssertionError`, everything else
//! carries whatever tag it was raised with (`Error` by default). The
//! execution engine turns the first kind into a *failure* count and the
//! second into an *error* count.

use miette::Diagnostic;
use thiserror::Error;

/// The kind tag carried by every assertion failure.
pub const ASSERTION_ERROR: &str = "AssertionError";

/// The default kind tag for unclassified errors.
pub const GENERIC_ERROR: &str = "Error";

/// Outcome of a test body, hook, or helper invocation.
pub type TestResult = std::result::Result<(), TestError>;

/// An error raised during a test's lifecycle.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum TestError {
    /// An expected-shape test failure, raised by the assertion library or
    /// an explicit `fail`.
    #[error("{message}")]
    #[diagnostic(code(pariksha::assertion))]
    Assertion { message: String },

    /// Anything else surfaced by test code: counted as an error, not a
    /// failure. `kind` is the free-form tag checked by `assert_throws`.
    #[error("{kind}: {message}")]
    #[diagnostic(code(pariksha::error))]
    Error { kind: String, message: String },
}

impl TestError {
    /// An assertion failure with the given message.
    pub fn assertion(message: impl Into<String>) -> Self {
        TestError::Assertion {
            message: message.into(),
        }
    }

    /// An unclassified error with an explicit kind tag.
    pub fn error(kind: impl Into<String>, message: impl Into<String>) -> Self {
        TestError::Error {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// The kind tag: `AssertionError` for assertion failures, the carried
    /// tag otherwise.
    pub fn kind(&self) -> &str {
        match self {
            TestError::Assertion { .. } => ASSERTION_ERROR,
            TestError::Error { kind, .. } => kind,
        }
    }

    /// The bare message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            TestError::Assertion { message } => message,
            TestError::Error { message, .. } => message,
        }
    }

    /// True if this is an assertion failure.
    pub fn is_assertion(&self) -> bool {
        matches!(self, TestError::Assertion { .. })
    }
}

impl From<&str> for TestError {
    fn from(message: &str) -> Self {
        TestError::error(GENERIC_ERROR, message)
    }
}

impl From<String> for TestError {
    fn from(message: String) -> Self {
        TestError::error(GENERIC_ERROR, message)
    }
}
