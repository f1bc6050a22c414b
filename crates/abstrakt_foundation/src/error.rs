//! Error types for abstract member contract violations.
//!
//! Uses `thiserror` for ergonomic error definition. Every violation is
//! synchronous and final: the mechanism never retries, swallows, or logs —
//! it exists to hand the caller a descriptive error value.

use std::backtrace::Backtrace;
use std::fmt;

use thiserror::Error;

/// Convenience alias for results whose error is [`AbstractError`].
pub type Result<T> = std::result::Result<T, AbstractError>;

/// Violation of an abstract member contract.
///
/// Raised when an un-overridden abstract member is touched: a property
/// read, an instance constructed around an abstract field, or an abstract
/// method body invoked. The kind distinguishes property from method
/// violations; matching on it is the fine-grained catch, matching on the
/// type itself is the coarse one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AbstractError {
    /// Which kind of member the violation concerns.
    pub kind: AbstractErrorKind,
    /// Human-readable description of the violation.
    message: String,
    /// Trace captured where the error was constructed.
    backtrace: Backtrace,
}

impl AbstractError {
    /// Creates a new violation error of the given kind.
    ///
    /// A backtrace is captured at this point. Capture honors
    /// `RUST_BACKTRACE`; when the environment does not enable it, the
    /// trace is present but disabled.
    #[must_use]
    pub fn new(kind: AbstractErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a property-not-implemented error.
    #[must_use]
    pub fn property(message: impl Into<String>) -> Self {
        Self::new(AbstractErrorKind::Property, message)
    }

    /// Creates a method-not-implemented error.
    #[must_use]
    pub fn method(message: impl Into<String>) -> Self {
        Self::new(AbstractErrorKind::Method, message)
    }

    /// The concrete error-type name for this violation, selected by kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The rendered violation message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The backtrace captured when the error was constructed.
    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// The two leaf kinds of abstract contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbstractErrorKind {
    /// An abstract property was touched before being overridden.
    Property,
    /// An abstract method was invoked before being overridden.
    Method,
}

impl AbstractErrorKind {
    /// The concrete error-type name exposed for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Property => "AbstractPropertyError",
            Self::Method => "AbstractMethodError",
        }
    }
}

impl fmt::Display for AbstractErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
