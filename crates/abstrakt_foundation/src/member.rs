//! Member kinds for abstract declarations.

use std::fmt;

use crate::error::AbstractErrorKind;

/// The kind of member an abstract declaration concerns.
///
/// Each kind is bound to the error kind it raises, the phrase used in
/// violation messages, and whether the member name is rendered with call
/// parentheses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A data member, static or per-instance.
    Property,
    /// A callable member.
    Method,
}

impl MemberKind {
    /// The phrase used for this kind in violation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Method => "method",
        }
    }

    /// The suffix rendered after the member name: `()` for methods,
    /// nothing for properties.
    #[must_use]
    pub const fn call_suffix(self) -> &'static str {
        match self {
            Self::Property => "",
            Self::Method => "()",
        }
    }

    /// The error kind raised when a member of this kind is violated.
    #[must_use]
    pub const fn error_kind(self) -> AbstractErrorKind {
        match self {
            Self::Property => AbstractErrorKind::Property,
            Self::Method => AbstractErrorKind::Method,
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
