//! Violation message rendering.
//!
//! The message contract is fixed:
//!
//! ```text
//! Abstract {static|instance} {property|method} {Owner.}{name}{()} must be implemented.
//! ```
//!
//! The context phrase comes from the same classifier the declaration
//! paths dispatch on, so the phrasing never disagrees with the behavior.

use abstrakt_foundation::{AbstractError, MemberKind, Owner};

/// Renders the violation message for touching `member` on `owner`.
#[must_use]
pub fn render(owner: Owner, member: &str, kind: MemberKind) -> String {
    format!(
        "Abstract {context} {kind} {owner}{member}{suffix} must be implemented.",
        context = owner.context().label(),
        kind = kind.label(),
        owner = qualifier(owner),
        suffix = kind.call_suffix(),
    )
}

/// Builds the error raised for touching `member` on `owner`, selecting
/// the error kind from the member kind.
#[must_use]
pub fn violation(owner: Owner, member: &str, kind: MemberKind) -> AbstractError {
    AbstractError::new(kind.error_kind(), render(owner, member, kind))
}

/// The `Type.` qualifier before the member name; empty when the owner
/// resolves to no name, so the dot is omitted along with it.
fn qualifier(owner: Owner) -> String {
    match owner.display_name() {
        Some(name) => format!("{name}."),
        None => String::new(),
    }
}
