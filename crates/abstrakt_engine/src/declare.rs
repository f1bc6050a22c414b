//! Declaration facade: the entry points a type's own definition calls.
//!
//! Both operations classify their owner the same way and hand the result
//! to the matching behavior: methods and instance properties fail the
//! moment the declaration runs, static properties arm a slot in the
//! caller's [`StaticSlots`] table and fail lazily on read.

use abstrakt_foundation::{Context, MemberKind, Owner, Result};

use crate::message;
use crate::slots::StaticSlots;

/// Declares the abstract property `member` on `owner`.
///
/// In static context this arms the slot on the declaring type and returns
/// normally; reads through [`StaticSlots::read`] trip until a subtype
/// stores its own value.
///
/// # Errors
///
/// In instance context the declaration itself is the failure: it errs as
/// soon as it is evaluated, which for a field default means once per
/// construction. There is no way to tell a base-type field evaluation
/// from a subtype's without an interposed accessor, so an overriding type
/// must not evaluate the declaration at all.
pub fn property<V>(slots: &mut StaticSlots<V>, owner: Owner, member: &str) -> Result<()> {
    match owner.context() {
        Context::Static => {
            slots.declare(owner.tag(), member);
            Ok(())
        }
        Context::Instance => Err(message::violation(owner, member, MemberKind::Property)),
    }
}

/// Declares the abstract method `member` on `owner`.
///
/// # Errors
///
/// Never returns normally: every invocation of the un-overridden body
/// fails. The generic return type lets the call stand as the tail
/// expression of the method meant to be abstract; an override simply
/// never calls into this path.
pub fn method<T>(owner: Owner, member: &str) -> Result<T> {
    Err(message::violation(owner, member, MemberKind::Method))
}
