//! Static-slot bookkeeping for abstract static properties.
//!
//! Static members are shared by reference down a type hierarchy, so a
//! single subtype's override would otherwise appear to implement the
//! member for every subtype. The table records, per (type, member),
//! whether that type has supplied its own value; reads walk the ancestry
//! and the nearest entry decides. Each subtype's assignment is recorded
//! on the subtype itself, leaving the declaring type and its other
//! subtypes still tripping on read.

use std::collections::HashMap;

use abstrakt_foundation::{MemberKind, Owner, Result, TypeTag};

use crate::message;

/// State of one (type, member) slot.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SlotState<V> {
    /// Declared abstract; reads trip until a subtype stores a value.
    Armed,
    /// A concrete value stored by the keyed type's own write.
    Resolved(V),
}

/// Table of static slots, keyed by type name, then member name.
///
/// Slots are armed by [`declare::property`](crate::declare::property) for
/// static-context declarations; consumers read and assign the member
/// through [`StaticSlots::read`] and [`StaticSlots::write`].
#[derive(Clone, Debug)]
pub struct StaticSlots<V> {
    /// Per-type slot maps: type name → member name → state.
    slots: HashMap<&'static str, HashMap<String, SlotState<V>>>,
}

impl<V> StaticSlots<V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Arms the slot for `member` on `ty`.
    ///
    /// Installing is once-only: a slot that already exists for this exact
    /// (type, member) pair — armed or resolved — is left untouched, so a
    /// repeated declaration cannot re-trip a member a subtype has already
    /// supplied.
    pub fn declare(&mut self, ty: &'static TypeTag, member: &str) {
        self.slots
            .entry(ty.name())
            .or_default()
            .entry(member.to_owned())
            .or_insert(SlotState::Armed);
    }

    /// Reads the static member `member` as seen from `ty`.
    ///
    /// Walks the hierarchy from `ty` upward; the nearest slot decides: a
    /// resolved slot yields its value, an armed slot trips. `Ok(None)`
    /// means no slot governs the member at all.
    ///
    /// # Errors
    ///
    /// Fails with a static-property violation naming the declaring type
    /// whenever the governing slot is still armed. Reading never changes
    /// state, so an unresolved slot trips on every read.
    pub fn read(&self, ty: &'static TypeTag, member: &str) -> Result<Option<&V>> {
        for ancestor in ty.ancestry() {
            match self.get(ancestor, member) {
                Some(SlotState::Resolved(value)) => return Ok(Some(value)),
                Some(SlotState::Armed) => {
                    return Err(message::violation(
                        Owner::Type(ancestor),
                        member,
                        MemberKind::Property,
                    ));
                }
                None => {}
            }
        }
        Ok(None)
    }

    /// Writes `value` to the static member `member` on `writer`.
    ///
    /// `None` never changes any state: passing an absent default through
    /// is not an override. A write by the declaring type to its own armed
    /// slot is also a no-op, so the declaration-time assignment cannot
    /// resolve the slot it just armed. Any other write stores the value
    /// on the writer itself — ancestors and sibling subtypes keep their
    /// own state.
    pub fn write(&mut self, writer: &'static TypeTag, member: &str, value: Option<V>) {
        let Some(value) = value else { return };

        for ancestor in writer.ancestry() {
            match self.get(ancestor, member) {
                Some(SlotState::Armed) if ancestor.name() == writer.name() => return,
                Some(_) => break,
                None => {}
            }
        }

        self.slots
            .entry(writer.name())
            .or_default()
            .insert(member.to_owned(), SlotState::Resolved(value));
    }

    /// True when (ty, member) has a slot of its own that is still armed.
    #[must_use]
    pub fn is_armed(&self, ty: &'static TypeTag, member: &str) -> bool {
        matches!(self.get(ty, member), Some(SlotState::Armed))
    }

    /// True when (ty, member) holds a value stored by `ty` itself.
    #[must_use]
    pub fn is_resolved(&self, ty: &'static TypeTag, member: &str) -> bool {
        matches!(self.get(ty, member), Some(SlotState::Resolved(_)))
    }

    fn get(&self, ty: &TypeTag, member: &str) -> Option<&SlotState<V>> {
        self.slots.get(ty.name()).and_then(|slots| slots.get(member))
    }
}

impl<V> Default for StaticSlots<V> {
    fn default() -> Self {
        Self::new()
    }
}
