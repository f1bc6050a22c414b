//! Abstrakt - runtime enforcement of abstract member contracts
//!
//! Declaring a property or method abstract installs (or is) a failure;
//! touching the un-overridden member yields an error naming the type, the
//! member, and its kind. This crate re-exports both layers for convenient
//! access; for detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: abstrakt_engine     — declaration facade, violation messages,
//!                                static-slot state machine
//! Layer 0: abstrakt_foundation — type tags, member kinds, error taxonomy
//! ```

pub use abstrakt_engine as engine;
pub use abstrakt_foundation as foundation;
