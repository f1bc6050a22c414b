//! Core vocabulary for abstract member contracts.
//!
//! This crate provides:
//! - [`TypeTag`] / [`Owner`] / [`Context`] - explicit type identity and
//!   static/instance classification
//! - [`Tagged`] - how participating types supply their identity
//! - [`MemberKind`] - property vs method, with its message bindings
//! - [`AbstractError`] - the contract-violation error taxonomy

// thiserror's `#[derive(Error)]` emits an `Error::provide` override for the
// captured `Backtrace` field, which uses the still-unstable generic member
// access API. Enabling the feature lets the derive compile as written.
#![feature(error_generic_member_access)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod member;
mod tag;

pub use error::{AbstractError, AbstractErrorKind, Result};
pub use member::MemberKind;
pub use tag::{Context, Owner, Tagged, TypeTag};
