//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod action_kind;

pub use action_kind::*;
