//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems.
//!
//! Implementations of these traits live in the server crate.

pub mod member_lookup;
pub mod message_sink;

// Re-exports
pub use member_lookup::MemberLookup;
pub use message_sink::MessageSink;
