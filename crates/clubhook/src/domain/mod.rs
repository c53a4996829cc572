//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, translation services, and errors.

pub mod entities;
pub mod errors;
pub mod translation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use translation::{ReferenceIndex, WebhookTranslator};
pub use value_objects::*;
