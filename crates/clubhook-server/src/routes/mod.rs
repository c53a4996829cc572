//! Clubhook Routes
//!
//! - / and /webhook - Clubhouse webhook receiver
//! - /swagger-ui - OpenAPI documentation

pub mod swagger;
pub mod webhook;
