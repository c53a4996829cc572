//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod clubhouse;
pub mod discord;

// Re-exports
pub use clubhouse::ClubhouseClient;
pub use discord::DiscordWebhook;

/// User-Agent sent on every outbound request
pub const USER_AGENT: &str = concat!("Clubhook/", env!("CARGO_PKG_VERSION"));
