//! Common types shared by all wallet aggregates

pub mod aggregate_id;
pub mod keys;
pub mod network;

// Re-exports
pub use aggregate_id::AggregateId;
pub use keys::{is_valid_public_key, is_valid_secret_key, shorten_public_key};
pub use network::Network;
