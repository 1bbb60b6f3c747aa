//! Core traits for the Plural DNS provider
//!
//! - [`RecordClient`]: Talk to the remote DNS record store
//! - [`Provider`]: Capability set driven by the reconciliation loop

pub mod provider;
pub mod record_client;

pub use provider::Provider;
pub use record_client::RecordClient;
