// # plural-dns-core
//
// Core library for the Plural DNS provider.
//
// ## Architecture Overview
//
// A reconciliation loop computes a diff between desired and actual DNS
// records. This crate turns that diff into remote mutations:
// - **RecordClient**: Trait for the remote record store (list/create/delete)
// - **translate**: Diff → ordered list of create/delete changes
// - **ChangeApplier**: Runs the list sequentially, stopping at the first error
// - **PluralProvider**: The Provider capability set the loop calls
//
// ## Design Principles
//
// 1. **Updates are upserts**: the new side of an update is sent as a create
// 2. **Fail-fast**: no retry, no rollback, no continue-on-error
// 3. **Stateless**: nothing outlives a single call
// 4. **Library-First**: the binary only loads config and calls into here

pub mod applier;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod provider;
pub mod record;
pub mod traits;
pub mod translator;

// Re-export core types for convenience
pub use applier::ChangeApplier;
pub use config::PluralConfig;
pub use endpoint::{Changes, Endpoint};
pub use error::{Error, Result};
pub use provider::PluralProvider;
pub use record::{ChangeAction, DnsRecord, RecordChange};
pub use traits::{Provider, RecordClient};
pub use translator::translate;
