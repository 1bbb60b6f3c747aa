// # Record Client Trait
//
// Defines the interface the core uses to talk to the remote DNS record store.
//
// ## Implementations
//
// - Plural GraphQL API: `plural-dns-client` crate
// - In-process store: [`crate::client::MemoryRecordClient`]
//
// ## Usage
//
// ```rust,ignore
// use plural_dns_core::{DnsRecord, RecordClient};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let client = /* RecordClient implementation */;
//
//     client.create_record(&DnsRecord::new("a.example.com", "A", ["1.2.3.4"])).await?;
//     client.delete_record("old.example.com", "A").await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::record::DnsRecord;

/// Trait for remote record store clients
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Upsert Requirement
///
/// Updates are applied as creates. `create_record` on a name+type pair that
/// already exists MUST replace the existing record, not add a second one.
/// A client whose backend cannot guarantee that must not be used with
/// [`PluralProvider`](crate::PluralProvider).
///
/// ## Allowed Capabilities
/// - ✅ Perform HTTP/HTTPS API calls to their endpoint only
/// - ✅ Parse backend-specific responses
/// - ✅ Return success or failure
///
/// ## Forbidden Capabilities
/// - ❌ Spawn tasks or threads
/// - ❌ Retry on behalf of the caller (the batch must stay fail-fast)
/// - ❌ Cache remote state between calls
#[async_trait]
pub trait RecordClient: Send + Sync {
    /// List every record the store holds for this cluster and provider
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<DnsRecord>)`: all records, no partial results
    /// - `Err(Error)`: if any part of the listing failed
    async fn list_records(&self) -> Result<Vec<DnsRecord>, crate::Error>;

    /// Create a record, replacing any existing record with the same name and type
    ///
    /// # Returns
    ///
    /// - `Ok(DnsRecord)`: the record as stored
    /// - `Err(Error)`: if the store rejected the record or the call failed
    async fn create_record(&self, record: &DnsRecord) -> Result<DnsRecord, crate::Error>;

    /// Delete the record with the given name and type
    async fn delete_record(&self, name: &str, record_type: &str) -> Result<(), crate::Error>;

    /// Get the client name (for logging/debugging)
    fn client_name(&self) -> &'static str;
}
