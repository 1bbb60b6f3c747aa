// # Memory Record Client
//
// In-process implementation of RecordClient.
//
// ## Purpose
//
// Holds records in a map keyed by (name, type), with the create-or-replace
// semantics the provider relies on for updates. Useful for embedding, local
// runs without a Plural account, and tests.
//
// ## Behavior
//
// - `create_record` replaces any record with the same name and type
// - `delete_record` of a missing record succeeds and changes nothing
// - `list_records` returns records sorted by name, then type
// - All state is lost when the client is dropped

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::Error;
use crate::record::DnsRecord;
use crate::traits::RecordClient;

type RecordKey = (String, String);

/// In-memory record client
///
/// Cloning shares the underlying store.
///
/// # Example
///
/// ```rust,no_run
/// use plural_dns_core::client::MemoryRecordClient;
/// use plural_dns_core::{DnsRecord, RecordClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MemoryRecordClient::new();
///
///     client.create_record(&DnsRecord::new("a.example.com", "A", ["1.2.3.4"])).await?;
///     client.create_record(&DnsRecord::new("a.example.com", "A", ["5.6.7.8"])).await?;
///
///     let records = client.list_records().await?;
///     assert_eq!(records.len(), 1);
///     assert_eq!(records[0].records, vec!["5.6.7.8"]);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordClient {
    inner: Arc<RwLock<BTreeMap<RecordKey, DnsRecord>>>,
}

impl MemoryRecordClient {
    /// Create an empty client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client pre-populated with `records`
    ///
    /// Later records replace earlier ones with the same name and type.
    pub fn with_records(records: impl IntoIterator<Item = DnsRecord>) -> Self {
        let map: BTreeMap<RecordKey, DnsRecord> = records
            .into_iter()
            .map(|record| (key(&record.name, &record.record_type), record))
            .collect();

        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Get the number of records in the store
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Look up one record
    pub async fn get(&self, name: &str, record_type: &str) -> Option<DnsRecord> {
        self.inner.read().await.get(&key(name, record_type)).cloned()
    }
}

fn key(name: &str, record_type: &str) -> RecordKey {
    (name.to_string(), record_type.to_string())
}

#[async_trait]
impl RecordClient for MemoryRecordClient {
    async fn list_records(&self) -> Result<Vec<DnsRecord>, Error> {
        let guard = self.inner.read().await;
        Ok(guard.values().cloned().collect())
    }

    async fn create_record(&self, record: &DnsRecord) -> Result<DnsRecord, Error> {
        let mut guard = self.inner.write().await;
        guard.insert(key(&record.name, &record.record_type), record.clone());
        Ok(record.clone())
    }

    async fn delete_record(&self, name: &str, record_type: &str) -> Result<(), Error> {
        let mut guard = self.inner.write().await;
        guard.remove(&key(name, record_type));
        Ok(())
    }

    fn client_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_list() {
        let client = MemoryRecordClient::new();
        client
            .create_record(&DnsRecord::new("b.example.com", "A", ["2.2.2.2"]))
            .await
            .unwrap();
        client
            .create_record(&DnsRecord::new("a.example.com", "TXT", ["v=spf1"]))
            .await
            .unwrap();

        let names: Vec<_> = client
            .list_records()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["a.example.com", "b.example.com"]);
    }

    #[tokio::test]
    async fn test_create_replaces_same_name_and_type() {
        let client = MemoryRecordClient::new();
        client
            .create_record(&DnsRecord::new("a.example.com", "A", ["1.1.1.1"]))
            .await
            .unwrap();
        client
            .create_record(&DnsRecord::new("a.example.com", "A", ["2.2.2.2", "3.3.3.3"]))
            .await
            .unwrap();

        assert_eq!(client.len().await, 1);
        let record = client.get("a.example.com", "A").await.unwrap();
        assert_eq!(record.records, vec!["2.2.2.2", "3.3.3.3"]);
    }

    #[tokio::test]
    async fn test_same_name_different_type_coexist() {
        let client = MemoryRecordClient::with_records([
            DnsRecord::new("a.example.com", "A", ["1.1.1.1"]),
            DnsRecord::new("a.example.com", "TXT", ["owner"]),
        ]);

        assert_eq!(client.len().await, 2);
        client.delete_record("a.example.com", "TXT").await.unwrap();
        assert!(client.get("a.example.com", "A").await.is_some());
        assert!(client.get("a.example.com", "TXT").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let client = MemoryRecordClient::new();
        client.delete_record("missing.example.com", "A").await.unwrap();
        assert!(client.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let client = MemoryRecordClient::new();
        let other = client.clone();

        other
            .create_record(&DnsRecord::new("a.example.com", "A", ["1.1.1.1"]))
            .await
            .unwrap();

        assert_eq!(client.len().await, 1);
    }
}
