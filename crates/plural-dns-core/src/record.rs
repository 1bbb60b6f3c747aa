//! Record types exchanged with the remote record store

use crate::endpoint::Endpoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DNS record as the remote store sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Fully-qualified domain name
    pub name: String,

    /// Record type (A, CNAME, TXT, ...)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Target values
    #[serde(default)]
    pub records: Vec<String>,
}

impl DnsRecord {
    /// Create a record
    pub fn new<I, S>(name: impl Into<String>, record_type: impl Into<String>, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            records: records.into_iter().map(Into::into).collect(),
        }
    }

    /// Map into the controller's endpoint shape, copying every field verbatim
    pub fn to_endpoint(&self) -> Endpoint {
        Endpoint::new(&self.name, &self.record_type, self.records.iter().cloned())
    }
}

/// Kind of mutation a [`RecordChange`] performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    /// Create-or-replace the record
    Create,
    /// Delete the record by name and type
    Delete,
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeAction::Create => f.write_str("create"),
            ChangeAction::Delete => f.write_str("delete"),
        }
    }
}

/// One atomic intent against the remote store
///
/// A delete only needs `name` and `type`; its `records` list is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordChange {
    /// What to do
    pub action: ChangeAction,
    /// The record to do it to
    pub record: DnsRecord,
}

impl RecordChange {
    /// Create-or-replace `endpoint` with its targets
    pub fn create(endpoint: &Endpoint) -> Self {
        Self {
            action: ChangeAction::Create,
            record: DnsRecord::new(
                &endpoint.dns_name,
                &endpoint.record_type,
                endpoint.targets.iter().cloned(),
            ),
        }
    }

    /// Delete `endpoint`; its targets are dropped
    pub fn delete(endpoint: &Endpoint) -> Self {
        Self {
            action: ChangeAction::Delete,
            record: DnsRecord::new(
                &endpoint.dns_name,
                &endpoint.record_type,
                Vec::<String>::new(),
            ),
        }
    }
}
