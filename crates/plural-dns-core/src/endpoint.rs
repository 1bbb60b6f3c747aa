//! Endpoint and diff types, as handed over by the reconciliation loop
//!
//! Field names serialize the way external-dns writes them, so a plan dumped
//! by the controller can be fed to [`Provider::apply_changes`](crate::Provider::apply_changes)
//! unchanged.

use serde::{Deserialize, Serialize};

/// A desired or observed DNS entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Fully-qualified domain name
    pub dns_name: String,

    /// Target values (IP addresses, hostnames, text)
    #[serde(default)]
    pub targets: Vec<String>,

    /// Record type (A, AAAA, CNAME, TXT, ...)
    pub record_type: String,

    /// TTL in seconds, unset when the controller did not configure one
    #[serde(default, rename = "recordTTL", skip_serializing_if = "Option::is_none")]
    pub record_ttl: Option<u32>,
}

impl Endpoint {
    /// Create an endpoint with the given targets
    pub fn new<I, S>(
        dns_name: impl Into<String>,
        record_type: impl Into<String>,
        targets: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dns_name: dns_name.into(),
            targets: targets.into_iter().map(Into::into).collect(),
            record_type: record_type.into(),
            record_ttl: None,
        }
    }

    /// Set the TTL
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.record_ttl = Some(ttl);
        self
    }
}

/// The diff computed by the reconciliation loop
///
/// The four groups are disjoint. `update_old` is carried for completeness;
/// only `update_new` is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Changes {
    /// Endpoints to create
    #[serde(default)]
    pub create: Vec<Endpoint>,

    /// Current state of endpoints being updated
    #[serde(default)]
    pub update_old: Vec<Endpoint>,

    /// Desired state of endpoints being updated
    #[serde(default)]
    pub update_new: Vec<Endpoint>,

    /// Endpoints to delete
    #[serde(default)]
    pub delete: Vec<Endpoint>,
}

impl Changes {
    /// Create an empty diff
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether there is nothing to apply
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update_new.is_empty() && self.delete.is_empty()
    }

    /// Number of record changes this diff turns into
    pub fn len(&self) -> usize {
        self.create.len() + self.update_new.len() + self.delete.len()
    }
}
