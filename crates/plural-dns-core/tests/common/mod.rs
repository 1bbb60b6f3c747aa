//! Test doubles and common utilities for provider contract tests
//!
//! The doubles record every call made against them so tests can assert on
//! exactly which remote mutations happened and in what order.

#![allow(dead_code)]

use plural_dns_core::error::{Error, Result};
use plural_dns_core::{DnsRecord, Endpoint, RecordClient};
use std::sync::{Arc, Mutex};

/// One call made against a [`RecordingClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(DnsRecord),
    Delete { name: String, record_type: String },
}

impl Call {
    pub fn create(name: &str, record_type: &str, records: &[&str]) -> Self {
        Call::Create(DnsRecord::new(name, record_type, records.iter().copied()))
    }

    pub fn delete(name: &str, record_type: &str) -> Self {
        Call::Delete {
            name: name.to_string(),
            record_type: record_type.to_string(),
        }
    }
}

/// A RecordClient that logs calls and can fail a chosen mutation
pub struct RecordingClient {
    /// Calls made, in order
    calls: Arc<Mutex<Vec<Call>>>,
    /// Records returned by list_records()
    listed: Vec<DnsRecord>,
    /// 0-based index of the create/delete call that fails
    fail_mutation_at: Option<usize>,
    /// Whether list_records() fails
    fail_list: bool,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            listed: Vec::new(),
            fail_mutation_at: None,
            fail_list: false,
        }
    }

    /// Return `records` from list_records()
    pub fn listing(mut self, records: Vec<DnsRecord>) -> Self {
        self.listed = records;
        self
    }

    /// Fail the create/delete call at `index`
    pub fn failing_mutation_at(mut self, index: usize) -> Self {
        self.fail_mutation_at = Some(index);
        self
    }

    /// Fail list_records()
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Create a client that shares the call log with `other`
    pub fn sharing_log_with(other: &Self) -> Self {
        Self {
            calls: Arc::clone(&other.calls),
            listed: other.listed.clone(),
            fail_mutation_at: other.fail_mutation_at,
            fail_list: other.fail_list,
        }
    }

    /// All calls made so far
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that mutate the store
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::List))
            .collect()
    }

    fn push_mutation(&self, call: Call) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.iter().filter(|c| !matches!(c, Call::List)).count();
        calls.push(call);

        if self.fail_mutation_at == Some(index) {
            return Err(Error::provider(
                "recording",
                format!("mutation {} rejected", index),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordClient for RecordingClient {
    async fn list_records(&self) -> Result<Vec<DnsRecord>> {
        self.calls.lock().unwrap().push(Call::List);
        if self.fail_list {
            return Err(Error::http("list failed"));
        }
        Ok(self.listed.clone())
    }

    async fn create_record(&self, record: &DnsRecord) -> Result<DnsRecord> {
        self.push_mutation(Call::Create(record.clone()))?;
        Ok(record.clone())
    }

    async fn delete_record(&self, name: &str, record_type: &str) -> Result<()> {
        self.push_mutation(Call::delete(name, record_type))
    }

    fn client_name(&self) -> &'static str {
        "recording"
    }
}

/// Shorthand for an endpoint
pub fn endpoint(name: &str, record_type: &str, targets: &[&str]) -> Endpoint {
    Endpoint::new(name, record_type, targets.iter().copied())
}
