//! GraphQL documents and wire types for the Plural API

use plural_dns_core::DnsRecord;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Page size for the record listing
pub const PAGE_SIZE: u32 = 500;

pub const LIST_RECORDS: &str = r#"query DnsRecords($cluster: String!, $provider: Provider!, $first: Int, $cursor: String) {
  dnsRecords(cluster: $cluster, provider: $provider, first: $first, after: $cursor) {
    pageInfo { hasNextPage endCursor }
    edges { node { name type records } }
  }
}"#;

pub const CREATE_RECORD: &str = r#"mutation CreateDnsRecord($cluster: String!, $provider: Provider!, $attributes: DnsRecordAttributes!) {
  createDnsRecord(cluster: $cluster, provider: $provider, attributes: $attributes) {
    name type records
  }
}"#;

pub const DELETE_RECORD: &str = r#"mutation DeleteDnsRecord($name: String!, $type: DnsRecordType!) {
  deleteDnsRecord(name: $name, type: $type) {
    name type
  }
}"#;

/// Request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request<'a> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: serde_json::Value,
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecordsData {
    pub dns_records: Option<Connection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub page_info: PageInfo,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Edge {
    pub node: Option<DnsRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateData {
    pub create_dns_record: Option<DnsRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteData {
    pub delete_dns_record: Option<IgnoredAny>,
}
