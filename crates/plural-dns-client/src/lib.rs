// # Plural Record Client
//
// This crate provides the GraphQL-over-HTTP RecordClient for the Plural DNS
// provider.
//
// ## Behavior
//
// - One HTTP request per record operation (listing pages through 500 at a time)
// - Full error propagation to the caller
// - HTTP timeout configured (30 seconds)
// - Specific error handling for HTTP status codes (401, 403, 429, 5xx)
// - GraphQL `errors` arrays surface as provider errors
// - Dry-run mode: listing goes out, mutations are only logged
// - ❌ NO retry logic (the batch is fail-fast)
// - ❌ NO caching of remote state
// - ❌ NO background tasks
//
// ## Security Requirements
//
// - Access token NEVER appears in logs or Debug output
// - Construction fails if the token is empty, before any request is made
//
// ## API Reference
//
// All operations are POSTed to `https://<endpoint>/gql`:
// - `dnsRecords(cluster, provider, first, after)`: paged listing
// - `createDnsRecord(cluster, provider, attributes)`: create-or-replace
// - `deleteDnsRecord(name, type)`: delete by name and type

mod graphql;

use async_trait::async_trait;
use plural_dns_core::{DnsRecord, Error, PluralConfig, PluralProvider, RecordClient, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

use crate::graphql::{CreateData, DeleteData, DnsRecordsData, PAGE_SIZE, Request, Response};

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Name reported in provider errors and logs
const CLIENT_NAME: &str = "plural";

/// Record client for the Plural GraphQL API
///
/// # Dry-Run Mode
///
/// When `dry_run` is true, the client will:
/// - Perform listing requests
/// - Log the intended create/delete mutation
/// - **NOT** send any mutation
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the access token.
pub struct PluralClient {
    /// API configuration (holds the token)
    config: PluralConfig,

    /// GraphQL endpoint URL
    url: String,

    /// HTTP client for API requests
    client: reqwest::Client,

    /// Dry-run mode: if true, list records but skip mutations
    dry_run: bool,
}

// Custom Debug implementation that hides the access token
impl std::fmt::Debug for PluralClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluralClient")
            .field("token", &"<REDACTED>")
            .field("url", &self.url)
            .field("cluster", &self.config.cluster)
            .field("provider", &self.config.provider)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl PluralClient {
    /// Create a new Plural client
    ///
    /// # Returns
    ///
    /// - `Err(Error::Config)` if the token, cluster or provider is empty
    /// - `Err(Error::Http)` if the HTTP client cannot be built
    ///
    /// No request is made.
    pub fn new(config: PluralConfig, dry_run: bool) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: config.graphql_url(),
            config,
            client,
            dry_run,
        })
    }

    /// Create a new client in live mode
    pub fn new_live(config: PluralConfig) -> Result<Self> {
        Self::new(config, false)
    }

    /// Create a new client in dry-run mode
    pub fn new_dry_run(config: PluralConfig) -> Result<Self> {
        Self::new(config, true)
    }

    /// Whether mutations are skipped
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// GraphQL endpoint this client talks to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Provider identifier as the API's `Provider` enum expects it
    fn provider_enum(&self) -> String {
        self.config.provider.to_uppercase()
    }

    /// Run one GraphQL operation and decode its `data`
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        tracing::debug!(operation, "Sending GraphQL request");

        let request = Request {
            query,
            operation_name: operation,
            variables,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.config.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(status_error(operation, status, &error_text));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::http(format!("Failed to read response body: {}", e)))?;
        let body: Response<T> = serde_json::from_slice(&bytes)?;

        if !body.errors.is_empty() {
            let messages: Vec<_> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(Error::provider(
                CLIENT_NAME,
                format!("{} failed: {}", operation, messages.join("; ")),
            ));
        }

        body.data.ok_or_else(|| {
            Error::provider(CLIENT_NAME, format!("{} returned no data", operation))
        })
    }
}

/// Map a non-success HTTP status to an error
fn status_error(operation: &str, status: StatusCode, body: &str) -> Error {
    match status.as_u16() {
        401 | 403 => Error::auth(format!(
            "Invalid access token or insufficient permissions. Status: {}",
            status
        )),
        429 => Error::rate_limited(format!(
            "Rate limit exceeded. Please retry later. Status: {}",
            status
        )),
        500..=599 => Error::provider(
            CLIENT_NAME,
            format!("Plural server error (transient): {} - {}", status, body),
        ),
        _ => Error::provider(
            CLIENT_NAME,
            format!("{} failed: {} - {}", operation, status, body),
        ),
    }
}

#[async_trait]
impl RecordClient for PluralClient {
    /// List every record for the configured cluster and provider
    ///
    /// Follows `pageInfo.endCursor` until `hasNextPage` is false. Any failed
    /// page fails the whole listing, as does a missing connection after the
    /// first page or a cursor that does not advance.
    async fn list_records(&self) -> Result<Vec<DnsRecord>> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let data: DnsRecordsData = self
                .execute(
                    "DnsRecords",
                    graphql::LIST_RECORDS,
                    json!({
                        "cluster": self.config.cluster,
                        "provider": self.provider_enum(),
                        "first": PAGE_SIZE,
                        "cursor": cursor,
                    }),
                )
                .await?;

            let Some(page) = data.dns_records else {
                if cursor.is_none() {
                    break;
                }
                return Err(Error::provider(
                    CLIENT_NAME,
                    format!(
                        "dnsRecords returned no connection after {} record(s)",
                        records.len()
                    ),
                ));
            };

            records.extend(page.edges.into_iter().filter_map(|edge| edge.node));

            match page.page_info.end_cursor {
                Some(next) if page.page_info.has_next_page => {
                    if cursor.as_deref() == Some(next.as_str()) {
                        return Err(Error::provider(
                            CLIENT_NAME,
                            format!("dnsRecords repeated cursor {}", next),
                        ));
                    }
                    cursor = Some(next);
                }
                _ => break,
            }
        }

        tracing::debug!(count = records.len(), "Fetched Plural DNS records");
        Ok(records)
    }

    async fn create_record(&self, record: &DnsRecord) -> Result<DnsRecord> {
        let variables = json!({
            "cluster": self.config.cluster,
            "provider": self.provider_enum(),
            "attributes": {
                "name": record.name,
                "type": record.record_type,
                "records": record.records,
            },
        });

        if self.dry_run {
            tracing::info!(
                "[DRY-RUN] Would send createDnsRecord to {} with variables: {}",
                self.url,
                variables
            );
            return Ok(record.clone());
        }

        let data: CreateData = self
            .execute("CreateDnsRecord", graphql::CREATE_RECORD, variables)
            .await?;

        data.create_dns_record.ok_or_else(|| {
            Error::provider(
                CLIENT_NAME,
                format!("createDnsRecord returned no record for {}", record.name),
            )
        })
    }

    async fn delete_record(&self, name: &str, record_type: &str) -> Result<()> {
        let variables = json!({
            "name": name,
            "type": record_type,
        });

        if self.dry_run {
            tracing::info!(
                "[DRY-RUN] Would send deleteDnsRecord to {} with variables: {}",
                self.url,
                variables
            );
            return Ok(());
        }

        let data: DeleteData = self
            .execute("DeleteDnsRecord", graphql::DELETE_RECORD, variables)
            .await?;

        if data.delete_dns_record.is_none() {
            return Err(Error::provider(
                CLIENT_NAME,
                format!("deleteDnsRecord returned no record for {}", name),
            ));
        }
        Ok(())
    }

    fn client_name(&self) -> &'static str {
        CLIENT_NAME
    }
}

/// Build a [`PluralProvider`] talking to the Plural API
///
/// Fails with a configuration error, without any network call, when the
/// configuration is incomplete.
pub fn new_provider(config: PluralConfig, dry_run: bool) -> Result<PluralProvider> {
    if dry_run {
        tracing::warn!("Plural client running in DRY-RUN mode - no changes will be made");
    }

    let client = PluralClient::new(config, dry_run)?;
    Ok(PluralProvider::new(Box::new(client)))
}
