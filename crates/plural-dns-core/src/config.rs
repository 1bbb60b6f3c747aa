//! Configuration for the Plural DNS provider
//!
//! [`PluralConfig`] is built once at startup and handed to the record client.
//! The core never reads the process environment itself: [`PluralConfig::from_lookup`]
//! takes the lookup function from the caller.

use serde::{Deserialize, Serialize};

/// Environment key holding the Plural access token
pub const ACCESS_TOKEN_VAR: &str = "PLURAL_ACCESS_TOKEN";

/// Environment key holding the Plural API host
pub const ENDPOINT_VAR: &str = "PLURAL_ENDPOINT";

/// Host used when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "app.plural.sh";

/// Plural API configuration
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluralConfig {
    /// Plural access token
    /// ⚠️ NEVER log this value
    pub token: String,

    /// API host (e.g. "app.plural.sh"), or a full base URL with scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Cluster the records belong to
    pub cluster: String,

    /// DNS provider identifier the records are registered under (e.g. "aws")
    pub provider: String,
}

// Custom Debug implementation that hides the access token
impl std::fmt::Debug for PluralConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluralConfig")
            .field("token", &"<REDACTED>")
            .field("endpoint", &self.endpoint)
            .field("cluster", &self.cluster)
            .field("provider", &self.provider)
            .finish()
    }
}

impl PluralConfig {
    /// Create a configuration from explicit values
    pub fn new(
        token: impl Into<String>,
        endpoint: Option<String>,
        cluster: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            endpoint: endpoint.filter(|e| !e.is_empty()),
            cluster: cluster.into(),
            provider: provider.into(),
        }
    }

    /// Build a configuration, reading the token and endpoint through `lookup`
    ///
    /// `lookup` is typically `|key| std::env::var(key).ok()`.
    ///
    /// # Returns
    ///
    /// - `Err(Error::Config)` if the access token is absent or empty
    pub fn from_lookup<F>(
        cluster: impl Into<String>,
        provider: impl Into<String>,
        lookup: F,
    ) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ACCESS_TOKEN_VAR).unwrap_or_default();
        if token.is_empty() {
            return Err(crate::Error::config(format!(
                "No plural access token provided, you must set the {} env var",
                ACCESS_TOKEN_VAR
            )));
        }

        Ok(Self::new(token, lookup(ENDPOINT_VAR), cluster, provider))
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.token.is_empty() {
            return Err(crate::Error::config("Plural access token cannot be empty"));
        }
        if self.cluster.is_empty() {
            return Err(crate::Error::config("Cluster identifier cannot be empty"));
        }
        if self.provider.is_empty() {
            return Err(crate::Error::config("Provider identifier cannot be empty"));
        }
        Ok(())
    }

    /// Base URL of the Plural API
    pub fn base_url(&self) -> String {
        match self.endpoint.as_deref() {
            Some(e) if e.starts_with("https://") || e.starts_with("http://") => {
                e.trim_end_matches('/').to_string()
            }
            Some(e) => format!("https://{}", e.trim_end_matches('/')),
            None => format!("https://{}", DEFAULT_ENDPOINT),
        }
    }

    /// GraphQL endpoint URL
    pub fn graphql_url(&self) -> String {
        format!("{}/gql", self.base_url())
    }
}
