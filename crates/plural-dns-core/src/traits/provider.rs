//! Provider capability set
//!
//! This is the surface a reconciliation loop drives. It holds a reference to
//! something implementing [`Provider`] and calls it in this order:
//!
//! ```text
//! records() ── controller computes diff ──> apply_changes(diff)
//! ```
//!
//! `property_values_equal` and `adjust_endpoints` are consulted by the
//! controller while computing the diff.

use async_trait::async_trait;

use crate::endpoint::{Changes, Endpoint};

/// Capability set of a DNS provider
#[async_trait]
pub trait Provider: Send + Sync {
    /// Read the current records from the remote store
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Endpoint>)`: one endpoint per remote record
    /// - `Err(Error)`: if the listing failed; no partial result is returned
    async fn records(&self) -> Result<Vec<Endpoint>, crate::Error>;

    /// Apply a diff to the remote store
    ///
    /// On error, an unspecified prefix of the diff has been applied and the
    /// rest has not.
    async fn apply_changes(&self, changes: &Changes) -> Result<(), crate::Error>;

    /// Whether two observed values of a provider-specific property are equal
    ///
    /// Plain string equality. No normalization of any kind.
    fn property_values_equal(&self, _name: &str, previous: &str, current: &str) -> bool {
        previous == current
    }

    /// Rewrite desired endpoints before the controller diffs them
    ///
    /// Identity: endpoints are returned untouched.
    fn adjust_endpoints(&self, endpoints: Vec<Endpoint>) -> Vec<Endpoint> {
        endpoints
    }

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
