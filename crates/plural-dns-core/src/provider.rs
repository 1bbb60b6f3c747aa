//! Provider facade
//!
//! [`PluralProvider`] is what the reconciliation loop holds. It maps the
//! record store's records to endpoints on the read path, and on the write
//! path runs the diff through [`translate`] and [`ChangeApplier`].
//!
//! ```text
//! ┌──────────────┐  records()        ┌────────────────┐  list_records()  ┌──────────────┐
//! │  controller  │ ────────────────> │ PluralProvider │ ───────────────> │ RecordClient │
//! │              │  apply_changes()  │                │  create/delete   │              │
//! └──────────────┘ ────────────────> └────────────────┘ ───────────────> └──────────────┘
//!                                      translate → ChangeApplier
//! ```

use async_trait::async_trait;
use tracing::debug;

use crate::applier::ChangeApplier;
use crate::endpoint::{Changes, Endpoint};
use crate::error::Result;
use crate::record::DnsRecord;
use crate::traits::{Provider, RecordClient};
use crate::translator::translate;

/// DNS provider backed by the Plural record store
///
/// Stateless between calls; the only state is whatever the record client
/// holds (HTTP connection pool, token).
pub struct PluralProvider {
    client: Box<dyn RecordClient>,
}

impl PluralProvider {
    /// Create a provider over a record client
    pub fn new(client: Box<dyn RecordClient>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for PluralProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluralProvider")
            .field("client", &self.client.client_name())
            .finish()
    }
}

#[async_trait]
impl Provider for PluralProvider {
    async fn records(&self) -> Result<Vec<Endpoint>> {
        let records = self.client.list_records().await?;
        debug!(count = records.len(), "Listed records");

        Ok(records.iter().map(DnsRecord::to_endpoint).collect())
    }

    async fn apply_changes(&self, changes: &Changes) -> Result<()> {
        debug!(
            create = changes.create.len(),
            update = changes.update_new.len(),
            delete = changes.delete.len(),
            "Applying changes"
        );

        let changes = translate(changes);
        ChangeApplier::new(self.client.as_ref()).apply(&changes).await
    }

    fn provider_name(&self) -> &'static str {
        "plural"
    }
}
