//! Sequential, fail-fast change application
//!
//! Changes run one at a time, in list order, on the calling task. The first
//! error stops the batch and is returned unchanged. Changes already applied
//! stay applied; changes after the failing one are never attempted.

use tracing::info;

use crate::error::Result;
use crate::record::{ChangeAction, RecordChange};
use crate::traits::RecordClient;

/// Applies an ordered change list against a [`RecordClient`]
pub struct ChangeApplier<'a> {
    client: &'a dyn RecordClient,
}

impl<'a> ChangeApplier<'a> {
    /// Create an applier over `client`
    pub fn new(client: &'a dyn RecordClient) -> Self {
        Self { client }
    }

    /// Apply `changes` in order, stopping at the first failure
    pub async fn apply(&self, changes: &[RecordChange]) -> Result<()> {
        for change in changes {
            info!(
                name = %change.record.name,
                "type" = %change.record.record_type,
                action = %change.action,
                client = self.client.client_name(),
                "Changing record"
            );

            match change.action {
                ChangeAction::Create => {
                    self.client.create_record(&change.record).await?;
                }
                ChangeAction::Delete => {
                    self.client
                        .delete_record(&change.record.name, &change.record.record_type)
                        .await?;
                }
            }
        }

        Ok(())
    }
}
