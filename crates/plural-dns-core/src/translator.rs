//! Diff to change-list translation
//!
//! The output order is fixed: creates, then the new side of updates, then
//! deletes, each group in the order the diff lists it. Nothing is merged,
//! deduplicated, or reordered. A name deleted and re-created in the same diff
//! produces both changes, create first.

use crate::endpoint::Changes;
use crate::record::RecordChange;

/// Translate a diff into an ordered list of atomic record changes
///
/// Updates become creates carrying the new targets; the remote store's
/// upsert semantics turn them into replacements. `update_old` is not read.
pub fn translate(changes: &Changes) -> Vec<RecordChange> {
    let mut out = Vec::with_capacity(changes.len());

    out.extend(changes.create.iter().map(RecordChange::create));
    out.extend(changes.update_new.iter().map(RecordChange::create));
    out.extend(changes.delete.iter().map(RecordChange::delete));

    out
}
