// src/application/commands/counts.rs
use crate::{
    application::error::ApplicationResult,
    domain::category::{CategoryId, services::PostCountSynchronizer},
};

/// Resyncs a category after a post write. A category that disappeared in
/// the meantime is logged and skipped so the triggering write still succeeds.
pub(super) async fn resync_quietly(
    counts: &PostCountSynchronizer,
    category_id: CategoryId,
) -> ApplicationResult<Option<u64>> {
    match counts.resync(category_id).await {
        Ok(count) => Ok(Some(count)),
        Err(err) if err.is_not_found() => {
            tracing::warn!(
                category_id = %category_id,
                error = %err,
                "skipping post count resync for missing category"
            );
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
