//! Batch operations with per-item outcomes
//!
//! Every target is attempted, in input order, no matter how earlier targets
//! fared.

use chrono::{DateTime, TimeZone};
use std::future::Future;

use crate::ingestion::{self, UploadItem};
use crate::types::{BatchSummary, OperationResult};

use super::gateway::StorageGateway;

/// Run `operation` once per target, sequentially
pub async fn run_batch<I, F, Fut>(targets: I, mut operation: F) -> BatchSummary
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = OperationResult>,
{
    let mut results = Vec::new();
    for target in targets {
        results.push(operation(target).await);
    }
    BatchSummary::from_results(results)
}

/// Delete each path, one result per path
pub async fn delete_many<S: AsRef<str>>(gateway: &StorageGateway, paths: &[S]) -> BatchSummary {
    let summary = run_batch(paths, |path| gateway.delete(path.as_ref())).await;
    tracing::info!(
        "Deleted {} out of {} files",
        summary.succeeded_count,
        summary.total_count
    );
    summary
}

/// Upload each item under the base path, one result per item
///
/// Object names are generated here, once per item, from `now` and the
/// original filename unless the item carries a custom name. The content
/// type always comes from the original filename.
pub async fn upload_many<Tz>(
    gateway: &StorageGateway,
    items: Vec<UploadItem>,
    now: &DateTime<Tz>,
) -> BatchSummary
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let summary = run_batch(items, |item| {
        let path = gateway.object_path(&item.object_name(now));
        let content_type = ingestion::resolve(&item.filename);
        async move { gateway.write(&path, item.data, content_type).await }
    })
    .await;
    tracing::info!(
        "Uploaded {} out of {} files",
        summary.succeeded_count,
        summary.total_count
    );
    summary
}
