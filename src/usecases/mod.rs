use std::future::Future;

use futures::future::join_all;
use tracing::{error, warn};

use crate::domain::value_objects::sort_orders::{BulkSortOrderReport, SortOrderAssignment};

pub mod app_logos;
pub mod broadband_plans;
pub mod ott_plans;

/// Applies every sort-order reassignment and folds the results into a
/// best-effort report. A failing id never aborts the rest of the batch; it
/// is recorded in `failed` instead.
///
/// The postgres repositories issue blocking diesel calls, so the joined
/// futures complete one after another on the runtime thread; `join_all` is
/// used for outcome collection, not parallelism.
pub(crate) async fn apply_sort_orders<F, Fut>(
    assignments: Vec<SortOrderAssignment>,
    apply: F,
) -> BulkSortOrderReport
where
    F: Fn(SortOrderAssignment) -> Fut,
    Fut: Future<Output = anyhow::Result<bool>>,
{
    let attempts = join_all(assignments.into_iter().map(|assignment| {
        let attempt = apply(assignment);
        async move { (assignment.id, attempt.await) }
    }))
    .await;

    let mut report = BulkSortOrderReport {
        updated: 0,
        failed: Vec::new(),
    };

    for (id, outcome) in attempts {
        match outcome {
            Ok(true) => report.updated += 1,
            Ok(false) => {
                warn!(%id, "bulk reorder: id not found");
                report.failed.push(id);
            }
            Err(err) => {
                error!(%id, db_error = ?err, "bulk reorder: update failed");
                report.failed.push(id);
            }
        }
    }

    report
}

pub(crate) fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<diesel::result::Error>(),
        Some(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        ))
    )
}
