use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrderAssignment {
    pub id: Uuid,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkSortOrderModel {
    pub items: Vec<SortOrderAssignment>,
}

/// Best-effort outcome of a bulk reorder: every assignment is attempted,
/// ids that could not be updated are reported rather than aborting the batch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BulkSortOrderReport {
    pub updated: usize,
    pub failed: Vec<Uuid>,
}
