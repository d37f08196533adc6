use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::broadband_plans::{
    BroadbandPlanEntity, EditBroadbandPlanEntity, InsertBroadbandPlanEntity,
};

#[automock]
#[async_trait]
pub trait BroadbandPlanRepository {
    /// Lists plans ordered by sort order, ties broken by creation time.
    async fn list(&self, active_only: bool) -> Result<Vec<BroadbandPlanEntity>>;
    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<BroadbandPlanEntity>>;
    async fn insert(&self, entity: InsertBroadbandPlanEntity) -> Result<BroadbandPlanEntity>;
    async fn update(
        &self,
        plan_id: Uuid,
        changes: EditBroadbandPlanEntity,
    ) -> Result<Option<BroadbandPlanEntity>>;
    async fn delete(&self, plan_id: Uuid) -> Result<bool>;
    async fn set_sort_order(&self, plan_id: Uuid, sort_order: i32) -> Result<bool>;
}
