use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::ott_plans::{
    EditOttPlanEntity, InsertOttPlanEntity, OttPlanEntity,
};

#[automock]
#[async_trait]
pub trait OttPlanRepository {
    /// Lists plans ordered by sort order, ties broken by creation time.
    async fn list(&self, active_only: bool) -> Result<Vec<OttPlanEntity>>;
    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<OttPlanEntity>>;
    async fn insert(&self, entity: InsertOttPlanEntity) -> Result<OttPlanEntity>;
    async fn update(
        &self,
        plan_id: Uuid,
        changes: EditOttPlanEntity,
    ) -> Result<Option<OttPlanEntity>>;
    async fn delete(&self, plan_id: Uuid) -> Result<bool>;
    async fn set_sort_order(&self, plan_id: Uuid, sort_order: i32) -> Result<bool>;
}
