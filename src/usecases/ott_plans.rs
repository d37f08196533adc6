use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::axum_http::error_responses::ApiError;
use crate::domain::{
    entities::ott_plans::{EditOttPlanEntity, InsertOttPlanEntity},
    repositories::ott_plans::OttPlanRepository,
    value_objects::{
        ott_plans::{EditOttPlanModel, InsertOttPlanModel, OttPlanDto},
        sort_orders::{BulkSortOrderReport, SortOrderAssignment},
    },
};

pub struct OttPlanUseCase<T>
where
    T: OttPlanRepository + Send + Sync,
{
    ott_plan_repository: Arc<T>,
}

impl<T> OttPlanUseCase<T>
where
    T: OttPlanRepository + Send + Sync,
{
    pub fn new(ott_plan_repository: Arc<T>) -> Self {
        Self {
            ott_plan_repository,
        }
    }

    pub async fn list_active(&self) -> Result<Vec<OttPlanDto>, ApiError> {
        self.list(true).await
    }

    pub async fn list_all(&self) -> Result<Vec<OttPlanDto>, ApiError> {
        self.list(false).await
    }

    async fn list(&self, active_only: bool) -> Result<Vec<OttPlanDto>, ApiError> {
        let plans = self
            .ott_plan_repository
            .list(active_only)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "ott: failed to list plans");
                ApiError::Internal(err)
            })?;

        info!(plan_count = plans.len(), active_only, "ott: plans loaded");

        plans
            .into_iter()
            .map(|entity| OttPlanDto::try_from(entity).map_err(ApiError::Internal))
            .collect()
    }

    pub async fn get_by_id(&self, plan_id: Uuid) -> Result<OttPlanDto, ApiError> {
        let plan = self
            .ott_plan_repository
            .find_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(%plan_id, db_error = ?err, "ott: failed to load plan");
                ApiError::Internal(err)
            })?
            .ok_or(ApiError::NotFound("Plan"))?;

        Ok(OttPlanDto::try_from(plan)?)
    }

    pub async fn create(&self, model: InsertOttPlanModel) -> Result<OttPlanDto, ApiError> {
        model.validate().map_err(ApiError::Validation)?;

        let now = Utc::now();
        let entity = InsertOttPlanEntity {
            id: Uuid::new_v4(),
            name: model.name.trim().to_string(),
            variants: serde_json::to_value(&model.variants).map_err(anyhow::Error::from)?,
            premium_apps: serde_json::to_value(&model.premium_apps)
                .map_err(anyhow::Error::from)?,
            non_premium_apps: serde_json::to_value(&model.non_premium_apps)
                .map_err(anyhow::Error::from)?,
            is_active: model.is_active,
            sort_order: model.sort_order,
            created_at: now,
            updated_at: now,
        };

        let created = self.ott_plan_repository.insert(entity).await.map_err(|err| {
            error!(db_error = ?err, "ott: failed to insert plan");
            ApiError::Internal(err)
        })?;

        info!(plan_id = %created.id, "ott: plan created");
        Ok(OttPlanDto::try_from(created)?)
    }

    pub async fn update(
        &self,
        plan_id: Uuid,
        model: EditOttPlanModel,
    ) -> Result<OttPlanDto, ApiError> {
        model.validate().map_err(ApiError::Validation)?;

        let changes = EditOttPlanEntity {
            name: model.name.map(|name| name.trim().to_string()),
            variants: to_optional_value(&model.variants)?,
            premium_apps: to_optional_value(&model.premium_apps)?,
            non_premium_apps: to_optional_value(&model.non_premium_apps)?,
            is_active: model.is_active,
            sort_order: model.sort_order,
            updated_at: Utc::now(),
        };

        let updated = self
            .ott_plan_repository
            .update(plan_id, changes)
            .await
            .map_err(|err| {
                error!(%plan_id, db_error = ?err, "ott: failed to update plan");
                ApiError::Internal(err)
            })?
            .ok_or(ApiError::NotFound("Plan"))?;

        info!(%plan_id, "ott: plan updated");
        Ok(OttPlanDto::try_from(updated)?)
    }

    pub async fn delete(&self, plan_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.ott_plan_repository.delete(plan_id).await.map_err(|err| {
            error!(%plan_id, db_error = ?err, "ott: failed to delete plan");
            ApiError::Internal(err)
        })?;

        if !deleted {
            return Err(ApiError::NotFound("Plan"));
        }

        info!(%plan_id, "ott: plan deleted");
        Ok(())
    }

    pub async fn bulk_reorder(
        &self,
        assignments: Vec<SortOrderAssignment>,
    ) -> Result<BulkSortOrderReport, ApiError> {
        info!(
            assignment_count = assignments.len(),
            "ott: bulk reorder requested"
        );

        let report = super::apply_sort_orders(assignments, |assignment| {
            self.ott_plan_repository
                .set_sort_order(assignment.id, assignment.sort_order)
        })
        .await;

        Ok(report)
    }
}

fn to_optional_value<T: serde::Serialize>(
    value: &Option<T>,
) -> Result<Option<serde_json::Value>, ApiError> {
    match value {
        Some(inner) => Ok(Some(
            serde_json::to_value(inner).map_err(anyhow::Error::from)?,
        )),
        None => Ok(None),
    }
}
