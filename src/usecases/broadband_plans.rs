use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::axum_http::error_responses::ApiError;
use crate::domain::{
    entities::broadband_plans::{EditBroadbandPlanEntity, InsertBroadbandPlanEntity},
    repositories::broadband_plans::BroadbandPlanRepository,
    value_objects::{
        broadband_plans::{BroadbandPlanDto, EditBroadbandPlanModel, InsertBroadbandPlanModel},
        sort_orders::{BulkSortOrderReport, SortOrderAssignment},
    },
};

pub struct BroadbandPlanUseCase<T>
where
    T: BroadbandPlanRepository + Send + Sync,
{
    broadband_plan_repository: Arc<T>,
}

impl<T> BroadbandPlanUseCase<T>
where
    T: BroadbandPlanRepository + Send + Sync,
{
    pub fn new(broadband_plan_repository: Arc<T>) -> Self {
        Self {
            broadband_plan_repository,
        }
    }

    pub async fn list_active(&self) -> Result<Vec<BroadbandPlanDto>, ApiError> {
        self.list(true).await
    }

    pub async fn list_all(&self) -> Result<Vec<BroadbandPlanDto>, ApiError> {
        self.list(false).await
    }

    async fn list(&self, active_only: bool) -> Result<Vec<BroadbandPlanDto>, ApiError> {
        let plans = self
            .broadband_plan_repository
            .list(active_only)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "broadband: failed to list plans");
                ApiError::Internal(err)
            })?;

        info!(plan_count = plans.len(), active_only, "broadband: plans loaded");

        plans
            .into_iter()
            .map(|entity| BroadbandPlanDto::try_from(entity).map_err(ApiError::Internal))
            .collect()
    }

    pub async fn get_by_id(&self, plan_id: Uuid) -> Result<BroadbandPlanDto, ApiError> {
        let plan = self
            .broadband_plan_repository
            .find_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(%plan_id, db_error = ?err, "broadband: failed to load plan");
                ApiError::Internal(err)
            })?
            .ok_or(ApiError::NotFound("Plan"))?;

        Ok(BroadbandPlanDto::try_from(plan)?)
    }

    pub async fn create(
        &self,
        model: InsertBroadbandPlanModel,
    ) -> Result<BroadbandPlanDto, ApiError> {
        model.validate().map_err(ApiError::Validation)?;

        let now = Utc::now();
        let entity = InsertBroadbandPlanEntity {
            id: Uuid::new_v4(),
            name: model.name.trim().to_string(),
            speed: model.speed,
            description: model.description,
            monthly: model.monthly,
            quarterly: model.quarterly,
            half_yearly: model.half_yearly,
            yearly: model.yearly,
            features: serde_json::to_value(&model.features).map_err(anyhow::Error::from)?,
            is_active: model.is_active,
            sort_order: model.sort_order,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .broadband_plan_repository
            .insert(entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "broadband: failed to insert plan");
                ApiError::Internal(err)
            })?;

        info!(plan_id = %created.id, "broadband: plan created");
        Ok(BroadbandPlanDto::try_from(created)?)
    }

    pub async fn update(
        &self,
        plan_id: Uuid,
        model: EditBroadbandPlanModel,
    ) -> Result<BroadbandPlanDto, ApiError> {
        model.validate().map_err(ApiError::Validation)?;

        let features = match &model.features {
            Some(features) => Some(serde_json::to_value(features).map_err(anyhow::Error::from)?),
            None => None,
        };

        let changes = EditBroadbandPlanEntity {
            name: model.name.map(|name| name.trim().to_string()),
            speed: model.speed,
            description: model.description,
            monthly: model.monthly,
            quarterly: model.quarterly,
            half_yearly: model.half_yearly,
            yearly: model.yearly,
            features,
            is_active: model.is_active,
            sort_order: model.sort_order,
            updated_at: Utc::now(),
        };

        let updated = self
            .broadband_plan_repository
            .update(plan_id, changes)
            .await
            .map_err(|err| {
                error!(%plan_id, db_error = ?err, "broadband: failed to update plan");
                ApiError::Internal(err)
            })?
            .ok_or(ApiError::NotFound("Plan"))?;

        info!(%plan_id, "broadband: plan updated");
        Ok(BroadbandPlanDto::try_from(updated)?)
    }

    pub async fn delete(&self, plan_id: Uuid) -> Result<(), ApiError> {
        let deleted = self
            .broadband_plan_repository
            .delete(plan_id)
            .await
            .map_err(|err| {
                error!(%plan_id, db_error = ?err, "broadband: failed to delete plan");
                ApiError::Internal(err)
            })?;

        if !deleted {
            return Err(ApiError::NotFound("Plan"));
        }

        info!(%plan_id, "broadband: plan deleted");
        Ok(())
    }

    pub async fn bulk_reorder(
        &self,
        assignments: Vec<SortOrderAssignment>,
    ) -> Result<BulkSortOrderReport, ApiError> {
        info!(
            assignment_count = assignments.len(),
            "broadband: bulk reorder requested"
        );

        let report = super::apply_sort_orders(assignments, |assignment| {
            self.broadband_plan_repository
                .set_sort_order(assignment.id, assignment.sort_order)
        })
        .await;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::broadband_plans::BroadbandPlanEntity;
    use crate::domain::repositories::broadband_plans::MockBroadbandPlanRepository;
    use mockall::predicate::eq;

    fn sample_entity(id: Uuid) -> BroadbandPlanEntity {
        let now = Utc::now();
        BroadbandPlanEntity {
            id,
            name: "Starter".to_string(),
            speed: 50,
            description: Some("Perfect for basic internet usage".to_string()),
            monthly: 599,
            quarterly: 1650,
            half_yearly: 3000,
            yearly: 5500,
            features: serde_json::json!(["50 Mbps Speed", "Unlimited Data"]),
            is_active: true,
            sort_order: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn insert_model() -> InsertBroadbandPlanModel {
        InsertBroadbandPlanModel {
            name: "Starter".to_string(),
            speed: 50,
            description: Some("Perfect for basic internet usage".to_string()),
            monthly: 599,
            quarterly: 1650,
            half_yearly: 3000,
            yearly: 5500,
            features: vec!["50 Mbps Speed".to_string(), "Unlimited Data".to_string()],
            is_active: true,
            sort_order: 1,
        }
    }

    #[tokio::test]
    async fn list_active_requests_only_active_records() {
        let mut repository = MockBroadbandPlanRepository::new();
        repository
            .expect_list()
            .with(eq(true))
            .times(1)
            .returning(|_| Ok(vec![sample_entity(Uuid::new_v4())]));

        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));
        let plans = usecase.list_active().await.unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].features, vec!["50 Mbps Speed", "Unlimited Data"]);
    }

    #[tokio::test]
    async fn list_preserves_repository_row_order() {
        // Ordering (sort_order asc, ties by created_at) is the repository's
        // contract; the usecase must pass rows through untouched.
        let mut fixture: Vec<BroadbandPlanEntity> =
            (0..3).map(|_| sample_entity(Uuid::new_v4())).collect();
        fixture[0].sort_order = 1;
        fixture[1].sort_order = 1;
        fixture[2].sort_order = 3;
        let expected: Vec<Uuid> = fixture.iter().map(|entity| entity.id).collect();

        let mut repository = MockBroadbandPlanRepository::new();
        let rows = fixture.clone();
        repository
            .expect_list()
            .times(1)
            .returning(move |_| Ok(rows.clone()));

        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));
        let plans = usecase.list_all().await.unwrap();

        let returned: Vec<Uuid> = plans.iter().map(|plan| plan.id).collect();
        assert_eq!(returned, expected);
    }

    #[tokio::test]
    async fn create_round_trips_supplied_fields() {
        let mut repository = MockBroadbandPlanRepository::new();
        repository
            .expect_insert()
            .withf(|entity| {
                entity.name == "Starter"
                    && entity.half_yearly == 3000
                    && entity.features == serde_json::json!(["50 Mbps Speed", "Unlimited Data"])
            })
            .times(1)
            .returning(|entity| {
                Ok(BroadbandPlanEntity {
                    id: entity.id,
                    name: entity.name,
                    speed: entity.speed,
                    description: entity.description,
                    monthly: entity.monthly,
                    quarterly: entity.quarterly,
                    half_yearly: entity.half_yearly,
                    yearly: entity.yearly,
                    features: entity.features,
                    is_active: entity.is_active,
                    sort_order: entity.sort_order,
                    created_at: entity.created_at,
                    updated_at: entity.updated_at,
                })
            });

        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));
        let created = usecase.create(insert_model()).await.unwrap();

        assert_eq!(created.name, "Starter");
        assert_eq!(created.monthly, 599);
        assert_eq!(created.yearly, 5500);
        assert!(created.is_active);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_without_touching_store() {
        let repository = MockBroadbandPlanRepository::new();
        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));

        let mut model = insert_model();
        model.monthly = -599;

        let result = usecase.create(model).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn get_by_id_maps_missing_record_to_not_found() {
        let mut repository = MockBroadbandPlanRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));
        let result = usecase.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_patches_only_provided_fields() {
        let plan_id = Uuid::new_v4();
        let mut repository = MockBroadbandPlanRepository::new();
        repository
            .expect_update()
            .withf(|_, changes| {
                changes.sort_order == Some(5)
                    && changes.name.is_none()
                    && changes.monthly.is_none()
                    && changes.features.is_none()
            })
            .times(1)
            .returning(move |_, changes| {
                let mut entity = sample_entity(plan_id);
                entity.sort_order = changes.sort_order.unwrap();
                Ok(Some(entity))
            });

        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));
        let model = EditBroadbandPlanModel {
            sort_order: Some(5),
            ..Default::default()
        };

        let updated = usecase.update(plan_id, model).await.unwrap();
        assert_eq!(updated.sort_order, 5);
        assert_eq!(updated.name, "Starter");
    }

    #[tokio::test]
    async fn update_maps_missing_record_to_not_found() {
        let mut repository = MockBroadbandPlanRepository::new();
        repository.expect_update().returning(|_, _| Ok(None));

        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));
        let result = usecase
            .update(Uuid::new_v4(), EditBroadbandPlanModel::default())
            .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_maps_missing_record_to_not_found() {
        let mut repository = MockBroadbandPlanRepository::new();
        repository.expect_delete().returning(|_| Ok(false));

        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));
        let result = usecase.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn bulk_reorder_applies_valid_ids_despite_failures() {
        let good = Uuid::new_v4();
        let missing = Uuid::new_v4();
        let broken = Uuid::new_v4();

        let mut repository = MockBroadbandPlanRepository::new();
        repository
            .expect_set_sort_order()
            .with(eq(good), eq(1))
            .times(1)
            .returning(|_, _| Ok(true));
        repository
            .expect_set_sort_order()
            .with(eq(missing), eq(2))
            .times(1)
            .returning(|_, _| Ok(false));
        repository
            .expect_set_sort_order()
            .with(eq(broken), eq(3))
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("connection reset")));

        let usecase = BroadbandPlanUseCase::new(Arc::new(repository));
        let report = usecase
            .bulk_reorder(vec![
                SortOrderAssignment {
                    id: good,
                    sort_order: 1,
                },
                SortOrderAssignment {
                    id: missing,
                    sort_order: 2,
                },
                SortOrderAssignment {
                    id: broken,
                    sort_order: 3,
                },
            ])
            .await
            .unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(report.failed.len(), 2);
        assert!(report.failed.contains(&missing));
        assert!(report.failed.contains(&broken));
    }
}
