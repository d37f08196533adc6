use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::ott_plans::{EditOttPlanEntity, InsertOttPlanEntity, OttPlanEntity},
        repositories::ott_plans::OttPlanRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::ott_plans},
};

pub struct OttPlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl OttPlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl OttPlanRepository for OttPlanPostgres {
    async fn list(&self, active_only: bool) -> Result<Vec<OttPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = ott_plans::table.into_boxed();
        if active_only {
            query = query.filter(ott_plans::is_active.eq(true));
        }

        let results = query
            .order((ott_plans::sort_order.asc(), ott_plans::created_at.asc()))
            .select(OttPlanEntity::as_select())
            .load::<OttPlanEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<OttPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = ott_plans::table
            .find(plan_id)
            .select(OttPlanEntity::as_select())
            .first::<OttPlanEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn insert(&self, entity: InsertOttPlanEntity) -> Result<OttPlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(ott_plans::table)
            .values(&entity)
            .returning(OttPlanEntity::as_returning())
            .get_result::<OttPlanEntity>(&mut conn)?;

        Ok(result)
    }

    async fn update(
        &self,
        plan_id: Uuid,
        changes: EditOttPlanEntity,
    ) -> Result<Option<OttPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(ott_plans::table.find(plan_id))
            .set(&changes)
            .returning(OttPlanEntity::as_returning())
            .get_result::<OttPlanEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, plan_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = delete(ott_plans::table.find(plan_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }

    async fn set_sort_order(&self, plan_id: Uuid, sort_order: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(ott_plans::table.find(plan_id))
            .set((
                ott_plans::sort_order.eq(sort_order),
                ott_plans::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(affected > 0)
    }
}
