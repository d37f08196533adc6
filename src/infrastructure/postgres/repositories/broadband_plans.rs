use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::broadband_plans::{
            BroadbandPlanEntity, EditBroadbandPlanEntity, InsertBroadbandPlanEntity,
        },
        repositories::broadband_plans::BroadbandPlanRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::broadband_plans},
};

pub struct BroadbandPlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BroadbandPlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BroadbandPlanRepository for BroadbandPlanPostgres {
    async fn list(&self, active_only: bool) -> Result<Vec<BroadbandPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = broadband_plans::table.into_boxed();
        if active_only {
            query = query.filter(broadband_plans::is_active.eq(true));
        }

        let results = query
            .order((
                broadband_plans::sort_order.asc(),
                broadband_plans::created_at.asc(),
            ))
            .select(BroadbandPlanEntity::as_select())
            .load::<BroadbandPlanEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<BroadbandPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = broadband_plans::table
            .find(plan_id)
            .select(BroadbandPlanEntity::as_select())
            .first::<BroadbandPlanEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn insert(&self, entity: InsertBroadbandPlanEntity) -> Result<BroadbandPlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(broadband_plans::table)
            .values(&entity)
            .returning(BroadbandPlanEntity::as_returning())
            .get_result::<BroadbandPlanEntity>(&mut conn)?;

        Ok(result)
    }

    async fn update(
        &self,
        plan_id: Uuid,
        changes: EditBroadbandPlanEntity,
    ) -> Result<Option<BroadbandPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(broadband_plans::table.find(plan_id))
            .set(&changes)
            .returning(BroadbandPlanEntity::as_returning())
            .get_result::<BroadbandPlanEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, plan_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = delete(broadband_plans::table.find(plan_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }

    async fn set_sort_order(&self, plan_id: Uuid, sort_order: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(broadband_plans::table.find(plan_id))
            .set((
                broadband_plans::sort_order.eq(sort_order),
                broadband_plans::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(affected > 0)
    }
}
