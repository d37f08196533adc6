use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::app_logos::{AppLogoEntity, EditAppLogoEntity, InsertAppLogoEntity},
        repositories::app_logos::AppLogoRepository,
        value_objects::enums::app_categories::AppCategory,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::app_logos},
};

pub struct AppLogoPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AppLogoPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AppLogoRepository for AppLogoPostgres {
    async fn list(
        &self,
        active_only: bool,
        category: Option<AppCategory>,
    ) -> Result<Vec<AppLogoEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = app_logos::table.into_boxed();
        if active_only {
            query = query.filter(app_logos::is_active.eq(true));
        }
        if let Some(category) = category {
            query = query.filter(app_logos::category.eq(category.to_string()));
        }

        let results = query
            .order((app_logos::sort_order.asc(), app_logos::name.asc()))
            .select(AppLogoEntity::as_select())
            .load::<AppLogoEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, logo_id: Uuid) -> Result<Option<AppLogoEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = app_logos::table
            .find(logo_id)
            .select(AppLogoEntity::as_select())
            .first::<AppLogoEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn insert(&self, entity: InsertAppLogoEntity) -> Result<AppLogoEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(app_logos::table)
            .values(&entity)
            .returning(AppLogoEntity::as_returning())
            .get_result::<AppLogoEntity>(&mut conn)?;

        Ok(result)
    }

    async fn update(
        &self,
        logo_id: Uuid,
        changes: EditAppLogoEntity,
    ) -> Result<Option<AppLogoEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(app_logos::table.find(logo_id))
            .set(&changes)
            .returning(AppLogoEntity::as_returning())
            .get_result::<AppLogoEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, logo_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = delete(app_logos::table.find(logo_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }

    async fn set_sort_order(&self, logo_id: Uuid, sort_order: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(app_logos::table.find(logo_id))
            .set((
                app_logos::sort_order.eq(sort_order),
                app_logos::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(affected > 0)
    }
}
