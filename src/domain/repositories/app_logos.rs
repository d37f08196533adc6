use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::app_logos::{AppLogoEntity, EditAppLogoEntity, InsertAppLogoEntity};
use crate::domain::value_objects::enums::app_categories::AppCategory;

#[automock]
#[async_trait]
pub trait AppLogoRepository {
    /// Lists logos ordered by sort order, ties broken by name.
    async fn list(
        &self,
        active_only: bool,
        category: Option<AppCategory>,
    ) -> Result<Vec<AppLogoEntity>>;
    async fn find_by_id(&self, logo_id: Uuid) -> Result<Option<AppLogoEntity>>;
    async fn insert(&self, entity: InsertAppLogoEntity) -> Result<AppLogoEntity>;
    async fn update(
        &self,
        logo_id: Uuid,
        changes: EditAppLogoEntity,
    ) -> Result<Option<AppLogoEntity>>;
    async fn delete(&self, logo_id: Uuid) -> Result<bool>;
    async fn set_sort_order(&self, logo_id: Uuid, sort_order: i32) -> Result<bool>;
}
