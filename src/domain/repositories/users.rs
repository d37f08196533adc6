use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::users::InsertUserEntity;

#[automock]
#[async_trait]
pub trait UserRepository {
    async fn insert(&self, entity: InsertUserEntity) -> Result<Uuid>;
}
