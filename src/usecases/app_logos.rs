use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::axum_http::error_responses::ApiError;
use crate::domain::{
    entities::app_logos::{EditAppLogoEntity, InsertAppLogoEntity},
    repositories::app_logos::AppLogoRepository,
    value_objects::{
        app_logos::{
            AppLogoDto, AppLogoListFilter, EditAppLogoModel, InsertAppLogoModel, LogoUpload,
        },
        sort_orders::{BulkSortOrderReport, SortOrderAssignment},
    },
};
use crate::infrastructure::assets::logo_store::{self, FsLogoStore};

/// Filesystem collaborator of the logo usecase; mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogoFileStore: Send + Sync {
    async fn save(&self, original_name: &str, bytes: Vec<u8>) -> AnyResult<String>;
    async fn remove(&self, public_path: &str) -> AnyResult<()>;
}

#[async_trait]
impl LogoFileStore for FsLogoStore {
    async fn save(&self, original_name: &str, bytes: Vec<u8>) -> AnyResult<String> {
        self.save(original_name, bytes).await
    }

    async fn remove(&self, public_path: &str) -> AnyResult<()> {
        self.remove(public_path).await
    }
}

pub struct AppLogoUseCase<R, S>
where
    R: AppLogoRepository + Send + Sync,
    S: LogoFileStore,
{
    app_logo_repository: Arc<R>,
    logo_file_store: Arc<S>,
}

impl<R, S> AppLogoUseCase<R, S>
where
    R: AppLogoRepository + Send + Sync,
    S: LogoFileStore,
{
    pub fn new(app_logo_repository: Arc<R>, logo_file_store: Arc<S>) -> Self {
        Self {
            app_logo_repository,
            logo_file_store,
        }
    }

    pub async fn list_active(
        &self,
        filter: AppLogoListFilter,
    ) -> Result<Vec<AppLogoDto>, ApiError> {
        self.list(true, filter).await
    }

    pub async fn list_all(&self) -> Result<Vec<AppLogoDto>, ApiError> {
        self.list(false, AppLogoListFilter::default()).await
    }

    async fn list(
        &self,
        active_only: bool,
        filter: AppLogoListFilter,
    ) -> Result<Vec<AppLogoDto>, ApiError> {
        let logos = self
            .app_logo_repository
            .list(active_only, filter.category)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "app logos: failed to list");
                ApiError::Internal(err)
            })?;

        info!(logo_count = logos.len(), active_only, "app logos: loaded");
        Ok(logos.into_iter().map(AppLogoDto::from).collect())
    }

    pub async fn get_by_id(&self, logo_id: Uuid) -> Result<AppLogoDto, ApiError> {
        let logo = self
            .app_logo_repository
            .find_by_id(logo_id)
            .await
            .map_err(|err| {
                error!(%logo_id, db_error = ?err, "app logos: failed to load");
                ApiError::Internal(err)
            })?
            .ok_or(ApiError::NotFound("App logo"))?;

        Ok(AppLogoDto::from(logo))
    }

    pub async fn create(
        &self,
        model: InsertAppLogoModel,
        upload: Option<LogoUpload>,
    ) -> Result<AppLogoDto, ApiError> {
        model.validate().map_err(ApiError::Validation)?;

        let upload =
            upload.ok_or_else(|| ApiError::Validation("Logo file is required".to_string()))?;
        logo_store::validate_upload(&upload.file_name, &upload.content_type, upload.bytes.len())
            .map_err(ApiError::Validation)?;

        let logo_path = self
            .logo_file_store
            .save(&upload.file_name, upload.bytes)
            .await
            .map_err(|err| {
                error!(fs_error = ?err, "app logos: failed to store uploaded file");
                ApiError::Internal(err)
            })?;

        let now = Utc::now();
        let entity = InsertAppLogoEntity {
            id: Uuid::new_v4(),
            name: model.name.trim().to_string(),
            logo_path: logo_path.clone(),
            category: model.category.to_string(),
            is_active: model.is_active,
            sort_order: model.sort_order,
            created_at: now,
            updated_at: now,
        };

        match self.app_logo_repository.insert(entity).await {
            Ok(created) => {
                info!(logo_id = %created.id, path = %created.logo_path, "app logos: created");
                Ok(AppLogoDto::from(created))
            }
            Err(err) => {
                // The record write failed; tidy up the file we just stored.
                self.remove_file_best_effort(&logo_path).await;

                if super::is_unique_violation(&err) {
                    Err(ApiError::Validation(
                        "An app logo with this name already exists".to_string(),
                    ))
                } else {
                    error!(db_error = ?err, "app logos: failed to insert");
                    Err(ApiError::Internal(err))
                }
            }
        }
    }

    pub async fn update(
        &self,
        logo_id: Uuid,
        model: EditAppLogoModel,
        upload: Option<LogoUpload>,
    ) -> Result<AppLogoDto, ApiError> {
        model.validate().map_err(ApiError::Validation)?;

        let existing = self
            .app_logo_repository
            .find_by_id(logo_id)
            .await
            .map_err(|err| {
                error!(%logo_id, db_error = ?err, "app logos: failed to load for update");
                ApiError::Internal(err)
            })?
            .ok_or(ApiError::NotFound("App logo"))?;

        let new_path = match upload {
            Some(upload) => {
                logo_store::validate_upload(
                    &upload.file_name,
                    &upload.content_type,
                    upload.bytes.len(),
                )
                .map_err(ApiError::Validation)?;

                let path = self
                    .logo_file_store
                    .save(&upload.file_name, upload.bytes)
                    .await
                    .map_err(|err| {
                        error!(fs_error = ?err, "app logos: failed to store replacement file");
                        ApiError::Internal(err)
                    })?;
                Some(path)
            }
            None => None,
        };

        let changes = EditAppLogoEntity {
            name: model.name.map(|name| name.trim().to_string()),
            logo_path: new_path.clone(),
            category: model.category.map(|category| category.to_string()),
            is_active: model.is_active,
            sort_order: model.sort_order,
            updated_at: Utc::now(),
        };

        let updated = match self.app_logo_repository.update(logo_id, changes).await {
            Ok(Some(updated)) => updated,
            Ok(None) => {
                if let Some(path) = &new_path {
                    self.remove_file_best_effort(path).await;
                }
                return Err(ApiError::NotFound("App logo"));
            }
            Err(err) => {
                if let Some(path) = &new_path {
                    self.remove_file_best_effort(path).await;
                }
                if super::is_unique_violation(&err) {
                    return Err(ApiError::Validation(
                        "An app logo with this name already exists".to_string(),
                    ));
                }
                error!(%logo_id, db_error = ?err, "app logos: failed to update");
                return Err(ApiError::Internal(err));
            }
        };

        // Record points at the new file; the old one is no longer referenced.
        if new_path.is_some() {
            self.remove_file_best_effort(&existing.logo_path).await;
        }

        info!(%logo_id, "app logos: updated");
        Ok(AppLogoDto::from(updated))
    }

    pub async fn delete(&self, logo_id: Uuid) -> Result<(), ApiError> {
        let existing = self
            .app_logo_repository
            .find_by_id(logo_id)
            .await
            .map_err(|err| {
                error!(%logo_id, db_error = ?err, "app logos: failed to load for delete");
                ApiError::Internal(err)
            })?
            .ok_or(ApiError::NotFound("App logo"))?;

        self.remove_file_best_effort(&existing.logo_path).await;

        let deleted = self
            .app_logo_repository
            .delete(logo_id)
            .await
            .map_err(|err| {
                error!(%logo_id, db_error = ?err, "app logos: failed to delete");
                ApiError::Internal(err)
            })?;

        if !deleted {
            return Err(ApiError::NotFound("App logo"));
        }

        info!(%logo_id, "app logos: deleted");
        Ok(())
    }

    pub async fn bulk_reorder(
        &self,
        assignments: Vec<SortOrderAssignment>,
    ) -> Result<BulkSortOrderReport, ApiError> {
        info!(
            assignment_count = assignments.len(),
            "app logos: bulk reorder requested"
        );

        let report = super::apply_sort_orders(assignments, |assignment| {
            self.app_logo_repository
                .set_sort_order(assignment.id, assignment.sort_order)
        })
        .await;

        Ok(report)
    }

    /// File cleanup never blocks the primary response; failures are logged.
    async fn remove_file_best_effort(&self, public_path: &str) {
        if let Err(err) = self.logo_file_store.remove(public_path).await {
            warn!(path = %public_path, fs_error = ?err, "app logos: failed to remove file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::app_logos::AppLogoEntity;
    use crate::domain::repositories::app_logos::MockAppLogoRepository;
    use crate::domain::value_objects::enums::app_categories::AppCategory;
    use mockall::predicate::eq;

    fn png_upload() -> LogoUpload {
        LogoUpload {
            file_name: "netflix.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    fn insert_model() -> InsertAppLogoModel {
        InsertAppLogoModel {
            name: "Netflix".to_string(),
            category: AppCategory::Premium,
            is_active: true,
            sort_order: 1,
        }
    }

    fn stored_entity(id: Uuid, logo_path: &str) -> AppLogoEntity {
        let now = Utc::now();
        AppLogoEntity {
            id,
            name: "Netflix".to_string(),
            logo_path: logo_path.to_string(),
            category: "premium".to_string(),
            is_active: true,
            sort_order: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_preserves_repository_row_order() {
        // Ordering (sort_order asc, ties by name) is the repository's
        // contract; the usecase must pass rows through untouched.
        let mut fixture: Vec<AppLogoEntity> = (0..3)
            .map(|i| {
                let mut entity =
                    stored_entity(Uuid::new_v4(), "/assets/images/ott-partners/x.png");
                entity.name = format!("App {i}");
                entity
            })
            .collect();
        fixture[0].sort_order = 1;
        fixture[1].sort_order = 1;
        fixture[2].sort_order = 2;
        let expected: Vec<Uuid> = fixture.iter().map(|entity| entity.id).collect();

        let mut repository = MockAppLogoRepository::new();
        let rows = fixture.clone();
        repository
            .expect_list()
            .times(1)
            .returning(move |_, _| Ok(rows.clone()));

        let store = MockLogoFileStore::new();
        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        let logos = usecase.list_all().await.unwrap();

        let returned: Vec<Uuid> = logos.iter().map(|logo| logo.id).collect();
        assert_eq!(returned, expected);
    }

    #[tokio::test]
    async fn create_stores_file_then_record() {
        let mut repository = MockAppLogoRepository::new();
        repository
            .expect_insert()
            .withf(|entity| {
                entity.name == "Netflix"
                    && entity.category == "premium"
                    && entity
                        .logo_path
                        .starts_with("/assets/images/ott-partners/")
            })
            .times(1)
            .returning(|entity| {
                Ok(AppLogoEntity {
                    id: entity.id,
                    name: entity.name,
                    logo_path: entity.logo_path,
                    category: entity.category,
                    is_active: entity.is_active,
                    sort_order: entity.sort_order,
                    created_at: entity.created_at,
                    updated_at: entity.updated_at,
                })
            });

        let mut store = MockLogoFileStore::new();
        store.expect_save().times(1).returning(|_, _| {
            Ok("/assets/images/ott-partners/netflix-1700000000000-42.png".to_string())
        });

        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        let created = usecase
            .create(insert_model(), Some(png_upload()))
            .await
            .unwrap();

        assert!(created.logo_path.starts_with("/assets/images/ott-partners/"));
        assert_ne!(created.logo_path, "netflix.png");
        assert_eq!(created.category, AppCategory::Premium);
    }

    #[tokio::test]
    async fn create_rejects_missing_file() {
        let repository = MockAppLogoRepository::new();
        let store = MockLogoFileStore::new();

        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        let result = usecase.create(insert_model(), None).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_disallowed_extension_before_saving() {
        // No expectations on either mock: neither the store nor the
        // repository may be touched for a rejected upload.
        let repository = MockAppLogoRepository::new();
        let store = MockLogoFileStore::new();

        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        let upload = LogoUpload {
            file_name: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
            bytes: vec![1, 2, 3],
        };

        let result = usecase.create(insert_model(), Some(upload)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn create_removes_file_when_insert_fails() {
        let saved_path = "/assets/images/ott-partners/netflix-1700000000000-42.png";

        let mut repository = MockAppLogoRepository::new();
        repository
            .expect_insert()
            .returning(|_| Err(anyhow::anyhow!("connection reset")));

        let mut store = MockLogoFileStore::new();
        store
            .expect_save()
            .times(1)
            .returning(move |_, _| Ok(saved_path.to_string()));
        store
            .expect_remove()
            .with(eq(saved_path))
            .times(1)
            .returning(|_| Ok(()));

        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        let result = usecase.create(insert_model(), Some(png_upload())).await;

        assert!(matches!(result, Err(ApiError::Internal(_))));
    }

    #[tokio::test]
    async fn update_with_replacement_file_removes_old_file() {
        let logo_id = Uuid::new_v4();
        let old_path = "/assets/images/ott-partners/netflix-old.png";
        let new_path = "/assets/images/ott-partners/netflix-new.png";

        let mut repository = MockAppLogoRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(logo_id))
            .returning(move |id| Ok(Some(stored_entity(id, old_path))));
        repository
            .expect_update()
            .withf(move |_, changes| changes.logo_path.as_deref() == Some(new_path))
            .times(1)
            .returning(move |id, _| Ok(Some(stored_entity(id, new_path))));

        let mut store = MockLogoFileStore::new();
        store
            .expect_save()
            .times(1)
            .returning(move |_, _| Ok(new_path.to_string()));
        store
            .expect_remove()
            .with(eq(old_path))
            .times(1)
            .returning(|_| Ok(()));

        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        let updated = usecase
            .update(logo_id, EditAppLogoModel::default(), Some(png_upload()))
            .await
            .unwrap();

        assert_eq!(updated.logo_path, new_path);
    }

    #[tokio::test]
    async fn update_without_file_keeps_existing_path() {
        let logo_id = Uuid::new_v4();
        let old_path = "/assets/images/ott-partners/netflix-old.png";

        let mut repository = MockAppLogoRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |id| Ok(Some(stored_entity(id, old_path))));
        repository
            .expect_update()
            .withf(|_, changes| changes.logo_path.is_none() && changes.sort_order == Some(7))
            .times(1)
            .returning(move |id, _| {
                let mut entity = stored_entity(id, old_path);
                entity.sort_order = 7;
                Ok(Some(entity))
            });

        // No remove expectation: the store must not be touched.
        let store = MockLogoFileStore::new();

        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        let model = EditAppLogoModel {
            sort_order: Some(7),
            ..Default::default()
        };

        let updated = usecase.update(logo_id, model, None).await.unwrap();
        assert_eq!(updated.logo_path, old_path);
        assert_eq!(updated.sort_order, 7);
    }

    #[tokio::test]
    async fn delete_removes_file_and_record() {
        let logo_id = Uuid::new_v4();
        let path = "/assets/images/ott-partners/zee5-123.png";

        let mut repository = MockAppLogoRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |id| Ok(Some(stored_entity(id, path))));
        repository
            .expect_delete()
            .with(eq(logo_id))
            .times(1)
            .returning(|_| Ok(true));

        let mut store = MockLogoFileStore::new();
        store
            .expect_remove()
            .with(eq(path))
            .times(1)
            .returning(|_| Ok(()));

        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        usecase.delete(logo_id).await.unwrap();
    }

    #[tokio::test]
    async fn delete_tolerates_file_removal_failure() {
        let logo_id = Uuid::new_v4();

        let mut repository = MockAppLogoRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_entity(id, "/assets/images/ott-partners/x.png"))));
        repository.expect_delete().returning(|_| Ok(true));

        let mut store = MockLogoFileStore::new();
        store
            .expect_remove()
            .returning(|_| Err(anyhow::anyhow!("permission denied")));

        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));
        usecase.delete(logo_id).await.unwrap();
    }

    #[tokio::test]
    async fn delete_missing_logo_is_not_found() {
        let mut repository = MockAppLogoRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let store = MockLogoFileStore::new();
        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));

        let result = usecase.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_active_passes_category_filter() {
        let mut repository = MockAppLogoRepository::new();
        repository
            .expect_list()
            .with(eq(true), eq(Some(AppCategory::Premium)))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let store = MockLogoFileStore::new();
        let usecase = AppLogoUseCase::new(Arc::new(repository), Arc::new(store));

        let filter = AppLogoListFilter {
            category: Some(AppCategory::Premium),
        };
        let logos = usecase.list_active(filter).await.unwrap();
        assert!(logos.is_empty());
    }
}
