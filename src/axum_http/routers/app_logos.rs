use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::AuthAdmin;
use crate::axum_http::error_responses::ApiError;
use crate::config::config_model::DotEnvyConfig;
use crate::domain::{
    repositories::app_logos::AppLogoRepository,
    value_objects::{
        app_logos::{
            AppLogoListFilter, EditAppLogoModel, InsertAppLogoModel, LogoUpload,
        },
        enums::app_categories::AppCategory,
        sort_orders::BulkSortOrderModel,
    },
};
use crate::infrastructure::{
    assets::logo_store::FsLogoStore,
    postgres::{postgres_connection::PgPoolSquad, repositories::app_logos::AppLogoPostgres},
};
use crate::usecases::app_logos::{AppLogoUseCase, LogoFileStore};

pub fn routes(db_pool: Arc<PgPoolSquad>, config: Arc<DotEnvyConfig>) -> Router {
    let app_logo_repository = AppLogoPostgres::new(Arc::clone(&db_pool));
    let logo_file_store = FsLogoStore::new(config.assets.public_dir.clone());
    let app_logo_usecase =
        AppLogoUseCase::new(Arc::new(app_logo_repository), Arc::new(logo_file_store));

    Router::new()
        .route("/", get(list_active).post(create))
        .route("/admin", get(list_all))
        .route("/bulk/sort-order", put(bulk_reorder))
        .route("/:id", get(get_by_id).put(update).delete(remove))
        .with_state(Arc::new(app_logo_usecase))
}

pub async fn list_active<R, S>(
    State(app_logo_usecase): State<Arc<AppLogoUseCase<R, S>>>,
    Query(filter): Query<AppLogoListFilter>,
) -> Result<impl IntoResponse, ApiError>
where
    R: AppLogoRepository + Send + Sync + 'static,
    S: LogoFileStore + 'static,
{
    let logos = app_logo_usecase.list_active(filter).await?;
    Ok(Json(logos))
}

pub async fn list_all<R, S>(
    State(app_logo_usecase): State<Arc<AppLogoUseCase<R, S>>>,
    _admin: AuthAdmin,
) -> Result<impl IntoResponse, ApiError>
where
    R: AppLogoRepository + Send + Sync + 'static,
    S: LogoFileStore + 'static,
{
    let logos = app_logo_usecase.list_all().await?;
    Ok(Json(logos))
}

pub async fn get_by_id<R, S>(
    State(app_logo_usecase): State<Arc<AppLogoUseCase<R, S>>>,
    Path(logo_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    R: AppLogoRepository + Send + Sync + 'static,
    S: LogoFileStore + 'static,
{
    let logo = app_logo_usecase.get_by_id(logo_id).await?;
    Ok(Json(logo))
}

pub async fn create<R, S>(
    State(app_logo_usecase): State<Arc<AppLogoUseCase<R, S>>>,
    _admin: AuthAdmin,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    R: AppLogoRepository + Send + Sync + 'static,
    S: LogoFileStore + 'static,
{
    let form = read_logo_form(multipart).await?;

    let model = InsertAppLogoModel {
        name: form
            .name
            .ok_or_else(|| ApiError::Validation("name is required".to_string()))?,
        category: form.category.unwrap_or_default(),
        is_active: form.is_active.unwrap_or(true),
        sort_order: form.sort_order.unwrap_or(0),
    };

    let created = app_logo_usecase.create(model, form.upload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update<R, S>(
    State(app_logo_usecase): State<Arc<AppLogoUseCase<R, S>>>,
    _admin: AuthAdmin,
    Path(logo_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    R: AppLogoRepository + Send + Sync + 'static,
    S: LogoFileStore + 'static,
{
    let form = read_logo_form(multipart).await?;

    let model = EditAppLogoModel {
        name: form.name,
        category: form.category,
        is_active: form.is_active,
        sort_order: form.sort_order,
    };

    let updated = app_logo_usecase.update(logo_id, model, form.upload).await?;
    Ok(Json(updated))
}

pub async fn remove<R, S>(
    State(app_logo_usecase): State<Arc<AppLogoUseCase<R, S>>>,
    _admin: AuthAdmin,
    Path(logo_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    R: AppLogoRepository + Send + Sync + 'static,
    S: LogoFileStore + 'static,
{
    app_logo_usecase.delete(logo_id).await?;
    Ok(Json(
        serde_json::json!({ "message": "App logo deleted successfully" }),
    ))
}

pub async fn bulk_reorder<R, S>(
    State(app_logo_usecase): State<Arc<AppLogoUseCase<R, S>>>,
    _admin: AuthAdmin,
    Json(bulk_sort_order_model): Json<BulkSortOrderModel>,
) -> Result<impl IntoResponse, ApiError>
where
    R: AppLogoRepository + Send + Sync + 'static,
    S: LogoFileStore + 'static,
{
    let report = app_logo_usecase
        .bulk_reorder(bulk_sort_order_model.items)
        .await?;
    Ok(Json(report))
}

#[derive(Default)]
struct LogoForm {
    name: Option<String>,
    category: Option<AppCategory>,
    is_active: Option<bool>,
    sort_order: Option<i32>,
    upload: Option<LogoUpload>,
}

/// Pulls the `logo` file and the text fields out of the multipart form.
/// Malformed parts are client errors, not internal ones.
async fn read_logo_form(mut multipart: Multipart) -> Result<LogoForm, ApiError> {
    let mut form = LogoForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::Validation(format!("malformed multipart request: {err}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "logo" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|err| {
                    ApiError::Validation(format!("failed to read logo upload: {err}"))
                })?;

                form.upload = Some(LogoUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "name" => form.name = Some(read_text(field).await?),
            "category" => {
                let text = read_text(field).await?;
                let category = text
                    .parse::<AppCategory>()
                    .map_err(ApiError::Validation)?;
                form.category = Some(category);
            }
            "isActive" => {
                let text = read_text(field).await?;
                let value = text.parse::<bool>().map_err(|_| {
                    ApiError::Validation("isActive must be true or false".to_string())
                })?;
                form.is_active = Some(value);
            }
            "sortOrder" => {
                let text = read_text(field).await?;
                let value = text.parse::<i32>().map_err(|_| {
                    ApiError::Validation("sortOrder must be an integer".to_string())
                })?;
                form.sort_order = Some(value);
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|err| ApiError::Validation(format!("malformed multipart field: {err}")))
}
