use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::AuthAdmin;
use crate::axum_http::error_responses::ApiError;
use crate::domain::{
    repositories::ott_plans::OttPlanRepository,
    value_objects::{
        ott_plans::{EditOttPlanModel, InsertOttPlanModel},
        sort_orders::BulkSortOrderModel,
    },
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::ott_plans::OttPlanPostgres,
};
use crate::usecases::ott_plans::OttPlanUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let ott_plan_repository = OttPlanPostgres::new(Arc::clone(&db_pool));
    let ott_plan_usecase = OttPlanUseCase::new(Arc::new(ott_plan_repository));

    Router::new()
        .route("/", get(list_active).post(create))
        .route("/admin", get(list_all))
        .route("/bulk/sort-order", put(bulk_reorder))
        .route("/:id", get(get_by_id).put(update).delete(remove))
        .with_state(Arc::new(ott_plan_usecase))
}

pub async fn list_active<T>(
    State(ott_plan_usecase): State<Arc<OttPlanUseCase<T>>>,
) -> Result<impl IntoResponse, ApiError>
where
    T: OttPlanRepository + Send + Sync + 'static,
{
    let plans = ott_plan_usecase.list_active().await?;
    Ok(Json(plans))
}

pub async fn list_all<T>(
    State(ott_plan_usecase): State<Arc<OttPlanUseCase<T>>>,
    _admin: AuthAdmin,
) -> Result<impl IntoResponse, ApiError>
where
    T: OttPlanRepository + Send + Sync + 'static,
{
    let plans = ott_plan_usecase.list_all().await?;
    Ok(Json(plans))
}

pub async fn get_by_id<T>(
    State(ott_plan_usecase): State<Arc<OttPlanUseCase<T>>>,
    Path(plan_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    T: OttPlanRepository + Send + Sync + 'static,
{
    let plan = ott_plan_usecase.get_by_id(plan_id).await?;
    Ok(Json(plan))
}

pub async fn create<T>(
    State(ott_plan_usecase): State<Arc<OttPlanUseCase<T>>>,
    _admin: AuthAdmin,
    Json(insert_ott_plan_model): Json<InsertOttPlanModel>,
) -> Result<impl IntoResponse, ApiError>
where
    T: OttPlanRepository + Send + Sync + 'static,
{
    let created = ott_plan_usecase.create(insert_ott_plan_model).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update<T>(
    State(ott_plan_usecase): State<Arc<OttPlanUseCase<T>>>,
    _admin: AuthAdmin,
    Path(plan_id): Path<Uuid>,
    Json(edit_ott_plan_model): Json<EditOttPlanModel>,
) -> Result<impl IntoResponse, ApiError>
where
    T: OttPlanRepository + Send + Sync + 'static,
{
    let updated = ott_plan_usecase.update(plan_id, edit_ott_plan_model).await?;
    Ok(Json(updated))
}

pub async fn remove<T>(
    State(ott_plan_usecase): State<Arc<OttPlanUseCase<T>>>,
    _admin: AuthAdmin,
    Path(plan_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    T: OttPlanRepository + Send + Sync + 'static,
{
    ott_plan_usecase.delete(plan_id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Plan deleted successfully" }),
    ))
}

pub async fn bulk_reorder<T>(
    State(ott_plan_usecase): State<Arc<OttPlanUseCase<T>>>,
    _admin: AuthAdmin,
    Json(bulk_sort_order_model): Json<BulkSortOrderModel>,
) -> Result<impl IntoResponse, ApiError>
where
    T: OttPlanRepository + Send + Sync + 'static,
{
    let report = ott_plan_usecase
        .bulk_reorder(bulk_sort_order_model.items)
        .await?;
    Ok(Json(report))
}
