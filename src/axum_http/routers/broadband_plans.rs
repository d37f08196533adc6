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
    repositories::broadband_plans::BroadbandPlanRepository,
    value_objects::{
        broadband_plans::{EditBroadbandPlanModel, InsertBroadbandPlanModel},
        sort_orders::BulkSortOrderModel,
    },
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::broadband_plans::BroadbandPlanPostgres,
};
use crate::usecases::broadband_plans::BroadbandPlanUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let broadband_plan_repository = BroadbandPlanPostgres::new(Arc::clone(&db_pool));
    let broadband_plan_usecase = BroadbandPlanUseCase::new(Arc::new(broadband_plan_repository));

    Router::new()
        .route("/", get(list_active).post(create))
        .route("/admin", get(list_all))
        .route("/bulk/sort-order", put(bulk_reorder))
        .route("/:id", get(get_by_id).put(update).delete(remove))
        .with_state(Arc::new(broadband_plan_usecase))
}

pub async fn list_active<T>(
    State(broadband_plan_usecase): State<Arc<BroadbandPlanUseCase<T>>>,
) -> Result<impl IntoResponse, ApiError>
where
    T: BroadbandPlanRepository + Send + Sync + 'static,
{
    let plans = broadband_plan_usecase.list_active().await?;
    Ok(Json(plans))
}

pub async fn list_all<T>(
    State(broadband_plan_usecase): State<Arc<BroadbandPlanUseCase<T>>>,
    _admin: AuthAdmin,
) -> Result<impl IntoResponse, ApiError>
where
    T: BroadbandPlanRepository + Send + Sync + 'static,
{
    let plans = broadband_plan_usecase.list_all().await?;
    Ok(Json(plans))
}

pub async fn get_by_id<T>(
    State(broadband_plan_usecase): State<Arc<BroadbandPlanUseCase<T>>>,
    Path(plan_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    T: BroadbandPlanRepository + Send + Sync + 'static,
{
    let plan = broadband_plan_usecase.get_by_id(plan_id).await?;
    Ok(Json(plan))
}

pub async fn create<T>(
    State(broadband_plan_usecase): State<Arc<BroadbandPlanUseCase<T>>>,
    _admin: AuthAdmin,
    Json(insert_broadband_plan_model): Json<InsertBroadbandPlanModel>,
) -> Result<impl IntoResponse, ApiError>
where
    T: BroadbandPlanRepository + Send + Sync + 'static,
{
    let created = broadband_plan_usecase
        .create(insert_broadband_plan_model)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update<T>(
    State(broadband_plan_usecase): State<Arc<BroadbandPlanUseCase<T>>>,
    _admin: AuthAdmin,
    Path(plan_id): Path<Uuid>,
    Json(edit_broadband_plan_model): Json<EditBroadbandPlanModel>,
) -> Result<impl IntoResponse, ApiError>
where
    T: BroadbandPlanRepository + Send + Sync + 'static,
{
    let updated = broadband_plan_usecase
        .update(plan_id, edit_broadband_plan_model)
        .await?;
    Ok(Json(updated))
}

pub async fn remove<T>(
    State(broadband_plan_usecase): State<Arc<BroadbandPlanUseCase<T>>>,
    _admin: AuthAdmin,
    Path(plan_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    T: BroadbandPlanRepository + Send + Sync + 'static,
{
    broadband_plan_usecase.delete(plan_id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Plan deleted successfully" }),
    ))
}

pub async fn bulk_reorder<T>(
    State(broadband_plan_usecase): State<Arc<BroadbandPlanUseCase<T>>>,
    _admin: AuthAdmin,
    Json(bulk_sort_order_model): Json<BulkSortOrderModel>,
) -> Result<impl IntoResponse, ApiError>
where
    T: BroadbandPlanRepository + Send + Sync + 'static,
{
    let report = broadband_plan_usecase
        .bulk_reorder(bulk_sort_order_model.items)
        .await?;
    Ok(Json(report))
}
