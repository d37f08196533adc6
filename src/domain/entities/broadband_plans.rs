use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::broadband_plans;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = broadband_plans)]
pub struct BroadbandPlanEntity {
    pub id: Uuid,
    pub name: String,
    pub speed: i32,
    pub description: Option<String>,
    pub monthly: i32,
    pub quarterly: i32,
    pub half_yearly: i32,
    pub yearly: i32,
    /// Feature strings stored as a jsonb array.
    pub features: serde_json::Value,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = broadband_plans)]
pub struct InsertBroadbandPlanEntity {
    pub id: Uuid,
    pub name: String,
    pub speed: i32,
    pub description: Option<String>,
    pub monthly: i32,
    pub quarterly: i32,
    pub half_yearly: i32,
    pub yearly: i32,
    pub features: serde_json::Value,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = broadband_plans)]
pub struct EditBroadbandPlanEntity {
    pub name: Option<String>,
    pub speed: Option<i32>,
    pub description: Option<String>,
    pub monthly: Option<i32>,
    pub quarterly: Option<i32>,
    pub half_yearly: Option<i32>,
    pub yearly: Option<i32>,
    pub features: Option<serde_json::Value>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}
