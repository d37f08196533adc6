use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::ott_plans;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = ott_plans)]
pub struct OttPlanEntity {
    pub id: Uuid,
    pub name: String,
    /// Speed variants with their duration/price pairs, stored as jsonb.
    pub variants: serde_json::Value,
    /// Embedded app name/logo copies, not references into app_logos.
    pub premium_apps: serde_json::Value,
    pub non_premium_apps: serde_json::Value,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ott_plans)]
pub struct InsertOttPlanEntity {
    pub id: Uuid,
    pub name: String,
    pub variants: serde_json::Value,
    pub premium_apps: serde_json::Value,
    pub non_premium_apps: serde_json::Value,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = ott_plans)]
pub struct EditOttPlanEntity {
    pub name: Option<String>,
    pub variants: Option<serde_json::Value>,
    pub premium_apps: Option<serde_json::Value>,
    pub non_premium_apps: Option<serde_json::Value>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}
