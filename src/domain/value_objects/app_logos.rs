use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::app_logos::AppLogoEntity;
use crate::domain::value_objects::enums::app_categories::AppCategory;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppLogoDto {
    pub id: Uuid,
    pub name: String,
    pub logo_path: String,
    pub category: AppCategory,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AppLogoEntity> for AppLogoDto {
    fn from(entity: AppLogoEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo_path: entity.logo_path,
            // Column values are written from the typed enum; fall back
            // rather than fail a read on a hand-edited row.
            category: entity.category.parse().unwrap_or_default(),
            is_active: entity.is_active,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parsed text fields of the multipart create form.
#[derive(Debug, Clone)]
pub struct InsertAppLogoModel {
    pub name: String,
    pub category: AppCategory,
    pub is_active: bool,
    pub sort_order: i32,
}

impl InsertAppLogoModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditAppLogoModel {
    pub name: Option<String>,
    pub category: Option<AppCategory>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl EditAppLogoModel {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
        }
        Ok(())
    }
}

/// A logo file received through the multipart form, held in memory until the
/// record write settles.
#[derive(Debug, Clone)]
pub struct LogoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AppLogoListFilter {
    pub category: Option<AppCategory>,
}
