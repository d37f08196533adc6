use std::collections::HashSet;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::ott_plans::OttPlanEntity;
use crate::domain::value_objects::enums::price_durations::PriceDuration;

/// Embedded app reference carried by an OTT plan. A copy of the name and
/// logo path, not a reference into the app_logos collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OttApp {
    pub name: String,
    pub logo_path: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceVariant {
    pub duration: PriceDuration,
    pub price: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeedVariant {
    pub speed: String,
    pub prices: Vec<PriceVariant>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OttPlanDto {
    pub id: Uuid,
    pub name: String,
    pub variants: Vec<SpeedVariant>,
    pub premium_apps: Vec<OttApp>,
    pub non_premium_apps: Vec<OttApp>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<OttPlanEntity> for OttPlanDto {
    type Error = anyhow::Error;

    fn try_from(entity: OttPlanEntity) -> Result<Self, Self::Error> {
        let variants = serde_json::from_value(entity.variants)
            .context("ott plan variants column is malformed")?;
        let premium_apps = serde_json::from_value(entity.premium_apps)
            .context("ott plan premium apps column is malformed")?;
        let non_premium_apps = serde_json::from_value(entity.non_premium_apps)
            .context("ott plan non-premium apps column is malformed")?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            variants,
            premium_apps,
            non_premium_apps,
            is_active: entity.is_active,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOttPlanModel {
    pub name: String,
    #[serde(default)]
    pub variants: Vec<SpeedVariant>,
    #[serde(default)]
    pub premium_apps: Vec<OttApp>,
    #[serde(default)]
    pub non_premium_apps: Vec<OttApp>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_is_active() -> bool {
    true
}

impl InsertOttPlanModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        validate_variants(&self.variants)?;
        validate_apps(&self.premium_apps)?;
        validate_apps(&self.non_premium_apps)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOttPlanModel {
    pub name: Option<String>,
    pub variants: Option<Vec<SpeedVariant>>,
    pub premium_apps: Option<Vec<OttApp>>,
    pub non_premium_apps: Option<Vec<OttApp>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl EditOttPlanModel {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
        }
        if let Some(variants) = &self.variants {
            validate_variants(variants)?;
        }
        if let Some(apps) = &self.premium_apps {
            validate_apps(apps)?;
        }
        if let Some(apps) = &self.non_premium_apps {
            validate_apps(apps)?;
        }
        Ok(())
    }
}

fn validate_variants(variants: &[SpeedVariant]) -> Result<(), String> {
    for variant in variants {
        if variant.speed.trim().is_empty() {
            return Err("variant speed tag must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for price in &variant.prices {
            if price.price < 0 {
                return Err(format!(
                    "variant '{}' has a negative price for {}",
                    variant.speed, price.duration
                ));
            }
            if !seen.insert(price.duration) {
                return Err(format!(
                    "variant '{}' has more than one price for {}",
                    variant.speed, price.duration
                ));
            }
        }
    }
    Ok(())
}

fn validate_apps(apps: &[OttApp]) -> Result<(), String> {
    for app in apps {
        if app.name.trim().is_empty() {
            return Err("app name must not be empty".to_string());
        }
        if app.logo_path.trim().is_empty() {
            return Err(format!("app '{}' is missing a logo path", app.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_model() -> InsertOttPlanModel {
        InsertOttPlanModel {
            name: "Entertainment Pack".to_string(),
            variants: vec![SpeedVariant {
                speed: "40".to_string(),
                prices: vec![
                    PriceVariant {
                        duration: PriceDuration::OneMonth,
                        price: 499,
                    },
                    PriceVariant {
                        duration: PriceDuration::OneYear,
                        price: 4999,
                    },
                ],
            }],
            premium_apps: vec![OttApp {
                name: "Netflix".to_string(),
                logo_path: "/assets/images/ott-partners/netflix.png".to_string(),
            }],
            non_premium_apps: vec![],
            is_active: true,
            sort_order: 1,
        }
    }

    #[test]
    fn insert_model_accepts_valid_payload() {
        assert!(valid_model().validate().is_ok());
    }

    #[test]
    fn insert_model_rejects_duplicate_duration_within_variant() {
        let mut model = valid_model();
        model.variants[0].prices.push(PriceVariant {
            duration: PriceDuration::OneMonth,
            price: 599,
        });
        let message = model.validate().unwrap_err();
        assert!(message.contains("more than one price"), "{message}");
    }

    #[test]
    fn insert_model_rejects_negative_price() {
        let mut model = valid_model();
        model.variants[0].prices[0].price = -1;
        assert!(model.validate().is_err());
    }

    #[test]
    fn insert_model_rejects_app_without_logo_path() {
        let mut model = valid_model();
        model.premium_apps[0].logo_path = String::new();
        assert!(model.validate().is_err());
    }

    #[test]
    fn duration_tags_use_compact_wire_names() {
        let variant: PriceVariant =
            serde_json::from_str(r#"{"duration":"6M","price":1200}"#).unwrap();
        assert_eq!(variant.duration, PriceDuration::SixMonths);
        assert_eq!(
            serde_json::to_string(&variant.duration).unwrap(),
            "\"6M\""
        );
    }
}
