use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::broadband_plans::BroadbandPlanEntity;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BroadbandPlanDto {
    pub id: Uuid,
    pub name: String,
    pub speed: i32,
    pub description: Option<String>,
    pub monthly: i32,
    pub quarterly: i32,
    pub half_yearly: i32,
    pub yearly: i32,
    pub features: Vec<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BroadbandPlanEntity> for BroadbandPlanDto {
    type Error = anyhow::Error;

    fn try_from(entity: BroadbandPlanEntity) -> Result<Self, Self::Error> {
        let features = serde_json::from_value(entity.features)
            .context("broadband plan features column is not a string array")?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            speed: entity.speed,
            description: entity.description,
            monthly: entity.monthly,
            quarterly: entity.quarterly,
            half_yearly: entity.half_yearly,
            yearly: entity.yearly,
            features,
            is_active: entity.is_active,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBroadbandPlanModel {
    pub name: String,
    pub speed: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub monthly: i32,
    #[serde(default)]
    pub quarterly: i32,
    #[serde(default)]
    pub half_yearly: i32,
    #[serde(default)]
    pub yearly: i32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_is_active() -> bool {
    true
}

impl InsertBroadbandPlanModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.speed <= 0 {
            return Err("speed must be positive".to_string());
        }
        validate_prices(&[self.monthly, self.quarterly, self.half_yearly, self.yearly])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBroadbandPlanModel {
    pub name: Option<String>,
    pub speed: Option<i32>,
    pub description: Option<String>,
    pub monthly: Option<i32>,
    pub quarterly: Option<i32>,
    pub half_yearly: Option<i32>,
    pub yearly: Option<i32>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl EditBroadbandPlanModel {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
        }
        if let Some(speed) = self.speed {
            if speed <= 0 {
                return Err("speed must be positive".to_string());
            }
        }
        let prices: Vec<i32> = [self.monthly, self.quarterly, self.half_yearly, self.yearly]
            .into_iter()
            .flatten()
            .collect();
        validate_prices(&prices)
    }
}

fn validate_prices(prices: &[i32]) -> Result<(), String> {
    if prices.iter().any(|price| *price < 0) {
        return Err("prices must be non-negative".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_model() -> InsertBroadbandPlanModel {
        InsertBroadbandPlanModel {
            name: "Starter".to_string(),
            speed: 50,
            description: Some("Perfect for basic internet usage".to_string()),
            monthly: 599,
            quarterly: 1650,
            half_yearly: 3000,
            yearly: 5500,
            features: vec!["50 Mbps Speed".to_string()],
            is_active: true,
            sort_order: 1,
        }
    }

    #[test]
    fn insert_model_accepts_valid_payload() {
        assert!(valid_model().validate().is_ok());
    }

    #[test]
    fn insert_model_rejects_blank_name() {
        let mut model = valid_model();
        model.name = "   ".to_string();
        assert!(model.validate().is_err());
    }

    #[test]
    fn insert_model_rejects_negative_price() {
        let mut model = valid_model();
        model.half_yearly = -1;
        assert_eq!(
            model.validate().unwrap_err(),
            "prices must be non-negative"
        );
    }

    #[test]
    fn edit_model_only_checks_provided_fields() {
        let model = EditBroadbandPlanModel {
            sort_order: Some(5),
            ..Default::default()
        };
        assert!(model.validate().is_ok());

        let model = EditBroadbandPlanModel {
            monthly: Some(-10),
            ..Default::default()
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn insert_model_defaults_match_wire_format() {
        let model: InsertBroadbandPlanModel =
            serde_json::from_str(r#"{"name":"Basic","speed":40,"halfYearly":3000}"#).unwrap();
        assert_eq!(model.half_yearly, 3000);
        assert_eq!(model.monthly, 0);
        assert!(model.is_active);
        assert_eq!(model.sort_order, 0);
        assert!(model.features.is_empty());
    }
}
