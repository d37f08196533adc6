use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::axum_http::error_responses::ApiError;
use crate::config::config_loader;
use crate::domain::value_objects::enums::user_roles::UserRole;

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub role: String,
    pub email: Option<String>,
    pub exp: usize,
}

/// Extracted identity for admin-gated routes. Token issuance lives outside
/// this service; here we only validate the bearer credential and the role.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub admin_id: Uuid,
    pub email: Option<String>,
}

pub fn validate_bearer_token(token: &str) -> Result<AdminClaims, ApiError> {
    let config = config_loader::load().map_err(ApiError::Internal)?;

    let decoding_key = DecodingKey::from_secret(config.auth.jwt_secret.as_bytes());
    let validation = Validation::new(jsonwebtoken::Algorithm::HS256);

    let token_data = decode::<AdminClaims>(token, &decoding_key, &validation)
        .map_err(|_| ApiError::Unauthorized)?;

    Ok(token_data.claims)
}

pub fn admin_from_claims(claims: AdminClaims) -> Result<AuthAdmin, ApiError> {
    if UserRole::from_str(&claims.role) != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }

    let admin_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;

    Ok(AuthAdmin {
        admin_id,
        email: claims.email,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or(ApiError::Unauthorized)?;

        let auth_str = auth_header.to_str().map_err(|_| ApiError::Unauthorized)?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        let claims = validate_bearer_token(token)?;

        admin_from_claims(claims)
    }
}

#[cfg(test)]
mod tests;
