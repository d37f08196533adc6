use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::env;

const TEST_SECRET: &str = "supersecretjwtsecretforunittesting123";

fn set_env_vars() {
    unsafe {
        env::set_var("SERVER_PORT", "8080");
        env::set_var("SERVER_BODY_LIMIT", "10");
        env::set_var("SERVER_TIMEOUT", "30");
        env::set_var("DATABASE_URL", "postgres://localhost:5432/db");
        env::set_var("JWT_ADMIN_SECRET", TEST_SECRET);
    }
}

fn make_token(claims: &AdminClaims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn admin_claims() -> AdminClaims {
    AdminClaims {
        sub: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        role: "admin".to_string(),
        email: Some("admin@jnetworks.com".to_string()),
        exp: 9999999999, // far future
    }
}

#[test]
fn test_validate_bearer_token_success() {
    set_env_vars();
    let my_claims = admin_claims();

    let token = make_token(&my_claims, TEST_SECRET);

    let claims = validate_bearer_token(&token).expect("Valid token should pass");
    assert_eq!(claims.sub, my_claims.sub);
    assert_eq!(claims.email, my_claims.email);
    assert_eq!(claims.role, "admin");
}

#[test]
fn test_validate_bearer_token_expired() {
    set_env_vars();
    let mut my_claims = admin_claims();
    my_claims.exp = 1; // past

    let token = make_token(&my_claims, TEST_SECRET);

    let result = validate_bearer_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_validate_bearer_token_invalid_signature() {
    set_env_vars();
    let token = make_token(&admin_claims(), "wrongsecret");

    let result = validate_bearer_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_admin_from_claims_accepts_admin_role() {
    let auth = admin_from_claims(admin_claims()).expect("admin role should pass");
    assert_eq!(
        auth.admin_id.to_string(),
        "123e4567-e89b-12d3-a456-426614174000"
    );
}

#[test]
fn test_admin_from_claims_rejects_non_admin_role() {
    let mut claims = admin_claims();
    claims.role = "user".to_string();

    let result = admin_from_claims(claims);
    assert!(matches!(result, Err(ApiError::Forbidden)));
}

#[test]
fn test_admin_from_claims_rejects_malformed_subject() {
    let mut claims = admin_claims();
    claims.sub = "not-a-uuid".to_string();

    let result = admin_from_claims(claims);
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}
