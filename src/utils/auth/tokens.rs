use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub const TOKEN_ISSUER: &str = "flow firmer";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

#[derive(Debug, PartialEq)]
pub enum AuthError {
    TokenRequired,
    InvalidToken,
    MissingSecret,
}

pub fn issue_token(
    user_id: i32,
    secret: &str,
    expiration_days: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        user_id,
        iat: now.timestamp(),
        exp: (now + Duration::days(expiration_days)).timestamp(),
        iss: TOKEN_ISSUER.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validates a token against the configured secret. A missing secret fails
/// closed: no request can authenticate until one is configured.
pub fn authenticate(token: Option<&str>, secret: Option<&str>) -> Result<Claims, AuthError> {
    let secret = secret.ok_or(AuthError::MissingSecret)?;
    let token = token.ok_or(AuthError::TokenRequired)?;
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss"]);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}
