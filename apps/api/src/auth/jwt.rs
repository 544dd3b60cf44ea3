// JWT issuing and verification for catalogue managers

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;

pub const TOKEN_TTL_HOURS: i64 = 8;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: i64,
    pub email: String,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,
    /// Expiry timestamp (seconds since epoch)
    pub exp: i64,
}

/// Issues an HS256 token valid for `TOKEN_TTL_HOURS`
///
/// # Example
/// ```
/// use funko_shop_api::auth::jwt::{create_token, verify_token};
///
/// let token = create_token(42, "admin@funko.com", "secret").unwrap();
/// assert_eq!(verify_token(&token, "secret").unwrap().sub, 42);
/// ```
pub fn create_token(user_id: i64, email: &str, secret: &str) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Verifies signature and expiry and returns the claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}
