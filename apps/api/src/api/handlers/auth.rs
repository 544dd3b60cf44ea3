use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::{self, hash_password, verify_password};
use crate::domain::errors::RepositoryError;
use crate::domain::user::NewUser;
use crate::domain::value_objects::Email;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub message: String,
}

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
}

/// Register a catalogue manager
///
/// POST {prefix}/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let email = Email::new(&req.email)
        .map_err(|e| ApiError::bad_request(format!("Invalid email: {}", e)))?;

    if !password::is_acceptable(&req.password) {
        return Err(ApiError::bad_request(format!(
            "Password must be at least {} characters",
            password::MIN_PASSWORD_LENGTH
        )));
    }

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!(error = %e, "Failed to hash password");
        ApiError::internal_server_error("Failed to create user")
    })?;

    let user = state
        .users
        .create(NewUser {
            email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            RepositoryError::UniqueViolation(_) => ApiError::bad_request("Email already registered"),
            other => {
                tracing::error!(error = %other, "Failed to create user");
                ApiError::internal_server_error("Failed to create user")
            }
        })?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user.id,
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Login with email and password
///
/// POST {prefix}/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = Email::new(&req.email)
        .map_err(|e| ApiError::bad_request(format!("Invalid email: {}", e)))?;

    let user = state
        .users
        .find_by_email(&email)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to load user for login");
            ApiError::internal_server_error("Internal server error")
        })?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        tracing::error!(user_id = user.id, error = %e, "Password verification failed");
        ApiError::internal_server_error("Internal server error")
    })?;

    if !valid {
        tracing::warn!(user_id = user.id, "Rejected login with wrong password");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = create_token(user.id, user.email.as_str(), &state.jwt_secret).map_err(|e| {
        tracing::error!(user_id = user.id, error = %e, "Failed to create token");
        ApiError::internal_server_error("Failed to create token")
    })?;

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
    }))
}
