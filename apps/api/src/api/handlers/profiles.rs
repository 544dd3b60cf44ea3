use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::dto::ProfileDto;

/// GET {prefix}/profiles
pub async fn get_all_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileDto>>, ApiError> {
    Ok(Json(state.profile_service().get_all_profiles().await?))
}

/// GET {prefix}/profiles/:id
pub async fn get_profile_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProfileDto>, ApiError> {
    Ok(Json(state.profile_service().get_profile_by_id(id).await?))
}

/// Create a profile
///
/// POST {prefix}/profiles
///
/// Answers 200 with the stored profile rather than 201.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(dto): Json<ProfileDto>,
) -> Result<Json<ProfileDto>, ApiError> {
    Ok(Json(state.profile_service().create_profile(&dto).await?))
}

/// PUT {prefix}/profiles/:id
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<ProfileDto>,
) -> Result<Json<ProfileDto>, ApiError> {
    Ok(Json(state.profile_service().update_profile(id, &dto).await?))
}

/// DELETE {prefix}/profiles/:id
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.profile_service().delete_profile(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
