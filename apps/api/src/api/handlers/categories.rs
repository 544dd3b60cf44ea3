use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::dto::CategoryDto;

/// GET {prefix}/categories
pub async fn get_all_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    Ok(Json(state.category_service().get_all_categories().await?))
}

/// GET {prefix}/categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CategoryDto>, ApiError> {
    Ok(Json(state.category_service().get_category_by_id(id).await?))
}

/// POST {prefix}/categories
pub async fn create_category(
    State(state): State<AppState>,
    JwtAuth(claims): JwtAuth,
    Json(dto): Json<CategoryDto>,
) -> Result<(StatusCode, Json<CategoryDto>), ApiError> {
    let created = state.category_service().create_category(&dto).await?;
    tracing::debug!(user_id = claims.sub, category_id = ?created.id, "Category created via API");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT {prefix}/categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    JwtAuth(_claims): JwtAuth,
    Path(id): Path<i64>,
    Json(dto): Json<CategoryDto>,
) -> Result<Json<CategoryDto>, ApiError> {
    Ok(Json(state.category_service().update_category(id, &dto).await?))
}

/// DELETE {prefix}/categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    JwtAuth(_claims): JwtAuth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.category_service().delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
