use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::dto::NewsLetterDto;

/// Subscribe an email to the newsletter
///
/// POST {prefix}/newsletters
pub async fn create_news_letter(
    State(state): State<AppState>,
    Json(dto): Json<NewsLetterDto>,
) -> Result<(StatusCode, Json<NewsLetterDto>), ApiError> {
    let created = state.news_letter_service().create_news_letter(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Unsubscribe using the code handed out at signup
///
/// DELETE {prefix}/newsletters/:code
pub async fn delete_news_letter(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.news_letter_service().delete_news_letter(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
