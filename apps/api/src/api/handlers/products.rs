use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::pagination::{Page, PageRequest};
use crate::dto::ProductDto;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryParam {
    pub category_id: Option<i64>,
}

/// List products page by page
///
/// GET {prefix}/products?page=&size=
pub async fn get_all_products(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<ProductDto>>, ApiError> {
    Ok(Json(state.product_service().get_all_products(page).await?))
}

/// Case-insensitive search on product names
///
/// GET {prefix}/products/search?keyword=&page=&size=
pub async fn search_products(
    State(state): State<AppState>,
    Query(search): Query<SearchParams>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<ProductDto>>, ApiError> {
    let results = state
        .product_service()
        .search_products_by_keyword(&search.keyword, page)
        .await?;

    Ok(Json(results))
}

/// GET {prefix}/categories/:id/products
pub async fn get_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<ProductDto>>, ApiError> {
    let products = state
        .product_service()
        .get_products_by_category(category_id, page)
        .await?;

    Ok(Json(products))
}

/// GET {prefix}/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductDto>, ApiError> {
    Ok(Json(state.product_service().get_product_by_id(id).await?))
}

/// Create a product in a category
///
/// POST {prefix}/products?category_id=
///
/// The category may also be given as `category_id` in the body.
pub async fn create_product(
    State(state): State<AppState>,
    JwtAuth(claims): JwtAuth,
    Query(param): Query<CategoryParam>,
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let category_id = param
        .category_id
        .or(dto.category_id)
        .ok_or_else(|| ApiError::bad_request("category_id is required"))?;

    let created = state
        .product_service()
        .create_product(&dto, category_id)
        .await?;

    tracing::debug!(user_id = claims.sub, product_id = ?created.id, "Product created via API");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT {prefix}/products/:id
pub async fn update_product(
    State(state): State<AppState>,
    JwtAuth(_claims): JwtAuth,
    Path(id): Path<i64>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<ProductDto>, ApiError> {
    Ok(Json(state.product_service().update_product(id, &dto).await?))
}

/// DELETE {prefix}/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    JwtAuth(_claims): JwtAuth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.product_service().delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
