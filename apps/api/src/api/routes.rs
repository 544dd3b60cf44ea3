use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, categories, health, newsletters, products, profiles};
use super::state::AppState;

/// Builds the application router with every resource nested under `prefix`
///
/// An empty prefix mounts the resources at the root.
pub fn create_router(state: AppState, prefix: &str) -> Router {
    let api = Router::new()
        // Auth routes
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        // Category routes
        .route(
            "/categories",
            get(categories::get_all_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/categories/:id/products",
            get(products::get_products_by_category),
        )
        // Product routes
        .route(
            "/products",
            get(products::get_all_products).post(products::create_product),
        )
        .route("/products/search", get(products::search_products))
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        // Profile routes
        .route(
            "/profiles",
            get(profiles::get_all_profiles).post(profiles::create_profile),
        )
        .route(
            "/profiles/:id",
            get(profiles::get_profile_by_id)
                .put(profiles::update_profile)
                .delete(profiles::delete_profile),
        )
        // Newsletter routes
        .route("/newsletters", post(newsletters::create_news_letter))
        .route(
            "/newsletters/:code",
            axum::routing::delete(newsletters::delete_news_letter),
        );

    let router = Router::new().route("/health", get(health::health_check));
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(prefix, api)
    };

    router.with_state(state)
}
