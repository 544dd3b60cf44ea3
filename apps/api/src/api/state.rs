use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{
    CategoryRepository, NewsLetterRepository, ProductRepository, ProfileRepository,
    UserRepository,
};
use crate::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresNewsLetterRepository, PostgresProductRepository,
    PostgresProfileRepository, PostgresUserRepository,
};
use crate::services::{CategoryService, NewsLetterService, ProductService, ProfileService};

/// Shared handler state: repository handles plus the token secret
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub news_letters: Arc<dyn NewsLetterRepository>,
    pub users: Arc<dyn UserRepository>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, jwt_secret: &str) -> Self {
        Self {
            categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
            products: Arc::new(PostgresProductRepository::new(pool.clone())),
            profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
            news_letters: Arc::new(PostgresNewsLetterRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool)),
            jwt_secret: Arc::from(jwt_secret),
        }
    }

    pub fn category_service(&self) -> CategoryService {
        CategoryService::new(self.categories.clone())
    }

    pub fn product_service(&self) -> ProductService {
        ProductService::new(self.products.clone(), self.categories.clone())
    }

    pub fn profile_service(&self) -> ProfileService {
        ProfileService::new(self.profiles.clone())
    }

    pub fn news_letter_service(&self) -> NewsLetterService {
        NewsLetterService::new(self.news_letters.clone())
    }
}
