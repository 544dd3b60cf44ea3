use async_trait::async_trait;

use crate::domain::category::{Category, NewCategory};
use crate::domain::errors::RepositoryResult;

/// Repository trait for product categories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name
    async fn find_all(&self) -> RepositoryResult<Vec<Category>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>>;

    /// Case-insensitive lookup by name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;

    async fn create(&self, category: NewCategory) -> RepositoryResult<Category>;

    async fn update(&self, category: &Category) -> RepositoryResult<Category>;

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool>;

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}
