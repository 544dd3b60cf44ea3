use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::product::{NewProduct, Product};

/// Repository trait for catalogue products
///
/// Paged queries return products ordered by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> RepositoryResult<Page<Product>>;

    /// Products whose name contains `keyword`, ignoring case
    async fn find_by_name_containing_ignore_case(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> RepositoryResult<Page<Product>>;

    async fn find_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> RepositoryResult<Page<Product>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;

    async fn create(&self, product: NewProduct) -> RepositoryResult<Product>;

    async fn update(&self, product: &Product) -> RepositoryResult<Product>;

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool>;

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}
