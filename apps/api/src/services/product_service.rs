use std::sync::Arc;

use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::dto::ProductDto;

/// Catalogue operations over products and their categories
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Case-insensitive name search; no match yields an empty page
    pub async fn search_products_by_keyword(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> ServiceResult<Page<ProductDto>> {
        let products = self
            .products
            .find_by_name_containing_ignore_case(keyword.trim(), page)
            .await?;

        Ok(products.map(ProductDto::from))
    }

    /// Creates a product inside an existing category
    pub async fn create_product(
        &self,
        dto: &ProductDto,
        category_id: i64,
    ) -> ServiceResult<ProductDto> {
        dto.validate()?;

        let category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or(ServiceError::CategoryNotFound(category_id))?;

        let product = self
            .products
            .create(dto.to_new_product(category.id))
            .await?;

        tracing::info!(
            product_id = product.id,
            category_id = category.id,
            "Product created"
        );

        Ok(ProductDto::from(product))
    }

    pub async fn get_product_by_id(&self, id: i64) -> ServiceResult<ProductDto> {
        self.products
            .find_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or(ServiceError::ProductNotFound(id))
    }

    pub async fn get_all_products(&self, page: PageRequest) -> ServiceResult<Page<ProductDto>> {
        let products = self.products.find_all(page).await?;
        Ok(products.map(ProductDto::from))
    }

    pub async fn get_products_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> ServiceResult<Page<ProductDto>> {
        if !self.categories.exists_by_id(category_id).await? {
            return Err(ServiceError::CategoryNotFound(category_id));
        }

        let products = self.products.find_by_category(category_id, page).await?;
        Ok(products.map(ProductDto::from))
    }

    /// Overwrites the editable fields of an existing product
    pub async fn update_product(&self, id: i64, dto: &ProductDto) -> ServiceResult<ProductDto> {
        dto.validate()?;

        let mut product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::ProductNotFound(id))?;

        if let Some(category_id) = dto.category_id {
            if !self.categories.exists_by_id(category_id).await? {
                return Err(ServiceError::CategoryNotFound(category_id));
            }
        }

        dto.apply_to(&mut product);
        let updated = self.products.update(&product).await?;

        tracing::debug!(product_id = id, "Product updated");

        Ok(ProductDto::from(updated))
    }

    pub async fn delete_product(&self, id: i64) -> ServiceResult<()> {
        if !self.products.exists_by_id(id).await? {
            return Err(ServiceError::ProductNotFound(id));
        }

        self.products.delete_by_id(id).await?;
        tracing::info!(product_id = id, "Product deleted");

        Ok(())
    }
}
