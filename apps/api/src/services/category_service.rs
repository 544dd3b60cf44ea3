use std::sync::Arc;

use crate::domain::errors::{RepositoryError, ServiceError, ServiceResult};
use crate::domain::repositories::CategoryRepository;
use crate::dto::CategoryDto;

/// Category catalogue management
#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// Lists every category ordered by name
    pub async fn get_all_categories(&self) -> ServiceResult<Vec<CategoryDto>> {
        let categories = self.categories.find_all().await?;
        Ok(categories.iter().map(CategoryDto::from).collect())
    }

    /// Looks up a single category
    pub async fn get_category_by_id(&self, id: i64) -> ServiceResult<CategoryDto> {
        self.categories
            .find_by_id(id)
            .await?
            .as_ref()
            .map(CategoryDto::from)
            .ok_or(ServiceError::CategoryNotFound(id))
    }

    /// Creates a category; names are unique ignoring case
    pub async fn create_category(&self, dto: &CategoryDto) -> ServiceResult<CategoryDto> {
        dto.validate()?;

        let new_category = dto.to_new_category();
        if self
            .categories
            .find_by_name(&new_category.name)
            .await?
            .is_some()
        {
            return Err(ServiceError::CategoryNameInUse(new_category.name));
        }

        let name = new_category.name.clone();
        let category = self
            .categories
            .create(new_category)
            .await
            .map_err(|e| name_conflict(e, name))?;
        tracing::info!(category_id = category.id, name = %category.name, "Category created");

        Ok(CategoryDto::from(&category))
    }

    /// Overwrites a category's name, image and highlight flag
    pub async fn update_category(&self, id: i64, dto: &CategoryDto) -> ServiceResult<CategoryDto> {
        dto.validate()?;

        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::CategoryNotFound(id))?;

        let changes = dto.to_new_category();
        if let Some(existing) = self.categories.find_by_name(&changes.name).await? {
            if existing.id != id {
                return Err(ServiceError::CategoryNameInUse(changes.name));
            }
        }

        category.name = changes.name;
        category.image_hash = changes.image_hash;
        category.highlights = changes.highlights;

        let updated = self
            .categories
            .update(&category)
            .await
            .map_err(|e| name_conflict(e, category.name.clone()))?;
        Ok(CategoryDto::from(&updated))
    }

    /// Deletes a category; its products stay in the catalogue uncategorised
    pub async fn delete_category(&self, id: i64) -> ServiceResult<()> {
        if !self.categories.exists_by_id(id).await? {
            return Err(ServiceError::CategoryNotFound(id));
        }

        self.categories.delete_by_id(id).await?;
        tracing::info!(category_id = id, "Category deleted");

        Ok(())
    }
}

// A concurrent insert can win the race past the name check; the unique index
// catches it and it still reads as a taken name.
fn name_conflict(error: RepositoryError, name: String) -> ServiceError {
    match error {
        RepositoryError::UniqueViolation(_) => ServiceError::CategoryNameInUse(name),
        other => ServiceError::Repository(other),
    }
}
