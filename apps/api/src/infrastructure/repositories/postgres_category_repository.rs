use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::category::{Category, NewCategory};
use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::CategoryRepository;

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    image_hash: Option<String>,
    highlights: bool,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            image_hash: row.image_hash,
            highlights: row.highlights,
        }
    }
}

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, image_hash, highlights
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, image_hash, highlights
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Category::from))
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, image_hash, highlights
            FROM categories
            WHERE LOWER(name) = LOWER($1)
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Category::from))
    }

    async fn create(&self, category: NewCategory) -> RepositoryResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, image_hash, highlights)
            VALUES ($1, $2, $3)
            RETURNING id, name, image_hash, highlights
            "#,
        )
        .bind(&category.name)
        .bind(&category.image_hash)
        .bind(category.highlights)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, category: &Category) -> RepositoryResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories
            SET name = $2, image_hash = $3, highlights = $4
            WHERE id = $1
            RETURNING id, name, image_hash, highlights
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.image_hash)
        .bind(category.highlights)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
