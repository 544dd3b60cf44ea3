use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::errors::RepositoryResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::product::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;

const PRODUCT_COLUMNS: &str = "id, name, image_hash, image_hash2, description, price, stock, discount, category_id, created_at";

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    image_hash: Option<String>,
    image_hash2: Option<String>,
    description: Option<String>,
    price: Decimal,
    stock: i32,
    discount: i32,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            image_hash: row.image_hash,
            image_hash2: row.image_hash2,
            description: row.description,
            price: row.price,
            stock: row.stock,
            discount: row.discount,
            category_id: row.category_id,
            created_at: row.created_at,
        }
    }
}

/// Escapes `%`, `_` and `\` so a keyword matches literally inside ILIKE
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn limit_offset(page: PageRequest) -> (i64, i64) {
    (
        i64::from(page.size()),
        i64::try_from(page.offset()).unwrap_or(i64::MAX),
    )
}

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self, page: PageRequest) -> RepositoryResult<Page<Product>> {
        let (limit, offset) = limit_offset(page);

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(
            rows.into_iter().map(Product::from).collect(),
            page,
            total.max(0) as u64,
        ))
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> RepositoryResult<Page<Product>> {
        let (limit, offset) = limit_offset(page);
        let pattern = format!("%{}%", escape_like(keyword));

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE name ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE name ILIKE $1 ORDER BY id LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(
            rows.into_iter().map(Product::from).collect(),
            page,
            total.max(0) as u64,
        ))
    }

    async fn find_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> RepositoryResult<Page<Product>> {
        let (limit, offset) = limit_offset(page);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 ORDER BY id LIMIT $2 OFFSET $3"
        ))
        .bind(category_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(
            rows.into_iter().map(Product::from).collect(),
            page,
            total.max(0) as u64,
        ))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn create(&self, product: NewProduct) -> RepositoryResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (
                name, image_hash, image_hash2, description,
                price, stock, discount, category_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&product.name)
        .bind(&product.image_hash)
        .bind(&product.image_hash2)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.discount)
        .bind(product.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, product: &Product) -> RepositoryResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products SET
                name = $2,
                image_hash = $3,
                image_hash2 = $4,
                description = $5,
                price = $6,
                stock = $7,
                discount = $8,
                category_id = $9
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.image_hash)
        .bind(&product.image_hash2)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.discount)
        .bind(product.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
