use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::newsletter::{NewNewsLetter, NewsLetter};
use crate::domain::repositories::NewsLetterRepository;
use crate::domain::value_objects::Email;

#[derive(Debug, sqlx::FromRow)]
struct NewsLetterRow {
    id: i64,
    code: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<NewsLetterRow> for NewsLetter {
    type Error = RepositoryError;

    fn try_from(row: NewsLetterRow) -> Result<Self, Self::Error> {
        let email = Email::new(row.email)
            .map_err(|e| RepositoryError::Corrupt(format!("Invalid email from database: {}", e)))?;

        Ok(NewsLetter {
            id: row.id,
            code: row.code,
            email,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL implementation of NewsLetterRepository
pub struct PostgresNewsLetterRepository {
    pool: PgPool,
}

impl PostgresNewsLetterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsLetterRepository for PostgresNewsLetterRepository {
    async fn exists_by_email(&self, email: &Email) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM news_letters WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_code(&self, code: &str) -> RepositoryResult<Option<NewsLetter>> {
        let row = sqlx::query_as::<_, NewsLetterRow>(
            r#"
            SELECT id, code, email, created_at
            FROM news_letters
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(NewsLetter::try_from).transpose()
    }

    async fn create(&self, news_letter: NewNewsLetter) -> RepositoryResult<NewsLetter> {
        let row = sqlx::query_as::<_, NewsLetterRow>(
            r#"
            INSERT INTO news_letters (code, email)
            VALUES ($1, $2)
            RETURNING id, code, email, created_at
            "#,
        )
        .bind(&news_letter.code)
        .bind(news_letter.email.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM news_letters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
