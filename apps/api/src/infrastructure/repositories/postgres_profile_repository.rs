use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::profile::{NewProfile, Profile};
use crate::domain::repositories::ProfileRepository;
use crate::domain::value_objects::Email;

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    name: String,
    email: String,
    address: Option<String>,
    city: Option<String>,
    postal_code: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = RepositoryError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let email = Email::new(row.email)
            .map_err(|e| RepositoryError::Corrupt(format!("Invalid email from database: {}", e)))?;

        Ok(Profile {
            id: row.id,
            name: row.name,
            email,
            address: row.address,
            city: row.city,
            postal_code: row.postal_code,
            phone: row.phone,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL implementation of ProfileRepository
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, name, email, address, city, postal_code, phone, created_at
            FROM profiles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Profile::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, name, email, address, city, postal_code, phone, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    async fn create(&self, profile: NewProfile) -> RepositoryResult<Profile> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (name, email, address, city, postal_code, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, address, city, postal_code, phone, created_at
            "#,
        )
        .bind(&profile.name)
        .bind(profile.email.as_str())
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.postal_code)
        .bind(&profile.phone)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn update(&self, profile: &Profile) -> RepositoryResult<Profile> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles
            SET name = $2, email = $3, address = $4, city = $5, postal_code = $6, phone = $7
            WHERE id = $1
            RETURNING id, name, email, address, city, postal_code, phone, created_at
            "#,
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(profile.email.as_str())
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.postal_code)
        .bind(&profile.phone)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM profiles WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
