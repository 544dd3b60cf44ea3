use thiserror::Error;

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error.as_database_error() {
            Some(db_error) if db_error.is_unique_violation() => {
                RepositoryError::UniqueViolation(db_error.message().to_string())
            }
            _ => RepositoryError::Database(error.to_string()),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Outcomes of the service layer that callers must translate for clients
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Product not found with id: {0}")]
    ProductNotFound(i64),

    #[error("Category not found with id: {0}")]
    CategoryNotFound(i64),

    #[error("Profile not found with id: {0}")]
    ProfileNotFound(i64),

    #[error("Newsletter subscription not found with code: {0}")]
    SubscriptionNotFound(String),

    #[error("Email already in use")]
    EmailInUse,

    #[error("Category name already in use: {0}")]
    CategoryNameInUse(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::ProductNotFound(_)
                | ServiceError::CategoryNotFound(_)
                | ServiceError::ProfileNotFound(_)
                | ServiceError::SubscriptionNotFound(_)
        )
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
