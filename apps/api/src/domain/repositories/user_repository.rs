use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::user::{NewUser, User};
use crate::domain::value_objects::Email;

/// Repository trait for catalogue manager accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; a taken email yields `RepositoryError::UniqueViolation`
    async fn create(&self, user: NewUser) -> RepositoryResult<User>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>>;
}
