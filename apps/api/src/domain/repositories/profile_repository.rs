use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::profile::{NewProfile, Profile};

/// Repository trait for customer profiles
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Profile>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Profile>>;

    async fn create(&self, profile: NewProfile) -> RepositoryResult<Profile>;

    async fn update(&self, profile: &Profile) -> RepositoryResult<Profile>;

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool>;

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}
