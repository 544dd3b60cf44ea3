use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::newsletter::{NewNewsLetter, NewsLetter};
use crate::domain::value_objects::Email;

/// Repository trait for newsletter signups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsLetterRepository: Send + Sync {
    async fn exists_by_email(&self, email: &Email) -> RepositoryResult<bool>;

    async fn find_by_code(&self, code: &str) -> RepositoryResult<Option<NewsLetter>>;

    async fn create(&self, news_letter: NewNewsLetter) -> RepositoryResult<NewsLetter>;

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}
