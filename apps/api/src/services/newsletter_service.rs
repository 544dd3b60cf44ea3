use std::sync::Arc;

use crate::domain::errors::{RepositoryError, ServiceError, ServiceResult};
use crate::domain::newsletter::NewNewsLetter;
use crate::domain::repositories::NewsLetterRepository;
use crate::domain::value_objects::Email;
use crate::dto::NewsLetterDto;

/// Newsletter signups and code-based unsubscription
#[derive(Clone)]
pub struct NewsLetterService {
    news_letters: Arc<dyn NewsLetterRepository>,
}

impl NewsLetterService {
    pub fn new(news_letters: Arc<dyn NewsLetterRepository>) -> Self {
        Self { news_letters }
    }

    /// Subscribes an email and hands back its unsubscribe code
    ///
    /// Each email may only be subscribed once.
    pub async fn create_news_letter(&self, dto: &NewsLetterDto) -> ServiceResult<NewsLetterDto> {
        let email = Email::new(&dto.email).map_err(ServiceError::Validation)?;

        if self.news_letters.exists_by_email(&email).await? {
            return Err(ServiceError::EmailInUse);
        }

        // The unique index on email settles concurrent signups for the same address
        let saved = self
            .news_letters
            .create(NewNewsLetter::new(email))
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => ServiceError::EmailInUse,
                other => ServiceError::Repository(other),
            })?;
        tracing::info!(news_letter_id = saved.id, "Newsletter subscription created");

        Ok(NewsLetterDto::from(&saved))
    }

    /// Unsubscribes the signup holding `code`
    pub async fn delete_news_letter(&self, code: &str) -> ServiceResult<()> {
        let news_letter = self
            .news_letters
            .find_by_code(code.trim())
            .await?
            .ok_or_else(|| ServiceError::SubscriptionNotFound(code.to_string()))?;

        self.news_letters.delete_by_id(news_letter.id).await?;
        tracing::info!(news_letter_id = news_letter.id, "Newsletter subscription removed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::newsletter::{NewsLetter, CODE_LENGTH};
    use crate::domain::repositories::newsletter_repository::MockNewsLetterRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn dto(email: &str) -> NewsLetterDto {
        NewsLetterDto {
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_news_letter_generates_code() {
        let mut news_letters = MockNewsLetterRepository::new();
        news_letters
            .expect_exists_by_email()
            .withf(|email| email.as_str() == "fan@funko.com")
            .times(1)
            .returning(|_| Ok(false));
        news_letters
            .expect_create()
            .times(1)
            .returning(|new| {
                Ok(NewsLetter {
                    id: 1,
                    code: new.code,
                    email: new.email,
                    created_at: Utc::now(),
                })
            });

        let result = NewsLetterService::new(Arc::new(news_letters))
            .create_news_letter(&dto("fan@funko.com"))
            .await
            .unwrap();

        let code = result.code.unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
        assert_eq!(code, code.to_uppercase());
        assert_eq!(result.id, Some(1));
        assert_eq!(result.email, "fan@funko.com");
        assert!(result.created_at.is_some());
    }

    #[tokio::test]
    async fn create_news_letter_email_already_in_use() {
        let mut news_letters = MockNewsLetterRepository::new();
        news_letters
            .expect_exists_by_email()
            .returning(|_| Ok(true));
        news_letters.expect_create().never();

        let result = NewsLetterService::new(Arc::new(news_letters))
            .create_news_letter(&dto("fan@funko.com"))
            .await;

        match result {
            Err(error @ ServiceError::EmailInUse) => {
                assert_eq!(error.to_string(), "Email already in use")
            }
            other => panic!("expected EmailInUse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_news_letter_losing_signup_race() {
        let mut news_letters = MockNewsLetterRepository::new();
        news_letters
            .expect_exists_by_email()
            .returning(|_| Ok(false));
        news_letters.expect_create().times(1).returning(|_| {
            Err(RepositoryError::UniqueViolation(
                "news_letters_email_key".into(),
            ))
        });

        let result = NewsLetterService::new(Arc::new(news_letters))
            .create_news_letter(&dto("fan@funko.com"))
            .await;

        assert!(matches!(result, Err(ServiceError::EmailInUse)));
    }

    #[tokio::test]
    async fn create_news_letter_invalid_email() {
        let mut news_letters = MockNewsLetterRepository::new();
        news_letters.expect_exists_by_email().never();

        let result = NewsLetterService::new(Arc::new(news_letters))
            .create_news_letter(&dto("not-an-email"))
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_news_letter_by_code() {
        let mut news_letters = MockNewsLetterRepository::new();
        news_letters
            .expect_find_by_code()
            .withf(|code| code == "AB12CD34")
            .times(1)
            .returning(|code| {
                Ok(Some(NewsLetter {
                    id: 7,
                    code: code.to_string(),
                    email: Email::new("fan@funko.com").unwrap(),
                    created_at: Utc::now(),
                }))
            });
        news_letters
            .expect_delete_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(()));

        assert!(NewsLetterService::new(Arc::new(news_letters))
            .delete_news_letter("AB12CD34")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn delete_news_letter_unknown_code() {
        let mut news_letters = MockNewsLetterRepository::new();
        news_letters.expect_find_by_code().returning(|_| Ok(None));
        news_letters.expect_delete_by_id().never();

        let result = NewsLetterService::new(Arc::new(news_letters))
            .delete_news_letter("ZZZZZZZZ")
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::SubscriptionNotFound(ref code)) if code == "ZZZZZZZZ"
        ));
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_repository_error() {
        let mut news_letters = MockNewsLetterRepository::new();
        news_letters
            .expect_exists_by_email()
            .returning(|_| Err(RepositoryError::Database("timeout".into())));

        let result = NewsLetterService::new(Arc::new(news_letters))
            .create_news_letter(&dto("fan@funko.com"))
            .await;

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
