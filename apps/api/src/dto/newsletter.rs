use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::newsletter::NewsLetter;

/// Signup payload; only `email` is read from requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsLetterDto {
    #[serde(default, skip_deserializing)]
    pub id: Option<i64>,
    #[serde(default, skip_deserializing)]
    pub code: Option<String>,
    pub email: String,
    #[serde(default, skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&NewsLetter> for NewsLetterDto {
    fn from(news_letter: &NewsLetter) -> Self {
        Self {
            id: Some(news_letter.id),
            code: Some(news_letter.code.clone()),
            email: news_letter.email.to_string(),
            created_at: Some(news_letter.created_at),
        }
    }
}
