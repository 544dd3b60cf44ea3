use chrono::{DateTime, Utc};

use super::value_objects::Email;

/// Account allowed to manage the catalogue
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: Email,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: String,
}
