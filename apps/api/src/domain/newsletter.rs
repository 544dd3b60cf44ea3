use chrono::{DateTime, Utc};
use rand::Rng;

use super::value_objects::Email;

/// Length of the unsubscribe code handed out on signup
pub const CODE_LENGTH: usize = 8;

/// Newsletter signup as stored in the `news_letters` table
#[derive(Debug, Clone, PartialEq)]
pub struct NewsLetter {
    pub id: i64,
    pub code: String,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewNewsLetter {
    pub code: String,
    pub email: Email,
}

impl NewNewsLetter {
    /// Creates a signup with a freshly generated code
    pub fn new(email: Email) -> Self {
        Self {
            code: generate_code(),
            email,
        }
    }
}

/// Generates an uppercase base-36 code from the OS-seeded thread RNG
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .filter_map(|_| char::from_digit(rng.gen_range(0..36), 36))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
