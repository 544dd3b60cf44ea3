use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object shared by users, profiles and newsletter signups
///
/// # Invariants
/// - Surrounding whitespace is stripped
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Must fit the 255-character email columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use funko_shop_api::domain::value_objects::Email;
    ///
    /// let email = Email::new(" fan@funko.com ").expect("valid email");
    /// assert_eq!(email.as_str(), "fan@funko.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into().trim().to_string();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    /// Longest email any table can store
    pub const MAX_LENGTH: usize = 255;

    fn is_valid(email: &str) -> bool {
        email.contains('@') && email.len() >= 3 && email.chars().count() <= Self::MAX_LENGTH
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
