// Password hashing with bcrypt

use bcrypt::{hash, verify, DEFAULT_COST};

use super::AuthError;

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a password with a fresh salt
///
/// # Example
/// ```
/// use funko_shop_api::auth::password::{hash_password, verify_password};
///
/// let hash = hash_password("funko-admin").unwrap();
/// assert!(verify_password("funko-admin", &hash).unwrap());
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Checks a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    Ok(verify(password, password_hash)?)
}

pub fn is_acceptable(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("correct-horse").unwrap();
        assert!(!verify_password("battery-staple", &hash).unwrap());
    }

    #[test]
    fn salts_differ() {
        let first = hash_password("correct-horse").unwrap();
        let second = hash_password("correct-horse").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("correct-horse", &second).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn length_rule() {
        assert!(!is_acceptable("short"));
        assert!(is_acceptable("eightchr"));
    }
}
