//! Transfer representations exchanged over HTTP
//!
//! Each DTO is both the request body and the response body of its resource.
//! Server-assigned fields (`id`, `created_at`, ...) are ignored on input.

pub mod category;
pub mod newsletter;
pub mod product;
pub mod profile;

pub use category::CategoryDto;
pub use newsletter::NewsLetterDto;
pub use product::ProductDto;
pub use profile::ProfileDto;

use crate::domain::errors::ServiceError;

/// Rejects empty or whitespace-only required text fields
pub(crate) fn require_text(value: &str, field: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!("{} must not be blank", field)));
    }
    Ok(())
}

/// Rejects text longer than the backing column allows
///
/// Lengths are counted in characters, matching `VARCHAR(n)`.
pub(crate) fn require_max_len(value: &str, field: &str, max: usize) -> Result<(), ServiceError> {
    if value.chars().count() > max {
        return Err(ServiceError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// [`require_max_len`] for optional fields; absent values always pass
pub(crate) fn optional_max_len(
    value: Option<&str>,
    field: &str,
    max: usize,
) -> Result<(), ServiceError> {
    value.map_or(Ok(()), |value| require_max_len(value, field, max))
}
