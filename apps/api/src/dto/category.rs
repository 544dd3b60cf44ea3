use serde::{Deserialize, Serialize};

use super::{optional_max_len, require_max_len, require_text};
use crate::domain::category::{Category, NewCategory};
use crate::domain::errors::ServiceError;

pub const NAME_MAX_LENGTH: usize = 120;
pub const IMAGE_HASH_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(default, skip_deserializing)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub image_hash: Option<String>,
    #[serde(default)]
    pub highlights: bool,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_text(&self.name, "name")?;
        require_max_len(self.name.trim(), "name", NAME_MAX_LENGTH)?;
        optional_max_len(self.image_hash.as_deref(), "image_hash", IMAGE_HASH_MAX_LENGTH)
    }

    pub fn to_new_category(&self) -> NewCategory {
        NewCategory {
            name: self.name.trim().to_string(),
            image_hash: self.image_hash.clone(),
            highlights: self.highlights,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            image_hash: category.image_hash.clone(),
            highlights: category.highlights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let dto = CategoryDto {
            name: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(dto.validate(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn name_longer_than_column_is_rejected() {
        let mut dto = CategoryDto {
            name: "a".repeat(NAME_MAX_LENGTH),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.name.push('a');
        assert!(matches!(dto.validate(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn oversized_image_hash_is_rejected() {
        let dto = CategoryDto {
            name: "Anime".to_string(),
            image_hash: Some("f".repeat(IMAGE_HASH_MAX_LENGTH + 1)),
            ..Default::default()
        };
        assert!(matches!(dto.validate(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn id_is_not_read_from_input() {
        let dto: CategoryDto = serde_json::from_str(r#"{"id": 9, "name": "Anime"}"#).unwrap();
        assert_eq!(dto.id, None);
        assert!(!dto.highlights);
    }

    #[test]
    fn new_category_trims_name() {
        let dto = CategoryDto {
            name: " Marvel ".to_string(),
            highlights: true,
            ..Default::default()
        };
        let category = dto.to_new_category();
        assert_eq!(category.name, "Marvel");
        assert!(category.highlights);
    }
}
