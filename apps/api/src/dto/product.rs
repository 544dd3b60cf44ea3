use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{optional_max_len, require_max_len, require_text};
use crate::domain::errors::ServiceError;
use crate::domain::product::{NewProduct, Product};

pub const NAME_MAX_LENGTH: usize = 255;
pub const IMAGE_HASH_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default, skip_deserializing)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub image_hash: Option<String>,
    #[serde(default)]
    pub image_hash2: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub discount: i32,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, skip_deserializing)]
    pub discounted_price: Option<Decimal>,
    #[serde(default, skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProductDto {
    /// Checks the field rules enforced before any repository access
    ///
    /// # Validation Rules
    /// - Name must not be blank
    /// - Name and image hashes must fit their columns
    /// - Price and stock must not be negative
    /// - Discount is a percentage between 0 and 100
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_text(&self.name, "name")?;
        require_max_len(self.name.trim(), "name", NAME_MAX_LENGTH)?;
        optional_max_len(self.image_hash.as_deref(), "image_hash", IMAGE_HASH_MAX_LENGTH)?;
        optional_max_len(self.image_hash2.as_deref(), "image_hash2", IMAGE_HASH_MAX_LENGTH)?;
        if self.price < Decimal::ZERO {
            return Err(ServiceError::Validation("price must not be negative".into()));
        }
        if self.stock < 0 {
            return Err(ServiceError::Validation("stock must not be negative".into()));
        }
        if !(0..=100).contains(&self.discount) {
            return Err(ServiceError::Validation(
                "discount must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }

    pub fn to_new_product(&self, category_id: i64) -> NewProduct {
        NewProduct {
            name: self.name.trim().to_string(),
            image_hash: self.image_hash.clone(),
            image_hash2: self.image_hash2.clone(),
            description: self.description.clone(),
            price: self.price,
            stock: self.stock,
            discount: self.discount,
            category_id: Some(category_id),
        }
    }

    /// Copies the editable fields onto an existing product
    ///
    /// The category is only replaced when the DTO names one.
    pub fn apply_to(&self, product: &mut Product) {
        product.name = self.name.trim().to_string();
        product.image_hash = self.image_hash.clone();
        product.image_hash2 = self.image_hash2.clone();
        product.description = self.description.clone();
        product.price = self.price;
        product.stock = self.stock;
        product.discount = self.discount;
        if let Some(category_id) = self.category_id {
            product.category_id = Some(category_id);
        }
    }
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            image_hash: product.image_hash.clone(),
            image_hash2: product.image_hash2.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            discount: product.discount,
            category_id: product.category_id,
            discounted_price: Some(product.discounted_price()),
            created_at: Some(product.created_at),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}
