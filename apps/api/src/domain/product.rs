use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Catalogue product as stored in the `products` table
///
/// # Invariants
/// - `price` is never negative
/// - `stock` is never negative
/// - `discount` is a percentage in `0..=100`
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub image_hash: Option<String>,
    pub image_hash2: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub discount: i32,
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Price after applying the percentage discount, rounded to cents
    pub fn discounted_price(&self) -> Decimal {
        discounted_price(self.price, self.discount)
    }
}

/// Applies a percentage discount (clamped to `0..=100`) and rounds to cents
///
/// # Example
/// ```
/// use funko_shop_api::domain::product::discounted_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(discounted_price(Decimal::new(2000, 2), 10), Decimal::new(1800, 2));
/// ```
pub fn discounted_price(price: Decimal, discount: i32) -> Decimal {
    let discount = discount.clamp(0, 100);
    let mut discounted = (price * Decimal::from(100 - discount) / Decimal::ONE_HUNDRED).round_dp(2);
    discounted.rescale(2);
    discounted
}

/// Product data before the database has assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub image_hash: Option<String>,
    pub image_hash2: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub discount: i32,
    pub category_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Decimal, discount: i32) -> Product {
        Product {
            id: 1,
            name: "Funko Pop".to_string(),
            image_hash: None,
            image_hash2: None,
            description: None,
            price,
            stock: 1,
            discount,
            category_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn no_discount_keeps_price() {
        assert_eq!(
            product(Decimal::new(1999, 2), 0).discounted_price(),
            Decimal::new(1999, 2)
        );
    }

    #[test]
    fn discount_rounds_to_cents() {
        // 19.99 * 0.85 = 16.9915
        assert_eq!(
            product(Decimal::new(1999, 2), 15).discounted_price(),
            Decimal::new(1699, 2)
        );
    }

    #[test]
    fn full_discount_is_free() {
        assert_eq!(
            product(Decimal::new(1999, 2), 100).discounted_price(),
            Decimal::ZERO
        );
    }

    #[test]
    fn always_two_decimal_places() {
        assert_eq!(discounted_price(Decimal::from(20), 10).to_string(), "18.00");
    }
}
