//! Product catalog module.
//!
//! The catalog is fixed for the lifetime of a session. It is either the built-in
//! shop inventory or a list handed over by a catalog provider (a JSON or TOML file).

mod product;
mod seed;

pub use product::Product;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// An ordered, validated list of catalog records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    currency: Currency,
    products: Vec<Product>,
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    currency: Option<String>,
    #[serde(alias = "records")]
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and non-positive prices.
    pub fn new(currency: Currency, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
            if product.price <= 0 {
                return Err(CommerceError::InvalidPrice {
                    id: product.id,
                    amount: product.price,
                });
            }
        }
        Ok(Self { currency, products })
    }

    /// Parse a catalog from JSON.
    ///
    /// Accepts either a bare array of records or an object with `products`
    /// (or `records`) and an optional `currency` code.
    pub fn from_json(content: &str, default_currency: Currency) -> Result<Self, CommerceError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let file = if value.is_array() {
            CatalogFile {
                currency: None,
                products: serde_json::from_value(value)?,
            }
        } else {
            serde_json::from_value(value)?
        };
        Self::from_file(file, default_currency)
    }

    /// Parse a catalog from TOML (`[[products]]` tables).
    pub fn from_toml(content: &str, default_currency: Currency) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_file(file, default_currency)
    }

    fn from_file(file: CatalogFile, default_currency: Currency) -> Result<Self, CommerceError> {
        let currency = match file.currency {
            Some(code) => Currency::from_code(&code).ok_or_else(|| {
                CommerceError::SerializationError(format!("unknown currency code: {}", code))
            })?,
            None => default_currency,
        };
        Self::new(currency, file.products)
    }

    /// Currency the prices are quoted in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Look up a record by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All records in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::vinyl_shop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(
            Currency::RUB,
            vec![
                Product::new(1, "A", "X", 100),
                Product::new(1, "B", "Y", 200),
            ],
        );
        assert_eq!(result, Err(CommerceError::DuplicateProduct(ProductId::new(1))));
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let result = Catalog::new(Currency::RUB, vec![Product::new(7, "Free", "Nobody", 0)]);
        assert!(matches!(result, Err(CommerceError::InvalidPrice { amount: 0, .. })));
    }

    #[test]
    fn test_from_json_array() {
        let json = r#"[
            {"id": 10, "title": "Blue Train", "artist": "John Coltrane", "price": 3100,
             "image": "blue.jpg", "year": 1958, "genre": "Jazz"}
        ]"#;
        let catalog = Catalog::from_json(json, Currency::RUB).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.currency(), Currency::RUB);
        assert_eq!(catalog.get(ProductId::new(10)).unwrap().artist, "John Coltrane");
    }

    #[test]
    fn test_from_json_object_with_currency() {
        let json = r#"{"currency": "EUR", "records": [
            {"id": 1, "title": "Kind of Blue", "artist": "Miles Davis", "price": 30,
             "image": "", "year": 1959, "genre": "Jazz"}
        ]}"#;
        let catalog = Catalog::from_json(json, Currency::RUB).unwrap();
        assert_eq!(catalog.currency(), Currency::EUR);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
currency = "USD"

[[products]]
id = 1
title = "Rumours"
artist = "Fleetwood Mac"
price = 28
image = "rumours.jpg"
year = 1977
genre = "Rock"
"#;
        let catalog = Catalog::from_toml(toml, Currency::RUB).unwrap();
        assert_eq!(catalog.currency(), Currency::USD);
        assert_eq!(catalog.products()[0].title, "Rumours");
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let json = r#"{"currency": "XYZ", "products": []}"#;
        assert!(matches!(
            Catalog::from_json(json, Currency::RUB),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
