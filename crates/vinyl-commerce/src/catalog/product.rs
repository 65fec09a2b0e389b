//! Catalog record type.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A vinyl record in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Product {
    /// Stable record identifier.
    pub id: ProductId,
    /// Album title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Unit price in whole currency units.
    pub price: i64,
    /// Cover image reference (URL or asset path).
    #[serde(rename = "image", alias = "image_ref")]
    pub image_ref: String,
    /// Release year.
    pub year: u16,
    /// Genre label (e.g., "Jazz").
    pub genre: String,
}

impl Product {
    /// Create a record with no cover image.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
            image_ref: String::new(),
            year: 0,
            genre: String::new(),
        }
    }

    /// Set the cover image.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Set the release year.
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    /// Set the genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Unit price in the given currency.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Case-insensitive substring match against title, artist or genre.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.title, &self.artist, &self.genre]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new(1, "Midnight Sessions", "The Velvet Sound", 2499)
            .with_year(2023)
            .with_genre("Jazz");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.year, 2023);
        assert_eq!(product.unit_price(Currency::RUB).amount, 2499);
    }

    #[test]
    fn test_matches_any_field() {
        let product = Product::new(2, "Urban Echoes", "Downtown Collective", 2199)
            .with_genre("Electronic");
        assert!(product.matches_lowercase("urban"));
        assert!(product.matches_lowercase("collective"));
        assert!(product.matches_lowercase("electro"));
        assert!(!product.matches_lowercase("jazz"));
    }

    #[test]
    fn test_image_field_name() {
        let product = Product::new(3, "Solitude", "Marina Waves", 2799).with_image("cover.jpg");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["image"], "cover.jpg");
    }
}
