//! Built-in shop inventory.

use super::{Catalog, Product};
use crate::money::Currency;

const CDN: &str = "https://cdn.poehali.dev/projects/7aa48dc2-68d0-4c00-938a-204ccc29b50f/files";
const COVER_A: &str = "d3f115a8-3207-43ca-b517-53225ada7fac.jpg";
const COVER_B: &str = "0093e76e-6ce8-4257-9624-13c42e7dee46.jpg";
const COVER_C: &str = "f069c98d-cf06-404d-9775-53bd9a78be88.jpg";

fn record(
    id: u32,
    title: &str,
    artist: &str,
    price: i64,
    cover: &str,
    year: u16,
    genre: &str,
) -> Product {
    Product::new(id, title, artist, price)
        .with_image(format!("{}/{}", CDN, cover))
        .with_year(year)
        .with_genre(genre)
}

impl Catalog {
    /// The six records the shop sells, priced in roubles.
    pub fn vinyl_shop() -> Self {
        Self {
            currency: Currency::RUB,
            products: vec![
                record(1, "Midnight Sessions", "The Velvet Sound", 2499, COVER_A, 2023, "Jazz"),
                record(2, "Urban Echoes", "Downtown Collective", 2199, COVER_B, 2022, "Electronic"),
                record(3, "Solitude", "Marina Waves", 2799, COVER_C, 2024, "Ambient"),
                record(4, "Retrograde", "Sonic Archive", 1899, COVER_A, 2021, "Rock"),
                record(5, "Neon Dreams", "Synthwave Collective", 2599, COVER_B, 2023, "Electronic"),
                record(6, "Classical Moments", "Orchestra Prima", 3199, COVER_C, 2022, "Classical"),
            ],
        }
    }
}
