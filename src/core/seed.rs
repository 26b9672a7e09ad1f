//! Built-in seed set returned when nothing has been persisted yet.
//!
//! Seed records are defaults, not data: reads return them, but nothing writes
//! them back on its own.

use crate::models::{Category, GoldPrice, Karat, Product};

/// The six showcase products
#[must_use]
pub fn seed_products() -> Vec<Product> {
    let image = |n: u32| format!("https://picsum.photos/id/{n}/600/600");
    vec![
        Product {
            id: "1".to_string(),
            name: "Royal Heritage Set".to_string(),
            category: Category::Set,
            weight: 45.5,
            price_estimate: 4_500_000,
            image_url: image(1),
            description: "21K set in a traditional Bahraini design: necklace, bracelet, \
                          earrings and ring."
                .to_string(),
            karat: Karat::K21,
        },
        Product {
            id: "2".to_string(),
            name: "Sultana Ring".to_string(),
            category: Category::Ring,
            weight: 8.2,
            price_estimate: 850_000,
            image_url: image(2),
            description: "21K ring set with Swiss zircon stones, modern design.".to_string(),
            karat: Karat::K21,
        },
        Product {
            id: "3".to_string(),
            name: "Eternal Love Bracelet".to_string(),
            category: Category::Bracelet,
            weight: 15.5,
            price_estimate: 1_600_000,
            image_url: image(3),
            description: "18K bracelet in a fine Italian design, made for gifting.".to_string(),
            karat: Karat::K18,
        },
        Product {
            id: "4".to_string(),
            name: "Golden Pearl Necklace".to_string(),
            category: Category::Necklace,
            weight: 22.0,
            price_estimate: 2_300_000,
            image_url: image(4),
            description: "21K necklace strung with high quality cultured pearls.".to_string(),
            karat: Karat::K21,
        },
        Product {
            id: "5".to_string(),
            name: "Princess Earrings".to_string(),
            category: Category::Earring,
            weight: 4.5,
            price_estimate: 480_000,
            image_url: image(5),
            description: "Light 21K leaf-design earrings for everyday wear.".to_string(),
            karat: Karat::K21,
        },
        Product {
            id: "6".to_string(),
            name: "Babil Bullion Bar".to_string(),
            category: Category::Set,
            weight: 31.1,
            price_estimate: 3_500_000,
            image_url: image(6),
            description: "One ounce of pure 24K gold for saving and investment.".to_string(),
            karat: Karat::K24,
        },
    ]
}

/// Default price board, one record per karat tier
#[must_use]
pub fn seed_prices() -> Vec<GoldPrice> {
    vec![
        GoldPrice::new(Karat::K24, 34_500, 35_000),
        GoldPrice::new(Karat::K21, 30_200, 30_800),
        GoldPrice::new(Karat::K18, 25_800, 26_500),
    ]
}
