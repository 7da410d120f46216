// fixtures/catalog.rs
//
// Sample catalog data. The payload mirrors a real `GET /products` response
// (an object wrapping a `products` array); the builders produce records
// with neutral defaults.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::web_app::model::{Product, ProductId, Review};

/// A three-product `GET /products` response
pub const PRODUCTS_PAYLOAD: &str = r#"{
    "products": [
        {
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "Popular mascara known for its volumizing and lengthening effects.",
            "category": "beauty",
            "price": 9.99,
            "rating": 4.94,
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "images": [
                "https://cdn.example.com/products/1/1.png",
                "https://cdn.example.com/products/1/2.png"
            ],
            "reviews": [
                {
                    "rating": 2,
                    "comment": "Very unhappy with my purchase!",
                    "date": "2024-05-23T08:56:21.618Z",
                    "reviewerName": "John Doe"
                },
                {
                    "rating": 5,
                    "comment": "Very satisfied!",
                    "date": "2024-05-23T08:56:21.618Z",
                    "reviewerName": "Nolan Gonzalez"
                }
            ]
        },
        {
            "id": 6,
            "title": "Calvin Klein CK One",
            "description": "A classic unisex fragrance.",
            "category": "fragrances",
            "price": 49.99,
            "rating": 4.37,
            "stock": 0,
            "tags": ["fragrances", "perfumes"],
            "images": ["https://cdn.example.com/products/6/1.png"],
            "reviews": []
        },
        {
            "id": 11,
            "title": "Annibale Colombo Bed",
            "category": "furniture",
            "price": 1899.99,
            "rating": 4.14,
            "stock": 47
        }
    ],
    "total": 3,
    "skip": 0,
    "limit": 20
}"#;

/// Product with the given id, title and price in cents; in stock, no
/// images, reviews or tags.
pub fn product(id: ProductId, title: &str, price_cents: i64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: String::new(),
        category: "misc".to_string(),
        price: Decimal::new(price_cents, 2),
        rating: 0.0,
        images: Vec::new(),
        stock: 1,
        tags: Vec::new(),
        reviews: Vec::new(),
    }
}

/// `count` products with ids starting at `first_id` and ascending prices
pub fn page_of(first_id: ProductId, count: usize) -> Vec<Product> {
    (0..count as u64)
        .map(|i| {
            let id = first_id + i;
            product(id, &format!("Product {}", id), 100 * (id as i64 + 1))
        })
        .collect()
}

/// Review by `name` with `rating`, dated `day` days after 2024-01-01
pub fn review(name: &str, rating: f64, day: i64) -> Review {
    let base: DateTime<Utc> = Utc
        .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_default();
    Review {
        reviewer_name: name.to_string(),
        date: Some(base + chrono::Duration::days(day)),
        rating,
        comment: format!("{} says {}", name, rating),
    }
}
