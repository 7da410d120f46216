// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the catalog API, the listing state machine
// and the UI components.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog identifier of a product
pub type ProductId = u64;

/// Product as returned by the catalog API
///
/// Only `id`, `title` and `price` are required; everything else falls back
/// to an empty value so a sparse record still renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Whether at least one unit is available
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// "In Stock" / "Out of Stock", derived from the stock count only
    pub fn availability(&self) -> Availability {
        if self.in_stock() {
            Availability::InStock
        } else {
            Availability::OutOfStock
        }
    }

    /// First image, used as card cover and initial detail image
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Customer review attached to a product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub reviewer_name: String,
    /// Missing on some catalog records
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
}

/// Stock availability label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::InStock => write!(f, "In Stock"),
            Availability::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

/// Price ordering requested by the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

impl PriceOrder {
    /// Value used in the URL `price` parameter and the price select
    pub fn as_param(&self) -> &'static str {
        match self {
            PriceOrder::None => "",
            PriceOrder::Ascending => "asc",
            PriceOrder::Descending => "desc",
        }
    }

    /// Parse a `price` parameter; anything unrecognised means no ordering
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "asc" => PriceOrder::Ascending,
            "desc" => PriceOrder::Descending,
            _ => PriceOrder::None,
        }
    }
}

impl std::fmt::Display for PriceOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceOrder::None => write!(f, "Select"),
            PriceOrder::Ascending => write!(f, "Low to High"),
            PriceOrder::Descending => write!(f, "High to Low"),
        }
    }
}

/// Where price ordering is applied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceSortStrategy {
    /// Pass `sortBy=price&order=..` to the catalog API
    #[default]
    Server,
    /// Fetch unordered pages and stable-sort the held page locally
    Client,
}

/// Normalized filter/sort/page parameters driving a listing request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub search_term: String,
    pub category: String,
    pub price_order: PriceOrder,
    /// 1-based page number, never zero
    pub page: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: String::new(),
            price_order: PriceOrder::None,
            page: 1,
        }
    }
}

/// Outcome of the most recent listing fetch
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingResult {
    pub products: Vec<Product>,
    pub has_more: bool,
    pub error_message: Option<String>,
}

/// Review ordering key on the product page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewSortKey {
    #[default]
    Date,
    Rating,
}

/// Sort direction shared by review ordering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 7,
            "title": "Essence Mascara Lash Princess",
            "description": "Volumizing mascara",
            "category": "beauty",
            "price": 9.99,
            "rating": 4.94,
            "images": ["https://cdn.example.com/7/1.png"],
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "reviews": [
                {
                    "rating": 2,
                    "comment": "Very unhappy with my purchase!",
                    "date": "2024-05-23T08:56:21.618Z",
                    "reviewerName": "John Doe"
                }
            ]
        }"#
    }

    #[test]
    fn test_product_deserialization() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.price, Decimal::new(999, 2));
        assert_eq!(product.reviews.len(), 1);
        assert_eq!(product.reviews[0].reviewer_name, "John Doe");
        assert_eq!(product.reviews[0].rating, 2.0);
        assert_eq!(product.cover_image(), Some("https://cdn.example.com/7/1.png"));
    }

    #[test]
    fn test_sparse_product_uses_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "title": "Bare", "price": 3}"#).unwrap();
        assert!(product.images.is_empty());
        assert!(product.tags.is_empty());
        assert!(product.reviews.is_empty());
        assert_eq!(product.stock, 0);
        assert_eq!(product.cover_image(), None);
    }

    #[test]
    fn test_availability_from_stock() {
        let mut product: Product =
            serde_json::from_str(r#"{"id": 1, "title": "Bare", "price": 3}"#).unwrap();
        assert_eq!(product.availability(), Availability::OutOfStock);
        assert_eq!(product.availability().to_string(), "Out of Stock");

        product.stock = 1;
        assert_eq!(product.availability(), Availability::InStock);
        assert_eq!(product.availability().to_string(), "In Stock");
    }

    #[test]
    fn test_listing_query_default() {
        let query = ListingQuery::default();
        assert_eq!(query.search_term, "");
        assert_eq!(query.category, "");
        assert_eq!(query.price_order, PriceOrder::None);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_price_order_params() {
        assert_eq!(PriceOrder::from_param("asc"), PriceOrder::Ascending);
        assert_eq!(PriceOrder::from_param("desc"), PriceOrder::Descending);
        assert_eq!(PriceOrder::from_param(""), PriceOrder::None);
        assert_eq!(PriceOrder::from_param("sideways"), PriceOrder::None);

        for order in [PriceOrder::None, PriceOrder::Ascending, PriceOrder::Descending] {
            assert_eq!(PriceOrder::from_param(order.as_param()), order);
        }
    }

    #[test]
    fn test_price_order_display() {
        assert_eq!(PriceOrder::None.to_string(), "Select");
        assert_eq!(PriceOrder::Ascending.to_string(), "Low to High");
        assert_eq!(PriceOrder::Descending.to_string(), "High to Low");
    }
}
