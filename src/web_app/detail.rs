// web_app/detail.rs - Single product view state
//
// Loads one product by id, tracks which of its images is shown large and
// orders its reviews for display.

use std::cmp::Ordering;

use crate::web_app::api::ProductSource;
use crate::web_app::error::StorefrontResult;
use crate::web_app::model::{
    Availability, Product, ProductId, Review, ReviewSortKey, SortDirection,
};

/// A loaded product plus the selected image
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetail {
    product: Product,
    selected_image: Option<usize>,
}

impl ProductDetail {
    /// The first image starts selected.
    pub fn new(product: Product) -> Self {
        let selected_image = (!product.images.is_empty()).then_some(0);
        Self {
            product,
            selected_image,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn into_product(self) -> Product {
        self.product
    }

    pub fn availability(&self) -> Availability {
        self.product.availability()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_image
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image
            .and_then(|i| self.product.images.get(i))
            .map(String::as_str)
    }

    /// Show image `index` large; out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index >= self.product.images.len() {
            tracing::debug!(
                "Ignoring image {} of product {} ({} images)",
                index,
                self.product.id,
                self.product.images.len()
            );
            return false;
        }
        self.selected_image = Some(index);
        true
    }

    pub fn sorted_reviews(&self, key: ReviewSortKey, direction: SortDirection) -> Vec<Review> {
        sort_reviews(&self.product.reviews, key, direction)
    }
}

/// Fetch a product for the detail page.
pub async fn load_product_detail(
    source: &dyn ProductSource,
    id: ProductId,
) -> StorefrontResult<ProductDetail> {
    tracing::info!("Loading product {}", id);
    match source.get_product(id).await {
        Ok(product) => Ok(ProductDetail::new(product)),
        Err(e) => {
            tracing::error!("Failed to load product {}: {} ({})", id, e, e.detail());
            Err(e)
        }
    }
}

/// Stable copy of `reviews` ordered by date or rating.
///
/// Reviews comparing equal keep their original relative order in either
/// direction. Undated reviews go last when sorting by date.
pub fn sort_reviews(reviews: &[Review], key: ReviewSortKey, direction: SortDirection) -> Vec<Review> {
    let directed = |ordering: Ordering| match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    };

    let mut sorted = reviews.to_vec();
    sorted.sort_by(|a, b| match key {
        ReviewSortKey::Date => match (a.date, b.date) {
            (Some(x), Some(y)) => directed(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        ReviewSortKey::Rating => directed(a.rating.total_cmp(&b.rating)),
    });
    sorted
}
