// web_app/pages/product.rs - Product detail page
//
// Loads `/products/:id` through the `get_product` server function and
// renders it with ProductDetailView.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::*;
use crate::web_app::detail::ProductDetail;
use crate::web_app::error::StorefrontError;
use crate::web_app::model::ProductId;
use crate::web_app::server_fns::get_product;

/// Parse the `:id` route segment.
pub fn parse_product_id(raw: Option<&str>) -> Option<ProductId> {
    raw.and_then(|s| s.trim().parse::<ProductId>().ok())
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.with(|p| parse_product_id(p.get_str("id")));

    let product = Resource::new(product_id, |id| async move {
        let Some(id) = id else {
            return Ok(Err(StorefrontError::NotFound { id: 0 }));
        };
        get_product(id).await
    });

    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <a href="/" class="text-sm text-blue-600 hover:underline">"← Back to products"</a>
            <Suspense fallback=move || view! { <Loading message="Loading product..." /> }>
                {move || product.get().map(|result| match result {
                    Ok(Ok(product)) => view! {
                        <div class="bg-white rounded-2xl shadow-sm p-6 mt-4 border border-gray-100">
                            <ProductDetailView detail=ProductDetail::new(product) />
                        </div>
                    }.into_any(),
                    Ok(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Err(e) => {
                        let error = StorefrontError::network(e.to_string());
                        view! { <ErrorDisplay error=error.to_string() /> }.into_any()
                    }
                })}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id(Some("12")), Some(12));
        assert_eq!(parse_product_id(Some("abc")), None);
        assert_eq!(parse_product_id(Some("-1")), None);
        assert_eq!(parse_product_id(None), None);
    }
}
