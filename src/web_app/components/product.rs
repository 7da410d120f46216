// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ImageCarousel: wrap-around image viewer on cards
// - ProductCard: grid card linking to the product page
// - ProductGrid: grid layout for one page of products
// - ProductDetailView: full product page body with gallery and reviews

use leptos::prelude::*;

use super::common::{AvailabilityBadge, PriceDisplay, StarRating};
use crate::web_app::carousel::Carousel;
use crate::web_app::detail::ProductDetail;
use crate::web_app::model::{Product, Review, ReviewSortKey, SortDirection};

/// Image carousel with previous/next arrows
///
/// Arrows only appear when there is more than one image.
#[component]
pub fn ImageCarousel(
    images: Vec<String>,
    /// Alt text for the images
    title: String,
) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let images = StoredValue::new(images);

    let current = move || {
        let cursor = carousel.get();
        images.with_value(|imgs| cursor.current(imgs).map(str::to_string))
    };

    view! {
        <div class="relative h-48 bg-gray-100 flex items-center justify-center overflow-hidden">
            {move || match current() {
                Some(src) => view! {
                    <img src=src alt=title.clone() class="h-full w-full object-contain" />
                }.into_any(),
                None => view! { <span class="text-4xl text-gray-300">"📦"</span> }.into_any(),
            }}

            <Show when=move || carousel.get().shows_arrows()>
                <button
                    type="button"
                    class="carousel-arrow left-2"
                    on:click=move |ev| {
                        ev.prevent_default();
                        carousel.update(|c| c.previous());
                    }
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="carousel-arrow right-2"
                    on:click=move |ev| {
                        ev.prevent_default();
                        carousel.update(|c| c.next());
                    }
                >
                    "›"
                </button>
            </Show>
        </div>
    }
}

/// Product card for the listing grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let href = format!("/products/{}", product.id);
    let availability = product.availability();

    view! {
        <div class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                    transition-all duration-300 border border-gray-100 \
                    flex flex-col h-full overflow-hidden">
            <ImageCarousel images=product.images.clone() title=product.title.clone() />

            <a href=href class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-3">
                    <StarRating rating=product.rating />
                    <PriceDisplay price=product.price />
                </div>

                <h3 class="font-bold text-gray-900 mb-2 line-clamp-2 text-lg group-hover:text-blue-600 transition-colors">
                    {product.title.clone()}
                </h3>

                <div class="mt-auto pt-3 border-t border-gray-100">
                    <AvailabilityBadge availability=availability />
                </div>
            </a>
        </div>
    }
}

/// Grid of product cards for one listing page
#[component]
pub fn ProductGrid(products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
            <For
                each=move || products.get()
                key=|p| p.id
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}

fn review_sort_key_from_str(value: &str) -> ReviewSortKey {
    match value {
        "rating" => ReviewSortKey::Rating,
        _ => ReviewSortKey::Date,
    }
}

fn sort_direction_from_str(value: &str) -> SortDirection {
    match value {
        "asc" => SortDirection::Ascending,
        _ => SortDirection::Descending,
    }
}

/// One customer review
#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    view! {
        <li class="py-4 border-b border-gray-100 last:border-0">
            <div class="flex items-center justify-between mb-1">
                <span class="font-semibold text-gray-900">{review.reviewer_name.clone()}</span>
                {review.date.map(|date| view! {
                    <span class="text-xs text-gray-400">{date.format("%Y-%m-%d").to_string()}</span>
                })}
            </div>
            <StarRating rating=review.rating show_value=false />
            <p class="text-gray-600 mt-1">{review.comment.clone()}</p>
        </li>
    }
}

/// Product detail view
///
/// Gallery with thumbnails, title, price, availability, tags, description
/// and the reviews list with its own ordering controls.
#[component]
pub fn ProductDetailView(
    /// The loaded product
    detail: ProductDetail,
) -> impl IntoView {
    let product = detail.product().clone();
    let detail = RwSignal::new(detail);
    let review_key = RwSignal::new(ReviewSortKey::default());
    let review_direction = RwSignal::new(SortDirection::default());

    let reviews = move || {
        detail.with(|d| d.sorted_reviews(review_key.get(), review_direction.get()))
    };

    view! {
        <div class="space-y-8">
            <div class="flex flex-col md:flex-row gap-8">
                // Gallery
                <div class="w-full md:w-1/2 space-y-4">
                    <div class="aspect-square bg-gray-100 rounded-xl flex items-center justify-center overflow-hidden">
                        {move || match detail.with(|d| d.selected_image().map(str::to_string)) {
                            Some(src) => view! {
                                <img src=src class="h-full w-full object-contain" />
                            }.into_any(),
                            None => view! { <span class="text-6xl text-gray-300">"📦"</span> }.into_any(),
                        }}
                    </div>
                    <div class="flex gap-2 flex-wrap">
                        {product.images.iter().cloned().enumerate().map(|(index, src)| view! {
                            <button
                                type="button"
                                class=move || {
                                    if detail.with(|d| d.selected_index() == Some(index)) {
                                        "thumbnail thumbnail-selected"
                                    } else {
                                        "thumbnail"
                                    }
                                }
                                on:click=move |_| {
                                    detail.update(|d| {
                                        d.select_image(index);
                                    });
                                }
                            >
                                <img src=src class="h-16 w-16 object-cover" />
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                // Main info
                <div class="flex-1 space-y-4">
                    <h2 class="text-3xl font-bold text-gray-900 leading-tight">
                        {product.title.clone()}
                    </h2>
                    <div class="flex items-center gap-4">
                        <PriceDisplay price=product.price highlight=true />
                        <AvailabilityBadge availability=product.availability() />
                    </div>
                    <StarRating rating=product.rating />

                    {
                        let tags = product.tags.clone();
                        (!tags.is_empty()).then(|| view! {
                            <div class="flex flex-wrap gap-2 pt-2">
                                {tags.into_iter().map(|tag| view! {
                                    <span class="px-3 py-1 text-xs font-medium bg-gray-100 text-gray-600 rounded-full border border-gray-200">
                                        "#" {tag}
                                    </span>
                                }).collect_view()}
                            </div>
                        })
                    }

                    <p class="text-gray-600 leading-relaxed text-lg">
                        {product.description.clone()}
                    </p>
                </div>
            </div>

            <hr class="border-gray-100" />

            // Reviews
            <section>
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-bold text-gray-900">"Reviews"</h3>
                    <div class="flex gap-2">
                        <select
                            class="text-sm border border-gray-200 rounded-lg px-2 py-1"
                            on:change=move |ev| review_key.set(review_sort_key_from_str(&event_target_value(&ev)))
                        >
                            <option value="date">"Date"</option>
                            <option value="rating">"Rating"</option>
                        </select>
                        <select
                            class="text-sm border border-gray-200 rounded-lg px-2 py-1"
                            on:change=move |ev| review_direction.set(sort_direction_from_str(&event_target_value(&ev)))
                        >
                            <option value="desc">"Descending"</option>
                            <option value="asc">"Ascending"</option>
                        </select>
                    </div>
                </div>

                <Show
                    when=move || !reviews().is_empty()
                    fallback=|| view! { <p class="text-gray-500">"No reviews yet."</p> }
                >
                    <ul>
                        {move || reviews().into_iter().map(|review| view! {
                            <ReviewItem review=review />
                        }).collect_view()}
                    </ul>
                </Show>
            </section>
        </div>
    }
}
