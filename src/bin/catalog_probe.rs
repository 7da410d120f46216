// Command-line probe for the catalog API
//
// Usage:
//   catalog_probe [QUERY_STRING]     e.g. "search=phone&price=asc&page=2"
//   catalog_probe product <ID>
//   catalog_probe categories
//
// Drives the same listing session the web UI uses, with configuration
// from the environment (.env supported).

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use swiftcart::web_app::api::{HttpProductSource, ProductSource};
use swiftcart::web_app::config::StorefrontConfig;
use swiftcart::web_app::detail::{load_product_detail, sort_reviews};
use swiftcart::web_app::listing::query_string;
use swiftcart::web_app::listing::session::ListingSession;
use swiftcart::web_app::listing::ListingController;
use swiftcart::web_app::model::{ReviewSortKey, SortDirection};
use swiftcart::web_app::rating::star_breakdown;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    let source = Arc::new(HttpProductSource::new(&config)?);
    println!("Catalog: {}", source.base_url());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("product") => {
            let id = args
                .get(1)
                .context("missing product id")?
                .parse::<u64>()
                .context("product id must be a number")?;
            probe_product(source.as_ref(), id).await
        }
        Some("categories") => {
            let categories = source.list_categories().await?;
            println!("{} categories:", categories.len());
            for category in categories {
                println!("  - {}", category);
            }
            Ok(())
        }
        Some(raw) if args.len() == 1 => probe_listing(source, &config, raw).await,
        None => probe_listing(source, &config, "").await,
        Some(_) => bail!("expected a single query string argument"),
    }
}

async fn probe_listing(
    source: Arc<HttpProductSource>,
    config: &StorefrontConfig,
    raw_query: &str,
) -> Result<()> {
    let query = query_string::from_query_string(raw_query);
    println!("Query: {:?}", query);

    let session = ListingSession::new(ListingController::new(config.listing.clone()), source);
    session.load_query(query).await;

    let result = session.result().await;
    if let Some(message) = &result.error_message {
        println!("✗ {}", message);
        return Ok(());
    }

    for product in &result.products {
        println!(
            "  #{:<4} {:<40} ${:>8.2}  {:.1}★  {}",
            product.id,
            product.title,
            product.price,
            product.rating,
            product.availability()
        );
    }
    println!(
        "✓ {} products, more pages: {}",
        result.products.len(),
        if result.has_more { "yes" } else { "no" }
    );
    println!("URL query: ?{}", session.query_string().await);
    Ok(())
}

async fn probe_product(source: &dyn ProductSource, id: u64) -> Result<()> {
    let detail = match load_product_detail(source, id).await {
        Ok(detail) => detail,
        Err(e) => {
            println!("✗ {}", e);
            return Ok(());
        }
    };

    let product = detail.product();
    let stars = star_breakdown(product.rating);
    println!("{} (#{})", product.title, product.id);
    println!(
        "  ${:.2} | {} | {} full, {} half, {} empty stars",
        product.price,
        detail.availability(),
        stars.full,
        u8::from(stars.half),
        stars.empty
    );
    println!("  {} images, tags: {}", product.images.len(), product.tags.join(", "));

    let reviews = sort_reviews(&product.reviews, ReviewSortKey::Date, SortDirection::Descending);
    println!("  {} reviews (newest first):", reviews.len());
    for review in reviews {
        println!(
            "    {} {} ({:.1}): {}",
            review
                .date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "undated".to_string()),
            review.reviewer_name,
            review.rating,
            review.comment
        );
    }
    Ok(())
}
