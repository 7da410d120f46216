// web_app/listing/query_string.rs - `ListingQuery` <-> URL query string
//
// The URL is only a serialization target: the controller owns the query
// and writes it out, and reads it back on navigation (back/forward, shared
// links). Parameters: `search`, `category`, `price` (asc|desc), `page`.

use url::form_urlencoded;

use crate::web_app::model::{ListingQuery, PriceOrder};

pub const SEARCH_PARAM: &str = "search";
pub const CATEGORY_PARAM: &str = "category";
pub const PRICE_PARAM: &str = "price";
pub const PAGE_PARAM: &str = "page";

/// Encode a query; parameters at their default value are left out.
pub fn to_query_string(query: &ListingQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in to_pairs(query) {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

/// Non-default parameters of a query, in canonical order
pub fn to_pairs(query: &ListingQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if !query.search_term.is_empty() {
        pairs.push((SEARCH_PARAM, query.search_term.clone()));
    }
    if !query.category.is_empty() {
        pairs.push((CATEGORY_PARAM, query.category.clone()));
    }
    if query.price_order != PriceOrder::None {
        pairs.push((PRICE_PARAM, query.price_order.as_param().to_string()));
    }
    if query.page > 1 {
        pairs.push((PAGE_PARAM, query.page.to_string()));
    }
    pairs
}

/// Decode a query string (with or without the leading `?`).
pub fn from_query_string(raw: &str) -> ListingQuery {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    from_pairs(form_urlencoded::parse(raw.as_bytes()).into_owned())
}

/// Decode from already-split parameters.
///
/// Unknown keys are ignored, a missing or invalid `page` reads as 1 and an
/// unknown `price` as no ordering. On repeated keys the last one wins.
pub fn from_pairs<I, K, V>(pairs: I) -> ListingQuery
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = ListingQuery::default();
    for (key, value) in pairs {
        let value = value.as_ref();
        match key.as_ref() {
            SEARCH_PARAM => query.search_term = value.to_string(),
            CATEGORY_PARAM => query.category = value.to_string(),
            PRICE_PARAM => query.price_order = PriceOrder::from_param(value),
            PAGE_PARAM => query.page = parse_page(value),
            _ => {}
        }
    }
    query
}

fn parse_page(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_empty_string() {
        assert_eq!(to_query_string(&ListingQuery::default()), "");
        assert_eq!(from_query_string(""), ListingQuery::default());
    }

    #[test]
    fn test_full_query_string() {
        let query = ListingQuery {
            search_term: "red lipstick".to_string(),
            category: "beauty".to_string(),
            price_order: PriceOrder::Ascending,
            page: 3,
        };
        assert_eq!(
            to_query_string(&query),
            "search=red+lipstick&category=beauty&price=asc&page=3"
        );
    }

    #[test]
    fn test_leading_question_mark_and_unknown_keys() {
        let query = from_query_string("?page=2&utm_source=mail&price=desc");
        assert_eq!(query.page, 2);
        assert_eq!(query.price_order, PriceOrder::Descending);
        assert_eq!(query.search_term, "");
    }

    #[test]
    fn test_bad_page_reads_as_first() {
        for raw in ["page=0", "page=-3", "page=abc", "page="] {
            assert_eq!(from_query_string(raw).page, 1, "input {}", raw);
        }
    }
}
