//! Filter/sort/limit evaluation of a `NormalizedQuery` over a catalog.
//!
//! # Invariants
//! - Year and month filters combine with AND.
//! - All sorts are stable: equal keys keep catalog order.
//! - Ranked results hold `min(count, matching)` products.
//! - Evaluation never fails and never mutates the catalog.

use crate::model::product::Product;
use crate::model::query::{NormalizedQuery, QueryKind};
use std::cmp::Reverse;

/// Applies `query` to `catalog` and returns a fresh, ordered result list.
pub fn execute(query: &NormalizedQuery, catalog: &[Product]) -> Vec<Product> {
    let mut products = catalog
        .iter()
        .filter(|product| query.year.map_or(true, |year| product.year() == year))
        .filter(|product| query.month.map_or(true, |month| product.month() == month))
        .cloned()
        .collect::<Vec<_>>();

    match query.kind {
        QueryKind::Top => {
            products.sort_by_key(|product| Reverse(product.sales));
            truncate_to_count(&mut products, query.count);
        }
        QueryKind::Bottom => {
            products.sort_by_key(|product| product.sales);
            truncate_to_count(&mut products, query.count);
        }
        QueryKind::All | QueryKind::None => sort_most_recent_first(&mut products),
    }

    products
}

/// Unfiltered listing, most recent first.
pub fn reset(catalog: &[Product]) -> Vec<Product> {
    execute(&NormalizedQuery::none(), catalog)
}

fn sort_most_recent_first(products: &mut [Product]) {
    products.sort_by_key(|product| Reverse(product.date));
}

fn truncate_to_count(products: &mut Vec<Product>, count: Option<u32>) {
    // A ranked query always carries a count; treat a missing one as zero.
    let limit = count.map_or(0, |count| count as usize);
    products.truncate(limit);
}
