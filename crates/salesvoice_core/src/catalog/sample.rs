//! Built-in sample catalog.

use crate::model::product::Product;
use chrono::NaiveDate;

/// `(name, sales, year, month, day)` rows of the sample catalog.
const SAMPLE_ROWS: &[(&str, u64, i32, u32, u32)] = &[
    ("Notebook", 100, 2024, 1, 10),
    ("Printer", 150, 2024, 1, 22),
    ("Desk Chair", 80, 2024, 3, 5),
    ("Monitor", 200, 2024, 3, 18),
    ("Paper Ream", 120, 2024, 5, 7),
    ("Notebook", 140, 2025, 1, 5),
    ("Printer", 170, 2025, 1, 18),
    ("Monitor", 230, 2025, 3, 25),
    ("Desk Chair", 205, 2025, 11, 6),
];

/// Sample products in catalog order, each with a fresh id.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|&(name, sales, year, month, day)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| Product::new(name, sales, date))
        })
        .collect()
}
