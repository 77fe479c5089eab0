//! Query evaluation over product catalogs.
//!
//! # Responsibility
//! - Apply normalized queries to read-only product slices.
//! - Keep result shaping (filter, order, limit) inside core.

pub mod engine;
