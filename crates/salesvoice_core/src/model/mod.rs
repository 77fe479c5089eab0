//! Domain model shared by the interpreter, the query engine and catalogs.
//!
//! # Responsibility
//! - Define the product record and the normalized query descriptor.
//! - Keep validation of both next to their definitions.
//!
//! # Invariants
//! - Products are immutable once a catalog is loaded.
//! - Every `NormalizedQuery` produced by the interpreter passes `validate()`.

pub mod product;
pub mod query;
