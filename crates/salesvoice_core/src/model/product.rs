//! Product sales record.
//!
//! # Responsibility
//! - Define the immutable record that catalogs hold and queries return.
//! - Provide the calendar accessors used by year/month filters.
//!
//! # Invariants
//! - `id` is never nil and is never reused for another product.
//! - `name` is never blank.
//! - Records are not mutated after catalog load.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a catalog product.
pub type ProductId = Uuid;

/// One product sales entry, dated to the day.
///
/// Serialize-only: records enter through `new` or `with_id`, never through a
/// derived deserializer that would skip `validate()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Units sold; never negative.
    pub sales: u64,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Validation failure for a product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    NilId,
    BlankName,
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "product id must not be nil"),
            Self::BlankName => write!(f, "product name must not be blank"),
        }
    }
}

impl Error for ProductValidationError {}

impl Product {
    /// Creates a product with a freshly generated id.
    pub fn new(name: impl Into<String>, sales: u64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sales,
            date,
        }
    }

    /// Creates a product with a caller-provided id.
    ///
    /// Used by catalog loaders where identity is already assigned externally.
    ///
    /// # Errors
    /// - Returns `NilId` for the nil UUID.
    /// - Returns `BlankName` when `name` is empty after trimming.
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        sales: u64,
        date: NaiveDate,
    ) -> Result<Self, ProductValidationError> {
        let product = Self {
            id,
            name: name.into(),
            sales,
            date,
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.id.is_nil() {
            return Err(ProductValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::BlankName);
        }
        Ok(())
    }

    /// Calendar year of `date`.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month of `date`, 1-12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}
