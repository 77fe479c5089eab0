//! Catalog source contract and in-memory implementation.
//!
//! # Responsibility
//! - Expose a read-only product slice to services.
//! - Load catalogs from JSON text or files, validating every record.
//!
//! # Invariants
//! - Loaded products pass `Product::validate()`.
//! - Product ids are unique within one catalog.
//! - Catalog order is load order and never changes afterwards.

use crate::catalog::sample::sample_products;
use crate::model::product::{Product, ProductId, ProductValidationError};
use chrono::NaiveDate;
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading error.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Catalog text is not a valid JSON product array.
    Json(serde_json::Error),
    /// Record at `index` violates product invariants.
    Invalid {
        index: usize,
        source: ProductValidationError,
    },
    DuplicateId(ProductId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid catalog JSON: {err}"),
            Self::Invalid { index, source } => {
                write!(f, "invalid catalog record #{index}: {source}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate product id in catalog: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Invalid { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Read-only source of catalog products.
pub trait CatalogSource {
    /// Products in catalog order.
    fn products(&self) -> &[Product];
}

/// Catalog record as written in JSON files; `id` may be omitted.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    sales: u64,
    date: NaiveDate,
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Builds a catalog from already-constructed products.
    ///
    /// # Errors
    /// - `Invalid` when a product fails validation.
    /// - `DuplicateId` when two products share an id.
    pub fn try_new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            product
                .validate()
                .map_err(|source| CatalogError::Invalid { index, source })?;
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            products: sample_products(),
        }
    }

    /// Parses a JSON array of `{id?, name, sales, date}` records.
    ///
    /// Records without `id` receive a fresh one.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        let mut products = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let id = record.id.unwrap_or_else(Uuid::new_v4);
            let product = Product::with_id(id, record.name, record.sales, record.date)
                .map_err(|source| CatalogError::Invalid { index, source })?;
            products.push(product);
        }
        Self::try_new(products)
    }

    /// Reads and parses a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            "event=catalog_load module=catalog status=ok products={}",
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogSource for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

impl<C: CatalogSource + ?Sized> CatalogSource for &C {
    fn products(&self) -> &[Product] {
        (**self).products()
    }
}
