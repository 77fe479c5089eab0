//! Core domain logic for SalesVoice.
//! This crate is the single source of truth for command and query invariants.

pub mod catalog;
pub mod interpreter;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod transcript;

pub use catalog::source::{CatalogError, CatalogResult, CatalogSource, InMemoryCatalog};
pub use interpreter::parse;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::product::{Product, ProductId, ProductValidationError};
pub use model::query::{NormalizedQuery, QueryKind, QueryValidationError};
pub use query::engine::{execute, reset};
pub use service::command_service::{CommandOutcome, CommandService, CommandWarning};
pub use transcript::session::{TranscriptSession, TranscriptUpdate};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
