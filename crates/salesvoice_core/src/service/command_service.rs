//! Voice command use-case service.
//!
//! # Responsibility
//! - Run finished transcripts through the interpreter and the query engine.
//! - Attach the user-facing warning for unrecognized commands.
//!
//! # Invariants
//! - Service APIs never mutate the catalog.
//! - `warning` is set if and only if the query kind is `None`.
//! - An unrecognized command yields the reset listing, not an empty list.

use crate::catalog::source::CatalogSource;
use crate::interpreter::parse;
use crate::model::product::Product;
use crate::model::query::NormalizedQuery;
use crate::query::engine::{execute, reset};
use log::info;

/// Feedback the presentation layer should surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandWarning {
    /// The interpreter could not recognize a command.
    Unrecognized,
}

impl CommandWarning {
    pub fn message(self) -> &'static str {
        match self {
            Self::Unrecognized => "Please say a number after 'top'",
        }
    }
}

/// Result of one voice command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub query: NormalizedQuery,
    pub products: Vec<Product>,
    pub warning: Option<CommandWarning>,
}

/// Use-case service over one catalog source.
pub struct CommandService<C: CatalogSource> {
    catalog: C,
}

impl<C: CatalogSource> CommandService<C> {
    /// Creates a service using the provided catalog source.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Interprets `text` and evaluates it against the catalog.
    pub fn run_command(&self, text: &str) -> CommandOutcome {
        let query = parse(text);
        let products = self.run_query(&query);
        let warning = (!query.is_recognized()).then_some(CommandWarning::Unrecognized);

        info!(
            "event=command_run module=service status={} kind={} results={}",
            if warning.is_some() { "unrecognized" } else { "ok" },
            query.kind,
            products.len()
        );

        CommandOutcome {
            query,
            products,
            warning,
        }
    }

    /// Evaluates an already-normalized query.
    pub fn run_query(&self, query: &NormalizedQuery) -> Vec<Product> {
        execute(query, self.catalog.products())
    }

    /// Full catalog, most recent first.
    pub fn reset(&self) -> Vec<Product> {
        reset(self.catalog.products())
    }
}
