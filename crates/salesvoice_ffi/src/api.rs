//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose voice-command and listing calls to the UI layer via FRB.
//! - Flatten core results into string-friendly response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The catalog is resolved once per process and never mutated.

use log::warn;
use salesvoice_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, CommandService,
    InMemoryCatalog, Product, QueryKind,
};
use std::sync::OnceLock;

const CATALOG_PATH_ENV: &str = "SALESVOICE_CATALOG_PATH";
static CATALOG: OnceLock<InMemoryCatalog> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Product row rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductItem {
    /// Stable product ID in string form.
    pub id: String,
    pub name: String,
    pub sales: u64,
    /// Calendar day as `YYYY-MM-DD`.
    pub date: String,
}

/// Response envelope for voice-command and listing calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCommandResponse {
    /// Products in display order.
    pub items: Vec<ProductItem>,
    /// Recognized query kind (`top|bottom|all|none`).
    pub kind: String,
    /// Human-readable status or warning text.
    pub message: String,
    /// Whether the UI should highlight `message` as a warning.
    pub show_warning: bool,
}

/// Interprets one finished transcript and returns matching products.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
/// - Unrecognized commands return the full listing with `show_warning=true`.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_command(text: String) -> VoiceCommandResponse {
    let service = CommandService::new(resolve_catalog());
    let outcome = service.run_command(text.trim());

    let message = match outcome.warning {
        Some(warning) => warning.message().to_string(),
        None => found_message(outcome.products.len()),
    };

    VoiceCommandResponse {
        items: to_items(&outcome.products),
        kind: outcome.query.kind.as_str().to_string(),
        message,
        show_warning: outcome.warning.is_some(),
    }
}

/// Returns the unfiltered listing, most recent first.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_products() -> VoiceCommandResponse {
    let products = CommandService::new(resolve_catalog()).reset();
    VoiceCommandResponse {
        message: found_message(products.len()),
        items: to_items(&products),
        kind: QueryKind::None.as_str().to_string(),
        show_warning: false,
    }
}

fn found_message(count: usize) -> String {
    if count == 0 {
        "No products.".to_string()
    } else {
        format!("Found {count} product(s).")
    }
}

fn resolve_catalog() -> &'static InMemoryCatalog {
    CATALOG.get_or_init(|| {
        let Ok(raw) = std::env::var(CATALOG_PATH_ENV) else {
            return InMemoryCatalog::sample();
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return InMemoryCatalog::sample();
        }
        InMemoryCatalog::load(trimmed).unwrap_or_else(|err| {
            warn!("event=catalog_load module=ffi status=fallback reason={err}");
            InMemoryCatalog::sample()
        })
    })
}

fn to_items(products: &[Product]) -> Vec<ProductItem> {
    products
        .iter()
        .map(|product| ProductItem {
            id: product.id.to_string(),
            name: product.name.clone(),
            sales: product.sales,
            date: product.date.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, reset_products, voice_command};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn voice_command_returns_ranked_items() {
        let response = voice_command("  top two  ".to_string());
        assert_eq!(response.kind, "top");
        assert!(!response.show_warning);
        assert_eq!(response.items.len(), 2);
        assert!(response.items[0].sales >= response.items[1].sales);
        assert_eq!(response.message, "Found 2 product(s).");
    }

    #[test]
    fn voice_command_flags_unrecognized_text() {
        let response = voice_command("play some music".to_string());
        assert_eq!(response.kind, "none");
        assert!(response.show_warning);
        assert_eq!(response.message, "Please say a number after 'top'");
        assert_eq!(response.items, reset_products().items);
    }

    #[test]
    fn reset_products_formats_dates_as_days() {
        let response = reset_products();
        assert!(!response.show_warning);
        assert!(response
            .items
            .iter()
            .all(|item| item.date.len() == 10 && item.date.as_bytes()[4] == b'-'));
    }
}
