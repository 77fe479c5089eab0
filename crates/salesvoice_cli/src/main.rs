//! Command-line front end for spoken-style sales queries.
//!
//! # Responsibility
//! - Feed finished command text (arguments or stdin lines) to the core.
//! - Render outcomes as plain text or JSON.

use clap::Parser;
use salesvoice_core::{
    default_log_level, init_logging, CommandOutcome, CommandService, InMemoryCatalog, Product,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Run spoken-style sales commands such as "top three in march 2024".
#[derive(Parser, Debug)]
#[command(name = "salesvoice", author, version, about, long_about = None)]
struct Cli {
    /// Command words; when omitted, every stdin line is one command
    #[arg(value_name = "COMMAND")]
    command: Vec<String>,

    /// JSON catalog file (defaults to the built-in sample catalog)
    #[arg(long, env = "SALESVOICE_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Print the unfiltered listing, most recent first, and exit
    #[arg(long)]
    reset: bool,

    /// Print outcomes as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(&cli.log_level, &log_dir.to_string_lossy())?;
    }

    let catalog = match &cli.catalog {
        Some(path) => InMemoryCatalog::load(path).map_err(|err| err.to_string())?,
        None => InMemoryCatalog::sample(),
    };
    let service = CommandService::new(catalog);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.reset {
        return write_listing(&mut out, &service.reset(), cli.json);
    }

    if !cli.command.is_empty() {
        let outcome = service.run_command(&cli.command.join(" "));
        return write_outcome(&mut out, &outcome, cli.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| format!("failed to read stdin: {err}"))?;
        if line.trim().is_empty() {
            continue;
        }
        write_outcome(&mut out, &service.run_command(&line), cli.json)?;
    }
    Ok(())
}

fn write_outcome(out: &mut impl Write, outcome: &CommandOutcome, json: bool) -> Result<(), String> {
    if json {
        let value = serde_json::json!({
            "query": outcome.query,
            "products": outcome.products,
            "warning": outcome.warning.map(|warning| warning.message()),
        });
        return writeln!(out, "{value}").map_err(write_error);
    }

    if let Some(warning) = outcome.warning {
        writeln!(out, "warning: {}", warning.message()).map_err(write_error)?;
    }
    write_products(out, &outcome.products)
}

fn write_listing(out: &mut impl Write, products: &[Product], json: bool) -> Result<(), String> {
    if json {
        let value = serde_json::to_string(products).map_err(|err| err.to_string())?;
        return writeln!(out, "{value}").map_err(write_error);
    }
    write_products(out, products)
}

fn write_products(out: &mut impl Write, products: &[Product]) -> Result<(), String> {
    if products.is_empty() {
        return writeln!(out, "No products.").map_err(write_error);
    }
    for product in products {
        writeln!(
            out,
            "{:<16} {:>6} sales  {}",
            product.name, product.sales, product.date
        )
        .map_err(write_error)?;
    }
    Ok(())
}

fn write_error(err: io::Error) -> String {
    format!("failed to write output: {err}")
}
