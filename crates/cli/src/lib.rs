//! Command-line consumer of the invoice core: seed an invoice, replay an edit
//! script, print the preview.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

use invoicer_invoicing::{Invoice, InvoiceEdit, InvoicePreview, InvoiceSettings, parse_date};

#[derive(Debug, Parser)]
#[command(name = "invoicer", version, about = "Build and preview invoices")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a freshly seeded invoice.
    New(RenderArgs),
    /// Seed an invoice, apply a JSON edit script, print the result.
    Preview {
        /// JSON array of edits, applied in order.
        #[arg(long)]
        edits: Option<PathBuf>,
        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Issue date (YYYY-MM-DD); defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text print layout.
    Text,
    /// The consistent snapshot as JSON.
    Json,
}

/// Read an edit script from disk.
pub fn load_edits(path: &Path) -> Result<Vec<InvoiceEdit>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read edit script {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse edit script {}", path.display()))
}

/// Render `invoice` in the requested format.
pub fn render(invoice: &Invoice, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(InvoicePreview::from_invoice(invoice).to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(invoice).context("failed to encode invoice as JSON")
        }
    }
}

/// Execute a parsed command and return what should be printed.
pub fn run(cli: &Cli, settings: &InvoiceSettings) -> Result<String> {
    let (edits_path, args) = match &cli.command {
        Command::New(args) => (None, args),
        Command::Preview { edits, render } => (edits.as_deref(), render),
    };

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let seeded = Invoice::seeded(settings, today);
    tracing::info!(invoice = seeded.invoice_number(), %today, "seeded invoice");

    let invoice = match edits_path {
        Some(path) => {
            let edits = load_edits(path)?;
            tracing::info!(count = edits.len(), path = %path.display(), "applying edit script");
            seeded.apply_all(&edits)
        }
        None => seeded,
    };

    render(&invoice, args.format)
}
