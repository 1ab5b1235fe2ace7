use clap::Parser;

use invoicer_cli::{Cli, run};
use invoicer_invoicing::InvoiceSettings;

fn main() -> anyhow::Result<()> {
    invoicer_observability::init();

    let cli = Cli::parse();
    let settings = InvoiceSettings::from_env();

    let output = run(&cli, &settings).inspect_err(|e| {
        tracing::error!(error = %format!("{e:#}"), "invoicer failed");
    })?;
    println!("{output}");
    Ok(())
}
