use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use payroll_cli::cli::{Cli, Command};
use payroll_cli::config::Config;
use payroll_cli::{csv_loader, logging, session};
use payroll_core::calculations::common::format_currency;
use payroll_core::{EmployeeStore, compute_tax, generate_report};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    cli.apply_overrides(&mut config.logging);
    logging::init_logging(&config.logging).context("Failed to initialise logging")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Tax { income, status } => {
            let tax = compute_tax(income, status)?;
            println!("{}", format_currency(tax));
        }
        Command::Report { file, employees } => {
            let mut store = EmployeeStore::new();

            if let Some(path) = &file {
                let loaded = csv_loader::load_from_file(path)
                    .with_context(|| format!("Failed to load employees: {}", path.display()))?;
                let added = csv_loader::load_into_store(&mut store, loaded);
                info!(path = %path.display(), added, "loaded employees from CSV");
            }
            for employee in employees {
                store.insert(employee);
            }

            let report = generate_report(&store)?;
            print!("{report}");
        }
        Command::Interactive => {
            let mut store = EmployeeStore::new();
            session::run(&mut store, io::stdin().lock(), io::stdout().lock())
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}
