use std::path::PathBuf;

use clap::{Parser, Subcommand};
use payroll_core::calculations::common::parse_amount;
use payroll_core::{Employee, FilingStatus};
use rust_decimal::Decimal;

use crate::config::LoggingConfig;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Employee income tax calculator (ZAR, single and married brackets).
///
/// Computes tax for a single income, prints an itemised report for a set of
/// employees, or runs an interactive session for entering them one by one.
#[derive(Debug, Parser)]
#[command(name = "payroll-tax", version, about)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,payroll_core=trace`.
    /// Overrides the config file and RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the tax owed on one income.
    Tax {
        /// Income in ZAR. Must be a non-negative number; `,` separators are allowed.
        #[arg(long, value_parser = parse_income_arg)]
        income: Decimal,

        /// Filing status: `single` or `married`.
        #[arg(long, value_parser = parse_status_arg)]
        status: FilingStatus,
    },

    /// Print the itemised report for a set of employees.
    Report {
        /// CSV file with `name,income,status` columns.
        #[arg(long)]
        file: Option<PathBuf>,

        /// An employee as `NAME:INCOME:STATUS`. Repeatable; applied after
        /// `--file`, so a repeated name overwrites the file's record.
        #[arg(long = "employee", value_parser = parse_employee_arg)]
        employees: Vec<Employee>,
    },

    /// Enter employees interactively and print reports on demand.
    Interactive,
}

impl Cli {
    /// Applies command-line logging flags over the file configuration.
    pub fn apply_overrides(
        &self,
        logging: &mut LoggingConfig,
    ) {
        if let Some(level) = &self.log_level {
            logging.level = Some(level.clone());
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }
}

// ─── value parsers ───────────────────────────────────────────────────────────

fn parse_income_arg(s: &str) -> Result<Decimal, String> {
    let income = parse_amount(s).map_err(|e| e.to_string())?;
    if income < Decimal::ZERO {
        return Err(format!("income must be non-negative, got {income}"));
    }
    Ok(income)
}

fn parse_status_arg(s: &str) -> Result<FilingStatus, String> {
    s.parse::<FilingStatus>().map_err(|e| e.to_string())
}

/// Parses `NAME:INCOME:STATUS`. The name is everything before the last two
/// colons, so it may contain colons itself.
fn parse_employee_arg(s: &str) -> Result<Employee, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(status), Some(income), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected NAME:INCOME:STATUS, got '{s}'"));
    };

    let income = parse_amount(income).map_err(|e| e.to_string())?;
    let status = parse_status_arg(status)?;
    Employee::new(name, income, status).map_err(|e| e.to_string())
}
