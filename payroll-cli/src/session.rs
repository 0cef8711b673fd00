//! Line-oriented interactive session.
//!
//! Reads one command per line and writes responses to the output. Invalid
//! input is reported and the session carries on; only `quit`, `exit` or end of
//! input ends it.
//!
//! | Command                          | Effect                                   |
//! |----------------------------------|------------------------------------------|
//! | `add <income> <status> <name…>`  | Record an employee (name may have spaces) |
//! | `show <name…>`                   | Print one employee and their tax         |
//! | `list`                           | Print all employees in entry order       |
//! | `report`                         | Print the full report                    |
//! | `help [name\|income\|status]`    | Command list, or help for one field      |
//! | `log <filter>`                   | Change the log filter                    |
//! | `quit` / `exit`                  | End the session                          |

use std::io::{self, BufRead, Write};

use payroll_core::calculations::common::format_currency;
use payroll_core::{EmployeeStore, PayrollError, compute_tax, generate_report};
use tracing::{info, warn};

use crate::logging;

pub const PROMPT: &str = "> ";

const COMMANDS_HELP: &str = "\
Commands:
  add <income> <status> <name>   record an employee (status: single or married)
  show <name>                    show one employee and their tax
  list                           list employees in entry order
  report                         print the tax report
  help [name|income|status]      show this list, or help for one field
  log <filter>                   change the log level, e.g. 'debug'
  quit                           leave the session";

/// Help text for one input field. Unknown fields get a generic answer.
pub fn field_help(field: &str) -> &'static str {
    match field.trim().to_ascii_lowercase().as_str() {
        "name" => "Enter the full name of the employee.",
        "income" => "Enter the income in ZAR. Ensure it is a numeric value.",
        "status" | "tax_status" => "Select 'single' or 'married' to indicate the tax status.",
        _ => "No help available.",
    }
}

/// User-facing message for a rejected command.
pub fn describe_error(error: &PayrollError) -> String {
    match error {
        PayrollError::InvalidInput(reason) => format!("Invalid input: {reason}."),
        PayrollError::UnsupportedFilingStatus(status) => {
            format!("Invalid input: tax status must be 'single' or 'married', got '{status}'.")
        }
        PayrollError::NotFound(name) => format!("No employee named '{name}'."),
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Runs the session until `quit` or end of input.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the session with an error.
pub fn run<R, W>(
    store: &mut EmployeeStore,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Type 'help' for a list of commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };

        if let Flow::Quit = handle_line(store, &line, &mut output)? {
            break;
        }
    }

    info!(employees = store.len(), "session ended");
    Ok(())
}

fn handle_line<W: Write>(
    store: &mut EmployeeStore,
    line: &str,
    output: &mut W,
) -> io::Result<Flow> {
    let (command, rest) = next_token(line);
    let rest = rest.trim();

    match command.to_ascii_lowercase().as_str() {
        "" => {}
        "add" => add(store, rest, output)?,
        "show" => match store.get(rest) {
            Ok(employee) => {
                let tax = compute_tax(employee.income(), employee.status());
                match tax {
                    Ok(tax) => writeln!(
                        output,
                        "{}: {}, income {}, tax {}",
                        employee.name(),
                        employee.status(),
                        format_currency(employee.income()),
                        format_currency(tax)
                    )?,
                    Err(e) => writeln!(output, "{}", describe_error(&e))?,
                }
            }
            Err(e) => writeln!(output, "{}", describe_error(&e))?,
        },
        "list" => {
            if store.is_empty() {
                writeln!(output, "No employees recorded.")?;
            }
            for employee in store.all() {
                writeln!(output, "{} ({})", employee.name(), employee.status().as_str())?;
            }
        }
        "report" => match generate_report(store) {
            Ok(report) => write!(output, "{report}")?,
            Err(e) => writeln!(output, "{}", describe_error(&e))?,
        },
        "help" if rest.is_empty() => writeln!(output, "{COMMANDS_HELP}")?,
        "help" => writeln!(output, "{}", field_help(rest))?,
        "log" => match logging::set_log_level(rest) {
            Ok(()) => writeln!(output, "Log level set to '{rest}'.")?,
            Err(e) => writeln!(output, "Cannot change log level: {e}")?,
        },
        "quit" | "exit" => return Ok(Flow::Quit),
        other => writeln!(
            output,
            "Unknown command '{other}'. Type 'help' for a list of commands."
        )?,
    }

    Ok(Flow::Continue)
}

/// Splits off the first whitespace-delimited token.
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    s.split_once(char::is_whitespace).unwrap_or((s, ""))
}

fn add<W: Write>(
    store: &mut EmployeeStore,
    args: &str,
    output: &mut W,
) -> io::Result<()> {
    let (income, rest) = next_token(args);
    let (status, name) = next_token(rest);

    match store.add_raw(name, income, status) {
        Ok(replaced) => {
            info!(name = name.trim(), replaced, "employee recorded");
            if replaced {
                writeln!(output, "Employee updated successfully.")
            } else {
                writeln!(output, "Employee added successfully.")
            }
        }
        Err(e) => {
            warn!(error = %e, "employee rejected");
            writeln!(output, "{}", describe_error(&e))
        }
    }
}
