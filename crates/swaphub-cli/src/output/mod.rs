//! Output formatting module
//!
//! Table and JSON rendering for CLI commands, plus the pagination footer
//! used by the browse/search surfaces.

use serde::Serialize;
use std::fmt::Display;
use swaphub_core::Pagination;
use tabled::{Table, Tabled};

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Use 'table' or 'json'", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Print data in the specified format
pub fn print_output<T>(data: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("Nothing to show.");
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }
    Ok(())
}

/// Paginated wire shape for `--format json`
#[derive(Serialize)]
struct JsonPage<'a, T> {
    results: &'a [T],
    pagination: &'a Pagination,
}

/// Print one page of results. Table mode appends a pagination footer;
/// JSON mode emits the results together with the pagination block so
/// scripts can walk pages.
pub fn print_page<T>(
    rows: &[T],
    pagination: &Pagination,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    match format {
        OutputFormat::Table => {
            print_output(rows, format)?;
            print_info(
                &format!(
                    "Page {}/{} ({} items total)",
                    pagination.current_page, pagination.total_pages, pagination.count
                ),
                quiet,
            );
        }
        OutputFormat::Json => {
            let page = JsonPage { results: rows, pagination };
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }
    Ok(())
}

/// Print a single item in the specified format
pub fn print_single<T>(data: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    match format {
        OutputFormat::Table => println!("{}", Table::new([data])),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
    }
    Ok(())
}

/// Print a success message (respects quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", colored::Colorize::green(message));
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}", colored::Colorize::red(message));
}

/// Print an info message (respects quiet mode)
pub fn print_info(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}
