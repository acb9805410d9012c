//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// dashview - browse, filter and manage admin records in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "dashview")]
#[command(version)]
#[command(about = "Browse, filter and manage admin dashboard records in the terminal", long_about = None)]
pub struct Args {
    /// JSON dataset to load instead of the built-in demo records
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Page shown on start-up (users, collections, reviews, transactions)
    #[arg(long, value_name = "PAGE")]
    pub start: Option<String>,

    /// Rows per table page (5, 10, 20, 25, 50 or 100)
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print one page of a table to stdout and exit
    #[arg(long, value_name = "PAGE")]
    pub print: Option<String>,

    /// Search text applied before printing (use with --print)
    #[arg(long, requires = "print")]
    pub search: Option<String>,

    /// Sort applied before printing, e.g. `amount:desc` (use with --print)
    #[arg(long, value_name = "KEY[:asc|desc]", requires = "print")]
    pub sort: Option<String>,

    /// Status filter applied before printing (use with --print)
    #[arg(long, requires = "print")]
    pub status: Option<String>,

    /// Star rating filter, 1-5 (reviews only; use with --print)
    #[arg(long, value_name = "STARS", requires = "print")]
    pub rating: Option<String>,

    /// Start of the date filter, inclusive (use with --print and --to)
    #[arg(long, value_name = "DATE", requires_all = ["print", "to"])]
    pub from: Option<String>,

    /// End of the date filter, inclusive (use with --print and --from)
    #[arg(long, value_name = "DATE", requires_all = ["print", "from"])]
    pub to: Option<String>,

    /// Page number to print, 1-based (use with --print)
    #[arg(long, value_name = "N", requires = "print")]
    pub page: Option<usize>,
}
