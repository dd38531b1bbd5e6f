//! CLI argument definitions for the reservation mart.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mart_ingest::{
    DEFAULT_CUSTOMER_API_URL, DEFAULT_RESERVATIONS_JSON, DEFAULT_SOURCE_DB, DEFAULT_TABLES_CSV,
};
use mart_load::DEFAULT_MART_DB;

#[derive(Parser)]
#[command(
    name = "restaurant-mart",
    version,
    about = "Restaurant reservation mart - build a star schema from four sources",
    long_about = "Extract floor plan, reservation log, diner list and staff roster,\n\
                  build four dimensions and a reservation fact table, and replace\n\
                  them in the SQLite mart."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the Extract, Transform and Load stages.
    Run(RunArgs),

    /// Create the demo staff roster in the HR source store.
    SeedSource(SeedArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Floor-plan CSV with header `table_id,table_number,section,max_capacity`.
    #[arg(long = "tables", value_name = "PATH", default_value = DEFAULT_TABLES_CSV)]
    pub tables: PathBuf,

    /// Reservation log JSON array.
    #[arg(long = "reservations", value_name = "PATH", default_value = DEFAULT_RESERVATIONS_JSON)]
    pub reservations: PathBuf,

    /// Customer API endpoint.
    #[arg(long = "customer-api", value_name = "URL", default_value = DEFAULT_CUSTOMER_API_URL)]
    pub customer_api: String,

    /// HR source store holding the `employees` table.
    #[arg(long = "source-db", value_name = "PATH", default_value = DEFAULT_SOURCE_DB)]
    pub source_db: PathBuf,

    /// Destination mart store.
    #[arg(long = "mart-db", value_name = "PATH", default_value = DEFAULT_MART_DB)]
    pub mart_db: PathBuf,

    /// Commit each table on its own instead of all five together.
    ///
    /// A failure part way through then leaves earlier tables replaced and
    /// later ones with their previous contents.
    #[arg(long = "non-atomic")]
    pub non_atomic: bool,

    /// Extract and transform without writing to the mart.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the first N rows of every built table.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,
}

#[derive(Parser)]
pub struct SeedArgs {
    /// HR source store to (re)create.
    #[arg(long = "db", value_name = "PATH", default_value = DEFAULT_SOURCE_DB)]
    pub db: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
