//! ledgerlens CLI - forensic analysis of brokerage trade-ledger workbooks.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "ledgerlens")]
#[command(about = "Forensic analysis of brokerage trade-ledger workbooks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a workbook for a target security code
    Analyze {
        /// Path to the spreadsheet workbook (.xlsx, .xls, .ods)
        workbook: PathBuf,

        /// Target security code (e.g. 002776; normalized before matching)
        #[arg(short, long)]
        code: String,

        /// Output path. Defaults to report_<code>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "xlsx")]
        format: Format,
    },

    /// List the column names the ingester recognizes
    Columns,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Analyze {
            workbook,
            code,
            output,
            format,
        } => commands::analyze::analyze(&workbook, &code, output, format, cli.quiet),
        Commands::Columns => commands::columns::list_columns(),
    }
}
