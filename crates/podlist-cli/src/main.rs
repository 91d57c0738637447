mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "podlist",
    version,
    about = "Print-on-demand work list builder for batch master lists"
)]
struct Cli {
    /// JSON config file (sheet name, layout, page size, file prefix)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a master list (.xlsx/.xlsm) and show the grouped batches
    Show {
        /// Path to the Excel workbook
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// List rows that were skipped and why
        #[arg(long)]
        show_skipped: bool,
    },
    /// Import a master list and write the paginated work list
    Export {
        /// Path to the Excel workbook
        input_file: PathBuf,

        /// Directory to write the work list into
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,

        /// Export format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// List the known paper types with their codes and sort order
    Catalog,
    /// Print the canonical YYYY-MM-DD token for an order-date string
    Date {
        /// Order date as written in the master list (e.g. "Tuesday 29th")
        text: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show {
            input_file,
            output,
            show_skipped,
        } => commands::show::run(input_file, cli.config, &output, show_skipped),
        Commands::Export {
            input_file,
            out_dir,
            format,
        } => commands::export::run(input_file, cli.config, out_dir, &format),
        Commands::Catalog => commands::catalog::list(),
        Commands::Date { text } => commands::catalog::date(&text),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
