//! Fragsize CLI
//!
//! Builds fragment size distribution reports from deepTools
//! bamPEFragmentSize raw fragment length files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use fragsize_report::commands::{
    display_version, execute_report, validate_args, validate_export_file, ReportArgs,
};
use fragsize_report::utils::config::DEFAULT_MAX_FILE_SIZE;

/// Fragsize - fragment size distribution reports
#[derive(Parser, Debug)]
#[command(name = "fragsize")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Discover logs and build a report
    Report {
        /// Files or directories to search
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output path for the HTML report
        #[arg(short, long, default_value = "fragsize_report.html")]
        output: PathBuf,

        /// Do not write the HTML report
        #[arg(long)]
        no_html: bool,

        /// Output path for the JSON histogram export (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Prepend directory names to sample names
        #[arg(long)]
        prepend_dirs: bool,

        /// Skip log files larger than this many bytes
        #[arg(long, env = "FRAGSIZE_MAX_FILE_SIZE", default_value_t = DEFAULT_MAX_FILE_SIZE)]
        max_file_size: u64,

        /// Print per-sample summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a JSON histogram export
    Validate {
        /// Path to export JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            paths,
            output,
            no_html,
            json,
            prepend_dirs,
            max_file_size,
            summary,
        } => {
            let args = ReportArgs {
                search_paths: paths,
                output_html: (!no_html).then_some(output),
                output_json: json,
                prepend_dirs,
                max_file_size,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            let count = execute_report(&args)?;
            println!("Found {} sample(s)", count);
        }

        Commands::Validate { file } => {
            validate_export_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
