use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cscx_import::cli::{
    handle_config_command, handle_fields_command, handle_history_command, handle_import_command,
    handle_preview_command, handle_template_command, ImportArgs, PreviewArgs,
};
use cscx_import::config::{CscxPaths, Settings};
use cscx_import::logging;

#[derive(Parser)]
#[command(
    name = "cscx-import",
    version,
    about = "Import customer records from CSV files",
    long_about = "cscx-import reads a CSV export of customer records, matches its \
                  columns to the customer fields, shows what would be imported \
                  and what is wrong with the file, and sends the records to the \
                  customer import API."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive import wizard
    #[command(alias = "ui")]
    Tui {
        /// CSV file to start with
        file: Option<PathBuf>,
        /// Target workspace
        #[arg(short, long, env = "CSCX_WORKSPACE_ID")]
        workspace: Option<String>,
        /// Base URL of the import API
        #[arg(long, env = "CSCX_API_URL")]
        api_url: Option<String>,
    },

    /// Show the mapping, record counts and warnings for a CSV file
    Preview(PreviewArgs),

    /// Import a CSV file
    Import(ImportArgs),

    /// Write the blank CSV template
    Template {
        /// Output file (stdout when omitted)
        output: Option<PathBuf>,
    },

    /// List the customer fields and the headers they are matched from
    Fields,

    /// Show recent imports
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Save a new API base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Save a new default workspace
        #[arg(long)]
        workspace: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CscxPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = logging::init(&paths, &settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Some(Commands::Tui {
            file,
            workspace,
            api_url,
        }) => {
            let settings = settings.with_overrides(api_url, workspace);
            cscx_import::tui::run_tui(runtime.handle().clone(), &settings, &paths, file)?;
        }
        Some(Commands::Preview(args)) => {
            runtime.block_on(handle_preview_command(&settings, args))?;
        }
        Some(Commands::Import(args)) => {
            runtime.block_on(handle_import_command(&paths, &settings, args))?;
        }
        Some(Commands::Template { output }) => {
            handle_template_command(output)?;
        }
        Some(Commands::Fields) => {
            handle_fields_command()?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&paths, limit)?;
        }
        Some(Commands::Config { api_url, workspace }) => {
            handle_config_command(&paths, settings, api_url, workspace)?;
        }
        None => {
            println!("cscx-import - CSV customer import");
            println!();
            println!("Run 'cscx-import --help' for usage information.");
            println!("Run 'cscx-import tui' to launch the interactive wizard.");
        }
    }

    // Background reads may still hold the runtime after the TUI exits
    runtime.shutdown_background();

    Ok(())
}
