use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mybooks::catalog::{CatalogClient, spawn_load};
use mybooks::config::{self, CatalogConfig, LateLoadPolicy};
use mybooks::logging::{self, LogTarget};

#[derive(Parser)]
#[command(name = "mybooks")]
#[command(about = "Browse a book catalog and edit it locally", long_about = None)]
struct Cli {
    /// Catalog base URL
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Subject to list
    #[arg(long, default_value = config::DEFAULT_SUBJECT)]
    subject: String,

    /// Number of books to request
    #[arg(long, default_value_t = config::DEFAULT_LIMIT)]
    limit: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// What to do with a catalog result that arrives after local edits
    #[arg(long, value_enum, default_value_t = LateLoadPolicy::Discard)]
    late_load: LateLoadPolicy,

    /// Write diagnostics to this file (the TUI defaults to mybooks.log in the temp directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter directives (RUST_LOG syntax); defaults to RUST_LOG, then info
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalog once and print it
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = CatalogConfig {
        base_url: cli.base_url,
        subject: cli.subject,
        limit: cli.limit,
        timeout: Duration::from_secs(cli.timeout_secs),
    };

    match cli.command {
        None => {
            let target = LogTarget::for_tui(cli.log_file);
            logging::init(&target, cli.log_filter.as_deref())?;
            mybooks::tui::run_with_options(mybooks::tui::TuiRunOptions {
                catalog,
                late_load: cli.late_load,
            })?;
        }
        Some(Commands::List { json }) => {
            let target = LogTarget::for_cli(cli.log_file);
            logging::init(&target, cli.log_filter.as_deref())?;
            let books = spawn_load(CatalogClient::new(catalog)?).wait()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&books).context("serialize books json")?
                );
            } else {
                for book in &books {
                    println!("{}", book.display_line());
                }
            }
        }
    }

    Ok(())
}
