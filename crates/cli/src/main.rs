//! Inventory CLI - Product management and database migrations.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! inventory migrate
//!
//! # Create a product
//! inventory add --name Widget --quantity 5
//!
//! # Adjust stock
//! inventory increment --id 1 --quantity 3
//! inventory decrement --id 1 --quantity 2
//!
//! # Inspect
//! inventory list
//! inventory --json get --id 1
//! ```
//!
//! Results go to stdout. Errors go to stderr and the process exits with 1.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use inventory_core::ProductService;
use inventory_server::db::PgProductRepository;

mod commands;

use commands::CliError;
use commands::products::{OutputFormat, ProductCommand};

#[derive(Debug, Parser)]
#[command(name = "inventory")]
#[command(author, version, about = "Inventory CLI tools")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(flatten)]
    Product(ProductCommand),
    /// Run database migrations
    Migrate,
}

impl Cli {
    const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            #[allow(clippy::print_stdout)]
            {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            #[allow(clippy::print_stderr)]
            {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let format = cli.output_format();
    let pool = commands::connect().await?;

    match cli.command {
        Commands::Migrate => commands::migrate::run(&pool).await,
        Commands::Product(command) => {
            let service = ProductService::new(PgProductRepository::new(pool));
            commands::products::run(&service, command, format).await
        }
    }
}
