//! Product commands.
//!
//! # Usage
//!
//! ```bash
//! inventory add --name Widget --quantity 5
//! inventory list
//! inventory get --id 1
//! inventory increment --id 1 --quantity 3
//! inventory decrement --id 1 --quantity 2
//!
//! # Machine-readable output
//! inventory --json list
//! ```

use std::fmt::Write as _;

use clap::Subcommand;

use inventory_core::{Product, ProductId, ProductRepository, ProductService};

use super::CliError;

/// Product subcommands.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ProductCommand {
    /// Create a product
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Initial stock
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        quantity: i32,
    },
    /// List all products
    List,
    /// Show a single product
    Get {
        /// Product ID
        #[arg(short, long)]
        id: ProductId,
    },
    /// Add stock to a product
    Increment {
        /// Product ID
        #[arg(short, long)]
        id: ProductId,

        /// Units to add (must be positive)
        #[arg(short, long, allow_negative_numbers = true)]
        quantity: i32,
    },
    /// Remove stock from a product
    Decrement {
        /// Product ID
        #[arg(short, long)]
        id: ProductId,

        /// Units to remove (must be positive)
        #[arg(short, long, allow_negative_numbers = true)]
        quantity: i32,
    },
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run a product command and render its result.
///
/// # Errors
///
/// Returns `CliError::Inventory` if the service rejects the operation.
pub async fn run<R: ProductRepository>(
    service: &ProductService<R>,
    command: ProductCommand,
    format: OutputFormat,
) -> Result<String, CliError> {
    match command {
        ProductCommand::Add { name, quantity } => {
            let product = service.add_product(&name, quantity).await?;
            render_one(&product, format)
        }
        ProductCommand::List => {
            let products = service.list_products().await?;
            render_many(&products, format)
        }
        ProductCommand::Get { id } => {
            let product = service.get_product(id).await?;
            render_one(&product, format)
        }
        ProductCommand::Increment { id, quantity } => {
            let product = service.increment_quantity(id, quantity).await?;
            render_one(&product, format)
        }
        ProductCommand::Decrement { id, quantity } => {
            let product = service.decrement_quantity(id, quantity).await?;
            render_one(&product, format)
        }
    }
}

fn render_one(product: &Product, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(product)?),
        OutputFormat::Text => Ok(format_product(product)),
    }
}

fn render_many(products: &[Product], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(products)?),
        OutputFormat::Text if products.is_empty() => Ok("No products.".to_string()),
        OutputFormat::Text => {
            let mut out = String::new();
            for product in products {
                let _ = writeln!(out, "{}", format_product(product));
            }
            out.pop();
            Ok(out)
        }
    }
}

/// One-line text form of a product.
#[must_use]
pub fn format_product(product: &Product) -> String {
    format!(
        "#{} {} (quantity: {}, updated: {})",
        product.id,
        product.name,
        product.quantity,
        product.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
