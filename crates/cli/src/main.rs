//! Basket CLI - cart inspection and mutation tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! bk-cli show
//!
//! # Add a product (bumps the quantity if it is already in the cart)
//! bk-cli add --id mug-1 --title "Camp Mug" \
//!     --image-url https://cdn.example.com/mug.png --price 14.50
//!
//! # Change a line item's quantity by id
//! bk-cli inc mug-1
//! bk-cli dec mug-1
//! ```
//!
//! # Commands
//!
//! - `show` - Print the current cart
//! - `add` - Add a product to the cart
//! - `inc` / `dec` - Increment / decrement a line item's quantity
//!
//! The storage location comes from `BASKET_STORAGE_DIR`; see `basket-cart`
//! for the default.

#![cfg_attr(not(test), forbid(unsafe_code))]

use basket_core::Price;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bk-cli")]
#[command(author, version, about = "Basket CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current cart
    Show,
    /// Add a product to the cart (bumps quantity if already present)
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display title
        #[arg(long)]
        title: String,

        /// Display image URL
        #[arg(long)]
        image_url: String,

        /// Unit price, e.g. 14.50
        #[arg(long)]
        price: Price,
    },
    /// Increase a line item's quantity by one
    Inc {
        /// Product id
        id: String,
    },
    /// Decrease a line item's quantity by one (removes the item at zero)
    Dec {
        /// Product id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show => commands::cart::show().await?,
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => commands::cart::add(&id, &title, &image_url, price).await?,
        Commands::Inc { id } => commands::cart::increment(&id).await?,
        Commands::Dec { id } => commands::cart::decrement(&id).await?,
    }
    Ok(())
}
