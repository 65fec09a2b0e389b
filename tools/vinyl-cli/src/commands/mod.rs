//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod order;
pub mod search;
pub mod session;
pub mod shop;

use clap::{Args, Subcommand, ValueEnum};
use vinyl_commerce::checkout::PaymentMethod;
use vinyl_commerce::storefront::Section;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show records of this genre (case-insensitive).
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Sort order.
    #[arg(short, long, value_enum, default_value_t = CatalogSort::Catalog)]
    pub sort: CatalogSort,
}

/// Sort orders for the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogSort {
    /// Catalog order.
    Catalog,
    /// Cheapest first.
    Price,
    /// Newest first.
    Year,
    /// Alphabetical by title.
    Title,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles, artists and genres.
    #[arg(default_value = "")]
    pub query: String,

    /// List the whole catalog when the query is empty.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Script file (JSON or TOML) with a list of `steps`.
    pub script: String,

    /// Write the structured session log to stderr.
    #[arg(short, long)]
    pub log: bool,

    /// Stop at the first rejected step.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Record ids to buy. Repeat an id for more copies.
    #[arg(required = true)]
    pub records: Vec<u32>,

    /// Payment method: card, wallet or transfer.
    #[arg(short, long)]
    pub pay: PaymentMethod,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Section to open first: catalog, search, about, delivery, faq or contacts.
    #[arg(short, long)]
    pub section: Option<Section>,

    /// Write the structured session log to stderr.
    #[arg(short, long)]
    pub log: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
