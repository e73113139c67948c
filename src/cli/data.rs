//! CLI commands for inspecting the dataset
//!
//! Plain listings of the reference tables plus the seed-data summary
//! statistics (counts, per-dealer totals, category distribution).

use clap::Subcommand;

use crate::error::{SalesError, SalesResult};
use crate::models::{Category, Money};
use crate::store::SalesStore;

use super::report::resolve_dealer;

/// Dataset subcommands
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// List dealers
    Dealers,

    /// List customers
    Customers {
        /// Filter by dealer id
        #[arg(short, long)]
        dealer: Option<String>,
    },

    /// List the product catalog
    Products {
        /// Filter by category (e.g. "herbicide")
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print dataset summary statistics
    Summary,
}

/// Handle dataset commands
pub fn handle_data_command(store: &SalesStore, cmd: DataCommands) -> SalesResult<()> {
    match cmd {
        DataCommands::Dealers => {
            println!("{:<4} {}", "ID", "Name");
            println!("{}", crate::display::separator(30));
            for dealer in store.dealers() {
                println!("{:<4} {}", dealer.id, dealer.name);
            }
        }

        DataCommands::Customers { dealer } => {
            let dealer = resolve_dealer(store, dealer)?;

            println!("{:<4} {:<32} {}", "ID", "Name", "Dealer");
            println!("{}", crate::display::separator(50));
            for customer in store.customers() {
                if let Some(id) = dealer {
                    if customer.dealer_id != id {
                        continue;
                    }
                }
                let dealer_name = store
                    .dealer(customer.dealer_id)
                    .map(|d| d.name.as_str())
                    .unwrap_or("N/A");
                println!("{:<4} {:<32} {}", customer.id, customer.name, dealer_name);
            }
        }

        DataCommands::Products { category } => {
            let category = category
                .map(|s| {
                    s.parse::<Category>()
                        .map_err(|e| SalesError::Validation(e.to_string()))
                })
                .transpose()?;

            println!("{:<4} {:<24} {}", "ID", "Name", "Category");
            println!("{}", crate::display::separator(50));
            for product in store.products() {
                if let Some(c) = category {
                    if product.category != c {
                        continue;
                    }
                }
                println!(
                    "{:<4} {:<24} {}",
                    product.id,
                    product.name,
                    product.category.display_name()
                );
            }
        }

        DataCommands::Summary => print_summary(store),
    }

    Ok(())
}

/// Print the dataset summary statistics
fn print_summary(store: &SalesStore) {
    println!("=== DATASET SUMMARY ===");
    println!("Dealers: {}", store.dealers().len());
    println!("Customers: {}", store.customers().len());
    println!("Products: {}", store.products().len());
    println!("Transactions: {}", store.transactions().len());

    println!("\n=== DEALER TOTALS ===");
    for dealer in store.dealers() {
        let matching: Vec<_> = store
            .transactions()
            .iter()
            .filter(|t| t.dealer_id == dealer.id)
            .collect();
        let total: Money = matching.iter().map(|t| t.amount).sum();
        println!(
            "{}: {} transactions, {}",
            dealer.name,
            matching.len(),
            crate::display::format_usd(total)
        );
    }

    println!("\n=== CATEGORY DISTRIBUTION ===");
    for category in Category::ALL {
        let count = store
            .transactions()
            .iter()
            .filter(|t| t.category == category)
            .count();
        println!("{}: {} transactions", category.display_name(), count);
    }

    let total: Money = store.transactions().iter().map(|t| t.amount).sum();
    println!(
        "\nTotal transaction value: {}",
        crate::display::format_usd(total)
    );
}
