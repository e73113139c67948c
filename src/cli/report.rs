//! CLI commands for reports
//!
//! Bridges clap argument parsing to the reporting facade: resolves the
//! dealer and period selectors, generates the requested report, and either
//! renders it to the terminal or exports it to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{SalesError, SalesResult};
use crate::models::{CustomerId, DealerId, ReportPeriod};
use crate::reports::{
    CategoryBreakdownReport, CustomerDetailReport, DealerSummaryReport, ProductBreakdownReport,
    SalesOverTimeReport, TopCustomersReport,
};
use crate::store::SalesStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Net sales by category
    #[command(alias = "cat")]
    Categories {
        /// Dealer id filter (absent or empty means all dealers)
        #[arg(short, long)]
        dealer: Option<String>,

        /// Reporting period (e.g. "Q1 2025" or "past-12-months")
        #[arg(short, long)]
        period: Option<String>,

        /// Order rows alphabetically instead of by amount
        #[arg(long)]
        alphabetical: bool,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Net sales by category and product
    Products {
        /// Dealer id filter (absent or empty means all dealers)
        #[arg(short, long)]
        dealer: Option<String>,

        /// Reporting period (e.g. "Q1 2025" or "past-12-months")
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Net sales over time (weekly within a quarter, monthly across the
    /// trailing window)
    #[command(alias = "time")]
    Timeline {
        /// Dealer id filter (absent or empty means all dealers)
        #[arg(short, long)]
        dealer: Option<String>,

        /// Reporting period (e.g. "Q1 2025" or "past-12-months")
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Top transacting customers
    #[command(alias = "top")]
    Customers {
        /// Dealer id filter (absent or empty means all dealers)
        #[arg(short, long)]
        dealer: Option<String>,

        /// Reporting period (e.g. "Q1 2025" or "past-12-months")
        #[arg(short, long)]
        period: Option<String>,

        /// Leaderboard size
        #[arg(short, long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Category breakdown for a single customer
    Customer {
        /// Customer id
        id: u32,

        /// Dealer id filter (absent or empty means all dealers)
        #[arg(short, long)]
        dealer: Option<String>,
    },

    /// Sales summary across the dealer network
    Summary {
        /// Dealer id filter (absent or empty means all dealers)
        #[arg(short, long)]
        dealer: Option<String>,

        /// Reporting period (e.g. "Q1 2025" or "past-12-months")
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &SalesStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> SalesResult<()> {
    match cmd {
        ReportCommands::Categories {
            dealer,
            period,
            alphabetical,
            output,
        } => {
            let dealer = resolve_dealer(store, dealer)?;
            let period = resolve_period(settings, period)?;
            let report = CategoryBreakdownReport::generate(store, dealer, &period)?;

            if let Some(path) = output {
                let mut writer = open_export_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Category report exported to: {}", path.display());
            } else if alphabetical {
                println!(
                    "Net Sales by Category - {}\n",
                    report.period.display_label()
                );
                for row in report.rows_alphabetical() {
                    println!(
                        "{:<16} {:>12}",
                        row.name,
                        crate::display::format_usd(row.amount)
                    );
                }
                println!(
                    "\nTotal: {}",
                    crate::display::format_usd(report.total)
                );
            } else {
                println!("{}", report.format_terminal());
            }
        }

        ReportCommands::Products {
            dealer,
            period,
            output,
        } => {
            let dealer = resolve_dealer(store, dealer)?;
            let period = resolve_period(settings, period)?;
            let report = ProductBreakdownReport::generate(store, dealer, &period)?;

            if let Some(path) = output {
                let mut writer = open_export_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Product report exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal());
            }
        }

        ReportCommands::Timeline {
            dealer,
            period,
            output,
        } => {
            let dealer = resolve_dealer(store, dealer)?;
            let period = resolve_period(settings, period)?;
            let report = SalesOverTimeReport::generate(store, dealer, &period)?;

            if let Some(path) = output {
                let mut writer = open_export_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Timeline report exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal());
            }
        }

        ReportCommands::Customers {
            dealer,
            period,
            top,
            output,
        } => {
            let dealer = resolve_dealer(store, dealer)?;
            let period = resolve_period(settings, period)?;
            let top_n = top.unwrap_or(settings.default_top_n);
            let report = TopCustomersReport::generate(store, dealer, &period, top_n)?;

            if let Some(path) = output {
                let mut writer = open_export_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Customer report exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal());
            }
        }

        ReportCommands::Customer { id, dealer } => {
            let dealer = resolve_dealer(store, dealer)?;
            let report = CustomerDetailReport::generate(store, CustomerId::new(id), dealer)?;
            println!("{}", report.format_terminal());
        }

        ReportCommands::Summary {
            dealer,
            period,
            output,
        } => {
            let dealer = resolve_dealer(store, dealer)?;
            let period = resolve_period(settings, period)?;
            let report = DealerSummaryReport::generate(store, dealer, &period)?;

            if let Some(path) = output {
                let mut writer = open_export_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Summary report exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal());
            }
        }
    }

    Ok(())
}

/// Resolve an optional dealer selector string to a known dealer id.
/// An absent or empty selector means no dealer filter.
pub(crate) fn resolve_dealer(
    store: &SalesStore,
    selector: Option<String>,
) -> SalesResult<Option<DealerId>> {
    let selector = match selector {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(None),
    };

    let id: DealerId = selector
        .parse()
        .map_err(|_| SalesError::Validation(format!("Invalid dealer id: {}", selector)))?;

    if store.dealer(id).is_none() {
        return Err(SalesError::dealer_not_found(selector));
    }

    Ok(Some(id))
}

/// Resolve an optional period selector, falling back to the configured
/// default
pub(crate) fn resolve_period(
    settings: &Settings,
    selector: Option<String>,
) -> SalesResult<ReportPeriod> {
    let selector = selector.unwrap_or_else(|| settings.default_period.clone());
    Ok(ReportPeriod::parse(&selector)?)
}

fn open_export_file(path: &Path) -> SalesResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SalesError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;

    #[test]
    fn test_resolve_dealer() {
        let store = generator::generate(generator::DEFAULT_SEED);

        assert_eq!(resolve_dealer(&store, None).unwrap(), None);
        assert_eq!(resolve_dealer(&store, Some(String::new())).unwrap(), None);
        assert_eq!(
            resolve_dealer(&store, Some("2".to_string())).unwrap(),
            Some(DealerId::new(2))
        );

        assert!(matches!(
            resolve_dealer(&store, Some("barrett".to_string())).unwrap_err(),
            SalesError::Validation(_)
        ));
        assert!(resolve_dealer(&store, Some("9".to_string()))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_resolve_period_falls_back_to_settings() {
        let settings = Settings::default();

        let period = resolve_period(&settings, None).unwrap();
        assert_eq!(period, ReportPeriod::Trailing12);

        let period = resolve_period(&settings, Some("Q2 2025".to_string())).unwrap();
        assert_eq!(
            period,
            ReportPeriod::Quarter {
                quarter: 2,
                year: 2025
            }
        );

        assert!(resolve_period(&settings, Some("Q5 2025".to_string()))
            .unwrap_err()
            .is_invalid_period());
    }
}
