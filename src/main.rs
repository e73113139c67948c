use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use salesdash::cli::{handle_data_command, handle_report_command, DataCommands, ReportCommands};
use salesdash::config::{paths::SalesPaths, settings::Settings};
use salesdash::generator;

#[derive(Parser)]
#[command(
    name = "salesdash",
    version,
    about = "Terminal-based sales analytics dashboard for dealer networks",
    long_about = "salesdash renders sales analytics for a dealer network in the \
                  terminal: category and product breakdowns, sales-over-time \
                  series, customer leaderboards, and dealer summaries, all over \
                  a deterministic demo dataset."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the dataset seed
    #[arg(long, global = true, env = "SALESDASH_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Inspect the dataset
    #[command(subcommand)]
    Data(DataCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = SalesPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // The dataset is built once up front and borrowed by every command
    let seed = cli.seed.unwrap_or(settings.seed);
    let store = generator::generate(seed);

    match cli.command {
        Commands::Report(cmd) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Commands::Data(cmd) => {
            handle_data_command(&store, cmd)?;
        }
        Commands::Config => {
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file: {}", paths.settings_file().display());
            println!("Default period: {}", settings.default_period);
            println!("Default top-N: {}", settings.default_top_n);
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Dataset seed: {}", seed);
        }
    }

    Ok(())
}

/// Initialize the global tracing subscriber with sensible defaults
fn init_tracing() {
    let filter = EnvFilter::from_default_env().add_directive("salesdash=warn".parse().unwrap());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
