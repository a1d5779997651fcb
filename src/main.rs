use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weimaraner_scraper::config::{find_config_file, load_config};
use weimaraner_scraper::output::write_outcome;
use weimaraner_scraper::scrape;

/// Weimaraner Scraper - Save the breed-history page as structured JSON
#[derive(Parser, Debug)]
#[command(name = "weimaraner-scraper")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scrape the Weimaraner breed-history page into structured JSON", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to scrape (overrides the configuration)
    #[arg(long)]
    url: Option<String>,

    /// Output file (overrides the configuration)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Request timeout in seconds (overrides the configuration)
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("weimaraner_scraper={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in the working directory
    let config_path = cli.config.clone().or_else(find_config_file);
    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }
    let mut config = load_config(config_path.as_deref())?;

    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let outcome = scrape(&config).await;
    write_outcome(&outcome, &config.output)?;

    if !cli.quiet {
        match outcome.error() {
            None => println!(
                "Scraping completed. Data saved to {}",
                config.output.display()
            ),
            Some(error) => println!(
                "Scraping failed ({}). Error saved to {}",
                error,
                config.output.display()
            ),
        }
    }

    Ok(())
}
