use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use magpie::{
    configuration::get_configuration,
    export,
    services::{ChromeSessionProvider, Fetcher},
};

#[derive(Parser)]
#[command(about = "Scrape product names, prices and ratings from a listing page")]
struct Args {
    /// E-commerce listing page URL
    url: String,

    /// Destination CSV file
    #[arg(short, long, default_value = "listing.csv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let configuration = get_configuration().expect("Failed to read configuration.");

    let provider = ChromeSessionProvider::new(configuration.webdriver.server_url.clone());
    let fetcher = Fetcher::new(
        provider,
        configuration.scrape.wait_timeout(),
        configuration.scrape.poll_interval(),
        configuration.scrape.settle_policy(),
    );

    let result = fetcher.scrape(&args.url).await?;

    if result.is_empty() {
        log::error!("No data found on the website.");
        std::process::exit(1);
    }

    export::export_csv(&args.output, &result)?;
    log::info!("Data saved to {}", args.output.display());

    Ok(())
}
