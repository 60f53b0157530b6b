pub mod cli;
pub mod core;
pub mod providers;

use crate::core::{RatesSource, config::AppConfig, fetch_rates};
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Rates {
        json: bool,
    },
    Convert {
        amount: Option<String>,
        currency: Option<String>,
    },
    Currencies,
}

/// Loads the config, fetches one fixing snapshot and runs `command` on it.
/// `rates_file` reads the feed from disk instead of the CNB endpoint.
pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    rates_file: Option<&str>,
) -> Result<()> {
    info!("cnbfx starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let source: Box<dyn RatesSource + Send + Sync> = match rates_file {
        Some(path) => Box::new(providers::FileSource::new(path)),
        None => Box::new(providers::CnbProvider::new(config.cnb_base_url())),
    };

    let pb = cli::ui::new_spinner("Fetching latest exchange rates from Czech National Bank...");
    let data = fetch_rates(source.as_ref()).await;
    pb.finish_and_clear();
    let data = data?;

    match command {
        AppCommand::Rates { json } => cli::rates::run(&data, json),
        AppCommand::Convert { amount, currency } => {
            let amount = match amount {
                Some(input) => cli::convert::parse_amount(&input),
                None => cli::convert::validate_amount(config.default_amount),
            };
            let currency = currency.unwrap_or(config.default_currency);
            cli::convert::run(&data, amount, &currency)
        }
        AppCommand::Currencies => {
            cli::currencies::run(&data);
            Ok(())
        }
    }
}
