//! Abstraction over where the raw fixing feed comes from.

use crate::core::parser;
use crate::core::rates::ExchangeRatesData;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait RatesSource: Send + Sync {
    /// Returns the raw feed body.
    async fn fetch_text(&self) -> Result<String>;

    /// Human readable origin of the feed, used in log and error messages.
    fn describe(&self) -> String;
}

/// Fetches the feed from `source` and parses it into a snapshot.
pub async fn fetch_rates(source: &(dyn RatesSource + Send + Sync)) -> Result<ExchangeRatesData> {
    let text = source.fetch_text().await?;
    debug!(source = %source.describe(), bytes = text.len(), "Fetched rates feed");
    let data = parser::parse(&text)?;
    Ok(data)
}
