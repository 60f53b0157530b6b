use crate::core::RatesSource;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};

/// Fetches the daily fixing published by the Czech National Bank.
pub struct CnbProvider {
    base_url: String,
}

impl CnbProvider {
    pub fn new(base_url: &str) -> Self {
        CnbProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn daily_url(&self) -> String {
        format!("{}/daily.txt", self.base_url)
    }
}

#[async_trait]
impl RatesSource for CnbProvider {
    #[instrument(name = "CnbDailyFetch", skip(self))]
    async fn fetch_text(&self) -> Result<String> {
        let url = self.daily_url();
        debug!("Requesting daily fixing from {}", url);

        let client = reqwest::Client::builder().user_agent("cnbfx/1.0").build()?;
        let response = client
            .get(&url)
            .header(ACCEPT, "text/plain")
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for daily fixing: {}",
                response.status(),
                url
            ));
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text from {url}"))?;

        if text.trim().is_empty() {
            return Err(anyhow!("Received empty response from {}", url));
        }

        Ok(text)
    }

    fn describe(&self) -> String {
        self.daily_url()
    }
}
