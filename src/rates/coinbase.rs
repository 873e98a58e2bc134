use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::rates::{RateProvider, RateTable};

pub const ENDPOINT: &str = "https://api.coinbase.com";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize, Debug, Clone)]
pub struct ExchangeRates {
    pub data: RatesData,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RatesData {
    pub currency: String,
    pub rates: HashMap<String, String>,
}

impl From<ExchangeRates> for RateTable {
    fn from(value: ExchangeRates) -> Self {
        RateTable::new(&value.data.currency, value.data.rates)
    }
}

/// Public exchange rate API, no credentials needed.
#[derive(Debug, Clone)]
pub struct Coinbase {
    client: Client,
    endpoint: String,
    currency: String,
}

impl Coinbase {
    pub fn with_config(endpoint: &str, currency: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            currency: currency.to_uppercase(),
        })
    }
}

impl RateProvider for Coinbase {
    async fn fetch_rates(&self) -> Result<RateTable> {
        let url = format!("{}/v2/exchange-rates", self.endpoint);
        debug!("Getting exchange rates {} currency={}", url, self.currency);
        let r = self
            .client
            .get(url)
            .query(&[("currency", self.currency.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let r = r.text().await?;
        let r: ExchangeRates = serde_json::de::from_str(r.as_str())?;
        info!(
            "Fetched {} exchange rates for {}",
            r.data.rates.len(),
            r.data.currency
        );
        Ok(r.into())
    }
}
