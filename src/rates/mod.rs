use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::allocation::parse_decimal;
use crate::error::{Result, SplitError};

pub mod coinbase;

/// Exchange rates keyed by asset symbol, expressed as units of the asset per
/// one unit of the base currency. Rates are kept as reported upstream and only
/// parsed on lookup.
#[derive(Clone, Debug, Default)]
pub struct RateTable {
    currency: String,
    rates: HashMap<String, String>,
}

impl RateTable {
    pub fn new(currency: &str, rates: HashMap<String, String>) -> Self {
        Self {
            currency: currency.to_string(),
            rates,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Looks up the rate for `symbol`. Missing and non numeric rates are both
    /// reported as [`SplitError::UnknownSymbol`].
    pub fn rate(&self, symbol: &str) -> Result<Decimal> {
        let raw = self
            .rates
            .get(symbol)
            .ok_or_else(|| SplitError::UnknownSymbol(symbol.to_string()))?;
        parse_decimal(raw).ok_or_else(|| {
            debug!("rate {:?} for {} is not a number", raw, symbol);
            SplitError::UnknownSymbol(symbol.to_string())
        })
    }
}

impl<K, V> FromIterator<(K, V)> for RateTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            currency: coinbase::DEFAULT_CURRENCY.to_string(),
            rates: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

pub trait RateProvider {
    async fn fetch_rates(&self) -> Result<RateTable>;
}

/// Serves a fixed rate table, for offline runs.
#[derive(Clone, Debug, Default)]
pub struct StaticRates {
    table: RateTable,
}

impl StaticRates {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }
}

impl RateProvider for StaticRates {
    async fn fetch_rates(&self) -> Result<RateTable> {
        Ok(self.table.clone())
    }
}
