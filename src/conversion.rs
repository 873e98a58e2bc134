use std::fmt::Display;

use colored::Colorize;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::allocation::AllocationPair;
use crate::error::{Result, SplitError};
use crate::rates::RateTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionResult {
    pub symbol: String,
    pub dollars_allocated: Decimal,
    pub asset_amount: Decimal,
}

impl ConversionResult {
    pub fn colored(&self) -> String {
        format!(
            "${} => {} {}",
            self.dollars_allocated.normalize().to_string().yellow(),
            self.asset_amount.normalize().to_string().purple(),
            self.symbol.bold()
        )
    }
}

impl Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${} => {} {}",
            self.dollars_allocated.normalize(),
            self.asset_amount.normalize(),
            self.symbol
        )
    }
}

impl AllocationPair {
    pub fn dollars_allocated(&self, total_amount: Decimal) -> Result<Decimal> {
        self.percentage
            .checked_div(dec!(100))
            .and_then(|share| total_amount.checked_mul(share))
            .ok_or_else(|| self.overflow())
    }

    fn overflow(&self) -> SplitError {
        SplitError::Overflow {
            symbol: self.symbol.clone(),
        }
    }
}

pub fn convert(
    pair: &AllocationPair,
    total_amount: Decimal,
    rates: &RateTable,
) -> Result<ConversionResult> {
    let rate = rates.rate(&pair.symbol)?;
    let dollars_allocated = pair.dollars_allocated(total_amount)?;
    let asset_amount = dollars_allocated
        .checked_mul(rate)
        .ok_or_else(|| pair.overflow())?;
    Ok(ConversionResult {
        symbol: pair.symbol.clone(),
        dollars_allocated,
        asset_amount,
    })
}

/// Converts every pair, stopping at the first failure.
pub fn convert_all(
    pairs: &[AllocationPair],
    total_amount: Decimal,
    rates: &RateTable,
) -> Result<Vec<ConversionResult>> {
    pairs
        .iter()
        .map(|pair| convert(pair, total_amount, rates))
        .collect()
}
