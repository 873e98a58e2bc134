use rust_decimal::Decimal;

use crate::allocation::{parse_csv, parse_decimal};
use crate::error::{Result, SplitError};

/// One invocation's worth of input, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitRequest {
    pub amount: Decimal,
    pub symbols: Vec<String>,
    pub percentages: Vec<String>,
}

impl SplitRequest {
    /// `overrides` replace the leading entries of the symbol list in order.
    /// Overrides past the end of the list are appended.
    pub fn new(
        amount: &str,
        symbols: &str,
        percentages: &str,
        overrides: &[Option<String>],
    ) -> Result<Self> {
        let amount = parse_amount(amount)?;
        let mut symbols = parse_csv(symbols);
        for (index, symbol) in overrides.iter().enumerate() {
            let Some(symbol) = symbol.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            match symbols.get_mut(index) {
                Some(slot) => *slot = symbol.to_string(),
                None => symbols.push(symbol.to_string()),
            }
        }
        Ok(Self {
            amount,
            symbols,
            percentages: parse_csv(percentages),
        })
    }
}

pub fn parse_amount(value: &str) -> Result<Decimal> {
    let value = value.trim();
    let invalid = || SplitError::InvalidAmount(value.to_string());
    let amount = parse_decimal(value).ok_or_else(invalid)?;
    if amount.is_sign_negative() {
        return Err(invalid());
    }
    Ok(amount)
}
