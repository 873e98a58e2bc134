use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

/// Every way a split can fail. All of them end the current run.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("symbols and percentages lists must be of the same length ({symbols} symbols, {percentages} percentages)")]
    LengthMismatch { symbols: usize, percentages: usize },

    #[error("error converting number at index {index}: {value:?} is not a valid number")]
    Parse { index: usize, value: String },

    #[error("percentage at index {index} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { index: usize, value: Decimal },

    #[error("symbol at index {index} is empty")]
    EmptySymbol { index: usize },

    #[error("percentages must add up to 100, got {0}")]
    Sum(Decimal),

    #[error("invalid amount {0:?}: expected a non-negative number")]
    InvalidAmount(String),

    #[error("converting {symbol} overflowed, the amount is too large")]
    Overflow { symbol: String },

    #[error("no usable exchange rate for symbol {0}")]
    UnknownSymbol(String),

    #[error("error fetching exchange rates: {0}")]
    Network(#[from] reqwest::Error),

    #[error("error decoding exchange rates: {0}")]
    Decode(#[from] serde_json::Error),
}
