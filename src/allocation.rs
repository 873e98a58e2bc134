use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::error::{Result, SplitError};

/// Share of the total amount assigned to one asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationPair {
    pub symbol: String,
    pub percentage: Decimal,
}

impl AllocationPair {
    pub fn new(symbol: &str, percentage: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            percentage,
        }
    }
}

/// Splits a comma separated list, trimming whitespace around each entry.
pub fn parse_csv(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parses plain or scientific notation, e.g. `70`, `0.7e2`.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Pairs symbols with percentages by index.
///
/// Percentages are decimals, so the sum is compared against 100 exactly.
pub fn validate<S: AsRef<str>>(symbols: &[S], percentages: &[S]) -> Result<Vec<AllocationPair>> {
    if symbols.len() != percentages.len() {
        return Err(SplitError::LengthMismatch {
            symbols: symbols.len(),
            percentages: percentages.len(),
        });
    }

    let mut pairs = Vec::with_capacity(symbols.len());
    for (index, (symbol, percentage)) in symbols.iter().zip(percentages).enumerate() {
        let symbol = symbol.as_ref().trim().to_uppercase();
        if symbol.is_empty() {
            return Err(SplitError::EmptySymbol { index });
        }

        let raw = percentage.as_ref().trim();
        let percentage = parse_decimal(raw).ok_or_else(|| SplitError::Parse {
            index,
            value: raw.to_string(),
        })?;
        if percentage < Decimal::ZERO || percentage > dec!(100) {
            return Err(SplitError::PercentageOutOfRange {
                index,
                value: percentage,
            });
        }

        pairs.push(AllocationPair { symbol, percentage });
    }

    let total: Decimal = pairs.iter().map(|p| p.percentage).sum();
    if total != dec!(100) {
        return Err(SplitError::Sum(total));
    }

    debug!("validated {} allocation pairs", pairs.len());
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let pairs = validate(&["BTC", "ETH"], &["70", "30"]).unwrap();
        assert_eq!(
            pairs,
            vec![
                AllocationPair::new("BTC", dec!(70)),
                AllocationPair::new("ETH", dec!(30)),
            ]
        );
    }

    #[test]
    fn test_validate_normalizes_input() {
        let pairs = validate(&[" btc", "Eth "], &[" 50.5", "49.5 "]).unwrap();
        assert_eq!(pairs[0], AllocationPair::new("BTC", dec!(50.5)));
        assert_eq!(pairs[1], AllocationPair::new("ETH", dec!(49.5)));
    }

    #[test]
    fn test_validate_duplicate_symbols() {
        let pairs = validate(&["BTC", "BTC"], &["50", "50"]).unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_validate_length_mismatch() {
        let res = validate(&["BTC", "ETH", "SOL"], &["70", "30"]);
        assert!(matches!(
            res,
            Err(SplitError::LengthMismatch {
                symbols: 3,
                percentages: 2
            })
        ));
    }

    #[test]
    fn test_validate_parse_error() {
        let res = validate(&["BTC", "ETH"], &["70", "thirty"]);
        match res {
            Err(SplitError::Parse { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "thirty");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_validate_scientific_notation() {
        let pairs = validate(&["BTC", "ETH"], &["7e1", "3e1"]).unwrap();
        assert_eq!(pairs[0].percentage, dec!(70));
        assert_eq!(pairs[1].percentage, dec!(30));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("70"), Some(dec!(70)));
        assert_eq!(parse_decimal("2.5e-1"), Some(dec!(0.25)));
        assert_eq!(parse_decimal("seventy"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_validate_sum() {
        let res = validate(&["BTC", "ETH"], &["70", "20"]);
        assert!(matches!(res, Err(SplitError::Sum(total)) if total == dec!(90)));

        let res = validate(&["BTC", "ETH"], &["70", "30.0000001"]);
        assert!(matches!(res, Err(SplitError::Sum(_))));
    }

    #[test]
    fn test_validate_decimal_sum_is_exact() {
        let pairs = validate(&["A", "B", "C"], &["33.3", "33.3", "33.4"]);
        assert!(pairs.is_ok());

        let pairs = validate(&["A", "B", "C", "D"], &["0.1", "0.2", "99.6", "0.1"]);
        assert!(pairs.is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        let res = validate(&["BTC", "ETH"], &["130", "-30"]);
        assert!(matches!(
            res,
            Err(SplitError::PercentageOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_empty_symbol() {
        let res = validate(&["BTC", " "], &["70", "30"]);
        assert!(matches!(res, Err(SplitError::EmptySymbol { index: 1 })));
    }

    #[test]
    fn test_parse_csv() {
        assert_eq!(parse_csv("BTC, ETH ,SOL"), vec!["BTC", "ETH", "SOL"]);
        assert_eq!(parse_csv("70"), vec!["70"]);
        assert_eq!(parse_csv(""), vec![""]);
    }
}
