use tracing::debug;

pub mod allocation;
pub mod conversion;
pub mod error;
pub mod presenter;
pub mod rates;
pub mod request;

pub use allocation::{validate, AllocationPair};
pub use conversion::{convert, convert_all, ConversionResult};
pub use error::{Result, SplitError};
pub use rates::{RateProvider, RateTable};
pub use request::SplitRequest;

/// Fetches rates, validates the allocation, then converts every pair.
pub async fn split<P: RateProvider>(
    provider: &P,
    request: &SplitRequest,
) -> Result<Vec<ConversionResult>> {
    let rates = provider.fetch_rates().await?;
    debug!(
        "Using {} rates quoted in {}",
        rates.len(),
        rates.currency()
    );
    let pairs = validate(&request.symbols, &request.percentages)?;
    convert_all(&pairs, request.amount, &rates)
}
