use async_trait::async_trait;

use crate::{CompanyListing, FetchError, Logo, Quote};

/// Focused role trait for sources that list the tracked companies.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Fetch the current list of tracked companies.
    async fn company_list(&self) -> Result<Vec<CompanyListing>, FetchError>;
}

/// Focused role trait for sources that provide quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch a point-in-time quote for the given symbol.
    async fn quote(&self, symbol: &str) -> Result<Quote, FetchError>;
}

/// Focused role trait for sources that provide company logos.
///
/// Logo fetches have no decode-error path: a delivered body is returned
/// verbatim, so the only failure kind is [`FetchError::Network`].
#[async_trait]
pub trait LogoProvider: Send + Sync {
    /// Fetch the logo image bytes for the given symbol.
    async fn logo(&self, symbol: &str) -> Result<Logo, FetchError>;
}

/// Umbrella contract the screen consumes as a single `Arc<dyn MarketSource>`.
///
/// Blanket-implemented for anything that provides all three roles, so
/// connectors only implement the focused traits.
pub trait MarketSource: DirectoryProvider + QuoteProvider + LogoProvider {}

impl<T> MarketSource for T where T: DirectoryProvider + QuoteProvider + LogoProvider + ?Sized {}
