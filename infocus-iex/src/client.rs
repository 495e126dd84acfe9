use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use infocus_core::{
    CompanyListing, DirectoryProvider, FetchError, Logo, LogoProvider, Quote, QuoteProvider,
};

use crate::wire;

/// Default host for the company-list and quote endpoints.
pub const DEFAULT_API_BASE: &str = "https://api.iextrading.com";
/// Default host for the logo endpoint (logos are served from a separate CDN).
pub const DEFAULT_LOGO_BASE: &str = "https://storage.googleapis.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration error raised by [`IexConnectorBuilder::build`].
///
/// Kept separate from [`FetchError`]: a misconfigured connector is not a
/// failed fetch.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A base URL did not parse.
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// A base URL cannot carry path segments (e.g. `data:` URLs).
    #[error("base url cannot be a base: {0}")]
    NotABase(String),

    /// The underlying HTTP client failed to construct.
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Builder for [`IexConnector`].
///
/// The base overrides exist so tests can point the connector at a local mock
/// server; the timeout is a client-level bound with no pipeline semantics.
#[derive(Debug, Clone)]
pub struct IexConnectorBuilder {
    api_base: String,
    logo_base: String,
    timeout: Duration,
}

impl Default for IexConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IexConnectorBuilder {
    /// Create a builder with the production endpoints and a 10 s timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            logo_base: DEFAULT_LOGO_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the host serving the company-list and quote endpoints.
    #[must_use]
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Override the host serving logo images.
    #[must_use]
    pub fn logo_base(mut self, base: impl Into<String>) -> Self {
        self.logo_base = base.into();
        self
    }

    /// Override the client-level request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns [`BuildError`] if a base URL is invalid or the HTTP client
    /// fails to construct.
    pub fn build(self) -> Result<IexConnector, BuildError> {
        let api_base = parse_base(&self.api_base)?;
        let logo_base = parse_base(&self.logo_base)?;
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(IexConnector {
            http,
            api_base,
            logo_base,
        })
    }
}

fn parse_base(raw: &str) -> Result<Url, BuildError> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(BuildError::NotABase(raw.to_string()));
    }
    Ok(url)
}

/// HTTP connector against the IEX-style REST endpoints.
///
/// Implements the three provider roles the screen consumes. Status mapping:
/// anything other than 200 is a [`FetchError::Network`]; malformed JSON on
/// the directory or quote endpoints is a [`FetchError::Decode`]; the logo
/// endpoint has no decode path.
pub struct IexConnector {
    http: reqwest::Client,
    api_base: Url,
    logo_base: Url,
}

impl IexConnector {
    /// Start building a connector.
    #[must_use]
    pub fn builder() -> IexConnectorBuilder {
        IexConnectorBuilder::new()
    }

    /// Build a connector against the production endpoints.
    ///
    /// # Errors
    /// Returns [`BuildError`] if the HTTP client fails to construct.
    pub fn new_default() -> Result<Self, BuildError> {
        Self::builder().build()
    }

    fn endpoint(base: &Url, segments: &[&str]) -> Url {
        let mut url = base.clone();
        // Bases are validated at build time, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_bytes(&self, url: Url, what: &'static str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(%url, what, "issuing GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(format!("{what}: {e}")))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(what, %status, "unexpected status");
            return Err(FetchError::network(format!(
                "{what}: unexpected status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(format!("{what}: {e}")))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl DirectoryProvider for IexConnector {
    async fn company_list(&self) -> Result<Vec<CompanyListing>, FetchError> {
        let url = Self::endpoint(
            &self.api_base,
            &["1.0", "stock", "market", "list", "infocus"],
        );
        let body = self.get_bytes(url, "company list").await?;
        wire::decode_company_list(&body)
    }
}

#[async_trait]
impl QuoteProvider for IexConnector {
    async fn quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        let url = Self::endpoint(&self.api_base, &["1.0", "stock", symbol, "quote"]);
        let body = self.get_bytes(url, "quote").await?;
        wire::decode_quote(&body)
    }
}

#[async_trait]
impl LogoProvider for IexConnector {
    async fn logo(&self, symbol: &str) -> Result<Logo, FetchError> {
        let file = format!("{symbol}.png");
        let url = Self::endpoint(&self.logo_base, &["iex", "api", "logos", &file]);
        let body = self.get_bytes(url, "logo").await?;
        if body.is_empty() {
            return Err(FetchError::network("logo: empty body"));
        }
        Ok(Logo::new(body))
    }
}
