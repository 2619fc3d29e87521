//! Quote source contract and the HTTP implementation.
//!
//! # Invariants
//! - One plain GET per fetch: no auth, no custom headers, no retry, no timeout.
//! - Any non-2xx status is an error, whatever the body says.

use crate::model::quote::Quote;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Public random-quote endpoint used when nothing else is configured.
pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://api.quotable.io/random";

/// Failure while fetching one quote.
#[derive(Debug)]
pub enum QuoteFetchError {
    /// Transport failed before a complete response was read.
    Network(reqwest::Error),
    /// Response arrived with a non-success status.
    Status(u16),
    /// Body was not a `{content, author}` object.
    Parse(serde_json::Error),
}

impl QuoteFetchError {
    /// Stable short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status(_) => "http_status",
            Self::Parse(_) => "parse",
        }
    }
}

impl Display for QuoteFetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(err) => write!(f, "quote request failed: {err}"),
            Self::Status(status) => write!(f, "HTTP error! status: {status}"),
            Self::Parse(err) => write!(f, "quote response is not valid JSON quote: {err}"),
        }
    }
}

impl Error for QuoteFetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Status(_) => None,
        }
    }
}

/// Supplies one random quote per call.
#[async_trait(?Send)]
pub trait QuoteSource {
    async fn fetch_quote(&self) -> Result<Quote, QuoteFetchError>;
}

/// `reqwest`-backed quote source.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQuoteSource {
    /// Builds a source for `endpoint`.
    ///
    /// # Errors
    /// - Returns `Network` when the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, QuoteFetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(QuoteFetchError::Network)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_quote(&self) -> Result<Quote, QuoteFetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(QuoteFetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteFetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(QuoteFetchError::Network)?;
        serde_json::from_str::<Quote>(&body).map_err(QuoteFetchError::Parse)
    }
}
