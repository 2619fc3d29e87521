//! Remote quote service access.

pub mod quote_source;

pub use quote_source::{HttpQuoteSource, QuoteFetchError, QuoteSource, DEFAULT_QUOTE_ENDPOINT};
