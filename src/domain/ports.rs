use scraper::{ElementRef, Html};

use crate::utils::error::Result;

/// Configuration surface the client is built from. Implemented by both the
/// CLI arguments and the TOML config.
pub trait ClientOptions: Send + Sync {
    fn base_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn retry_attempts(&self) -> u32;
    fn retry_delay_seconds(&self) -> u64;
}

/// Build a shape from a single DOM element.
pub trait FromElement: Sized {
    fn from_element(element: ElementRef<'_>) -> Result<Self>;

    /// Map a list of elements, dropping the ones that fail to parse. One
    /// malformed card must not take down a whole listing.
    fn from_elements(elements: &[ElementRef<'_>]) -> Vec<Self> {
        elements
            .iter()
            .filter_map(|element| match Self::from_element(*element) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    tracing::debug!("Skipping unparsable element: {}", err);
                    None
                }
            })
            .collect()
    }
}

/// Build a page-level aggregate from a full document.
pub trait FromHtml: Sized {
    fn from_html(html: &Html) -> Result<Self>;
}

/// Expansion into URL query pairs.
pub trait ToQueryPairs {
    fn to_query_pairs(&self) -> Vec<(String, String)>;
}
