use std::time::Duration;

use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::config::DEFAULT_BASE_URL;
use crate::domain::filter::{HomeParameters, MangaListParameter};
use crate::domain::model::{
    RawKumaChapterData, RawKumaHomeData, RawKumaMangaDetailData, RawKumaSearch,
};
use crate::domain::ports::{ClientOptions, FromHtml, ToQueryPairs};
use crate::utils::error::{Result, ScrapeError};

/// Async client for the site. One instance per base URL; every operation
/// fetches a single page and parses it into its transfer shape.
#[derive(Debug, Clone)]
pub struct RawKumaClient {
    http: Client,
    base_url: Url,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl Default for RawKumaClient {
    fn default() -> Self {
        Self::with_http_client(
            Client::new(),
            Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        )
    }
}

impl RawKumaClient {
    pub fn new(options: &impl ClientOptions) -> Result<Self> {
        let http = Client::builder()
            .user_agent(options.user_agent())
            .timeout(Duration::from_secs(options.timeout_seconds()))
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(options.base_url())?,
            retry_attempts: options.retry_attempts(),
            retry_delay: Duration::from_secs(options.retry_delay_seconds()),
        })
    }

    /// Wraps a prebuilt reqwest client, without retries. Used by the tests to
    /// point the scraper at a mock server.
    pub fn with_http_client(http: Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            retry_attempts: 0,
            retry_delay: Duration::ZERO,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch_html(&self, url: Url) -> Result<Html> {
        let body = self.fetch_text(url).await?;
        Ok(Html::parse_document(&body))
    }

    // 重試僅涵蓋傳輸錯誤與 5xx,其他狀態碼立即回報
    async fn fetch_text(&self, url: Url) -> Result<String> {
        let mut attempt = 0u32;
        loop {
            tracing::debug!("GET {}", url);
            match self.http.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response.text().await?);
                    }
                    if status.is_server_error() && attempt < self.retry_attempts {
                        attempt += 1;
                        tracing::warn!(
                            "🔶 {} from {}, retrying ({}/{})",
                            status,
                            url,
                            attempt,
                            self.retry_attempts
                        );
                        tokio::time::sleep(self.retry_delay).await;
                        continue;
                    }
                    return Err(ScrapeError::Status {
                        status,
                        url: url.to_string(),
                    });
                }
                Err(err) => {
                    if attempt < self.retry_attempts {
                        attempt += 1;
                        tracing::warn!(
                            "🔶 Request to {} failed: {}, retrying ({}/{})",
                            url,
                            err,
                            attempt,
                            self.retry_attempts
                        );
                        tokio::time::sleep(self.retry_delay).await;
                        continue;
                    }
                    return Err(err.into());
                }
            }
        }
    }

    fn slug_url(&self, slug: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, slug))?)
    }

    pub async fn home(&self, params: HomeParameters) -> Result<RawKumaHomeData> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(params.to_query_pairs());
        self.home_url(url).await
    }

    pub async fn home_url(&self, url: Url) -> Result<RawKumaHomeData> {
        let html = self.fetch_html(url).await?;
        RawKumaHomeData::from_html(&html)
    }

    pub async fn manga_details(&self, manga_slug: &str) -> Result<RawKumaMangaDetailData> {
        self.manga_details_url(self.slug_url(manga_slug)?).await
    }

    pub async fn manga_details_url(&self, url: Url) -> Result<RawKumaMangaDetailData> {
        let html = self.fetch_html(url).await?;
        RawKumaMangaDetailData::from_html(&html)
    }

    pub async fn chapter(&self, chapter_slug: &str) -> Result<RawKumaChapterData> {
        self.chapter_url(self.slug_url(chapter_slug)?).await
    }

    pub async fn chapter_url(&self, url: Url) -> Result<RawKumaChapterData> {
        let html = self.fetch_html(url).await?;
        RawKumaChapterData::from_html(&html)
    }

    pub async fn search(&self, query: &str, page: Option<u16>) -> Result<RawKumaSearch> {
        let url = match page {
            None => Url::parse_with_params(self.base_url.as_str(), [("s", query)])?,
            Some(page) => {
                let base = self.base_url.as_str().trim_end_matches('/');
                Url::parse_with_params(&format!("{}/page/{}/", base, page), [("s", query)])?
            }
        };
        self.search_url(url).await
    }

    pub async fn manga_list(&self, params: Option<MangaListParameter>) -> Result<RawKumaSearch> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let listing = format!("{}/manga/", base);
        let url = match params {
            None => Url::parse(&listing)?,
            Some(params) => Url::parse_with_params(&listing, params.to_query_pairs())?,
        };
        self.search_url(url).await
    }

    pub async fn search_url(&self, url: Url) -> Result<RawKumaSearch> {
        let html = self.fetch_html(url).await?;
        RawKumaSearch::from_html(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct TestOptions {
        base_url: String,
        retry_attempts: u32,
    }

    impl ClientOptions for TestOptions {
        fn base_url(&self) -> &str {
            &self.base_url
        }
        fn user_agent(&self) -> &str {
            "rawkuma-scraper-tests"
        }
        fn timeout_seconds(&self) -> u64 {
            5
        }
        fn retry_attempts(&self) -> u32 {
            self.retry_attempts
        }
        fn retry_delay_seconds(&self) -> u64 {
            0
        }
    }

    const EMPTY_RESULT_PAGE: &str = r#"<html><body><div id="content"></div></body></html>"#;

    #[tokio::test]
    async fn test_search_hits_query_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/").query_param("s", "hero");
            then.status(200).body(EMPTY_RESULT_PAGE);
        });

        let client = RawKumaClient::with_http_client(
            Client::new(),
            Url::parse(&server.base_url()).unwrap(),
        );
        let search = client.search("hero", None).await.unwrap();

        mock.assert();
        assert!(search.result.is_empty());
    }

    #[tokio::test]
    async fn test_search_with_page_uses_paged_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/page/3/").query_param("s", "hero");
            then.status(200).body(EMPTY_RESULT_PAGE);
        });

        let client = RawKumaClient::with_http_client(
            Client::new(),
            Url::parse(&server.base_url()).unwrap(),
        );
        client.search("hero", Some(3)).await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_then_reported() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/manga/");
            then.status(503);
        });

        let options = TestOptions {
            base_url: server.base_url(),
            retry_attempts: 2,
        };
        let client = RawKumaClient::new(&options).unwrap();
        let result = client.manga_list(None).await;

        // Initial request plus two retries.
        mock.assert_hits(3);
        assert!(matches!(
            result,
            Err(ScrapeError::Status { status, .. }) if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/missing-title");
            then.status(404);
        });

        let options = TestOptions {
            base_url: server.base_url(),
            retry_attempts: 2,
        };
        let client = RawKumaClient::new(&options).unwrap();
        let result = client.manga_details("missing-title").await;

        mock.assert_hits(1);
        assert!(matches!(result, Err(ScrapeError::Status { .. })));
    }
}
