use std::time::Duration;

use rand::Rng;
use scraper::Html;
use tokio::time::Instant;

use crate::{
    domain::ExtractionResult,
    error::ScrapeError,
    services::{extract_listing, ListingSession, SessionConfig, SessionProvider},
};

/// Minimal load condition: at least one result item inside the main slot.
const LISTING_CONTAINER_SELECTOR: &str = ".s-main-slot .s-result-item";

/// Bounds for the randomized wait applied after the load condition holds,
/// giving asynchronously populated content time to land before the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SettlePolicy {
    min: Duration,
    max: Duration,
}

impl SettlePolicy {
    pub fn new(min: Duration, max: Duration) -> Self {
        SettlePolicy { min, max }
    }

    /// No settle delay at all. For tests.
    pub fn none() -> Self {
        SettlePolicy {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn draw(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

/// Runs one fetch end to end: acquire a session, navigate, wait for the
/// listing to load, settle, snapshot, and close the session no matter what.
pub struct Fetcher<P: SessionProvider> {
    provider: P,
    wait_timeout: Duration,
    poll_interval: Duration,
    settle: SettlePolicy,
}

impl<P: SessionProvider> Fetcher<P> {
    pub fn new(
        provider: P,
        wait_timeout: Duration,
        poll_interval: Duration,
        settle: SettlePolicy,
    ) -> Self {
        Fetcher {
            provider,
            wait_timeout,
            poll_interval,
            settle,
        }
    }

    /// Fetch the page and extract listing fields from the settled snapshot.
    pub async fn scrape(&self, url: &str) -> Result<ExtractionResult, ScrapeError> {
        let page_source = self.fetch(url).await?;
        let document = Html::parse_document(&page_source);
        let result = extract_listing(&document);

        log::info!(
            "Extracted {} names, {} prices, {} ratings from {}",
            result.names.len(),
            result.prices.len(),
            result.ratings.len(),
            url,
        );

        Ok(result)
    }

    /// Fetch the fully-settled page source. Each call gets a fresh session
    /// with its own randomized identity; the session is closed on every path
    /// before the first error, if any, propagates.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let config = SessionConfig::randomized();
        let session = self.provider.acquire(&config).await?;

        let result = self.fetch_with_session(session.as_ref(), url).await;
        session.close().await;

        result
    }

    async fn fetch_with_session(
        &self,
        session: &dyn ListingSession,
        url: &str,
    ) -> Result<String, ScrapeError> {
        session
            .goto(url)
            .await
            .map_err(|e| ScrapeError::Navigation {
                url: url.to_string(),
                source: e,
            })?;

        self.wait_for_listing(session).await?;

        tokio::time::sleep(self.settle.draw()).await;

        session.page_source().await.map_err(ScrapeError::Command)
    }

    async fn wait_for_listing(&self, session: &dyn ListingSession) -> Result<(), ScrapeError> {
        let deadline = Instant::now() + self.wait_timeout;

        loop {
            if session
                .element_present(LISTING_CONTAINER_SELECTOR)
                .await
                .map_err(ScrapeError::Command)?
            {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(ScrapeError::Timeout(self.wait_timeout));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
