use std::time::Duration;

use thirtyfour::error::WebDriverError;

/// Failures a single scrape attempt can end in. None of these are retried
/// internally; they propagate to the caller with the session already closed.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("failed to start browser session: {0}")]
    SessionStart(#[source] WebDriverError),

    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: WebDriverError,
    },

    #[error("listing container did not appear within {0:?}")]
    Timeout(Duration),

    #[error("browser command failed: {0}")]
    Command(#[source] WebDriverError),
}
