use async_trait::async_trait;
use fake_user_agent::get_rua;
use thirtyfour::{error::WebDriverResult, By, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use crate::error::ScrapeError;

/// Launch options for one browser session. Built fresh per fetch and never
/// reused, so consecutive fetches present different user agents.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub user_agent: String,
    pub headless: bool,
    /// Sandbox and /dev/shm flags are headless-environment compatibility
    /// switches, not a security posture.
    pub no_sandbox: bool,
    pub disable_dev_shm: bool,
    pub suppress_automation_fingerprint: bool,
}

impl SessionConfig {
    /// Config with a user agent drawn from a pool of real browser signatures.
    pub fn randomized() -> Self {
        SessionConfig {
            user_agent: get_rua().to_string(),
            headless: true,
            no_sandbox: true,
            disable_dev_shm: true,
            suppress_automation_fingerprint: true,
        }
    }
}

/// One live browser session. `close` takes the session by value, so a handle
/// is released exactly once on every path.
#[async_trait]
pub trait ListingSession: Send + Sync {
    async fn goto(&self, url: &str) -> WebDriverResult<()>;

    /// Whether at least one element currently matches the CSS selector.
    async fn element_present(&self, css: &str) -> WebDriverResult<bool>;

    async fn page_source(&self) -> WebDriverResult<String>;

    async fn close(self: Box<Self>);
}

#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn acquire(&self, config: &SessionConfig)
        -> Result<Box<dyn ListingSession>, ScrapeError>;
}

/// Chrome sessions over a WebDriver server (chromedriver or a Selenium hub).
pub struct ChromeSessionProvider {
    server_url: String,
}

impl ChromeSessionProvider {
    pub fn new(server_url: String) -> Self {
        ChromeSessionProvider { server_url }
    }
}

#[async_trait]
impl SessionProvider for ChromeSessionProvider {
    async fn acquire(
        &self,
        config: &SessionConfig,
    ) -> Result<Box<dyn ListingSession>, ScrapeError> {
        let mut caps = DesiredCapabilities::chrome();

        if config.headless {
            caps.add_arg("--headless=new")
                .map_err(ScrapeError::SessionStart)?;
        }
        caps.add_arg(&format!("--user-agent={}", config.user_agent))
            .map_err(ScrapeError::SessionStart)?;
        if config.no_sandbox {
            caps.add_arg("--no-sandbox")
                .map_err(ScrapeError::SessionStart)?;
        }
        if config.disable_dev_shm {
            caps.add_arg("--disable-dev-shm-usage")
                .map_err(ScrapeError::SessionStart)?;
        }
        if config.suppress_automation_fingerprint {
            caps.add_arg("--disable-blink-features=AutomationControlled")
                .map_err(ScrapeError::SessionStart)?;
        }

        let driver = WebDriver::new(&self.server_url, caps)
            .await
            .map_err(ScrapeError::SessionStart)?;

        Ok(Box::new(ChromeSession { driver }))
    }
}

struct ChromeSession {
    driver: WebDriver,
}

#[async_trait]
impl ListingSession for ChromeSession {
    async fn goto(&self, url: &str) -> WebDriverResult<()> {
        self.driver.goto(url).await
    }

    async fn element_present(&self, css: &str) -> WebDriverResult<bool> {
        let elements = self.driver.find_all(By::Css(css)).await?;
        Ok(!elements.is_empty())
    }

    async fn page_source(&self) -> WebDriverResult<String> {
        self.driver.source().await
    }

    async fn close(self: Box<Self>) {
        if let Err(e) = self.driver.quit().await {
            log::warn!("Browser session did not shut down cleanly: {:?}", e);
        }
    }
}
