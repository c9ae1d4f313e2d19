use std::time::Duration;

use serde::Deserialize;

use crate::services::SettlePolicy;

#[derive(Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub webdriver: WebDriverSettings,
    #[serde(default)]
    pub scrape: ScrapeSettings,
}

#[derive(Deserialize, Clone)]
pub struct WebDriverSettings {
    pub server_url: String,
}

impl Default for WebDriverSettings {
    fn default() -> Self {
        WebDriverSettings {
            server_url: "http://localhost:9515".to_string(),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct ScrapeSettings {
    /// Ceiling on the wait for the listing container to appear.
    pub wait_timeout_secs: u64,
    pub poll_interval_ms: u64,
    /// Bounds for the randomized settle delay drawn after the load condition
    /// holds, before the page source is captured.
    pub settle_min_secs: u64,
    pub settle_max_secs: u64,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        ScrapeSettings {
            wait_timeout_secs: 10,
            poll_interval_ms: 250,
            settle_min_secs: 5,
            settle_max_secs: 8,
        }
    }
}

impl ScrapeSettings {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn settle_policy(&self) -> SettlePolicy {
        SettlePolicy::new(
            Duration::from_secs(self.settle_min_secs),
            Duration::from_secs(self.settle_max_secs),
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("MAGPIE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
