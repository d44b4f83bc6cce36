//! WebDriver-backed renderer
//!
//! Talks to a chromedriver endpoint over the WebDriver protocol. Chrome runs
//! headless with the same flags the page tolerates from hosted scrapers.

use super::{PageRenderer, RenderError, RenderedPage, RendererFactory};
use crate::config::MonitorConfig;
use crate::extract::PRICE_CONTAINER_SELECTOR;
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};
use std::time::{Duration, Instant};

/// How often the wait loop re-checks the DOM for price containers
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Containers required before the page counts as rendered
const MIN_CONTAINERS: usize = 2;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Renderer holding the persistent browser session
pub struct WebDriverRenderer {
    client: Client,
    render_wait: Duration,
    settle: Duration,
}

impl WebDriverRenderer {
    /// Connect to the WebDriver endpoint and start a headless Chrome session
    pub async fn connect(config: &MonitorConfig) -> Result<Self, RenderError> {
        let mut caps = serde_json::map::Map::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            serde_json::json!({
                "args": [
                    "--headless=new",
                    "--no-sandbox",
                    "--disable-dev-shm-usage",
                    "--disable-gpu",
                    "--window-size=1920,1080",
                    "--disable-extensions",
                    "--disable-infobars",
                    format!("--user-agent={USER_AGENT}"),
                ]
            }),
        );

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await?;

        Ok(Self {
            client,
            render_wait: Duration::from_secs(config.render_wait_secs),
            settle: Duration::from_secs(config.settle_secs),
        })
    }
}

#[async_trait]
impl PageRenderer for WebDriverRenderer {
    async fn open(&mut self, url: &str) -> Result<RenderedPage, RenderError> {
        self.client.goto(url).await?;

        // Poll until the client-side scripts have inserted both containers.
        let deadline = Instant::now() + self.render_wait;
        loop {
            let containers = self
                .client
                .find_all(Locator::Css(PRICE_CONTAINER_SELECTOR))
                .await?;
            if containers.len() >= MIN_CONTAINERS {
                break;
            }
            if Instant::now() >= deadline {
                return Err(RenderError::Timeout);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }

        // The containers appear before their text does; give the scripts a
        // moment to fill in the actual numbers.
        tokio::time::sleep(self.settle).await;

        let html = self.client.source().await?;
        Ok(RenderedPage::new(html))
    }
}

/// Factory the monitor uses to acquire its one session at startup
pub struct WebDriverFactory {
    config: MonitorConfig,
}

impl WebDriverFactory {
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl RendererFactory for WebDriverFactory {
    async fn acquire(&self) -> Result<Box<dyn PageRenderer>, RenderError> {
        let renderer = WebDriverRenderer::connect(&self.config).await?;
        Ok(Box::new(renderer))
    }
}
