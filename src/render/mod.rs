//! Page rendering module
//!
//! Drives a headless browser to the target page and waits for the
//! client-side scripts to materialize the price markup. The session is
//! acquired once and reused across cycles; it is not a per-call resource.

mod types;
mod webdriver;

pub use types::{RenderError, RenderedPage};
pub use webdriver::{WebDriverFactory, WebDriverRenderer};

use async_trait::async_trait;

/// Trait for renderer implementations
#[async_trait]
pub trait PageRenderer: Send {
    /// Navigate the session to `url` and block until the price markup is
    /// present, returning the rendered DOM as HTML
    async fn open(&mut self, url: &str) -> Result<RenderedPage, RenderError>;
}

/// Acquires the long-lived render session at monitor startup
#[async_trait]
pub trait RendererFactory: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn PageRenderer>, RenderError>;
}
