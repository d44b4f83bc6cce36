//! Render types and faults

use thiserror::Error;

/// A fully rendered page, captured after the settle delay
#[derive(Debug, Clone)]
pub struct RenderedPage {
    html: String,
}

impl RenderedPage {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Faults from the browser session
#[derive(Debug, Error)]
pub enum RenderError {
    /// The wait for price containers expired
    #[error("timed out waiting for live price containers")]
    Timeout,

    /// Navigation or session fault mid-run (recoverable; retried next cycle)
    #[error("render session fault: {0}")]
    Fault(String),

    /// Could not acquire the browser session at startup (fatal)
    #[error("failed to acquire browser session: {0}")]
    Acquire(String),
}

impl From<fantoccini::error::CmdError> for RenderError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        RenderError::Fault(err.to_string())
    }
}

impl From<fantoccini::error::NewSessionError> for RenderError {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        RenderError::Acquire(err.to_string())
    }
}
