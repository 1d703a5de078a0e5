//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::container::ProfileContainer;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Outbound HTTP client, used for backend lookups and image settling.
    /// No client-level timeout; image settling bounds its own fetches.
    pub http: reqwest::Client,

    /// The card currently on display.
    pub card: Arc<ProfileContainer>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;

        tracing::info!(backend_url = %config.backend_url, "application state initialized");

        Ok(Self {
            config: Arc::new(config),
            http,
            card: Arc::new(ProfileContainer::new()),
        })
    }
}
