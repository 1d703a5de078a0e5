//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL of the profile backend (no trailing slash).
    /// The lookup path `/api/steam-user/{id}` is appended to this.
    pub backend_url: String,

    /// Site name shown in page titles and the page header.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `STEAMCARD_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `STEAMCARD_BACKEND_URL`: Profile backend base URL (default: "http://localhost:8000")
    /// - `STEAMCARD_SITE_NAME`: Site name (default: "Steam Card Generator")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("STEAMCARD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let backend_url = std::env::var("STEAMCARD_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("STEAMCARD_SITE_NAME")
            .unwrap_or_else(|_| "Steam Card Generator".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            backend_url = %backend_url,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            backend_url,
            site_name,
        })
    }
}
