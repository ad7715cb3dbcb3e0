use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use std::time::Duration;

/// Environment variable consulted when `--backend-url` is not given.
pub const BACKEND_URL_ENV: &str = "PORTFOLIO_BACKEND_URL";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Validated client configuration. Construction fails fast on a missing or
/// malformed backend URL instead of letting the client build relative
/// request URLs.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    backend_url: String,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Result<Self> {
        let backend_url = backend_url.into();
        validate_url("backend_url", &backend_url)?;
        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// All requests go out under `{backend_url}/api`.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-client")]
#[command(about = "Loads and renders a portfolio site from its backend API")]
pub struct CliConfig {
    /// Backend base URL; falls back to PORTFOLIO_BACKEND_URL when omitted
    #[arg(long)]
    pub backend_url: Option<String>,

    #[arg(long, default_value = "10000")]
    pub timeout_ms: u64,

    /// Manual retries to attempt after a failed page load
    #[arg(long, default_value = "0")]
    pub retries: u32,

    /// Run the health probe instead of loading the page
    #[arg(long)]
    pub health: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolved_backend_url(&self) -> Result<String> {
        if let Some(url) = &self.backend_url {
            return Ok(url.clone());
        }
        std::env::var(BACKEND_URL_ENV).map_err(|_| PortfolioError::MissingConfig {
            field: "backend_url".to_string(),
        })
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::new(self.resolved_backend_url()?)?
            .with_timeout(Duration::from_millis(self.timeout_ms)))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend_url", &self.resolved_backend_url()?)
    }
}
