use crate::domain::ports::RequestObserver;
use crate::utils::error::PortfolioError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("portfolio_client=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio_client=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Default request observer: mirrors every request/response/error into
/// `tracing`. Observational only.
#[derive(Debug, Default, Clone)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: &str, url: &str) {
        tracing::debug!("API request: {} {}", method, url);
    }

    fn on_response(&self, method: &str, url: &str, status: u16) {
        tracing::debug!("API response: {} {} {}", status, method, url);
    }

    fn on_error(&self, method: &str, url: &str, error: &PortfolioError) {
        tracing::error!("API error: {} {}: {}", method, url, error);
    }
}
