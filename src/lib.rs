pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, ClientConfig};
pub use core::client::ApiClient;
pub use core::loader::{LoadState, PortfolioData, PortfolioLoader, LOAD_FAILED_MESSAGE};
pub use core::render::{render_portfolio, ContactForm, Notification};
pub use domain::ports::{PortfolioApi, RequestObserver};
pub use utils::error::{PortfolioError, Result};
