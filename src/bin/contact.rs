use clap::Parser;
use portfolio_client::config::{ClientConfig, BACKEND_URL_ENV};
use portfolio_client::utils::error::PortfolioError;
use portfolio_client::utils::logger;
use portfolio_client::utils::validation::validate_non_empty_string;
use portfolio_client::{ApiClient, ContactForm, Notification};
use std::time::Duration;

/// Submits a contact form to the portfolio backend.
#[derive(Debug, Parser)]
#[command(name = "contact")]
#[command(about = "Submit a contact message to the portfolio backend")]
struct ContactArgs {
    /// Backend base URL; falls back to PORTFOLIO_BACKEND_URL when omitted
    #[arg(long)]
    backend_url: Option<String>,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    company: Option<String>,

    #[arg(long)]
    message: String,

    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ContactArgs::parse();

    logger::init_cli_logger(args.verbose);

    validate_non_empty_string("name", &args.name)?;
    validate_non_empty_string("email", &args.email)?;
    validate_non_empty_string("message", &args.message)?;

    let backend_url = match args.backend_url.clone() {
        Some(url) => url,
        None => std::env::var(BACKEND_URL_ENV).map_err(|_| PortfolioError::MissingConfig {
            field: "backend_url".to_string(),
        })?,
    };

    let config =
        ClientConfig::new(backend_url)?.with_timeout(Duration::from_millis(args.timeout_ms));
    let client = ApiClient::new(config)?;

    let mut form = ContactForm {
        name: args.name,
        email: args.email,
        company: args.company.unwrap_or_default(),
        message: args.message,
    };

    match form.submit(&client).await {
        Notification::Success(message) => {
            println!("✅ Message sent! {}", message);
            Ok(())
        }
        Notification::Error(message) => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
    }
}
