use clap::Parser;
use portfolio_client::utils::{logger, validation::Validate};
use portfolio_client::{
    render_portfolio, ApiClient, CliConfig, LoadState, PortfolioApi, PortfolioLoader,
    LOAD_FAILED_MESSAGE,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting portfolio-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = ApiClient::new(config.client_config()?)?;

    if config.health {
        match client.health().await {
            Ok(health) => {
                println!("✅ {}: {}", health.status, health.message);
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Health probe failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    let mut loader = PortfolioLoader::new(client);
    loader.load().await;

    let mut attempts = 0;
    while matches!(loader.state(), LoadState::Error { .. }) && attempts < config.retries {
        attempts += 1;
        tracing::info!("Retrying portfolio load (attempt {})", attempts);
        loader.retry().await;
    }

    match loader.state() {
        LoadState::Loaded(data) => {
            println!("{}", render_portfolio(data));
            Ok(())
        }
        LoadState::Error { message } => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
        // load() always settles into Loaded or Error.
        LoadState::Loading => {
            eprintln!("❌ {}", LOAD_FAILED_MESSAGE);
            std::process::exit(1);
        }
    }
}
