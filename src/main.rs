use clap::Parser;
use govcon_gateway::api::{self, AppState};
use govcon_gateway::config::{CliConfig, TomlConfig};
use govcon_gateway::core::ai::PlaceholderAi;
use govcon_gateway::core::client::SamClient;
use govcon_gateway::domain::ports::ConfigProvider;
use govcon_gateway::utils::{logger, validation::Validate};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting govcon-gateway");

    // 配置來源：TOML 檔案優先，否則使用 CLI 參數
    let config: Arc<dyn ConfigProvider> = match &cli.config_file {
        Some(path) => {
            tracing::info!("📄 Loading configuration from {}", path);
            let toml_config = TomlConfig::from_file(path)?;
            if let Err(e) = toml_config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Arc::new(toml_config)
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                eprintln!("💡 Set SAM_API_KEY or pass --api-key / --config");
                std::process::exit(1);
            }
            Arc::new(cli.clone())
        }
    };

    tracing::info!("📡 Upstream endpoint: {}", config.api_endpoint());
    tracing::info!(
        "🔍 Response cache: ttl {}s, max {} entries",
        config.cache_ttl_secs(),
        config.cache_max_entries()
    );

    let client = SamClient::new(config.as_ref())?;
    let state = AppState {
        opportunities: Arc::new(client),
        bid_generator: Arc::new(PlaceholderAi),
    };

    api::start_server(config.as_ref(), state).await?;

    Ok(())
}
