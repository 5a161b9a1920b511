use chrono::{Duration, Utc};
use clap::Parser;
use govcon_gateway::config::CliConfig;
use govcon_gateway::core::client::SamClient;
use govcon_gateway::domain::model::{OpportunitiesResponse, SearchParams};
use govcon_gateway::domain::ports::OpportunitySource;

/// 手動測試上游商機搜尋 API（需要有效的 SAM_API_KEY）
#[derive(Debug, Parser)]
#[command(name = "probe_api")]
#[command(about = "Probe the upstream opportunity search API")]
struct ProbeArgs {
    #[arg(long, env = "SAM_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    #[arg(long, default_value = "https://api.sam.gov/opportunities/v2/search")]
    api_endpoint: String,

    #[arg(long)]
    naics: Option<String>,

    #[arg(long)]
    keyword: Option<String>,

    #[arg(long, default_value = "5")]
    limit: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    let args = ProbeArgs::parse();

    println!("🚀 測試上游商機搜尋 API");

    let config = CliConfig {
        bind_address: "127.0.0.1:0".to_string(),
        api_endpoint: args.api_endpoint.clone(),
        api_key: args.api_key,
        timeout_seconds: 15,
        cache_ttl_secs: 3600,
        cache_max_entries: 10,
        config_file: None,
        log_json: false,
        verbose: true,
    };

    // 上游要求有日期範圍，預設查詢最近 90 天
    let now = Utc::now();
    let posted_from = (now - Duration::days(90)).format("%m/%d/%Y").to_string();
    let posted_to = now.format("%m/%d/%Y").to_string();

    let params = SearchParams {
        naics_code: args.naics,
        keyword: args.keyword,
        posted_from: Some(posted_from.clone()),
        posted_to: Some(posted_to.clone()),
        limit: Some(args.limit),
        ..Default::default()
    };

    println!("📡 {} ({} ~ {})", args.api_endpoint, posted_from, posted_to);

    let client = SamClient::new(&config)?;
    let body = client.search(&params).await?;

    let response: OpportunitiesResponse = serde_json::from_value(body)?;

    println!("\n✅ 查詢完成！");
    println!("📊 總筆數: {}", response.total_records.unwrap_or(0));

    for opportunity in &response.opportunities_data {
        println!(
            "  - [{}] {} ({})",
            opportunity.posted_date.as_deref().unwrap_or("?"),
            opportunity.title.as_deref().unwrap_or("(untitled)"),
            opportunity.set_aside_code.as_deref().unwrap_or("none"),
        );
        if let Some(link) = &opportunity.ui_link {
            println!("    {}", link);
        }
    }

    Ok(())
}
