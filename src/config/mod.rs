pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "govcon-gateway")]
#[command(about = "HTTP gateway for government-contracting opportunity search")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:3001")]
    pub bind_address: String,

    #[arg(long, default_value = "https://api.sam.gov/opportunities/v2/search")]
    pub api_endpoint: String,

    #[arg(long, env = "SAM_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "3600")]
    pub cache_ttl_secs: u64,

    #[arg(long, default_value = "1000")]
    pub cache_max_entries: usize,

    #[arg(long = "config", help = "Load settings from a TOML file instead of CLI flags")]
    pub config_file: Option<String>,

    #[arg(long, help = "Log in JSON format")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }

    fn cache_max_entries(&self) -> usize {
        self.cache_max_entries
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bind_address("bind_address", &self.bind_address)?;
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validation::validate_positive_number("cache_ttl_secs", self.cache_ttl_secs, 1)?;
        Ok(())
    }
}
