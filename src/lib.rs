pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, TomlConfig};
pub use core::ai::PlaceholderAi;
pub use core::client::SamClient;
pub use utils::error::{GatewayError, Result};
