use crate::core::cache::ResponseCache;
use crate::core::query;
use crate::domain::model::SearchParams;
use crate::domain::ports::{ConfigProvider, OpportunitySource};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 上游商機搜尋 API 的客戶端。
/// 每次呼叫送出單一請求；不重試、不退避，失敗直接回傳給呼叫端。
pub struct SamClient {
    endpoint: String,
    api_key: String,
    client: Client,
    cache: ResponseCache,
}

impl SamClient {
    pub fn new(config: &dyn ConfigProvider) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            endpoint: config.api_endpoint().to_string(),
            api_key: config.api_key().to_string(),
            client,
            cache: ResponseCache::new(config.cache_ttl_secs(), config.cache_max_entries()),
        })
    }

    async fn fetch(&self, params: &SearchParams) -> Result<serde_json::Value> {
        let pairs = query::build_query(params, &self.api_key);

        tracing::debug!("📡 Upstream request: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .query(&pairs)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 Upstream response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await?;
        Ok(body)
    }
}

#[async_trait]
impl OpportunitySource for SamClient {
    async fn search(&self, params: &SearchParams) -> Result<serde_json::Value> {
        let key = query::cache_key(params);

        // 快取命中就不再向上游發送請求
        if let Some(body) = self.cache.get(&key) {
            tracing::debug!("🔍 Cache hit: {}", key);
            return Ok(body);
        }

        let body = self.fetch(params).await?;
        self.cache.insert(&key, &body);

        Ok(body)
    }
}
