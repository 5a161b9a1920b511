use crate::domain::model::{AiSummary, BidRequest, BidResponse, SearchParams};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 商機搜尋來源（實作：SamClient；測試時可替換為 mock）
#[async_trait]
pub trait OpportunitySource: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<serde_json::Value>;
}

/// AI 投標書生成與摘要服務
#[async_trait]
pub trait BidGenerator: Send + Sync {
    async fn generate_bid(&self, request: &BidRequest) -> Result<BidResponse>;
    async fn summarize(&self, text: &str) -> Result<AiSummary>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn cache_ttl_secs(&self) -> u64;
    fn cache_max_entries(&self) -> usize;
}
