use crate::domain::model::{AiSummary, BidRequest, BidResponse};
use crate::domain::ports::BidGenerator;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;

const PLACEHOLDER_SUMMARY: &str =
    "This is a placeholder summary. Actual AI processing will be implemented later.";

/// 佔位的 AI 服務：回傳固定文案，等待真正的模型後端接上。
/// 介面走 BidGenerator port，之後替換實作不動 HTTP 層。
pub struct PlaceholderAi;

#[async_trait]
impl BidGenerator for PlaceholderAi {
    async fn generate_bid(&self, request: &BidRequest) -> Result<BidResponse> {
        let prompt = request.prompt.as_deref().unwrap_or_default();

        tracing::debug!(
            "🤖 Generating placeholder bid (type: {}, opportunity: {:?})",
            request.bid_type,
            request.opportunity_id
        );

        Ok(BidResponse {
            opportunity_id: request.opportunity_id.clone(),
            bid_type: request.bid_type.clone(),
            include_resumes: request.include_resumes,
            include_past_performance: request.include_past_performance,
            text: format!("AI processed: {}", prompt),
            summary: PLACEHOLDER_SUMMARY.to_string(),
            generated_at: Utc::now(),
        })
    }

    async fn summarize(&self, text: &str) -> Result<AiSummary> {
        Ok(AiSummary {
            text: format!("AI processed: {}", text),
            summary: PLACEHOLDER_SUMMARY.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_bid_echoes_request_fields() {
        let request = BidRequest {
            prompt: Some("Draft a proposal for network modernization".to_string()),
            opportunity_id: Some("abc-123".to_string()),
            bid_type: "technical".to_string(),
            include_resumes: false,
            include_past_performance: true,
        };

        let response = PlaceholderAi.generate_bid(&request).await.unwrap();

        assert_eq!(response.opportunity_id.as_deref(), Some("abc-123"));
        assert_eq!(response.bid_type, "technical");
        assert!(!response.include_resumes);
        assert!(response.include_past_performance);
        assert!(response.text.contains("network modernization"));
        assert_eq!(response.summary, PLACEHOLDER_SUMMARY);
    }

    #[tokio::test]
    async fn test_generate_bid_without_prompt() {
        let request = BidRequest {
            prompt: None,
            opportunity_id: None,
            bid_type: "full".to_string(),
            include_resumes: true,
            include_past_performance: true,
        };

        let response = PlaceholderAi.generate_bid(&request).await.unwrap();

        assert_eq!(response.text, "AI processed: ");
        assert_eq!(response.bid_type, "full");
    }

    #[tokio::test]
    async fn test_summarize_returns_placeholder() {
        let summary = PlaceholderAi
            .summarize("Summarize opportunities for NAICS 541511")
            .await
            .unwrap();

        assert_eq!(summary.text, "AI processed: Summarize opportunities for NAICS 541511");
        assert_eq!(summary.summary, PLACEHOLDER_SUMMARY);
    }
}
