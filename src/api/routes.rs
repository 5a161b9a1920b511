use crate::domain::model::{BidRequest, SearchParams};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

use super::server::AppState;

/// GET /api/opportunities — 上游回應原封不動轉發
pub async fn opportunities_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    match state.opportunities.search(&params).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            tracing::error!("❌ Failed to fetch opportunities: {}", e);
            error_response("Failed to fetch opportunities")
        }
    }
}

/// POST /api/bid-generator — 佔位的投標書生成
pub async fn bid_generator_handler(
    State(state): State<AppState>,
    payload: Result<Json<BidRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        tracing::error!("❌ Invalid bid-generator request body");
        return error_response("Failed to generate bid");
    };

    match state.bid_generator.generate_bid(&request).await {
        Ok(bid) => Json(bid).into_response(),
        Err(e) => {
            tracing::error!("❌ Failed to generate bid: {}", e);
            error_response("Failed to generate bid")
        }
    }
}

pub async fn health_handler() -> Response {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
    .into_response()
}

/// 對外只有一種錯誤形狀：{"error": "..."} 搭配 500
fn error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
