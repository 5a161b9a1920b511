use crate::domain::ports::{BidGenerator, ConfigProvider, OpportunitySource};
use crate::utils::error::{GatewayError, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::routes;

#[derive(Clone)]
pub struct AppState {
    pub opportunities: Arc<dyn OpportunitySource>,
    pub bid_generator: Arc<dyn BidGenerator>,
}

/// 建立路由；儀表板前端在不同 origin，CORS 全開
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_handler))
        .route("/api/opportunities", get(routes::opportunities_handler))
        .route("/api/bid-generator", post(routes::bid_generator_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(config: &dyn ConfigProvider, state: AppState) -> Result<()> {
    let addr: SocketAddr =
        config
            .bind_address()
            .parse()
            .map_err(|e| GatewayError::ConfigError {
                message: format!("Invalid bind address '{}': {}", config.bind_address(), e),
            })?;

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
