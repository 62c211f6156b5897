//! API 路由

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;

use crate::application::ServiceHandler;

use super::graphql::{GraphQLRequest, GraphQLResponse};
use super::resolvers::execute;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ServiceHandler>,
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/graphql", post(graphql))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn graphql(
    State(state): State<AppState>,
    Json(request): Json<GraphQLRequest>,
) -> Json<GraphQLResponse> {
    Json(execute(&state.handler, request).await)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
