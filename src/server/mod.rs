// SPDX-License-Identifier: MIT

//! HTTP surface for condition evaluation and routing

use axum::{
    body::Body,
    extract::State,
    http::Request,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::condition::{Condition, ConditionEvaluator};
use crate::config::EvaluatorConfig;
use crate::error::BranchError;
use crate::routing::{ConditionBlock, RouteDecision};
use crate::variables::Variable;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub condition: Condition,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EvaluateResponse {
    pub result: bool,
}

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub block: ConditionBlock,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// Build the application router around a shared evaluator
pub fn router(evaluator: Arc<ConditionEvaluator>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/config", get(current_config))
        .route("/api/evaluate", post(evaluate_condition))
        .route("/api/route", post(route_block))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!("request", method = %request.method(), uri = %request.uri())
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(evaluator)
}

pub async fn serve(port: u16, config: EvaluatorConfig) -> Result<(), BranchError> {
    let app = router(Arc::new(ConditionEvaluator::new(config)));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BranchError::server(format!("failed to bind {}: {}", addr, e)))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| BranchError::server(e.to_string()))?;

    Ok(())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn current_config(
    State(evaluator): State<Arc<ConditionEvaluator>>,
) -> Json<EvaluatorConfig> {
    Json(evaluator.config().clone())
}

async fn evaluate_condition(
    State(evaluator): State<Arc<ConditionEvaluator>>,
    Json(payload): Json<EvaluateRequest>,
) -> Json<EvaluateResponse> {
    let result = evaluator.evaluate(&payload.condition, &payload.variables);
    Json(EvaluateResponse { result })
}

async fn route_block(
    State(evaluator): State<Arc<ConditionEvaluator>>,
    Json(payload): Json<RouteRequest>,
) -> Json<RouteDecision> {
    Json(payload.block.route(&evaluator, &payload.variables))
}
