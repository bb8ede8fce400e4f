//! HTTP handlers for the dashboard page and its JSON API.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregation::{summarize, SalarySummary};
use crate::config::SERVICE_NAME;
use crate::visualization::{render_page, ChartId, PageLayout};

use super::AppState;


/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}


impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now(),
        }
    }
}


pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.layout, &state.theme))
}


/// One themed figure. Unknown ids get a 404 with a JSON error body.
pub async fn chart(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match id.parse::<ChartId>() {
        Ok(chart) => {
            debug!("Rendering chart {}", chart);
            Json(chart.render(&state.dataset, &state.theme)).into_response()
        }
        Err(e) => {
            warn!("Rejected chart request: {}", e);
            (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(e.to_string()))).into_response()
        }
    }
}


pub async fn layout(State(state): State<AppState>) -> Json<ApiResponse<PageLayout>> {
    Json(ApiResponse::success(state.layout.as_ref().clone()))
}


pub async fn summary(State(state): State<AppState>) -> Json<ApiResponse<SalarySummary>> {
    Json(ApiResponse::success(summarize(&state.dataset)))
}


pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HashMap<String, String>>> {
    let mut status = HashMap::new();
    status.insert("status".to_string(), "healthy".to_string());
    status.insert("service".to_string(), SERVICE_NAME.to_string());
    status.insert("version".to_string(), env!("CARGO_PKG_VERSION").to_string());
    status.insert("records".to_string(), state.dataset.len().to_string());

    Json(ApiResponse::success(status))
}
