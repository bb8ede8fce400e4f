//! Dashboard web server.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::models::Dataset;
use crate::visualization::{build_layout, PageLayout, Theme};


/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub theme: Arc<Theme>,
    pub layout: Arc<PageLayout>,
}


impl AppState {
    pub fn new(dataset: Dataset, theme: Theme) -> Self {
        Self {
            dataset: Arc::new(dataset),
            theme: Arc::new(theme),
            layout: Arc::new(build_layout()),
        }
    }
}


/// Build the router with every page and API route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/charts/:id", get(handlers::chart))
        .route("/api/layout", get(handlers::layout))
        .route("/api/summary", get(handlers::summary))
        .route("/api/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}


/// Serve the dashboard until Ctrl-C.
pub async fn serve(bind_addr: SocketAddr, state: AppState) -> Result<()> {
    let records = state.dataset.len();
    let app = router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind server to {bind_addr}"))?;

    info!("Serving {} records on http://{}", records, bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}


async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::models::{NumericField, SalaryRecord};

    fn state() -> AppState {
        let dataset: Dataset = [
            ("High School", "Tech", "Chicago", 2.0, 3.2, 55_000.0),
            ("Master", "Finance", "New York", 5.0, 3.7, 88_000.0),
            ("PhD", "Healthcare", "Los Angeles", 3.0, 3.9, 79_000.0),
        ]
        .iter()
        .map(|&(edu, ind, loc, exp, gpa, salary)| {
            SalaryRecord::in_categories(edu, ind, loc)
                .with(NumericField::WorkExperience, exp)
                .with(NumericField::Gpa, gpa)
                .with(NumericField::Certifications, 1.0)
                .with(NumericField::Internships, 1.0)
                .with(NumericField::JobChanges, 0.0)
                .with(NumericField::NetworkingScore, 50.0)
                .with(NumericField::SalaryAt30, salary)
        })
        .collect();
        AppState::new(dataset, Theme::dark())
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router(state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Salary Analysis Dashboard"));
        assert!(html.contains("id=\"correlation-heatmap\""));
    }

    #[tokio::test]
    async fn test_chart_route() {
        let (status, figure) = get_json("/api/charts/education-salary-box").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(figure["data"].as_array().unwrap().len(), 3);
        assert_eq!(figure["data"][0]["type"], "box");
        assert_eq!(figure["layout"]["paper_bgcolor"], "#0f172a");

        let (status, figure) = get_json("/api/charts/gpa-salary-scatter").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "GPA");
    }

    #[tokio::test]
    async fn test_parallel_coordinates_route() {
        let (status, figure) = get_json("/api/charts/parallel-coordinates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(figure["data"][0]["type"], "parcoords");
        assert_eq!(figure["data"][0]["dimensions"].as_array().unwrap().len(), 7);
        assert_eq!(figure["data"][0]["dimensions"][6]["values"].as_array().unwrap().len(), 3);
        assert_eq!(figure["layout"]["paper_bgcolor"], "#0f172a");
    }

    #[tokio::test]
    async fn test_unknown_chart_is_404() {
        let (status, body) = get_json("/api/charts/pie-chart").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("pie-chart"));
    }

    #[tokio::test]
    async fn test_layout_route() {
        let (status, body) = get_json("/api/layout").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body["data"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], "3d-scatter");
    }

    #[tokio::test]
    async fn test_summary_route() {
        let (status, body) = get_json("/api/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["records"], 3);
        assert_eq!(body["data"]["max"], 88_000.0);
    }

    #[tokio::test]
    async fn test_health_route() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["service"], "salary-dash");
        assert_eq!(body["data"]["records"], "3");
    }
}
