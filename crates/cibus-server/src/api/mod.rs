mod search;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::index::PermitIndex;
use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<PermitIndex>,
}

/// Failure envelope shared with the search client:
/// `{"status": "failure", "msg": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    code: StatusCode,
    status: &'static str,
    msg: String,
}

impl ApiError {
    pub fn new(code: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            status: "failure",
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.code, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    permits: usize,
    request_id: String,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", get(search::search))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        permits: state.index.len(),
        request_id: req_id.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::PermitIndex;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> Router {
        let dataset = json!([
            {
                "applicant": "Joe's Tacos",
                "fooditems": "Tacos: Burritos",
                "location": {"latitude": "37.7749", "longitude": "-122.4194"},
                "dayshours": "Mo-Fr:10AM-2PM",
                "address": "1 MARKET ST"
            },
            {
                "applicant": "Joe's Tacos",
                "fooditems": "Tacos: Burritos",
                "location": {"latitude": "37.7849", "longitude": "-122.4094"}
            },
            {
                "applicant": "Taco Loco",
                "fooditems": "COLD TRUCK: Tacos: Soda",
                "location": {"latitude": "37.76", "longitude": "-122.42"}
            }
        ]);
        let index = PermitIndex::from_json(&dataset.to_string(), 750).expect("dataset");
        build_app(AppState {
            index: Arc::new(index),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }

    #[test]
    fn api_error_serializes_failure_envelope() {
        let value = serde_json::to_value(ApiError::bad_request("nope")).expect("serialize");
        assert_eq!(value, json!({"status": "failure", "msg": "nope"}));
    }

    #[tokio::test]
    async fn search_returns_grouped_vendors() {
        let (status, json) = get_json("/search?q=tacos").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["hits"], 2);
        assert_eq!(json["locations"], 3);
        assert_eq!(json["trucks"][0]["name"], "Joe's Tacos");
        assert_eq!(json["trucks"][0]["branches"][1]["hours"], "NA");
        assert_eq!(json["trucks"][1]["drinks"], true);
        assert_eq!(json["trucks"][1]["fooditems"], json!(["tacos", "soda"]));
    }

    #[tokio::test]
    async fn search_body_parses_as_search_result() {
        let (_, json) = get_json("/search?q=burritos").await;
        let result: cibus_core::SearchResult =
            serde_json::from_value(json).expect("search result");
        assert_eq!(result.vendors.len(), 1);
        assert_eq!(result.branch_count(), 2);
    }

    #[tokio::test]
    async fn search_without_matches_is_empty_success() {
        let (status, json) = get_json("/search?q=durian").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({"hits": 0, "locations": 0, "trucks": [], "status": "success"})
        );
    }

    #[tokio::test]
    async fn missing_query_is_rejected() {
        for uri in ["/search", "/search?q=", "/search?q=%20%20"] {
            let (status, json) = get_json(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                json,
                json!({"status": "failure", "msg": "Please provide a query"})
            );
        }
    }

    #[tokio::test]
    async fn health_reports_permit_count() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["permits"], 3);
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(REQUEST_ID_HEADER, "req-42")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("req-42")
        );
    }

    #[tokio::test]
    async fn request_id_is_generated_when_absent() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("request id header");
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
