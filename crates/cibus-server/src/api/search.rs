use axum::{
    extract::{Query, State},
    Extension, Json,
};
use cibus_core::SearchResult;
use serde::{Deserialize, Serialize};

use crate::index::group_vendors;
use crate::middleware::RequestId;

use super::{ApiError, AppState};

const MISSING_QUERY: &str = "Please provide a query";

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    #[serde(flatten)]
    pub result: SearchResult,
    pub status: &'static str,
}

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Some(query) = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    else {
        tracing::debug!(request_id = %req_id.0, "search without query");
        return Err(ApiError::bad_request(MISSING_QUERY));
    };

    let matches = state.index.search(query);
    let result = group_vendors(&matches);
    tracing::info!(
        request_id = %req_id.0,
        query,
        permits = matches.len(),
        hits = result.hits,
        locations = result.locations,
        "search served"
    );

    Ok(Json(SearchResponse {
        result,
        status: "success",
    }))
}
