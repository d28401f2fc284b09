//! Request handlers.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::watchlist::{watching_series, AnimeSeries};

/// Query parameters accepted by the animelist endpoint.
#[derive(Debug, Deserialize)]
pub struct AnimelistParams {
    #[serde(default)]
    pub user: Option<String>,
}

/// `GET /animelist` — the currently-watching list for one user.
///
/// Always answers `200` with a JSON array. A missing or empty username
/// short-circuits to `[]` without touching the upstream. Upstream
/// failures are logged and masked as `[]`; no upstream error detail
/// reaches the client. A user whose list simply has no watching entries
/// also gets `[]`, as a successful response.
pub async fn get_animelist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AnimelistParams>,
) -> Json<Vec<AnimeSeries>> {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let user = match params.user.as_deref() {
        Some(user) if !user.is_empty() => user,
        _ => {
            tracing::debug!(request_id = %request_id, "No username supplied");
            return Json(Vec::new());
        }
    };

    match state.mal.fetch_list(user).await {
        Ok(entries) => {
            let series = watching_series(entries);
            tracing::debug!(
                request_id = %request_id,
                user = %user,
                series = series.len(),
                "Returning watching list"
            );
            Json(series)
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                user = %user,
                error = %e,
                "Upstream fetch failed; returning empty list"
            );
            Json(Vec::new())
        }
    }
}
