//! Request handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::RouteError;
use crate::views::View;

/// One row of the route listing.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub view: View,
}

#[derive(Serialize)]
struct NoMatchBody<'a> {
    error: &'static str,
    path: &'a str,
}

/// Resolve the request path and report the view to render.
pub async fn resolve_path(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let request_id = request_id(&headers);
    let path = uri.path();

    let outcome = state
        .base
        .strip(path)
        .ok_or_else(|| RouteError::NoMatch {
            path: path.to_string(),
        })
        .and_then(|app_path| state.routes.resolve(app_path));

    match outcome {
        Ok(resolved) => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                route = %resolved.name,
                view = %resolved.view,
                "Route resolved"
            );
            metrics::record_resolution(&resolved.name);
            (StatusCode::OK, Json(resolved)).into_response()
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, path = %path, error = %e, "No route matched");
            metrics::record_no_match();
            (
                StatusCode::NOT_FOUND,
                Json(NoMatchBody {
                    error: "no route matches",
                    path,
                }),
            )
                .into_response()
        }
    }
}

/// List the configured routes in precedence order.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let summaries = state
        .routes
        .routes()
        .iter()
        .map(|r| RouteSummary {
            name: r.name().to_string(),
            path: state.base.prepend(r.path()),
            view: r.view(),
        })
        .collect();
    Json(summaries)
}
