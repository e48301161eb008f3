// HTTP routing for the stats API.
// Resolves `/api/{service}/{endpoint}`, enforces method rules, and shapes success and error responses.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL,
        },
    },
    response::{IntoResponse, Response},
    routing::{any, get},
};
use serde_json::json;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::state::AppState;

use super::operations::Params;
use super::registry::{self, RouteError};

/// Shared caches may keep a success for 30 minutes and serve it stale for another hour.
pub const SUCCESS_CACHE_CONTROL: &str = "public, s-maxage=1800, stale-while-revalidate=3600";
/// Failures may be held by shared caches for 5 minutes.
pub const ERROR_CACHE_CONTROL: &str = "public, s-maxage=300";

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api", any(dispatch_root))
        .route("/api/", any(dispatch_root))
        .route("/api/{service}", any(dispatch_service))
        .route("/api/{service}/{endpoint}", any(dispatch))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// `/api` without a service.
async fn dispatch_root(
    State(state): State<Arc<AppState>>,
    method: Method,
    Query(params): Query<Params>,
) -> Response {
    handle(&state, method, "", "", params).await
}

/// `/api/{service}` without an endpoint.
async fn dispatch_service(
    State(state): State<Arc<AppState>>,
    method: Method,
    Path(service): Path<String>,
    Query(params): Query<Params>,
) -> Response {
    handle(&state, method, &service, "", params).await
}

async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    Path((service, endpoint)): Path<(String, String)>,
    Query(params): Query<Params>,
) -> Response {
    handle(&state, method, &service, &endpoint, params).await
}

async fn handle(
    state: &AppState,
    method: Method,
    service: &str,
    endpoint: &str,
    mut params: Params,
) -> Response {
    let operation = match registry::resolve(service, endpoint) {
        Ok(operation) => operation,
        Err(RouteError::UnknownService) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Service not found",
                    "available": registry::Service::names(),
                })),
            )
                .into_response();
        }
        Err(RouteError::UnknownEndpoint(known)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Endpoint not found",
                    "service": known.name(),
                    "available": known.endpoints(),
                })),
            )
                .into_response();
        }
    };

    // preflight
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if method != Method::GET {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({ "error": "Method not allowed" })),
        )
            .into_response();
    }

    params.remove("service");
    params.remove("endpoint");

    match operation.invoke(state, &params).await {
        Ok(body) => ([(CACHE_CONTROL, SUCCESS_CACHE_CONTROL)], Json(body)).into_response(),
        Err(err) => {
            tracing::error!(service, endpoint, error = %err, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CACHE_CONTROL, ERROR_CACHE_CONTROL)],
                Json(json!({
                    "error": err.to_string(),
                    "service": service,
                    "endpoint": endpoint,
                })),
            )
                .into_response()
        }
    }
}
