mod complaints;
mod pages;
mod stories;

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::{
    Json, Router, middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use grievance_domain::error::DomainError;
use grievance_domain::navigation::{Header, header};
use serde::Serialize;

use crate::{error::ApiError, middleware as app_middleware, observability, state::AppState};

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/v1/navigation", get(navigation))
        .merge(pages::routes())
        .merge(complaints::routes())
        .merge(stories::routes())
        .route_layer(middleware::from_fn(app_middleware::metrics_layer))
        .layer(app_middleware::timeout_layer(
            state.config.request_timeout_secs,
        ))
        .layer(app_middleware::trace_layer())
        .layer(app_middleware::set_request_id_layer())
        .layer(app_middleware::propagate_request_id_layer())
        .layer(middleware::from_fn(
            app_middleware::correlation_id_middleware,
        ));

    if !state.config.is_test() {
        app = app.layer(app_middleware::rate_limit_layer());
    }

    app.with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.app_env.clone(),
    })
}

async fn metrics() -> Response {
    match observability::render_metrics() {
        Some(body) => (
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

async fn navigation() -> Json<Header> {
    Json(header())
}

fn map_domain_error(operation: &'static str, err: DomainError) -> ApiError {
    match &err {
        DomainError::Validation(message) => {
            tracing::debug!(operation, reason = %message, "request rejected");
        }
        DomainError::NotFound => tracing::debug!(operation, "record not found"),
        DomainError::Conflict(message) => {
            tracing::warn!(operation, reason = %message, "conflicting update");
        }
    }
    ApiError::from(err)
}
