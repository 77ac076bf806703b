//! HTTP boundary: JSON lookups and QR scan redirects over the resolver.

pub mod models;

use crate::core::directory::BikeDirectory;
use crate::core::resolver::AvailabilityResolver;
use crate::core::routing::{hotel_path, RouteDecision};
use crate::utils::error::{AppError, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use models::{ErrorResponse, HealthResponse};

#[derive(Clone)]
pub struct AppState {
    resolver: Arc<AvailabilityResolver<BikeDirectory>>,
}

impl AppState {
    pub fn new(resolver: AvailabilityResolver<BikeDirectory>) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/bikes", get(list_bikes_handler))
        .route("/api/bikes/{id}", get(get_bike_handler))
        .route("/qr/{id}", get(qr_handler))
        .with_state(state)
}

/// Runs the router on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🚲 Listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::ServerError {
            message: e.to_string(),
        })
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bikes: state.resolver.directory().len(),
    })
}

pub async fn list_bikes_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.resolver.directory().list_all())
}

pub async fn get_bike_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.resolver.directory().get_by_id(&id) {
        Some(record) => Json(record.clone()).into_response(),
        None => {
            tracing::debug!("Bike {} not found", id);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Not found".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn qr_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match RouteDecision::from(state.resolver.resolve(&id)) {
        RouteDecision::RedirectRoot => {
            tracing::info!("QR scan for bike {} redirected to /", id);
            Redirect::temporary("/").into_response()
        }
        RouteDecision::RedirectHotel { hotel_slug } => {
            let path = hotel_path(&hotel_slug);
            tracing::info!("QR scan for bike {} redirected to {}", id, path);
            Redirect::temporary(&path).into_response()
        }
        RouteDecision::Render(options) => {
            tracing::info!("QR scan for bike {} showing booking options", id);
            Json(options).into_response()
        }
    }
}
