use axum::{
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::CorsConfig;
use crate::handlers;
use crate::state::AppState;

pub mod health;

/// Body returned for unknown routes
#[derive(Serialize)]
pub struct NotFoundBody {
    pub code: u16,
    pub message: String,
}

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth routes
        .route("/auth/login", post(handlers::auth::login))
        // Student routes
        .route("/student/:id/dashboard", get(handlers::student::dashboard))
        // Faculty routes
        .route("/faculty/:id/classes", get(handlers::faculty::classes))
        .route(
            "/faculty/class/:class_id/students",
            get(handlers::faculty::class_students),
        )
        .route("/faculty/attendance", post(handlers::faculty::submit_attendance))
        .route(
            "/faculty/attendance/rectify",
            put(handlers::faculty::rectify_attendance),
        );

    Router::new()
        .nest("/api", api_routes)
        .fallback(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// CORS for the browser frontend; no configured origins means any origin
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Fallback handler for 404
pub async fn fallback() -> (StatusCode, Json<NotFoundBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            code: 404,
            message: "Not Found".to_string(),
        }),
    )
}
