//! phonedir-server library - HTTP service for the phone directory
//!
//! Thin axum layer over `phonedir-common`: routing, request/response
//! types, the admin gate and error mapping. All directory semantics
//! live in the common crate.

use axum::Router;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Directory holding uploaded employee photos
    pub photos_dir: PathBuf,
    /// Admin bearer token; `None` disables the admin gate
    pub admin_token: Option<String>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, photos_dir: PathBuf, admin_token: Option<String>) -> Self {
        Self {
            db,
            photos_dir,
            admin_token,
        }
    }
}

/// Build application router
///
/// Mutating routes sit behind the admin gate; reads, health and the
/// photo files are public.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{get, post, put};

    // Protected routes (require the admin token when one is configured)
    let protected = Router::new()
        .route("/api/employees", post(api::employees::create_employee))
        .route(
            "/api/employees/:guid",
            put(api::employees::update_employee).delete(api::employees::delete_employee),
        )
        .route(
            "/api/employees/:guid/photo",
            post(api::photos::upload_photo),
        )
        .route("/api/import", post(api::import::import_file))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth::admin_gate,
        ));

    // Public routes
    let public = Router::new()
        .route("/api/employees", get(api::employees::list_employees))
        .route("/api/departments", get(api::departments::list_departments))
        .route("/api/export/table", get(api::export::export_table))
        .merge(api::health::health_routes());

    Router::new()
        .merge(protected)
        .merge(public)
        .nest_service("/api/photos", ServeDir::new(state.photos_dir.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
