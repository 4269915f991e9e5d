pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::resume::handlers;
use crate::state::AppState;

/// Any origin is mirrored back so credentialed requests work.
///
/// The transport body limit is off: the upload handler streams each part and
/// buffers at most `max_files` parts of `max_file_size + 1` bytes, so count and
/// size violations surface as 400s rather than 413s.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload", post(handlers::handle_upload))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
