pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::drafts::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/keywords", get(handlers::handle_get_keywords))
        // Draft workflow
        .route("/api/v1/drafts", post(handlers::handle_create_draft))
        .route(
            "/api/v1/drafts/:id",
            get(handlers::handle_get_draft)
                .put(handlers::handle_edit_draft)
                .delete(handlers::handle_delete_draft),
        )
        .route("/api/v1/drafts/:id/pdf", get(handlers::handle_download_pdf))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
