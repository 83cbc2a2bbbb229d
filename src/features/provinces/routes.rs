use std::sync::Arc;

use axum::{routing::any, Router};

use crate::features::provinces::handlers;
use crate::features::provinces::services::ProvinceSyncService;

/// Create routes for the provinces feature (any method on `/`)
pub fn routes(service: Arc<ProvinceSyncService>) -> Router {
    Router::new()
        .route("/", any(handlers::sync_and_list_provinces))
        .with_state(service)
}
