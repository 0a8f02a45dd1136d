use std::sync::Arc;

use axum::{routing::get, Router};

use recgate_core::LoadError;

use crate::app::dto::HealthReport;

pub mod system;

/// Router served when the real application could not be imported.
///
/// Exposes `GET /health` and nothing else.
pub fn diagnostic_router(failure: &LoadError) -> Router {
    let report = Arc::new(HealthReport::import_failed(failure));

    Router::new()
        .route("/health", get(system::health))
        .with_state(report)
}
