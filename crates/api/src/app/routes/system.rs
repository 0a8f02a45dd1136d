use std::sync::Arc;

use axum::{extract::State, Json};

use crate::app::dto::HealthReport;

/// Report the import failure. Always 200 so monitors can read the body.
pub async fn health(State(report): State<Arc<HealthReport>>) -> Json<HealthReport> {
    Json(report.as_ref().clone())
}
