use serde::{Deserialize, Serialize};

use recgate_core::LoadError;

/// Prefix of the health message when the application could not be imported.
pub const IMPORT_FAILURE_PREFIX: &str = "Failed to import app: ";

// -------------------------
// Response DTOs
// -------------------------

/// Body of the diagnostic `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub message: String,
}

impl HealthReport {
    pub fn import_failed(failure: &LoadError) -> Self {
        Self::import_failed_with(&failure.to_string())
    }

    pub fn import_failed_with(detail: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: format!("{IMPORT_FAILURE_PREFIX}{detail}"),
        }
    }
}
