//! The application handle served to the hosting runtime.
//!
//! Layout:
//! - `mod.rs`: [`AppHandle`], the one object the host invokes
//! - `routes/`: routers the entry point builds itself (the diagnostic stub)
//! - `dto.rs`: JSON bodies produced by those routes

use std::fmt;

use axum::{
    body::Body,
    http::Request,
    response::Response,
    Router,
};
use tower::ServiceExt;

use recgate_core::{CorsPolicy, LoadError};

use crate::middleware;

pub mod dto;
pub mod routes;

/// Where the served application came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppOrigin {
    /// Imported from the named module.
    Loaded { module: String },
    /// Import failed; the diagnostic stub is serving instead.
    Diagnostic { failure: LoadError },
}

/// An HTTP application ready to be handed to the host.
///
/// Both the imported application and the diagnostic stub are carried by this one type;
/// [`AppOrigin`] records which one it is. The cross-origin layer is attached at most
/// once, so responses never carry the headers twice.
#[derive(Clone)]
pub struct AppHandle {
    origin: AppOrigin,
    router: Router,
    cors: Option<CorsPolicy>,
}

impl AppHandle {
    /// Wrap an application router imported from `module`.
    pub fn loaded(module: impl Into<String>, router: Router) -> Self {
        Self {
            origin: AppOrigin::Loaded {
                module: module.into(),
            },
            router,
            cors: None,
        }
    }

    /// Build the diagnostic stub reporting `failure` on `GET /health`.
    pub fn diagnostic(failure: LoadError) -> Self {
        let router = routes::diagnostic_router(&failure);
        Self {
            origin: AppOrigin::Diagnostic { failure },
            router,
            cors: None,
        }
    }

    /// Attach the cross-origin layer. Calling this again keeps the first policy.
    pub fn with_cors(mut self, policy: &CorsPolicy) -> Self {
        if self.cors_attached() {
            tracing::debug!("cors layer already attached; skipping");
            return self;
        }

        self.router = self.router.layer(middleware::cors_layer(policy));
        self.cors = Some(policy.clone());
        self
    }

    pub fn origin(&self) -> &AppOrigin {
        &self.origin
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, AppOrigin::Diagnostic { .. })
    }

    pub fn cors_policy(&self) -> Option<&CorsPolicy> {
        self.cors.as_ref()
    }

    pub fn cors_attached(&self) -> bool {
        self.cors.is_some()
    }

    /// Router for the host runtime (cheap: routers are reference counted).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve a single request in-process.
    pub async fn call(&self, req: Request<Body>) -> Response {
        match self.router.clone().oneshot(req).await {
            Ok(res) => res,
            Err(never) => match never {},
        }
    }
}

impl fmt::Debug for AppHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppHandle")
            .field("origin", &self.origin)
            .field("cors", &self.cors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{header, StatusCode},
        routing::get,
        Json,
    };
    use serde_json::json;

    use super::*;

    fn get_with_origin(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::ORIGIN, "https://shop.example")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn loaded_handle_serves_its_own_routes() {
        let router = Router::new().route("/ping", get(|| async { Json(json!({ "pong": true })) }));
        let handle = AppHandle::loaded("recommendation_service", router);

        assert!(!handle.is_fallback());
        let res = handle.call(get_with_origin("/ping")).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "pong": true }));
    }

    #[tokio::test]
    async fn cors_is_attached_once() {
        let policy = CorsPolicy::permissive();
        let handle = AppHandle::diagnostic(LoadError::module_not_found("m", Vec::new()))
            .with_cors(&policy)
            .with_cors(&policy);

        assert!(handle.cors_attached());
        assert_eq!(handle.cors_policy(), Some(&policy));

        let res = handle.call(get_with_origin("/health")).await;
        assert_eq!(res.status(), StatusCode::OK);
        let origins: Vec<_> = res
            .headers()
            .get_all(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .iter()
            .collect();
        assert_eq!(origins, vec!["https://shop.example"]);
        assert_eq!(
            res.headers()
                .get_all(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .iter()
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn handle_without_cors_adds_no_headers() {
        let handle = AppHandle::diagnostic(LoadError::module_not_found("m", Vec::new()));
        assert!(!handle.cors_attached());
        let res = handle.call(get_with_origin("/health")).await;
        assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
