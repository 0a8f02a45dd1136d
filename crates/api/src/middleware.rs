//! Cross-origin middleware.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use recgate_core::{Allow, CorsPolicy};

/// Build the `tower-http` CORS layer for `policy`.
///
/// Wildcards are sent as `*` unless credentials are allowed, in which case the request's
/// origin, method and headers are echoed back instead (browsers reject `*` on
/// credentialed requests, and `tower-http` refuses the combination). A list that
/// contains `"*"` counts as a wildcard.
pub fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let mirror = policy.needs_mirroring();

    let origin = match wildcard_or_list(&policy.allow_origins) {
        None if mirror => AllowOrigin::mirror_request(),
        None => AllowOrigin::from(Any),
        Some(origins) => AllowOrigin::list(parse_list(origins, "origin", |s| {
            HeaderValue::from_str(s).ok()
        })),
    };

    let methods = match wildcard_or_list(&policy.allow_methods) {
        None if mirror => AllowMethods::mirror_request(),
        None => AllowMethods::from(Any),
        Some(methods) => AllowMethods::list(parse_list(methods, "method", |s| {
            Method::from_bytes(s.as_bytes()).ok()
        })),
    };

    let headers = match wildcard_or_list(&policy.allow_headers) {
        None if mirror => AllowHeaders::mirror_request(),
        None => AllowHeaders::from(Any),
        Some(headers) => AllowHeaders::list(parse_list(headers, "header", |s| {
            HeaderName::from_bytes(s.as_bytes()).ok()
        })),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(policy.allow_credentials)
        .max_age(policy.max_age())
}

/// `None` for a wildcard dimension, otherwise the listed values.
fn wildcard_or_list(allow: &Allow) -> Option<&[String]> {
    match allow {
        Allow::Any => None,
        Allow::List(values) if values.iter().any(|v| v.trim() == "*") => None,
        Allow::List(values) => Some(values),
    }
}

fn parse_list<T>(values: &[String], kind: &'static str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| {
            let parsed = parse(value);
            if parsed.is_none() {
                tracing::warn!(kind, value = %value, "ignoring invalid cors entry");
            }
            parsed
        })
        .collect()
}
