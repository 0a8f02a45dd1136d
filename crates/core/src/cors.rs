//! Cross-origin policy applied to whatever application the entry point serves.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Preflight cache lifetime advertised when nothing else is configured.
pub const DEFAULT_MAX_AGE_SECS: u64 = 600;

/// Which values of a CORS dimension are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allow {
    /// Everything.
    Any,
    /// Only the listed values.
    List(Vec<String>),
}

impl Allow {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// Cross-origin policy record.
///
/// The entry point always uses [`CorsPolicy::permissive`]. A wildcard dimension
/// combined with `allow_credentials` cannot be sent literally (`*` is rejected by
/// browsers on credentialed requests), so HTTP adapters must echo the request's
/// value back for those dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsPolicy {
    pub allow_origins: Allow,
    pub allow_methods: Allow,
    pub allow_headers: Allow,
    pub allow_credentials: bool,
    pub max_age_secs: u64,
}

impl CorsPolicy {
    /// Any origin, any method, any header, credentials allowed.
    pub fn permissive() -> Self {
        Self {
            allow_origins: Allow::Any,
            allow_methods: Allow::Any,
            allow_headers: Allow::Any,
            allow_credentials: true,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }

    /// Wildcards must be realised by mirroring the request.
    pub fn needs_mirroring(&self) -> bool {
        self.allow_credentials
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_allows_everything_with_credentials() {
        let policy = CorsPolicy::permissive();
        assert!(policy.allow_origins.is_any());
        assert!(policy.allow_methods.is_any());
        assert!(policy.allow_headers.is_any());
        assert!(policy.allow_credentials);
        assert!(policy.needs_mirroring());
        assert_eq!(policy.max_age(), Duration::from_secs(600));
    }

    #[test]
    fn default_is_permissive() {
        assert_eq!(CorsPolicy::default(), CorsPolicy::permissive());
    }
}
