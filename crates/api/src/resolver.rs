//! One-shot resolution of the served application.

use axum::Router;

use recgate_core::{CorsPolicy, ImportTarget, LoadError, ModuleRoot, SearchPath};

use crate::app::AppHandle;
use crate::modules;

/// Search path of modules exporting application routers.
pub type AppSearchPath = SearchPath<Router>;

/// Module root of modules exporting application routers.
pub type AppModuleRoot = ModuleRoot<Router>;

/// Resolve the application from the sibling root with the default target and policy.
pub fn resolve() -> AppHandle {
    resolve_from(AppSearchPath::new())
}

/// Append the sibling root to `search_path`, then resolve.
///
/// Roots already on `search_path` take precedence over the sibling root.
pub fn resolve_from(mut search_path: AppSearchPath) -> AppHandle {
    search_path.append(modules::sibling_root());
    resolve_with(&search_path, &ImportTarget::default(), &CorsPolicy::permissive())
}

/// Import `target` from `search_path`, falling back to the diagnostic stub on any
/// import failure, and attach `policy`. Never fails.
pub fn resolve_with(search_path: &AppSearchPath, target: &ImportTarget, policy: &CorsPolicy) -> AppHandle {
    let handle = match search_path.import(target) {
        Ok(router) => {
            tracing::info!(module = %target.module, symbol = %target.symbol, "application loaded");
            AppHandle::loaded(target.module.as_str(), router)
        }
        Err(err) => {
            log_failure(target, &err);
            AppHandle::diagnostic(err)
        }
    };

    handle.with_cors(policy)
}

fn log_failure(target: &ImportTarget, err: &LoadError) {
    if err.is_broken() {
        tracing::error!(
            module = %target.module,
            symbol = %target.symbol,
            error = %err,
            "application failed to initialise; serving diagnostic stub"
        );
    } else {
        tracing::warn!(
            module = %target.module,
            symbol = %target.symbol,
            error = %err,
            "application not found; serving diagnostic stub"
        );
    }
}
