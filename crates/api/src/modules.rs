//! Modules shipped next to the entry point.

use std::path::Path;

use crate::resolver::AppModuleRoot;

/// Label used when the running executable's location cannot be determined.
pub const FALLBACK_LABEL: &str = "sibling";

/// Label of the sibling root: the directory of the running executable.
pub fn sibling_label() -> String {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| FALLBACK_LABEL.to_string())
}

/// Root holding the modules bundled with the entry point.
///
/// Nothing is bundled by default; a deployment that compiles the recommendation
/// service into this binary registers it here with
/// [`ModuleRoot::with_module`](recgate_core::ModuleRoot::with_module). Embedders
/// that link their own service should put it on the search path passed to
/// [`resolve_from`](crate::resolver::resolve_from) instead.
pub fn sibling_root() -> AppModuleRoot {
    AppModuleRoot::new(sibling_label())
}
