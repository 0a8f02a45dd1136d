//! Process-wide application entry.
//!
//! The hosting runtime looks the application up by a fixed name, [`app()`]. The
//! handle behind it is resolved exactly once and never replaced; every later lookup
//! returns the same object.

use std::sync::OnceLock;

use crate::app::AppHandle;
use crate::resolver::{self, AppSearchPath};

/// A cell that binds one [`AppHandle`] for its whole lifetime.
#[derive(Debug)]
pub struct Entry {
    cell: OnceLock<AppHandle>,
}

impl Entry {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the bound handle, running `resolve` first if nothing is bound yet.
    ///
    /// `resolve` runs at most once per entry, even under concurrent first access.
    pub fn get_or_resolve(&self, resolve: impl FnOnce() -> AppHandle) -> &AppHandle {
        self.cell.get_or_init(resolve)
    }

    pub fn get(&self) -> Option<&AppHandle> {
        self.cell.get()
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

static ENTRY: Entry = Entry::new();

/// The application handle the hosting runtime serves.
///
/// Resolves from the default search path on first access. Call it during startup so
/// resolution never lands on a request path.
pub fn app() -> &'static AppHandle {
    ENTRY.get_or_resolve(resolver::resolve)
}

/// Resolve the process entry from `search_path` (plus the sibling root).
///
/// If the entry is already bound, `search_path` is ignored and the bound handle is
/// returned unchanged.
pub fn init_with(search_path: AppSearchPath) -> &'static AppHandle {
    if ENTRY.is_resolved() {
        tracing::debug!("application entry already resolved; ignoring search path");
    }
    ENTRY.get_or_resolve(|| resolver::resolve_from(search_path))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use recgate_core::LoadError;

    use super::*;

    #[test]
    fn resolves_once_and_returns_same_handle() {
        let entry = Entry::new();
        let runs = AtomicUsize::new(0);

        assert!(entry.get().is_none());

        let first = entry.get_or_resolve(|| {
            runs.fetch_add(1, Ordering::SeqCst);
            AppHandle::diagnostic(LoadError::module_not_found("m", Vec::new()))
        }) as *const AppHandle;
        let second = entry.get_or_resolve(|| {
            runs.fetch_add(1, Ordering::SeqCst);
            AppHandle::diagnostic(LoadError::module_not_found("other", Vec::new()))
        }) as *const AppHandle;

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, entry.get().unwrap()));
        assert!(entry.is_resolved());
    }

    #[test]
    fn concurrent_first_access_resolves_once() {
        let entry = Arc::new(Entry::new());
        let runs = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let entry = entry.clone();
                let runs = runs.clone();
                std::thread::spawn(move || {
                    entry.get_or_resolve(|| {
                        runs.fetch_add(1, Ordering::SeqCst);
                        AppHandle::diagnostic(LoadError::module_not_found("m", Vec::new()))
                    }) as *const AppHandle as usize
                })
            })
            .collect();

        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn process_entry_is_stable() {
        let first = app();
        let second = app();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, init_with(AppSearchPath::new())));
        assert!(first.cors_policy().is_some());
    }
}
