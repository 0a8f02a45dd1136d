//! Ordered search path and the import operation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};
use crate::module::ModuleRoot;

/// Module the entry point loads its application from.
pub const DEFAULT_MODULE: &str = "recommendation_service";

/// Symbol the application is exported under.
pub const DEFAULT_SYMBOL: &str = "app";

/// What to import: a module name plus the symbol inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTarget {
    pub module: String,
    pub symbol: String,
}

impl ImportTarget {
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
        }
    }
}

impl Default for ImportTarget {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE, DEFAULT_SYMBOL)
    }
}

impl fmt::Display for ImportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.symbol)
    }
}

/// Ordered list of module roots. The first root holding a module wins.
pub struct SearchPath<A> {
    roots: Vec<ModuleRoot<A>>,
}

impl<A> SearchPath<A> {
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Add a root with the lowest precedence.
    pub fn append(&mut self, root: ModuleRoot<A>) -> &mut Self {
        tracing::debug!(root = %root.label(), "search path extended");
        self.roots.push(root);
        self
    }

    pub fn roots(&self) -> &[ModuleRoot<A>] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Import `target.symbol` from `target.module`.
    ///
    /// Runs the module's initialiser (from the first root that has it) and moves the
    /// symbol out of the resulting exports. Later roots are never consulted once a
    /// root claims the module, even if its initialiser fails.
    pub fn import(&self, target: &ImportTarget) -> LoadResult<A> {
        let Some((root, init)) = self
            .roots
            .iter()
            .find_map(|root| root.initializer(&target.module).map(|init| (root, init)))
        else {
            return Err(LoadError::module_not_found(
                target.module.as_str(),
                self.roots.iter().map(|r| r.label().to_string()).collect(),
            ));
        };

        tracing::debug!(root = %root.label(), module = %target.module, "initialising module");

        let mut exports = init().map_err(|e| LoadError::initialization(target.module.as_str(), &e))?;

        exports
            .take(&target.symbol)
            .ok_or_else(|| LoadError::symbol_not_found(target.module.as_str(), target.symbol.as_str()))
    }
}

impl<A> Default for SearchPath<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for SearchPath<A> {
    fn clone(&self) -> Self {
        Self {
            roots: self.roots.clone(),
        }
    }
}

impl<A> fmt::Debug for SearchPath<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.roots).finish()
    }
}
