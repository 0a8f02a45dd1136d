//! Module roots and module exports.
//!
//! A [`ModuleRoot`] is the analogue of one directory on an import path: a labelled
//! set of modules, each registered as an initialiser. Running the initialiser is what
//! "importing" a module means; it yields the module's [`Exports`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Module initialiser. Runs once per import and may fail.
pub type ModuleInit<A> = Arc<dyn Fn() -> anyhow::Result<Exports<A>> + Send + Sync>;

/// Named values a module makes available to importers.
pub struct Exports<A> {
    symbols: BTreeMap<String, A>,
}

impl<A> Exports<A> {
    pub fn new() -> Self {
        Self {
            symbols: BTreeMap::new(),
        }
    }

    /// Builder-style export.
    pub fn with(mut self, symbol: impl Into<String>, value: A) -> Self {
        self.symbols.insert(symbol.into(), value);
        self
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains_key(symbol)
    }

    /// Move a symbol out of the export table.
    pub fn take(&mut self, symbol: &str) -> Option<A> {
        self.symbols.remove(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}

impl<A> Default for Exports<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Exports<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.symbols.keys()).finish()
    }
}

/// A labelled collection of importable modules.
pub struct ModuleRoot<A> {
    label: String,
    modules: BTreeMap<String, ModuleInit<A>>,
}

impl<A> ModuleRoot<A> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            modules: BTreeMap::new(),
        }
    }

    /// Register a module. A later registration under the same name replaces the earlier one.
    pub fn with_module<F>(mut self, name: impl Into<String>, init: F) -> Self
    where
        F: Fn() -> anyhow::Result<Exports<A>> + Send + Sync + 'static,
    {
        self.modules.insert(name.into(), Arc::new(init));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub(crate) fn initializer(&self, module: &str) -> Option<&ModuleInit<A>> {
        self.modules.get(module)
    }
}

impl<A> Clone for ModuleRoot<A> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            modules: self.modules.clone(),
        }
    }
}

impl<A> fmt::Debug for ModuleRoot<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRoot")
            .field("label", &self.label)
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}
