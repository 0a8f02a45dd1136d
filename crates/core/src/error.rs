//! Load error model.

use thiserror::Error;

/// Result type returned by module imports.
pub type LoadResult<T> = Result<T, LoadError>;

/// Why an application could not be obtained from the search path.
///
/// The first two variants mean the thing asked for is not there at all; the last one
/// means it is there but refused to come up. Callers that only care about "did it
/// load" can treat all three the same.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No root on the search path holds a module with this name.
    #[error("module `{module}` not found (searched: {})", display_roots(.searched))]
    ModuleNotFound { module: String, searched: Vec<String> },

    /// The module loaded but does not export the requested symbol.
    #[error("module `{module}` has no export named `{symbol}`")]
    SymbolNotFound { module: String, symbol: String },

    /// The module was found but its initialiser returned an error.
    #[error("module `{module}` failed to initialise: {detail}")]
    Initialization { module: String, detail: String },
}

impl LoadError {
    pub fn module_not_found(module: impl Into<String>, searched: Vec<String>) -> Self {
        Self::ModuleNotFound {
            module: module.into(),
            searched,
        }
    }

    pub fn symbol_not_found(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::SymbolNotFound {
            module: module.into(),
            symbol: symbol.into(),
        }
    }

    /// Wrap an initialiser failure, keeping the whole `anyhow` context chain.
    pub fn initialization(module: impl Into<String>, err: &anyhow::Error) -> Self {
        Self::Initialization {
            module: module.into(),
            detail: format!("{err:#}"),
        }
    }

    /// Name of the module the import was aimed at.
    pub fn module(&self) -> &str {
        match self {
            Self::ModuleNotFound { module, .. }
            | Self::SymbolNotFound { module, .. }
            | Self::Initialization { module, .. } => module,
        }
    }

    /// The module or the symbol is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::ModuleNotFound { .. } | Self::SymbolNotFound { .. })
    }

    /// The module is present but its own initialisation failed.
    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Initialization { .. })
    }
}

fn display_roots(roots: &[String]) -> String {
    if roots.is_empty() {
        "<empty search path>".to_string()
    } else {
        roots.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn not_found_lists_searched_roots() {
        let err = LoadError::module_not_found(
            "recommendation_service",
            vec!["api/..".to_string(), "vendor".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "module `recommendation_service` not found (searched: api/.., vendor)"
        );
        assert!(err.is_missing());
        assert!(!err.is_broken());
    }

    #[test]
    fn not_found_on_empty_search_path() {
        let err = LoadError::module_not_found("m", Vec::new());
        assert!(err.to_string().contains("<empty search path>"));
    }

    #[test]
    fn initialization_keeps_context_chain() {
        let inner = anyhow::anyhow!("connection refused");
        let err = LoadError::initialization("m", &inner.context("loading model weights"));
        assert_eq!(
            err.to_string(),
            "module `m` failed to initialise: loading model weights: connection refused"
        );
        assert!(err.is_broken());
        assert_eq!(err.module(), "m");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a not-found error names the module and every searched root.
        #[test]
        fn not_found_message_names_module_and_roots(
            module in "[a-z_]{1,24}",
            roots in prop::collection::vec("[a-z./]{1,12}", 0..5)
        ) {
            let err = LoadError::module_not_found(module.clone(), roots.clone());
            let msg = err.to_string();
            let quoted = format!("`{module}`");
            prop_assert!(msg.contains(&quoted), "message {:?} does not name {:?}", msg, quoted);
            for root in &roots {
                prop_assert!(msg.contains(root.as_str()));
            }
            prop_assert!(err.is_missing());
        }
    }
}
