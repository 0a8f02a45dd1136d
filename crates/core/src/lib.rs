//! `recgate-core` — framework-free building blocks for resolving the service entry point.
//!
//! This crate knows nothing about HTTP. It models where an application comes from
//! (module roots on a search path), how loading it can fail, and the cross-origin
//! policy the entry point applies to whatever it ends up serving.

pub mod cors;
pub mod error;
pub mod module;
pub mod search_path;

pub use cors::{Allow, CorsPolicy};
pub use error::{LoadError, LoadResult};
pub use module::{Exports, ModuleInit, ModuleRoot};
pub use search_path::{ImportTarget, SearchPath};
