//! HTTP entry point: resolves the recommendation application (or a diagnostic stand-in),
//! attaches cross-origin handling, and exposes the result to the hosting runtime.

pub mod app;
pub mod entry;
pub mod middleware;
pub mod modules;
pub mod resolver;
pub mod server;
pub mod settings;

pub use app::{AppHandle, AppOrigin};
pub use entry::{app, Entry};
pub use resolver::{resolve, resolve_from, resolve_with, AppModuleRoot, AppSearchPath};
pub use settings::{ConfigError, Settings};
