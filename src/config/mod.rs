//! Configuration loading and validation.
//!
//! Configuration lives in a TOML file under the platform config directory.
//! A missing file yields the built-in defaults; a malformed or invalid file
//! is an error at startup rather than a silent fallback.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
