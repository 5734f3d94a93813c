//! Shared configuration library for Tessera.
//!
//! Loads codec settings (sort-order separators) and the logging filter from
//! a TOML/JSON file or the environment, validates them, and installs the
//! tracing subscriber.

pub mod loader;
pub mod logging;
pub mod models;
pub mod validation;

pub use loader::{CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigSource};
pub use logging::init_tracing;
pub use models::{LoggingConfig, SortConfig, TesseraConfig};
pub use validation::ConfigValidationError;
