use serde::{Deserialize, Serialize};
use tessera_core::sort::{
    DEFAULT_ARGUMENT_SEPARATOR, DEFAULT_CHAIN_SEPARATOR, Separators,
    SortOrderCodec,
};

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TesseraConfig {
    pub sort: SortConfig,
    pub logging: LoggingConfig,
}

/// Sort-order text separators. Leave a value empty (or unset) to use the
/// built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortConfig {
    /// Separates items: `title,desc;year`.
    pub chain_separator: Option<String>,
    /// Separates the slots inside one item: `title,desc`.
    pub argument_separator: Option<String>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            chain_separator: Some(DEFAULT_CHAIN_SEPARATOR.to_string()),
            argument_separator: Some(DEFAULT_ARGUMENT_SEPARATOR.to_string()),
        }
    }
}

impl SortConfig {
    pub fn separators(&self) -> Separators {
        Separators::new(
            self.chain_separator.as_deref(),
            self.argument_separator.as_deref(),
        )
    }

    pub fn codec(&self) -> SortOrderCodec {
        SortOrderCodec::new(self.separators())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
