use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::models::TesseraConfig;

/// Settings that load fine but cannot be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error(
        "sort separators must differ (chain {chain:?}, argument {argument:?})"
    )]
    SeparatorsOverlap { chain: String, argument: String },

    #[error("invalid logging filter {filter:?}: {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

impl TesseraConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let separators = self.sort.separators();
        let (chain, argument) = (separators.chain(), separators.argument());
        if chain.contains(argument) || argument.contains(chain) {
            return Err(ConfigValidationError::SeparatorsOverlap {
                chain: chain.to_string(),
                argument: argument.to_string(),
            });
        }

        EnvFilter::try_new(&self.logging.filter).map_err(|err| {
            ConfigValidationError::InvalidLogFilter {
                filter: self.logging.filter.clone(),
                reason: err.to_string(),
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortConfig;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TesseraConfig::default().validate(), Ok(()));
    }

    #[test]
    fn overlapping_separators_are_rejected() {
        let config = TesseraConfig {
            sort: SortConfig {
                chain_separator: Some(",".to_string()),
                argument_separator: None,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::SeparatorsOverlap { .. })
        ));
    }
}
