use serde::{Deserialize, Serialize};

use crate::Config;
use crate::shared::{OutputConfig, SourceConfig, ValidationError};

/// Complete configuration for the seeder service.
///
/// Aggregates all configuration required to run a conversion: the seed input
/// description and the output destination. Typically loaded from configuration
/// files at startup via [`crate::load_config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SeederConfig {
    /// Configuration for the tabular seed input.
    pub source: SourceConfig,
    /// Configuration for the generated SQL output.
    pub output: OutputConfig,
}

impl SeederConfig {
    /// Validates the complete seeder configuration.
    ///
    /// Performs validation of all configuration components.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.source.validate()?;
        self.output.validate()?;

        Ok(())
    }
}

impl Config for SeederConfig {
    const LIST_PARSE_KEYS: &'static [&'static str] = &["source.column_order"];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SeederConfig {
        SeederConfig {
            source: SourceConfig {
                input_path: "seeds/exercises_seed.csv".to_string(),
                column_order: vec![
                    "name".to_string(),
                    "muscle_group".to_string(),
                    "difficulty".to_string(),
                    "description".to_string(),
                    "image_url".to_string(),
                ],
            },
            output: OutputConfig {
                output_path: "seeds/exercises_seed.sql".to_string(),
            },
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn empty_input_path_is_rejected() {
        let mut config = valid_config();
        config.source.input_path = String::new();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyInputPath)
        ));
    }

    #[test]
    fn empty_output_path_is_rejected() {
        let mut config = valid_config();
        config.output.output_path = String::new();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyOutputPath)
        ));
    }

    #[test]
    fn empty_column_order_is_rejected() {
        let mut config = valid_config();
        config.source.column_order.clear();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyColumnOrder)
        ));
    }

    #[test]
    fn blank_column_name_is_rejected() {
        let mut config = valid_config();
        config.source.column_order[2] = "  ".to_string();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::BlankColumnName)
        ));
    }
}
