use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Configuration for the tabular seed input.
///
/// Describes where the delimited seed file lives and the column order its
/// header row is expected to carry, which is also the column order of the
/// generated statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the comma-delimited seed file, relative to the working directory.
    pub input_path: String,
    /// Expected header columns, in the order they map onto the target table.
    pub column_order: Vec<String>,
}

impl SourceConfig {
    /// Validates the source configuration settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input_path.is_empty() {
            return Err(ValidationError::EmptyInputPath);
        }

        if self.column_order.is_empty() {
            return Err(ValidationError::EmptyColumnOrder);
        }

        if self.column_order.iter().any(|column| column.trim().is_empty()) {
            return Err(ValidationError::BlankColumnName);
        }

        Ok(())
    }
}
