use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Configuration for the generated SQL output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path the assembled statement is written to, relative to the working directory.
    ///
    /// Any existing file at this path is replaced atomically.
    pub output_path: String,
}

impl OutputConfig {
    /// Validates the output configuration settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_path.is_empty() {
            return Err(ValidationError::EmptyOutputPath);
        }

        Ok(())
    }
}
