use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input path cannot be empty.
    #[error("`input_path` cannot be empty")]
    EmptyInputPath,
    /// The output path cannot be empty.
    #[error("`output_path` cannot be empty")]
    EmptyOutputPath,
    /// The column order cannot be empty.
    #[error("`column_order` must contain at least one column")]
    EmptyColumnOrder,
    /// Column names cannot be blank.
    #[error("`column_order` contains a blank column name")]
    BlankColumnName,
}
