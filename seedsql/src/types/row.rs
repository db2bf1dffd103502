use crate::types::field::FieldValue;

/// Represents one record of the seed dataset.
///
/// [`SeedRow`] contains a vector of [`FieldValue`]s corresponding to the columns
/// of the target table. The values are ordered to match the configured column order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRow {
    /// Field values in target table column order
    pub values: Vec<FieldValue>,
}

impl SeedRow {
    /// Creates a new seed row with the given field values.
    ///
    /// The values should be ordered to match the target table's column order.
    pub fn new(values: Vec<FieldValue>) -> Self {
        Self { values }
    }
}
