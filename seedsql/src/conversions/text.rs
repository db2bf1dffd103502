use crate::types::FieldValue;

/// Utilities for classifying raw seed file text into typed [`FieldValue`]s.
///
/// Seed files carry no type information, so every cell goes through the same
/// classification: empty cells become [`FieldValue::Missing`], cells that parse
/// as a float become [`FieldValue::Number`], and everything else stays
/// [`FieldValue::Text`].
pub struct TextFieldConverter;

impl TextFieldConverter {
    /// Classifies a single raw cell into a [`FieldValue`].
    ///
    /// Numeric classification uses [`f64`] parsing, which accepts the token
    /// `NaN`: such a cell becomes `Number(f64::NAN)` and is later rendered
    /// as a SQL `NULL` by the literal formatter.
    pub fn from_raw(raw: &str) -> FieldValue {
        if raw.is_empty() {
            return FieldValue::Missing;
        }

        match raw.parse::<f64>() {
            Ok(number) => FieldValue::Number(number),
            Err(_) => FieldValue::Text(raw.to_string()),
        }
    }
}
