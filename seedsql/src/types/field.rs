use std::borrow::Cow;

/// A single scalar value read from the seed file.
///
/// Seed files are untyped text, so each cell is classified once at read time
/// into one of these variants and pattern-matched everywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The cell was empty.
    Missing,
    /// The cell held text that does not parse as a number.
    Text(String),
    /// The cell parsed as a floating point number.
    Number(f64),
}

impl FieldValue {
    /// Renders the textual form of this value, if it has one.
    ///
    /// Returns [`None`] for [`FieldValue::Missing`]. Numbers render through the
    /// standard [`f64`] Display implementation, so `f64::NAN` renders as `NaN`.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Missing => None,
            FieldValue::Text(text) => Some(Cow::Borrowed(text.as_str())),
            FieldValue::Number(number) => Some(Cow::Owned(number.to_string())),
        }
    }
}
