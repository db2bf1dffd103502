//! Common types used throughout the seed conversion pipeline.

mod field;
mod row;

pub use field::FieldValue;
pub use row::SeedRow;
