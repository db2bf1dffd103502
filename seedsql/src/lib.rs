pub mod conversions;
pub mod error;
mod macros;
pub mod sink;
pub mod source;
pub mod statement;
pub mod types;
