use std::error;
use std::fmt;

/// Convenient result type for seed conversion operations using [`SeedError`] as the error type.
///
/// This type alias reduces boilerplate when working with fallible conversion operations.
/// Most functions in this crate return this type.
pub type SeedResult<T> = Result<T, SeedError>;

/// Main error type for seed conversion operations.
///
/// [`SeedError`] can represent single errors, errors with additional detail, or
/// multiple aggregated errors, while keeping a unified interface for callers.
#[derive(Debug, Clone)]
pub struct SeedError {
    repr: ErrorRepr,
}

/// Internal representation of error data.
///
/// Users should not interact with this type directly but use [`SeedError`] methods instead.
#[derive(Debug, Clone)]
enum ErrorRepr {
    /// Error with kind and static description
    WithDescription(ErrorKind, &'static str),
    /// Error with kind, static description, and dynamic detail
    WithDescriptionAndDetail(ErrorKind, &'static str, String),
    /// Multiple aggregated errors
    Many(Vec<SeedError>),
}

/// Specific categories of errors that can occur while converting seed data.
///
/// Error kinds are organized by functional area and failure mode so callers can
/// pick an appropriate handling strategy.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    // Input Errors
    SourceIoError,
    InvalidData,

    // Transformation Errors
    ConversionError,

    // Output Errors
    DestinationIoError,

    // Configuration Errors
    ConfigError,

    // Unknown / Uncategorized
    Unknown,
}

impl SeedError {
    /// Creates a [`SeedError`] containing multiple aggregated errors.
    ///
    /// Useful when multiple operations fail and all failures should be reported
    /// rather than just the first one.
    pub fn many(errors: Vec<SeedError>) -> SeedError {
        SeedError {
            repr: ErrorRepr::Many(errors),
        }
    }

    /// Returns the [`ErrorKind`] of this error.
    ///
    /// For multiple errors, returns the kind of the first error or [`ErrorKind::Unknown`]
    /// if the error list is empty.
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::WithDescription(kind, _)
            | ErrorRepr::WithDescriptionAndDetail(kind, _, _) => kind,
            ErrorRepr::Many(ref errors) => errors
                .first()
                .map(|err| err.kind())
                .unwrap_or(ErrorKind::Unknown),
        }
    }

    /// Returns all [`ErrorKind`]s present in this error.
    ///
    /// For single errors, returns a vector with one element. For multiple errors,
    /// returns a flattened vector of all error kinds.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self.repr {
            ErrorRepr::WithDescription(kind, _)
            | ErrorRepr::WithDescriptionAndDetail(kind, _, _) => vec![kind],
            ErrorRepr::Many(ref errors) => errors
                .iter()
                .flat_map(|err| err.kinds())
                .collect::<Vec<_>>(),
        }
    }

    /// Returns the detailed error information if available.
    ///
    /// For multiple errors, returns the detail of the first error that has one.
    /// Returns [`None`] if no detailed information is available.
    pub fn detail(&self) -> Option<&str> {
        match self.repr {
            ErrorRepr::WithDescriptionAndDetail(_, _, ref detail) => Some(detail.as_str()),
            ErrorRepr::Many(ref errors) => errors.iter().find_map(|e| e.detail()),
            _ => None,
        }
    }
}

impl PartialEq for SeedError {
    fn eq(&self, other: &SeedError) -> bool {
        match (&self.repr, &other.repr) {
            (ErrorRepr::WithDescription(kind_a, _), ErrorRepr::WithDescription(kind_b, _)) => {
                kind_a == kind_b
            }
            (
                ErrorRepr::WithDescriptionAndDetail(kind_a, _, _),
                ErrorRepr::WithDescriptionAndDetail(kind_b, _, _),
            ) => kind_a == kind_b,
            (ErrorRepr::Many(errors_a), ErrorRepr::Many(errors_b)) => {
                errors_a.len() == errors_b.len()
                    && errors_a.iter().zip(errors_b.iter()).all(|(a, b)| a == b)
            }
            _ => false,
        }
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.repr {
            ErrorRepr::WithDescription(kind, desc) => {
                fmt::Debug::fmt(&kind, f)?;
                f.write_str(": ")?;
                desc.fmt(f)?;

                Ok(())
            }
            ErrorRepr::WithDescriptionAndDetail(kind, desc, ref detail) => {
                fmt::Debug::fmt(&kind, f)?;
                f.write_str(": ")?;
                desc.fmt(f)?;
                f.write_str(" -> ")?;
                detail.fmt(f)?;

                Ok(())
            }
            ErrorRepr::Many(ref errors) => {
                if errors.is_empty() {
                    write!(f, "Multiple errors occurred (empty)")?;
                } else if errors.len() == 1 {
                    // If there's only one error, just display it directly
                    errors[0].fmt(f)?;
                } else {
                    write!(f, "Multiple errors occurred ({} total):", errors.len())?;
                    for (i, error) in errors.iter().enumerate() {
                        write!(f, "\n  {}: {}", i + 1, error)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl error::Error for SeedError {}

/// Creates a [`SeedError`] from an error kind and static description.
impl From<(ErrorKind, &'static str)> for SeedError {
    fn from((kind, desc): (ErrorKind, &'static str)) -> SeedError {
        SeedError {
            repr: ErrorRepr::WithDescription(kind, desc),
        }
    }
}

/// Creates a [`SeedError`] from an error kind, static description, and dynamic detail.
impl From<(ErrorKind, &'static str, String)> for SeedError {
    fn from((kind, desc, detail): (ErrorKind, &'static str, String)) -> SeedError {
        SeedError {
            repr: ErrorRepr::WithDescriptionAndDetail(kind, desc, detail),
        }
    }
}

/// Creates a [`SeedError`] from a vector of errors for aggregation.
impl<E> From<Vec<E>> for SeedError
where
    E: Into<SeedError>,
{
    fn from(errors: Vec<E>) -> SeedError {
        SeedError {
            repr: ErrorRepr::Many(errors.into_iter().map(Into::into).collect()),
        }
    }
}

/// Converts [`csv::Error`] to [`SeedError`] with appropriate error kind.
///
/// Maps I/O failures (file missing, unreadable) to [`ErrorKind::SourceIoError`] and
/// structural failures (ragged rows, invalid UTF-8, seek/deserialize problems) to
/// [`ErrorKind::InvalidData`] based on error classification.
impl From<csv::Error> for SeedError {
    fn from(err: csv::Error) -> SeedError {
        let (kind, description) = match err.kind() {
            csv::ErrorKind::Io(_) => (ErrorKind::SourceIoError, "Input file could not be read"),
            _ => (ErrorKind::InvalidData, "Input file is malformed"),
        };

        SeedError {
            repr: ErrorRepr::WithDescriptionAndDetail(kind, description, err.to_string()),
        }
    }
}
