use tracing::debug;

use crate::bail;
use crate::error::{ErrorKind, SeedError, SeedResult};
use crate::types::{FieldValue, SeedRow};

/// Table the generated statement inserts into.
///
/// The schema is assumed to exist with a unique index on `lower(name)`; this
/// tool only generates the statement and never talks to a database.
const TARGET_TABLE: &str = "public.exercises";

/// Conflict-skip clause keyed on the case-insensitive unique name.
const CONFLICT_CLAUSE: &str = "ON CONFLICT (lower(name)) DO NOTHING;";

/// Bareword used for absent values.
const NULL_LITERAL: &str = "NULL";

/// Indentation aligning each value tuple under `VALUES`.
const TUPLE_INDENT: &str = "      ";

/// Renders a single field as a SQL literal.
///
/// Missing values render as the bareword `NULL`. Any other value is rendered
/// textually first; if that text equals exactly `null` or `NaN` it also
/// collapses to `NULL`. Everything else is single-quoted with internal single
/// quotes doubled, and no other transformation.
///
/// The token comparison runs after the missing-check, on the rendered text,
/// and is case-sensitive. A field holding the literal string `NaN` therefore
/// renders as `NULL`, not as a quoted string, and so does a numeric NaN
/// (whose textual form is the same token).
pub fn quote_field(value: &FieldValue) -> String {
    let Some(text) = value.to_text() else {
        return NULL_LITERAL.to_string();
    };

    if text == "null" || text == "NaN" {
        return NULL_LITERAL.to_string();
    }

    format!("'{}'", text.replace('\'', "''"))
}

/// Renders one row as a parenthesized tuple of SQL literals.
///
/// E.g. `('Squat', 'Legs', 'Easy', NULL, NULL)`.
pub fn render_row(row: &SeedRow) -> String {
    let fields = row
        .values
        .iter()
        .map(quote_field)
        .collect::<Vec<_>>()
        .join(", ");

    format!("({fields})")
}

/// Assembles the complete batch-insert statement for the given rows.
///
/// Produces a single `INSERT INTO public.exercises ... ON CONFLICT
/// (lower(name)) DO NOTHING;` statement with one value tuple per row, in row
/// order, each tuple indented to align under `VALUES`. The statement ends with
/// a single trailing newline.
///
/// An empty dataset is rejected with [`ErrorKind::InvalidData`]: a statement
/// with zero tuples is not valid SQL.
pub fn build_insert(rows: &[SeedRow], column_order: &[String]) -> SeedResult<String> {
    if rows.is_empty() {
        bail!(
            ErrorKind::InvalidData,
            "Input contains no seed rows",
            format!("a statement for {TARGET_TABLE} needs at least one value tuple")
        );
    }

    let columns = column_order.join(", ");
    let tuples = rows
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join(&format!(",\n{TUPLE_INDENT}"));

    debug!(rows = rows.len(), "assembled insert statement");

    Ok(format!(
        "INSERT INTO {TARGET_TABLE}\n  ({columns})\nVALUES\n{TUPLE_INDENT}{tuples}\n{CONFLICT_CLAUSE}\n"
    ))
}
