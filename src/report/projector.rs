//! Per-column display rules applied to each result row.

use super::row::{Row, Value};

pub const WINNER_LABEL: &str = "Winner";
pub const NOMINEE_LABEL: &str = "Nominee";
pub const PLACEHOLDER_LABEL: &str = "User Input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Link { href: String, text: String },
}

pub type RenderableRow = Vec<Cell>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Column '{column}' is missing from the result row")]
pub struct MissingColumn {
    pub column: &'static str,
}

#[derive(Debug, Clone)]
pub enum ColumnRule {
    /// The stored value as-is.
    Text { column: &'static str },
    /// The stored value, or `fallback` when it is NULL.
    TextOr {
        column: &'static str,
        fallback: &'static str,
    },
    /// `1` renders as winner, any other value as nominee. When the column is
    /// absent and `placeholder` is set, the placeholder is rendered instead.
    WinnerFlag {
        column: &'static str,
        placeholder: Option<&'static str>,
    },
    /// Columns joined with a single space.
    Concat { columns: &'static [&'static str] },
    /// `<path>?<key_column>=<key>` with the text column as link text.
    Link {
        path: String,
        key_column: &'static str,
        text_column: &'static str,
    },
}

fn column<'a>(row: &'a Row, column: &'static str) -> Result<&'a Value, MissingColumn> {
    row.get(column).ok_or(MissingColumn { column })
}

impl ColumnRule {
    pub fn apply(&self, row: &Row) -> Result<Cell, MissingColumn> {
        let cell = match self {
            ColumnRule::Text { column: name } => Cell::Text(column(row, name)?.to_string()),
            ColumnRule::TextOr {
                column: name,
                fallback,
            } => match column(row, name)? {
                Value::Null => Cell::Text(fallback.to_string()),
                value => Cell::Text(value.to_string()),
            },
            ColumnRule::WinnerFlag {
                column: name,
                placeholder,
            } => match (row.get(name), placeholder) {
                (Some(value), _) => Cell::Text(winner_label(value).to_string()),
                (None, Some(placeholder)) => Cell::Text(placeholder.to_string()),
                (None, None) => return Err(MissingColumn { column: name }),
            },
            ColumnRule::Concat { columns } => {
                let parts = columns
                    .iter()
                    .map(|name| column(row, name).map(|v| v.to_string()))
                    .collect::<Result<Vec<_>, _>>()?;
                Cell::Text(parts.join(" "))
            }
            ColumnRule::Link {
                path,
                key_column,
                text_column,
            } => {
                let key = column(row, key_column)?;
                let text = column(row, text_column)?;
                Cell::Link {
                    href: format!("{path}?{key_column}={key}"),
                    text: text.to_string(),
                }
            }
        };
        Ok(cell)
    }
}

pub fn winner_label(value: &Value) -> &'static str {
    match value.as_i64() {
        Some(1) => WINNER_LABEL,
        _ => NOMINEE_LABEL,
    }
}

/// Maps one row through the rules, in rule order.
pub fn project(row: &Row, rules: &[ColumnRule]) -> Result<RenderableRow, MissingColumn> {
    rules.iter().map(|rule| rule.apply(row)).collect()
}

/// Maps every row, preserving order. Nothing is dropped.
pub fn project_all(
    rows: impl IntoIterator<Item = Row>,
    rules: &[ColumnRule],
) -> Result<Vec<RenderableRow>, MissingColumn> {
    rows.into_iter().map(|row| project(&row, rules)).collect()
}
