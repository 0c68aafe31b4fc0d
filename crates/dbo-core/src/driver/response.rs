use crate::{stmt::Value, Error, Result};

use indexmap::IndexMap;

/// A result row: column name to value, in the order the backend returned the
/// columns.
pub type Row = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows produced by a query
    Values(Vec<Row>),

    /// A single scalar, such as a generated identifier
    Value(Value),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(rows: Vec<Row>) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            rows: Rows::Value(value.into()),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            rows => Err(Error::invalid_result(format!(
                "expected Count, got {}",
                rows.kind()
            ))),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Rows::Values(rows) => Ok(rows),
            rows => Err(Error::invalid_result(format!(
                "expected Values, got {}",
                rows.kind()
            ))),
        }
    }

    /// Returns the scalar result: a `Value` response, or the first field of
    /// the first row.
    pub fn into_value(self) -> Result<Value> {
        match self {
            Rows::Value(value) => Ok(value),
            Rows::Values(rows) => rows
                .into_iter()
                .next()
                .and_then(|row| row.into_values().next())
                .ok_or_else(|| Error::invalid_result("expected a scalar, got no rows")),
            Rows::Count(_) => Err(Error::invalid_result("expected a scalar, got Count")),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Rows::Count(_) => "Count",
            Rows::Values(_) => "Values",
            Rows::Value(_) => "Value",
        }
    }
}
