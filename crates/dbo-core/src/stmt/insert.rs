use super::Value;

/// Single-row insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Storage column names, matched positionally with `values`.
    pub columns: Vec<String>,
    pub values: Vec<Value>,

    /// When `true`, an existing row with the same key is replaced instead of
    /// causing a conflict.
    pub replace: bool,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            values: vec![],
            replace: false,
        }
    }

    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push(column.into());
        self.values.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
