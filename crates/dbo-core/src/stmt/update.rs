use super::{Filter, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Storage name of the assigned column.
    pub column: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub filter: Filter,
}

impl Update {
    pub fn new(table: impl Into<String>, filter: Filter) -> Self {
        Self {
            table: table.into(),
            assignments: vec![],
            filter,
        }
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.assignments.push(Assignment {
            column: column.into(),
            value: value.into(),
        });
    }
}
