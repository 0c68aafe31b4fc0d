use super::{BinaryOp, Value};

/// A single `column <op> value` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Storage name of the compared column.
    pub column: String,
    pub op: BinaryOp,
    pub value: Value,
}

/// Conjunction of conditions. There is no `OR`: every condition must hold.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

impl Condition {
    pub fn new(column: impl Into<String>, op: BinaryOp, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, BinaryOp::Eq, value)
    }
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching rows whose `column` equals `value`.
    pub fn by(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            conditions: vec![Condition::eq(column, value)],
        }
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

impl FromIterator<Condition> for Filter {
    fn from_iter<T: IntoIterator<Item = Condition>>(iter: T) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}
