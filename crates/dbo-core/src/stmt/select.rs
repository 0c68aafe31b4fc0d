use super::{Filter, Returning};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub returning: Returning,
    pub filter: Filter,

    /// Maximum number of rows. `None` means unlimited.
    pub limit: Option<u64>,
}

impl Select {
    pub fn new(table: impl Into<String>, returning: Returning) -> Self {
        Self {
            table: table.into(),
            returning,
            filter: Filter::default(),
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}
