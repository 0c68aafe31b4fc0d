/// What a `SELECT` produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// Every column of the table (`*`).
    All,

    /// The listed storage columns, in order.
    Columns(Vec<String>),

    /// A single `COUNT(*)` value.
    Count,
}

impl Returning {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count)
    }
}
