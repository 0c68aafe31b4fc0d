use crate::stmt::Statement;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Execute a parameterized statement.
    QuerySql(QuerySql),

    /// Fetch the identifier generated by the most recent insert on this
    /// connection.
    LastInsertId,

    /// Execute unparameterized SQL, possibly several statements.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySql {
    pub stmt: Statement,
}

impl Operation {
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    pub fn as_query_sql(&self) -> Option<&QuerySql> {
        match self {
            Self::QuerySql(op) => Some(op),
            _ => None,
        }
    }

    pub fn is_last_insert_id(&self) -> bool {
        matches!(self, Self::LastInsertId)
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}

impl From<Statement> for Operation {
    fn from(value: Statement) -> Self {
        Self::QuerySql(QuerySql { stmt: value })
    }
}

impl QuerySql {
    pub fn new(stmt: impl Into<Statement>) -> Self {
        Self { stmt: stmt.into() }
    }
}
