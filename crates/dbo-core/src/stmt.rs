mod cast;

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::{Condition, Filter};

mod insert;
pub use insert::Insert;

mod op_binary;
pub use op_binary::BinaryOp;

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod ty;
pub use ty::Type;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

/// A statement the persistence engine asks a driver to execute.
///
/// Statements name tables and columns by their storage names; dialect
/// specifics (identifier quoting, upsert syntax, placeholders) are left to
/// the driver's serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// The table the statement targets.
    pub fn table(&self) -> &str {
        match self {
            Statement::Delete(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }

    /// Returns `true` when executing the statement yields rows rather than an
    /// affected-row count.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }

    /// Short name of the statement kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Delete(_) => "delete",
            Statement::Insert(stmt) if stmt.replace => "replace",
            Statement::Insert(_) => "insert",
            Statement::Select(_) => "select",
            Statement::Update(_) => "update",
        }
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
