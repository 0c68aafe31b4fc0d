use crate::{Connections, Record, Result, Schema, Value};

/// A typed wrapper around a [`Record`].
///
/// Implementors hold their record and expose typed accessors over it:
///
/// ```
/// use dbo::{Column, Model, Record, Schema, Type};
///
/// struct User(Record);
///
/// impl Model for User {
///     fn schema() -> Schema {
///         let mut schema = Schema::with_table("users");
///         schema
///             .set_id_column(Column::new("id", Type::Int))
///             .add_column(Column::new("name", Type::String));
///         schema
///     }
///
///     fn from_record(record: Record) -> Self {
///         User(record)
///     }
///
///     fn record(&self) -> &Record {
///         &self.0
///     }
///
///     fn record_mut(&mut self) -> &mut Record {
///         &mut self.0
///     }
/// }
///
/// impl User {
///     fn name(&self) -> &str {
///         self.get("name").as_str().unwrap_or_default()
///     }
/// }
/// ```
pub trait Model: Sized + 'static {
    /// Builds the schema describing this model's table.
    fn schema() -> Schema;

    fn from_record(record: Record) -> Self;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// A new, transient instance whose fallback database is this model's
    /// default in `connections`.
    fn new(connections: &Connections) -> Self {
        Self::from_record(Record::of::<Self>(connections))
    }

    fn get(&self, name: &str) -> &Value {
        self.record().get(name)
    }

    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.record_mut().set(name, value)
    }

    fn exists(&self) -> bool {
        self.record().exists()
    }
}
