use crate::{Connections, Db, Error, Model, Result, Schema, Value};

use dbo_core::{
    driver::{operation::QuerySql, Operation, Row},
    stmt::{Delete, Filter, Insert, Returning, Select, Update},
};
use indexmap::IndexMap;
use std::sync::Arc;

static NULL: Value = Value::Null;

/// One row of a table, as seen by application code.
///
/// A record always carries a value for every column of its schema. Writes go
/// through the column's cast, and any write that changes the stored value
/// marks the column dirty until the next successful [`store`](Record::store).
///
/// Persistence operations return `Ok(false)` when the backend rejects the
/// statement. Missing configuration (table, identifying column, database)
/// and connection failures are returned as errors.
///
/// Records are not meant to be shared between tasks while being mutated.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,

    /// Current value of every column, keyed by name.
    values: IndexMap<String, Value>,

    /// Columns written since the last successful flush.
    dirty: IndexMap<String, Value>,

    exists: bool,

    /// Database set explicitly on this record.
    connection: Option<Arc<Db>>,

    /// The model's default database, captured at construction.
    fallback: Option<Arc<Db>>,

    /// Model type name, for error messages.
    model: Option<&'static str>,
}

impl Record {
    /// A transient record with every column at its default.
    pub fn new(schema: impl Into<Arc<Schema>>) -> Record {
        let schema = schema.into();
        let values = defaults(&schema);

        Record {
            schema,
            values,
            dirty: IndexMap::new(),
            exists: false,
            connection: None,
            fallback: None,
            model: None,
        }
    }

    /// A transient record for model `M`, falling back to `M`'s default
    /// database in `connections`.
    pub fn of<M: Model>(connections: &Connections) -> Record {
        let mut record = Record::new(M::schema());
        record.fallback = connections.default_for::<M>();
        record.model = Some(std::any::type_name::<M>());
        record
    }

    /// Builds a record bound to `db` and immediately loads the row whose
    /// `index` column (the identifying column when `None`) equals `id`.
    ///
    /// Check [`exists`](Record::exists) to see whether a row was found.
    pub async fn open(
        schema: impl Into<Arc<Schema>>,
        db: Arc<Db>,
        id: impl Into<Value>,
        index: Option<&str>,
    ) -> Result<Record> {
        let mut record = Record::new(schema);
        record.bind_connection(db);

        match index {
            Some(index) => record.load_by(index, id).await?,
            None => record.load(id).await?,
        };

        Ok(record)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Current value of `name`, or `Null` when the schema has no such column.
    pub fn get(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&NULL)
    }

    /// Casts `value` to the column's type and stores it. The column becomes
    /// dirty only when the cast value differs from the current one.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let column = self
            .schema
            .column(name)
            .map_err(|_| Error::unknown_column(name))?;

        let value = column.cast(&value.into());

        if !column.equivalent(self.get(name), &value) {
            self.values.insert(name.to_string(), value.clone());
            self.dirty.insert(name.to_string(), value);
        }

        Ok(())
    }

    /// All current values, in column order.
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// Columns waiting to be written, in the order they were first changed.
    pub fn dirty(&self) -> &IndexMap<String, Value> {
        &self.dirty
    }

    pub fn is_dirty(&self, name: &str) -> bool {
        self.dirty.contains_key(name)
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Puts every column back to its default and forgets pending writes.
    /// Does not change [`exists`](Record::exists).
    pub fn reset(&mut self) {
        self.values = defaults(&self.schema);
        self.dirty.clear();
    }

    /// Uses `db` for this record instead of the model default.
    pub fn bind_connection(&mut self, db: Arc<Db>) {
        self.connection = Some(db);
    }

    /// The database this record talks to: the bound one, else the model
    /// default.
    pub fn resolve_connection(&self) -> Result<Arc<Db>> {
        self.connection
            .as_ref()
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| {
                Error::not_configured(format!(
                    "default database is not set for `{}`",
                    self.model.unwrap_or("record")
                ))
            })
    }

    /// Loads the row whose identifying column equals `id`.
    pub async fn load(&mut self, id: impl Into<Value>) -> Result<bool> {
        let index = self.schema.id_column()?.storage_name().to_string();
        self.load_by(&index, id).await
    }

    /// Loads the row whose `index` storage column equals `id`.
    ///
    /// Values are reset to their defaults first, so on a miss or a failed
    /// query the record is left at its defaults with `exists() == false`.
    pub async fn load_by(&mut self, index: &str, id: impl Into<Value>) -> Result<bool> {
        self.reset();
        self.exists = false;

        let schema = self.schema.clone();
        let table = schema.table()?;
        let db = self.resolve_connection()?;

        let stmt = Select::new(
            table,
            Returning::Columns(schema.storage_column_names().to_vec()),
        )
        .filter(Filter::by(index, id))
        .limit(1);

        tracing::debug!(table, index, "loading record");

        let mut conn = db.connect().await?;
        let res = conn.exec(QuerySql::new(stmt).into()).await;
        conn.release();

        let row = match res.and_then(|res| res.rows.into_values()) {
            Ok(rows) => rows.into_iter().next(),
            Err(err) => {
                tracing::warn!(table, error = %err, "load failed");
                None
            }
        };

        let Some(row) = row else {
            return Ok(false);
        };

        self.populate(&row, false);
        self.exists = true;
        Ok(true)
    }

    /// Writes the record: an insert while it does not exist yet, otherwise an
    /// update of the dirty columns. `exists()` afterwards reflects the
    /// outcome.
    pub async fn store(&mut self) -> Result<bool> {
        let success = if self.exists {
            self.update().await?
        } else {
            self.insert().await?
        };

        self.exists = success;
        Ok(success)
    }

    /// Deletes the row matching the current identifier. Deleting a row that
    /// is already gone succeeds.
    pub async fn delete(&mut self) -> Result<bool> {
        let schema = self.schema.clone();
        let table = schema.table()?;
        let id_column = schema.id_column()?;
        let db = self.resolve_connection()?;

        let stmt = Delete::new(
            table,
            Filter::by(id_column.storage_name(), self.get(id_column.name()).clone()),
        );

        tracing::debug!(table, "deleting record");

        let mut conn = db.connect().await?;
        let res = conn.exec(QuerySql::new(stmt).into()).await;
        conn.release();

        match res {
            Ok(_) => {
                self.exists = false;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(table, error = %err, "delete failed");
                Ok(false)
            }
        }
    }

    async fn insert(&mut self) -> Result<bool> {
        let schema = self.schema.clone();
        let table = schema.table()?;
        let id_column = schema.id_column()?;
        let db = self.resolve_connection()?;

        // An untouched identifier is left to the backend and read back.
        let generate_id = !self.is_dirty(id_column.name())
            && id_column.equivalent(self.get(id_column.name()), id_column.default_value());

        let mut stmt = Insert::new(table).replace();
        for column in schema.columns() {
            if generate_id && column.name() == id_column.name() {
                continue;
            }
            stmt.push(column.storage_name(), self.get(column.name()).clone());
        }

        tracing::debug!(table, columns = stmt.len(), generate_id, "inserting record");

        let mut conn = db.connect().await?;
        let res = conn.exec(QuerySql::new(stmt).into()).await;
        let res = match res {
            Ok(_) if generate_id => conn
                .exec(Operation::LastInsertId)
                .await
                .and_then(|res| res.rows.into_value())
                .map(Some),
            Ok(_) => Ok(None),
            Err(err) => Err(err),
        };
        conn.release();

        match res {
            Ok(id) => {
                self.dirty.clear();
                if let Some(id) = id {
                    self.values
                        .insert(id_column.name().to_string(), id_column.cast(&id));
                }
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(table, error = %err, "insert failed");
                Ok(false)
            }
        }
    }

    async fn update(&mut self) -> Result<bool> {
        let schema = self.schema.clone();
        let table = schema.table()?;
        let id_column = schema.id_column()?;
        let db = self.resolve_connection()?;

        if self.dirty.is_empty() {
            return Ok(true);
        }

        let mut stmt = Update::new(
            table,
            Filter::by(id_column.storage_name(), self.get(id_column.name()).clone()),
        );
        for (name, value) in &self.dirty {
            stmt.set(schema.column(name)?.storage_name(), value.clone());
        }

        tracing::debug!(table, columns = stmt.assignments.len(), "updating record");

        let mut conn = db.connect().await?;
        let res = conn.exec(QuerySql::new(stmt).into()).await;
        conn.release();

        match res {
            Ok(_) => {
                self.dirty.clear();
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(table, error = %err, "update failed");
                Ok(false)
            }
        }
    }

    /// Builds a persisted record from a row returned by the backend. Values
    /// are cast but not marked dirty; `NULL` fields keep the column default.
    pub(crate) fn from_row(
        schema: Arc<Schema>,
        row: &Row,
        db: Arc<Db>,
        model: Option<&'static str>,
    ) -> Record {
        let mut record = Record::new(schema);
        record.populate(row, true);
        record.exists = true;
        record.connection = Some(db);
        record.model = model;
        record
    }

    /// Copies the columns present in `row`, matched by storage name.
    fn populate(&mut self, row: &Row, skip_null: bool) {
        for column in self.schema.columns() {
            let Some(value) = row.get(column.storage_name()) else {
                continue;
            };

            if skip_null && value.is_null() {
                continue;
            }

            self.values
                .insert(column.name().to_string(), column.cast(value));
        }
    }
}

fn defaults(schema: &Schema) -> IndexMap<String, Value> {
    schema
        .columns()
        .map(|column| (column.name().to_string(), column.default_value().clone()))
        .collect()
}
