mod column;
pub use column::{Column, ColumnBuilder};

use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::OnceLock;

/// Describes the table backing a record: its columns in declaration order,
/// the identifying column, and the table name.
///
/// A schema without a table name or identifying column can still build
/// in-memory records; load, store and delete require both.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Columns keyed by application name, in insertion order.
    columns: IndexMap<String, Column>,

    /// The identifying column, exactly as registered.
    id_column: Option<Column>,

    table: Option<String>,

    /// Storage names in column order, derived on first use.
    storage_names: OnceLock<Vec<String>>,
}

impl Schema {
    pub fn new() -> Schema {
        Schema::default()
    }

    /// A schema targeting `table`.
    pub fn with_table(table: impl Into<String>) -> Schema {
        Schema {
            table: Some(table.into()),
            ..Schema::default()
        }
    }

    /// Adds a column, replacing any column with the same name in place.
    /// Does not change which column identifies rows.
    pub fn add_column(&mut self, column: impl Into<Column>) -> &mut Self {
        let column = column.into();
        self.columns.insert(column.name().to_string(), column);
        self.storage_names = OnceLock::new();
        self
    }

    /// Registers `column` as the identifying column. The column is also added
    /// to the schema unless a column with the same name already exists, in
    /// which case the existing descriptor is kept.
    pub fn set_id_column(&mut self, column: impl Into<Column>) -> &mut Self {
        let column = column.into();
        if !self.columns.contains_key(column.name()) {
            self.columns
                .insert(column.name().to_string(), column.clone());
            self.storage_names = OnceLock::new();
        }
        self.id_column = Some(column);
        self
    }

    /// Returns the column named `name`.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| Error::column_not_found(name))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Returns the identifying column.
    pub fn id_column(&self) -> Result<&Column> {
        self.id_column
            .as_ref()
            .ok_or_else(|| Error::not_configured("id column is not set"))
    }

    pub fn has_id_column(&self) -> bool {
        self.id_column.is_some()
    }

    /// Iterates the columns in insertion order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.values()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Storage names of all columns, in [`columns`](Self::columns) order.
    pub fn storage_column_names(&self) -> &[String] {
        self.storage_names.get_or_init(|| {
            self.columns
                .values()
                .map(|column| column.storage_name().to_string())
                .collect()
        })
    }

    /// Finds a column by its storage name.
    pub fn column_by_storage_name(&self, storage_name: &str) -> Option<&Column> {
        self.columns
            .values()
            .find(|column| column.storage_name() == storage_name)
    }

    pub fn set_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Returns the table name.
    pub fn table(&self) -> Result<&str> {
        self.table
            .as_deref()
            .ok_or_else(|| Error::not_configured("no table provided"))
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.id_column == other.id_column
            && self.table == other.table
    }
}
