use crate::stmt::{Type, Value};

/// Describes one field of a [`Schema`](super::Schema).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Name used by application code.
    name: String,

    /// Name of the column in the database.
    storage_name: String,

    /// The declared type; every value stored under this column is cast to it.
    ty: Type,

    /// Whether `Null` bypasses the cast and is kept as `Null`.
    nullable: bool,

    /// Default value, already cast.
    default: Value,
}

/// Builds a [`Column`]. The default value is cast once, in [`build`].
///
/// [`build`]: ColumnBuilder::build
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    name: String,
    storage_name: Option<String>,
    ty: Type,
    nullable: bool,
    default: Value,
}

impl Column {
    /// A non-nullable column whose storage name equals `name` and whose
    /// default is the type's zero value.
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        Column::builder(name, ty).build()
    }

    pub fn builder(name: impl Into<String>, ty: Type) -> ColumnBuilder {
        ColumnBuilder {
            name: name.into(),
            storage_name: None,
            ty,
            nullable: false,
            default: Value::Null,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage_name(&self) -> &str {
        &self.storage_name
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// Casts `value` to the column's type. `Null` stays `Null` on nullable
    /// columns.
    pub fn cast(&self, value: &Value) -> Value {
        if self.nullable && value.is_null() {
            Value::Null
        } else {
            self.ty.cast(value)
        }
    }

    /// Returns `true` when `a` and `b` are the same value for this column.
    pub fn equivalent(&self, a: &Value, b: &Value) -> bool {
        self.ty.equivalent(a, b)
    }
}

impl ColumnBuilder {
    /// Raw default; cast when the column is built.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }

    /// Name of the column in the database, when it differs from the
    /// application name.
    pub fn storage_name(mut self, name: impl Into<String>) -> Self {
        self.storage_name = Some(name.into());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn build(self) -> Column {
        let storage_name = match self.storage_name {
            Some(storage_name) if !storage_name.is_empty() => storage_name,
            _ => self.name.clone(),
        };

        let mut column = Column {
            name: self.name,
            storage_name,
            ty: self.ty,
            nullable: self.nullable,
            default: Value::Null,
        };
        column.default = column.cast(&self.default);
        column
    }
}

impl From<ColumnBuilder> for Column {
    fn from(builder: ColumnBuilder) -> Self {
        builder.build()
    }
}
