use super::Value;

use std::fmt;

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    String,
    Float,
    Bool,
    Int,
}

impl Type {
    /// Coerces `value` into this type.
    ///
    /// Total over every input: there is no failure case, only coercion
    /// (`"abc"` as `Int` is `0`, `Null` as `String` is `""`). Casting an
    /// already-cast value returns it unchanged.
    pub fn cast(&self, value: &Value) -> Value {
        match self {
            Type::String => match value {
                Value::String(_) => value.clone(),
                _ => Value::String(value.to_lossy_string()),
            },
            Type::Float => Value::F64(value.to_lossy_f64()),
            Type::Bool => Value::Bool(value.is_truthy()),
            Type::Int => Value::I64(value.to_lossy_i64()),
        }
    }

    /// The value `cast` produces for `Null`.
    pub fn zero(&self) -> Value {
        self.cast(&Value::Null)
    }

    /// Equality used for dirty tracking.
    ///
    /// Both sides are expected to be outputs of [`Type::cast`] (or `Null` for
    /// nullable columns). Floats compare numerically, treating NaN as equal
    /// to NaN so a NaN attribute is not re-dirtied on every write. `Null`
    /// only equals `Null`.
    pub fn equivalent(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::F64(a), Value::F64(b)) => a == b || (a.is_nan() && b.is_nan()),
            (a, b) => a == b,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Type::String)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Float | Type::Int)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Type::String => "string",
            Type::Float => "float",
            Type::Bool => "bool",
            Type::Int => "int",
        })
    }
}
