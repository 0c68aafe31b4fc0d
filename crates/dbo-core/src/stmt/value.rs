use super::cast;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Double-precision float
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the variant, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::String(_) => "String",
        }
    }

    /// Converts to a string using the loose scalar rules: null and `false`
    /// become `""`, `true` becomes `"1"`.
    pub fn to_lossy_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => String::new(),
            Self::I64(v) => v.to_string(),
            Self::F64(v) => cast::format_f64(*v),
            Self::String(v) => v.clone(),
        }
    }

    /// Converts to a float; strings contribute their leading numeric prefix.
    pub fn to_lossy_f64(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(v) => f64::from(u8::from(*v)),
            Self::I64(v) => *v as f64,
            Self::F64(v) => *v,
            Self::String(v) => cast::parse_f64_prefix(v),
        }
    }

    /// Converts to an integer; floats truncate toward zero.
    pub fn to_lossy_i64(&self) -> i64 {
        match self {
            Self::Null => 0,
            Self::Bool(v) => i64::from(*v),
            Self::I64(v) => *v,
            Self::F64(v) => cast::truncate_f64(*v),
            Self::String(v) => cast::parse_i64_prefix(v),
        }
    }

    /// Truthiness: null, `false`, zero, `""` and `"0"` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(v) => *v,
            Self::I64(v) => *v != 0,
            Self::F64(v) => *v != 0.0,
            Self::String(v) => !(v.is_empty() || v == "0"),
        }
    }
}

impl_value_primitive! {
    bool => Bool as bool,
    i8 => I64 as i64,
    i16 => I64 as i64,
    i32 => I64 as i64,
    i64 => I64 as i64,
    u8 => I64 as i64,
    u16 => I64 as i64,
    u32 => I64 as i64,
    f32 => F64 as f64,
    f64 => F64 as f64,
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other.eq(self)
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other.eq(self)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::String(v) => write!(f, "{v:?}"),
            value => f.write_str(&value.to_lossy_string()),
        }
    }
}
