use dbo_core::stmt::Value as CoreValue;
use mysql_async::prelude::ToValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a MySQL column value. Text and binary columns both arrive as
    /// bytes and become strings; temporal values are rendered the way MySQL
    /// prints them.
    pub fn from_sql(value: mysql_async::Value) -> Self {
        use mysql_async::Value::*;

        let core_value = match value {
            NULL => CoreValue::Null,
            Bytes(bytes) => CoreValue::String(String::from_utf8_lossy(&bytes).into_owned()),
            Int(v) => CoreValue::I64(v),
            UInt(v) => match i64::try_from(v) {
                Ok(v) => CoreValue::I64(v),
                Err(_) => CoreValue::String(v.to_string()),
            },
            Float(v) => CoreValue::F64(f64::from(v)),
            Double(v) => CoreValue::F64(v),
            Date(year, month, day, 0, 0, 0, 0) => {
                CoreValue::String(format!("{year:04}-{month:02}-{day:02}"))
            }
            Date(year, month, day, hour, minute, second, 0) => CoreValue::String(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            )),
            Date(year, month, day, hour, minute, second, micros) => CoreValue::String(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{micros:06}"
            )),
            Time(negative, days, hours, minutes, seconds, micros) => {
                let sign = if negative { "-" } else { "" };
                let hours = u32::from(hours) + days * 24;
                let mut time = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
                if micros != 0 {
                    time.push_str(&format!(".{micros:06}"));
                }
                CoreValue::String(time)
            }
        };

        Value(core_value)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Bool(value) => i64::from(*value).to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::String(value) => value.to_value(),
        }
    }
}
