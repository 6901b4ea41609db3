use crate::DataType;
use rust_decimal::Decimal;
use time::OffsetDateTime;

/// A value bound to a statement parameter or decoded from a result row.
///
/// Every typed variant carries an `Option` so a typed null (a null that still
/// knows its column type) can be represented alongside the untyped
/// [`Value::Null`].
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Timestamp(Option<OffsetDateTime>),
}

impl Value {
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Boolean(..) => Some(DataType::Boolean),
            Value::Int16(..) => Some(DataType::Int16),
            Value::Int32(..) => Some(DataType::Int32),
            Value::Int64(..) => Some(DataType::Int64),
            Value::Float32(..) => Some(DataType::Float32),
            Value::Float64(..) => Some(DataType::Float64),
            Value::Decimal(..) => Some(DataType::Decimal),
            Value::Varchar(..) => Some(DataType::Varchar),
            Value::Blob(..) => Some(DataType::Blob),
            Value::Timestamp(..) => Some(DataType::Timestamp),
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int16(v) => v.is_none(),
            Value::Int32(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::Float32(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Decimal(v) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
            Value::Blob(v) => v.is_none(),
            Value::Timestamp(v) => v.is_none(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(Some(value))
    }
}
impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int16(Some(value))
    }
}
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(Some(value))
    }
}
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(Some(value))
    }
}
impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float32(Some(value))
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(Some(value))
    }
}
impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(Some(value))
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.to_owned()))
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Varchar(Some(value))
    }
}
impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(Some(value.into()))
    }
}
impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(Some(value.into()))
    }
}
impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Value::Timestamp(Some(value))
    }
}
