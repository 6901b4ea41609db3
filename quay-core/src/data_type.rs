/// Declared type of a bound parameter.
///
/// Matches the variants of [`Value`](crate::Value); drivers map these onto
/// their own wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Boolean,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal,
    Varchar,
    Blob,
    Timestamp,
}
