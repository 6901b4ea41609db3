#[cfg(test)]
mod tests {
    use quay_core::{DataType, Value};
    use rust_decimal::Decimal;
    use time::macros::datetime;

    #[test]
    fn value_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Int32(Some(1)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(!Value::Varchar(Some("x".into())).is_null());
        assert_eq!(Value::Null.data_type(), None);
        assert_eq!(Value::Varchar(None).data_type(), Some(DataType::Varchar));
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Boolean(None));
        assert_eq!(val.data_type(), Some(DataType::Boolean));
    }

    #[test]
    fn value_integers() {
        assert_eq!(Value::from(7 as i16), Value::Int16(Some(7)));
        assert_eq!(Value::from(-2147483648 as i32), Value::Int32(Some(-2147483648)));
        assert_eq!(Value::from(1 as i64), Value::Int64(Some(1)));
        assert_ne!(Value::from(1 as i64), Value::Int32(Some(1)));
        assert_eq!(Value::from(1 as i64).data_type(), Some(DataType::Int64));
    }

    #[test]
    fn value_floats() {
        assert_eq!(Value::from(0.5 as f32), Value::Float32(Some(0.5)));
        assert_eq!(Value::from(0.5 as f64), Value::Float64(Some(0.5)));
        assert_ne!(Value::from(0.5 as f32), Value::Float64(Some(0.5)));
    }

    #[test]
    fn value_decimal() {
        let val: Value = Decimal::new(105, 1).into();
        assert_eq!(val, Value::Decimal(Some(Decimal::new(105, 1))));
        assert_eq!(val.data_type(), Some(DataType::Decimal));
    }

    #[test]
    fn value_varchar() {
        let val: Value = "TAG-00".into();
        assert_eq!(val, Value::Varchar(Some("TAG-00".to_owned())));
        let val: Value = String::from("TAG-01").into();
        assert_eq!(val, Value::Varchar(Some("TAG-01".to_owned())));
        assert_eq!(val.data_type(), Some(DataType::Varchar));
    }

    #[test]
    fn value_blob() {
        let val: Value = vec![1u8, 2, 3].into();
        assert_eq!(val, Value::Blob(Some(vec![1u8, 2, 3].into())));
        let val: Value = (&[1u8, 2, 3][..]).into();
        assert_eq!(val, Value::Blob(Some(vec![1u8, 2, 3].into())));
    }

    #[test]
    fn value_timestamp() {
        let instant = datetime!(2024-05-01 12:00 UTC);
        let val: Value = instant.into();
        assert_eq!(val, Value::Timestamp(Some(instant)));
        assert_eq!(val.data_type(), Some(DataType::Timestamp));
    }
}
