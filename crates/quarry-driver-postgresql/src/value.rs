use postgres::types::{private::BytesMut, to_sql_checked, IsNull, Kind, ToSql, Type};
use quarry_core::Value as CoreValue;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use std::time::SystemTime;

/// A bound parameter, converted to whatever type the server inferred for
/// its placeholder.
#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

type BoxError = Box<dyn std::error::Error + Sync + Send>;

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match &self.0 {
            CoreValue::Text(value) => match *ty {
                Type::UUID => uuid::Uuid::parse_str(value)?.to_sql(ty, out),
                _ if matches!(ty.kind(), Kind::Enum(_)) => {
                    out.extend_from_slice(value.as_bytes());
                    Ok(IsNull::No)
                }
                _ => value.to_sql(ty, out),
            },
            CoreValue::Integer(value) => match *ty {
                Type::INT2 => narrow::<i16>(*value, ty)?.to_sql(ty, out),
                Type::INT4 => narrow::<i32>(*value, ty)?.to_sql(ty, out),
                Type::NUMERIC => Decimal::from(*value).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::Numeric(value) => match *ty {
                Type::FLOAT4 => (decimal_to_f64(value)? as f32).to_sql(ty, out),
                Type::FLOAT8 => decimal_to_f64(value)?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::Timestamp(value) => SystemTime::from(*value).to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(ty.kind(), Kind::Enum(_))
            || matches!(
                *ty,
                Type::TEXT
                    | Type::VARCHAR
                    | Type::BPCHAR
                    | Type::NAME
                    | Type::UUID
                    | Type::INT2
                    | Type::INT4
                    | Type::INT8
                    | Type::NUMERIC
                    | Type::FLOAT4
                    | Type::FLOAT8
                    | Type::TIMESTAMP
                    | Type::TIMESTAMPTZ
            )
    }

    to_sql_checked!();
}

/// The catalog does not record integer widths, so a keyword that fits an
/// `i64` can still overflow a narrower column.
fn narrow<T: TryFrom<i64>>(value: i64, ty: &Type) -> Result<T, BoxError> {
    T::try_from(value).map_err(|_| format!("{value} is out of range for {}", ty.name()).into())
}

fn decimal_to_f64(value: &Decimal) -> Result<f64, BoxError> {
    value
        .to_f64()
        .ok_or_else(|| format!("{value} cannot be represented as a float").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_narrowed_to_the_column_width() {
        let mut out = BytesMut::new();

        let err = Value::from(CoreValue::Integer(99_999_999_999))
            .to_sql(&Type::INT4, &mut out)
            .err().unwrap();
        assert_eq!(err.to_string(), "99999999999 is out of range for int4");
        assert!(out.is_empty());

        let err = Value::from(CoreValue::Integer(40_000))
            .to_sql(&Type::INT2, &mut out)
            .err().unwrap();
        assert_eq!(err.to_string(), "40000 is out of range for int2");

        Value::from(CoreValue::Integer(42))
            .to_sql(&Type::INT4, &mut out)
            .unwrap();
        assert_eq!(&out[..], &42_i32.to_be_bytes());
    }

    #[test]
    fn bigint_columns_take_the_full_range() {
        let mut out = BytesMut::new();

        Value::from(CoreValue::Integer(99_999_999_999))
            .to_sql(&Type::INT8, &mut out)
            .unwrap();
        assert_eq!(&out[..], &99_999_999_999_i64.to_be_bytes());
    }
}
