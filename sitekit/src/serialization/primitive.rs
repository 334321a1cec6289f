//! Scalar response types.

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::error::SerializationError;

/// Scalar types a verb can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveType {
    Int32,
    Int64,
    Float64,
    Bool,
    String,
    /// Raw response bytes, read without a codec.
    Bytes,
    Date,
    Time,
    DateTime,
    /// ISO-8601 duration such as `PT1H30M`.
    Duration,
    Guid,
}

/// A decoded scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Bool(bool),
    String(String),
    Bytes(Bytes),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(DateTime<FixedOffset>),
    Duration(TimeDelta),
    Guid(Uuid),
}

impl PrimitiveValue {
    /// Converts a decoded JSON or text value into the requested scalar.
    ///
    /// Text bodies arrive as JSON strings, so numbers and booleans are also
    /// accepted in string form (optionally wrapped in double quotes).
    ///
    /// ## Errors
    ///
    /// Returns [`SerializationError::UnexpectedValue`] when the value cannot be
    /// read as `ty`.
    pub fn from_json(ty: PrimitiveType, value: &Value) -> Result<Self, SerializationError> {
        let fail = || SerializationError::unexpected(ty, value.to_string());
        let text = match value {
            Value::String(s) => Some(unquote(s)),
            _ => None,
        };

        let parsed = match ty {
            PrimitiveType::Int32 => value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .or_else(|| text.and_then(|s| s.parse().ok()))
                .map(Self::Int32),
            PrimitiveType::Int64 => value
                .as_i64()
                .or_else(|| text.and_then(|s| s.parse().ok()))
                .map(Self::Int64),
            PrimitiveType::Float64 => value
                .as_f64()
                .or_else(|| text.and_then(|s| s.parse().ok()))
                .map(Self::Float64),
            PrimitiveType::Bool => value
                .as_bool()
                .or_else(|| text.and_then(|s| s.parse().ok()))
                .map(Self::Bool),
            PrimitiveType::String => match value {
                Value::String(s) => Some(Self::String(s.clone())),
                Value::Number(n) => Some(Self::String(n.to_string())),
                Value::Bool(b) => Some(Self::String(b.to_string())),
                _ => None,
            },
            PrimitiveType::Bytes => match value {
                Value::String(s) => Some(Self::Bytes(Bytes::from(s.clone().into_bytes()))),
                _ => None,
            },
            PrimitiveType::Date => text
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                .map(Self::Date),
            PrimitiveType::Time => text
                .and_then(|s| NaiveTime::parse_from_str(s, "%H:%M:%S%.f").ok())
                .map(Self::Time),
            PrimitiveType::DateTime => text
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(Self::DateTime),
            PrimitiveType::Duration => text.and_then(parse_iso_duration).map(Self::Duration),
            PrimitiveType::Guid => text.and_then(|s| Uuid::parse_str(s).ok()).map(Self::Guid),
        };

        parsed.ok_or_else(fail)
    }

    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            Self::Int32(_) => PrimitiveType::Int32,
            Self::Int64(_) => PrimitiveType::Int64,
            Self::Float64(_) => PrimitiveType::Float64,
            Self::Bool(_) => PrimitiveType::Bool,
            Self::String(_) => PrimitiveType::String,
            Self::Bytes(_) => PrimitiveType::Bytes,
            Self::Date(_) => PrimitiveType::Date,
            Self::Time(_) => PrimitiveType::Time,
            Self::DateTime(_) => PrimitiveType::DateTime,
            Self::Duration(_) => PrimitiveType::Duration,
            Self::Guid(_) => PrimitiveType::Guid,
        }
    }
}

fn unquote(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

/// Parses an ISO-8601 duration (`[-]P[nW][nD][T[nH][nM][n[.n]S]]`).
///
/// Year and month components have no fixed length and are rejected.
pub fn parse_iso_duration(text: &str) -> Option<TimeDelta> {
    let text = text.trim();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let rest = rest.strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) if !time.is_empty() => (date, Some(time)),
        Some(_) => return None,
        None => (rest, None),
    };
    if date_part.is_empty() && time_part.is_none() {
        return None;
    }

    let mut total = TimeDelta::zero();
    for (amount, unit) in components(date_part)? {
        let whole = whole_number(amount)?;
        let part = match unit {
            'W' => TimeDelta::try_weeks(whole)?,
            'D' => TimeDelta::try_days(whole)?,
            _ => return None,
        };
        total = total.checked_add(&part)?;
    }
    if let Some(time_part) = time_part {
        for (amount, unit) in components(time_part)? {
            let part = match unit {
                'H' => TimeDelta::try_hours(whole_number(amount)?)?,
                'M' => TimeDelta::try_minutes(whole_number(amount)?)?,
                'S' => TimeDelta::try_milliseconds((amount * 1000.0).round() as i64)?,
                _ => return None,
            };
            total = total.checked_add(&part)?;
        }
    }

    Some(if negative { -total } else { total })
}

fn components(text: &str) -> Option<Vec<(f64, char)>> {
    let mut out = Vec::new();
    let mut number = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            number.push(if c == ',' { '.' } else { c });
        } else {
            if number.is_empty() {
                return None;
            }
            out.push((number.parse().ok()?, c));
            number.clear();
        }
    }
    number.is_empty().then_some(out)
}

fn whole_number(amount: f64) -> Option<i64> {
    (amount.fract() == 0.0).then_some(amount as i64)
}

/// A Rust type that a primitive response can be read into.
pub trait Primitive: Sized + Send + 'static {
    const TYPE: PrimitiveType;

    fn from_value(value: PrimitiveValue) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const TYPE: PrimitiveType = PrimitiveType::$variant;

                fn from_value(value: PrimitiveValue) -> Option<Self> {
                    match value {
                        PrimitiveValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    i32 => Int32,
    i64 => Int64,
    f64 => Float64,
    bool => Bool,
    String => String,
    Bytes => Bytes,
    NaiveDate => Date,
    NaiveTime => Time,
    DateTime<FixedOffset> => DateTime,
    TimeDelta => Duration,
    Uuid => Guid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    // =========================================================================
    // Numbers and booleans
    // =========================================================================

    #[test]
    fn int32_from_number_and_text() {
        assert_eq!(
            PrimitiveValue::from_json(PrimitiveType::Int32, &json!(42)).unwrap(),
            PrimitiveValue::Int32(42)
        );
        assert_eq!(
            PrimitiveValue::from_json(PrimitiveType::Int32, &json!("42")).unwrap(),
            PrimitiveValue::Int32(42)
        );
        assert_eq!(
            PrimitiveValue::from_json(PrimitiveType::Int32, &json!("\"42\"")).unwrap(),
            PrimitiveValue::Int32(42)
        );
    }

    #[test]
    fn int32_overflow_is_rejected() {
        let err = PrimitiveValue::from_json(PrimitiveType::Int32, &json!(5_000_000_000i64)).unwrap_err();
        assert!(matches!(err, SerializationError::UnexpectedValue { .. }));
    }

    #[test]
    fn bool_from_text() {
        assert_eq!(
            PrimitiveValue::from_json(PrimitiveType::Bool, &json!("true")).unwrap(),
            PrimitiveValue::Bool(true)
        );
        assert!(PrimitiveValue::from_json(PrimitiveType::Bool, &json!("yes")).is_err());
    }

    // =========================================================================
    // Temporal and identifiers
    // =========================================================================

    #[test]
    fn date_time_and_guid() {
        let date = PrimitiveValue::from_json(PrimitiveType::Date, &json!("2024-02-29")).unwrap();
        assert_eq!(date, PrimitiveValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));

        let dt = PrimitiveValue::from_json(PrimitiveType::DateTime, &json!("2024-01-01T10:00:00Z")).unwrap();
        assert_eq!(dt.primitive_type(), PrimitiveType::DateTime);

        let guid = PrimitiveValue::from_json(
            PrimitiveType::Guid,
            &json!("8f2a4d1e-8c8a-4b5e-9a34-3c0e2b1d2f10"),
        )
        .unwrap();
        assert_eq!(guid.primitive_type(), PrimitiveType::Guid);
    }

    #[test]
    fn iso_durations() {
        assert_eq!(parse_iso_duration("PT1H30M"), TimeDelta::try_minutes(90));
        assert_eq!(parse_iso_duration("P1DT2.5S"), TimeDelta::try_milliseconds(86_402_500));
        assert_eq!(parse_iso_duration("-P2W"), TimeDelta::try_days(-14));
        assert_eq!(parse_iso_duration("P1Y"), None);
        assert_eq!(parse_iso_duration("P"), None);
        assert_eq!(parse_iso_duration("PT"), None);
        assert_eq!(parse_iso_duration("PT5"), None);
    }

    #[test]
    fn typed_conversion_checks_variant() {
        assert_eq!(i32::from_value(PrimitiveValue::Int32(7)), Some(7));
        assert_eq!(i32::from_value(PrimitiveValue::Int64(7)), None);
        assert_eq!(<String as Primitive>::TYPE, PrimitiveType::String);
    }

    #[test]
    fn type_names_are_lowercase() {
        assert_eq!(PrimitiveType::DateTime.to_string(), "datetime");
        assert_eq!(PrimitiveType::from_str("int32").unwrap(), PrimitiveType::Int32);
        assert_eq!(PrimitiveType::iter().count(), 11);
    }
}
