//! Log record layout.
//!
//! A record is a flat JSON object: `level`, `msg`, `ts`, then caller extras in
//! call order. This layout is the contract external log collectors parse, so
//! key names and the timestamp format must stay stable.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number};

/// Record severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Destination stream. Only `error` goes to stderr.
    pub fn stream(self) -> Stream {
        match self {
            Level::Error => Stream::Stderr,
            Level::Debug | Level::Info | Level::Warn => Stream::Stdout,
        }
    }
}

/// Process output stream a record is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Primitive value attached to a record as an extra field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            Value::UInt(n) => serde_json::Value::Number((*n).into()),
            // JSON has no NaN/inf; keep the line valid.
            Value::Float(f) => {
                Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64);
impl_from_int!(UInt as u64: u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::Int(value as i64)
    }
}

/// Format a timestamp the way records carry it: RFC 3339, microseconds, `+00:00`.
pub fn format_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Render one record as a single JSON line, without the trailing newline.
///
/// Extras are merged after the reserved keys. A key that is already present
/// (reserved or an earlier extra) keeps its position and takes the new value.
pub fn render(level: Level, msg: &str, ts: DateTime<Utc>, fields: &[(&str, Value)]) -> String {
    let mut record = Map::with_capacity(3 + fields.len());
    record.insert("level".to_string(), level.as_str().into());
    record.insert("msg".to_string(), msg.into());
    record.insert("ts".to_string(), format_ts(ts).into());
    for (key, value) in fields {
        record.insert((*key).to_string(), value.into());
    }
    serde_json::Value::Object(record).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 8, 15, 30)
            .single()
            .expect("valid ts")
            + chrono::Duration::microseconds(123_456)
    }

    #[test]
    fn level_routes_only_error_to_stderr() {
        assert_eq!(Level::Debug.stream(), Stream::Stdout);
        assert_eq!(Level::Info.stream(), Stream::Stdout);
        assert_eq!(Level::Warn.stream(), Stream::Stdout);
        assert_eq!(Level::Error.stream(), Stream::Stderr);
    }

    #[test]
    fn timestamp_is_utc_with_microseconds() {
        assert_eq!(format_ts(fixed_ts()), "2026-10-16T08:15:30.123456+00:00");
    }

    #[test]
    fn renders_reserved_keys_then_extras_in_order() {
        let line = render(
            Level::Info,
            "request done",
            fixed_ts(),
            &[("status", 200.into()), ("path", "/".into()), ("ok", true.into())],
        );
        assert_eq!(
            line,
            r#"{"level":"info","msg":"request done","ts":"2026-10-16T08:15:30.123456+00:00","status":200,"path":"/","ok":true}"#
        );
    }

    #[test]
    fn colliding_extra_overwrites_reserved_value_in_place() {
        let line = render(
            Level::Warn,
            "original",
            fixed_ts(),
            &[("extra", 1.into()), ("msg", "replaced".into())],
        );
        assert_eq!(
            line,
            r#"{"level":"warn","msg":"replaced","ts":"2026-10-16T08:15:30.123456+00:00","extra":1}"#
        );
    }

    #[test]
    fn repeated_extra_keeps_first_position_and_last_value() {
        let line = render(
            Level::Debug,
            "m",
            fixed_ts(),
            &[("a", 1.into()), ("b", 2.into()), ("a", 3.into())],
        );
        assert!(line.ends_with(r#""a":3,"b":2}"#), "{line}");
    }

    #[test]
    fn non_finite_floats_render_as_null() {
        let line = render(Level::Info, "m", fixed_ts(), &[("ratio", f64::NAN.into())]);
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert!(value["ratio"].is_null());
    }

    #[test]
    fn non_ascii_and_newlines_stay_on_one_line() {
        let line = render(Level::Info, "héllo\nwörld", fixed_ts(), &[]);
        assert!(!line.contains('\n'));
        assert!(line.contains("héllo\\nwörld"));
    }
}
